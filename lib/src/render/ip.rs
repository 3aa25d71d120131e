use std::io::Write;

use anyhow::Result;

use super::Render;
use crate::aggregate::union_ips;
use crate::query::ResultSet;

/// Prints the union of all addresses, ignoring which server sent them and
/// any errors.
#[derive(Debug, Clone, Copy, Default)]
pub struct IpListRenderer;

impl Render for IpListRenderer {
    fn render(&self, results: &ResultSet, out: &mut dyn Write) -> Result<()> {
        for ip in union_ips(results) {
            writeln!(out, "{ip}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::tests::render_string;
    use crate::render::tests::two_servers;

    #[test]
    fn one_ip_per_line() {
        let results = two_servers(Some(&["9.9.9.9", "1.1.1.1"]), Some(&["1.1.1.1"]));
        let out = render_string(IpListRenderer, &results);
        assert_eq!(out, "1.1.1.1\n9.9.9.9\n");
    }

    #[test]
    fn errors_are_ignored() {
        let results = two_servers(None, None);
        assert_eq!(render_string(IpListRenderer, &results), "");
    }
}
