use std::io::Write;

use anyhow::Result;

use super::Render;
use crate::aggregate::union_ips;
use crate::query::Outcome;
use crate::query::ResultSet;

/// Width of every cell, separator space included. Longer content is cut to
/// `CELL_WIDTH - 1` characters.
pub const CELL_WIDTH: usize = 17;

const PLACEHOLDER: &str = "-";

/// Aligned table: names and addresses on top, then one row per address in
/// the union so that disagreements between servers stand out.
///
/// ```text
/// AliDNS           Google
/// 223.5.5.5        8.8.8.8
/// ----------------------------------
/// Timeout          93.184.216.34
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TableRenderer;

impl TableRenderer {
    /// Body cells, row-major. Always at least one row so errors have a place
    /// to go; a failed server shows its error category in row 0 only.
    #[must_use]
    pub fn body(results: &ResultSet) -> Vec<Vec<String>> {
        let ips = union_ips(results);
        let mut grid = vec![vec![PLACEHOLDER.to_owned(); results.len()]; ips.len().max(1)];

        for (col, result) in results.iter().enumerate() {
            match &result.outcome {
                Outcome::Resolved(found) => {
                    for (row, ip) in ips.iter().enumerate() {
                        if found.contains(ip) {
                            grid[row][col].clone_from(ip);
                        }
                    }
                }
                Outcome::Failed(error) => grid[0][col] = error.category().to_string(),
            }
        }

        grid
    }
}

impl Render for TableRenderer {
    fn render(&self, results: &ResultSet, out: &mut dyn Write) -> Result<()> {
        write_row(out, results.iter().map(|r| r.server.name.as_str()))?;
        write_row(out, results.iter().map(|r| r.server.address.as_str()))?;
        writeln!(out, "{}", "-".repeat(CELL_WIDTH * results.len()))?;
        for row in Self::body(results) {
            write_row(out, row.iter().map(String::as_str))?;
        }
        Ok(())
    }
}

fn write_row<'a>(out: &mut dyn Write, cells: impl Iterator<Item = &'a str>) -> Result<()> {
    for cell in cells {
        write!(out, "{cell:<width$.max$}", width = CELL_WIDTH, max = CELL_WIDTH - 1)?;
    }
    writeln!(out)?;
    Ok(())
}
