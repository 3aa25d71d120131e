use std::io::Write;

use anyhow::Context;
use anyhow::Result;
use serde::Deserialize;
use serde::Serialize;

use super::Render;
use crate::query::QueryResult;
use crate::query::ResultSet;

/// Machine-readable form of one [`QueryResult`], with the full error text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonRecord {
    pub name: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<&QueryResult> for JsonRecord {
    fn from(result: &QueryResult) -> Self {
        Self {
            name: result.server.name.clone(),
            address: result.server.address.clone(),
            ip: result.error().is_none().then(|| result.ips().to_vec()),
            error: result.error().map(ToString::to_string),
        }
    }
}

/// Whole result set as a JSON array on a single line.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl Render for JsonRenderer {
    fn render(&self, results: &ResultSet, out: &mut dyn Write) -> Result<()> {
        let records: Vec<JsonRecord> = results.iter().map(JsonRecord::from).collect();
        serde_json::to_writer(&mut *out, &records).context("error occurred when generating json")?;
        writeln!(out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::tests::render_string;
    use crate::render::tests::two_servers;

    #[test]
    fn single_line() {
        let results = two_servers(None, Some(&["93.184.216.34"]));
        let out = render_string(JsonRenderer, &results);
        assert_eq!(
            out,
            concat!(
                r#"[{"name":"AliDNS","address":"223.5.5.5","error":"i/o timeout after 3s"},"#,
                r#"{"name":"Google","address":"8.8.8.8","ip":["93.184.216.34"]}]"#,
                "\n",
            )
        );
    }

    #[test]
    fn round_trip_keeps_data() {
        let results = two_servers(Some(&[]), Some(&["2.2.2.2", "1.1.1.1"]));
        let out = render_string(JsonRenderer, &results);

        let records: Vec<JsonRecord> = serde_json::from_str(&out).unwrap();

        assert_eq!(records.len(), results.len());
        for (record, result) in records.iter().zip(&results) {
            assert_eq!(record.name, result.server.name);
            assert_eq!(record.address, result.server.address);
            assert_eq!(record.ip.as_deref().unwrap_or_default(), result.ips());
            assert_eq!(record.error, result.error().map(ToString::to_string));
        }
        assert_eq!(records[0].error.as_deref(), Some("No result"));
    }
}
