use std::collections::BTreeSet;

use crate::query::ResultSet;

/// Every address returned by any server in the round, deduplicated and in
/// ascending string order. Failed servers contribute nothing.
#[must_use]
pub fn union_ips(results: &ResultSet) -> Vec<String> {
    results
        .iter()
        .flat_map(|result| result.ips())
        .map(String::as_str)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::config::NameServer;
    use crate::query::QueryError;
    use crate::query::QueryResult;

    fn resolved(ips: &[&str]) -> QueryResult {
        let ips = ips.iter().map(ToString::to_string).collect();
        QueryResult::resolved(NameServer::new("ns", "127.0.0.1"), ips)
    }

    fn failed(error: QueryError) -> QueryResult {
        QueryResult::failed(NameServer::new("ns", "127.0.0.1"), error)
    }

    #[test]
    fn dedupes_and_sorts_as_strings() {
        let results = ResultSet::from(vec![
            resolved(&["9.9.9.9", "10.0.0.1"]),
            resolved(&["10.0.0.1", "1.2.3.4"]),
        ]);

        let ips = union_ips(&results);

        // "10..." sorts before "9..." as a string.
        assert_eq!(ips, ["1.2.3.4", "10.0.0.1", "9.9.9.9"]);
        assert!(ips.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn every_resolved_ip_is_included() {
        let results = ResultSet::from(vec![
            resolved(&["5.5.5.5", "4.4.4.4"]),
            failed(QueryError::Timeout(Duration::from_secs(3))),
            resolved(&["6.6.6.6"]),
        ]);

        let ips = union_ips(&results);

        for result in &results {
            for ip in result.ips() {
                assert!(ips.contains(ip));
            }
        }
        assert_eq!(ips.len(), 3);
    }

    #[test]
    fn all_failed_is_empty() {
        let results = ResultSet::from(vec![
            failed(QueryError::NoResult),
            resolved(&[]),
            failed(QueryError::Transport("boom".into())),
        ]);

        assert!(union_ips(&results).is_empty());
    }
}
