use std::ops::Deref;
use std::time::Duration;

use thiserror::Error;

use crate::category::ErrorCategory;
use crate::config::NameServer;

/// Why a single name server produced no addresses.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The server answered, but without any A record.
    #[error("No result")]
    NoResult,

    #[error("i/o timeout after {0:?}")]
    Timeout(Duration),

    /// Any other socket or protocol failure, with the underlying error text.
    #[error("{0}")]
    Transport(String),
}

impl QueryError {
    /// Short label for the table view, derived from the error text.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::classify(&self.to_string())
    }
}

/// Either the addresses a server returned or why it returned none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Never empty, in the order the server sent them.
    Resolved(Vec<String>),
    Failed(QueryError),
}

/// Result of querying one [`NameServer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryResult {
    pub server: NameServer,
    pub outcome: Outcome,
}

impl QueryResult {
    /// Builds a successful result. An empty address list becomes
    /// [`QueryError::NoResult`].
    #[must_use]
    pub fn resolved(server: NameServer, ips: Vec<String>) -> Self {
        let outcome = if ips.is_empty() {
            Outcome::Failed(QueryError::NoResult)
        } else {
            Outcome::Resolved(ips)
        };
        Self { server, outcome }
    }

    #[must_use]
    pub fn failed(server: NameServer, error: QueryError) -> Self {
        Self {
            server,
            outcome: Outcome::Failed(error),
        }
    }

    /// Addresses returned by the server; empty on failure.
    #[must_use]
    pub fn ips(&self) -> &[String] {
        match &self.outcome {
            Outcome::Resolved(ips) => ips,
            Outcome::Failed(_) => &[],
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&QueryError> {
        match &self.outcome {
            Outcome::Resolved(_) => None,
            Outcome::Failed(error) => Some(error),
        }
    }
}

/// All results of one round. Position `i` always belongs to the `i`-th
/// configured name server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet(Vec<QueryResult>);

impl From<Vec<QueryResult>> for ResultSet {
    fn from(results: Vec<QueryResult>) -> Self {
        Self(results)
    }
}

impl Deref for ResultSet {
    type Target = [QueryResult];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a QueryResult;
    type IntoIter = std::slice::Iter<'a, QueryResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn server() -> NameServer {
        NameServer::new("Google", "8.8.8.8")
    }

    #[test]
    fn empty_answer_is_no_result() {
        let result = QueryResult::resolved(server(), vec![]);
        assert_eq!(result.outcome, Outcome::Failed(QueryError::NoResult));
        assert!(result.ips().is_empty());
        assert_eq!(result.error(), Some(&QueryError::NoResult));
    }

    #[test]
    fn answer_keeps_server_order() {
        let ips = vec!["2.2.2.2".to_string(), "1.1.1.1".to_string()];
        let result = QueryResult::resolved(server(), ips.clone());
        assert_eq!(result.ips(), ips.as_slice());
        assert_eq!(result.error(), None);
    }

    #[rstest]
    #[case(QueryError::NoResult, ErrorCategory::NoResult)]
    #[case(QueryError::Timeout(Duration::from_secs(3)), ErrorCategory::Timeout)]
    #[case(QueryError::Transport("request timeout".into()), ErrorCategory::Timeout)]
    #[case(QueryError::Transport("io error: Connection refused".into()), ErrorCategory::Unclassified)]
    fn category_works(#[case] error: QueryError, #[case] expected: ErrorCategory) {
        assert_eq!(error.category(), expected);
    }
}
