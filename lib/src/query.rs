mod engine;
mod exchange;
mod result;
mod transport;

pub use engine::QueryEngine;
pub use engine::DEFAULT_TIMEOUT;
pub use engine::DNS_PORT;
pub use result::Outcome;
pub use result::QueryError;
pub use result::QueryResult;
pub use result::ResultSet;
pub use transport::Transport;
