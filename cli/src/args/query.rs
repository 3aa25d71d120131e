use clap::Args;
use ipre::query::QueryEngine;
use ipre::query::Transport;
use ipre::query::DEFAULT_TIMEOUT;
use ipre::query::DNS_PORT;

const HEADING: Option<&str> = Some("Query Options");

/// Arguments controlling how name servers are queried.
#[derive(Debug, Args, Clone)]
pub struct QueryArgs {
    /// Use TCP instead of UDP
    #[clap(short, long, help_heading = HEADING)]
    pub tcp: bool,

    /// Time to allow each name server to answer
    #[clap(long, default_value_t = DEFAULT_TIMEOUT.into(), help_heading = HEADING)]
    pub timeout: humantime::Duration,

    /// Port used for server addresses that do not carry one
    #[clap(long, default_value_t = DNS_PORT, help_heading = HEADING)]
    pub port: u16,
}

impl QueryArgs {
    pub fn engine(&self) -> QueryEngine {
        QueryEngine::builder()
            .transport(Transport::from_tcp_flag(self.tcp))
            .timeout(self.timeout.into())
            .port(self.port)
            .build()
    }
}
