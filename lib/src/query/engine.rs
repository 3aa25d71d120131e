use std::net::IpAddr;
use std::net::SocketAddr;
use std::time::Duration;

use bon::Builder;
use tracing::debug;
use tracing::instrument;

use super::exchange;
use super::QueryError;
use super::QueryResult;
use super::ResultSet;
use super::Transport;
use crate::config::NameServer;
use crate::util::tokio::spawn_timeout;
use crate::util::tokio::SpawnError;

/// Port queried when a server address does not carry one.
pub const DNS_PORT: u16 = 53;

/// Applied to connect, read and write of every query.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

/// Upper bound on timed steps in one server task: address lookup, connect,
/// write, and two reads.
const STEPS: u32 = 5;

/// Queries many name servers for the A records of one domain at once.
#[derive(Debug, Clone, Copy, Builder)]
pub struct QueryEngine {
    #[builder(default)]
    transport: Transport,
    #[builder(default = DEFAULT_TIMEOUT)]
    timeout: Duration,
    #[builder(default = DNS_PORT)]
    port: u16,
}

impl QueryEngine {
    /// Runs one round: one task per server, all started together, returning
    /// once every task has finished or timed out.
    ///
    /// Never fails; per-server failures are recorded in the returned
    /// [`ResultSet`], which is index-aligned with `servers`.
    pub async fn query(&self, servers: &[NameServer], domain: &str) -> ResultSet {
        debug!(%domain, servers = servers.len(), transport = %self.transport, "starting round");
        let tasks = servers
            .iter()
            .map(|server| self.query_server(server.clone(), domain.to_owned()));
        futures::future::join_all(tasks).await.into()
    }

    #[instrument(skip_all, fields(name = %server.name, address = %server.address))]
    async fn query_server(&self, server: NameServer, domain: String) -> QueryResult {
        let engine = *self;
        let address = server.address.clone();
        let lookup = async move { engine.lookup(&address, &domain).await };

        // Each step has its own timeout; this only catches a task that hangs
        // outside of them.
        let result = match spawn_timeout(self.timeout * STEPS, lookup).await {
            Ok(Ok(ips)) => QueryResult::resolved(server, ips),
            Ok(Err(error)) => QueryResult::failed(server, error),
            Err(SpawnError::Timeout(elapsed)) => {
                QueryResult::failed(server, QueryError::Timeout(elapsed))
            }
            Err(error @ SpawnError::Join(_)) => {
                QueryResult::failed(server, QueryError::Transport(error.to_string()))
            }
        };

        debug!(outcome = ?result.outcome, "query finished");
        result
    }

    async fn lookup(&self, address: &str, domain: &str) -> Result<Vec<String>, QueryError> {
        let socket_addr = self.socket_addr(address).await?;
        exchange::query_a(socket_addr, domain, self.transport, self.timeout).await
    }

    /// Accepts `ip:port`, a bare IP, or a host name resolved through the
    /// system resolver.
    async fn socket_addr(&self, address: &str) -> Result<SocketAddr, QueryError> {
        if let Ok(addr) = address.parse::<SocketAddr>() {
            return Ok(addr);
        }
        if let Ok(ip) = address.parse::<IpAddr>() {
            return Ok(SocketAddr::new(ip, self.port));
        }

        let lookup = tokio::net::lookup_host((address, self.port));
        let mut addrs = match tokio::time::timeout(self.timeout, lookup).await {
            Ok(Ok(addrs)) => addrs,
            Ok(Err(error)) => {
                return Err(QueryError::Transport(format!(
                    "unable to resolve name server address '{address}': {error}"
                )))
            }
            Err(_elapsed) => return Err(QueryError::Timeout(self.timeout)),
        };
        addrs.next().ok_or_else(|| {
            QueryError::Transport(format!("name server address '{address}' has no IP"))
        })
    }
}
