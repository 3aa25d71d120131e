//! Single-shot DNS exchange with one name server, over UDP or TCP.
//!
//! Nothing is answered locally: no hosts file, no cache, no special-use
//! names. Every query goes to the server.

use std::future::Future;
use std::io;
use std::net::IpAddr;
use std::net::Ipv4Addr;
use std::net::Ipv6Addr;
use std::net::SocketAddr;
use std::time::Duration;

use hickory_resolver::proto::op::Message;
use hickory_resolver::proto::op::MessageType;
use hickory_resolver::proto::op::OpCode;
use hickory_resolver::proto::op::Query;
use hickory_resolver::proto::rr::Name;
use hickory_resolver::proto::rr::RData;
use hickory_resolver::proto::rr::RecordType;
use hickory_resolver::proto::serialize::binary::BinDecodable;
use hickory_resolver::proto::serialize::binary::BinEncodable;
use tokio::io::AsyncReadExt;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tokio::net::UdpSocket;
use tracing::trace;

use super::QueryError;
use super::Transport;

/// Largest UDP payload accepted from a server.
const MAX_UDP_SIZE: usize = 4096;

/// Sends an A query for `domain` to `server` and returns the A records of
/// the answer, in the order the server sent them. `timeout` applies to
/// connect, write and read separately.
pub(crate) async fn query_a(
    server: SocketAddr,
    domain: &str,
    transport: Transport,
    timeout: Duration,
) -> Result<Vec<String>, QueryError> {
    let request = request(domain)?;
    let bytes = request.to_bytes().map_err(transport_error)?;

    let response = match transport {
        Transport::Udp => exchange_udp(server, &bytes, request.id(), timeout).await?,
        Transport::Tcp => exchange_tcp(server, &bytes, timeout).await?,
    };
    let response = Message::from_bytes(&response).map_err(transport_error)?;
    if response.id() != request.id() {
        return Err(QueryError::Transport(format!(
            "response id {} does not match query id {}",
            response.id(),
            request.id()
        )));
    }
    trace!(code = %response.response_code(), answers = response.answers().len(), "got response");

    Ok(response
        .answers()
        .iter()
        .filter_map(|record| match record.data() {
            RData::A(a) => Some(a.to_string()),
            _other => None,
        })
        .collect())
}

fn request(domain: &str) -> Result<Message, QueryError> {
    let mut name = Name::from_ascii(domain).map_err(transport_error)?;
    name.set_fqdn(true);

    let mut message = Message::new();
    message
        .set_id(rand::random())
        .set_message_type(MessageType::Query)
        .set_op_code(OpCode::Query)
        .set_recursion_desired(true);
    message.add_query(Query::query(name, RecordType::A));
    Ok(message)
}

async fn exchange_udp(
    server: SocketAddr,
    request: &[u8],
    id: u16,
    timeout: Duration,
) -> Result<Vec<u8>, QueryError> {
    let local: IpAddr = if server.is_ipv4() {
        Ipv4Addr::UNSPECIFIED.into()
    } else {
        Ipv6Addr::UNSPECIFIED.into()
    };
    let socket = UdpSocket::bind((local, 0)).await.map_err(transport_error)?;
    socket.connect(server).await.map_err(transport_error)?;
    with_timeout(timeout, socket.send(request)).await?;

    let mut buf = vec![0u8; MAX_UDP_SIZE];
    loop {
        let len = with_timeout(timeout, socket.recv(&mut buf)).await?;
        // Stray datagrams for other queries are skipped.
        if len >= 2 && u16::from_be_bytes([buf[0], buf[1]]) == id {
            buf.truncate(len);
            return Ok(buf);
        }
    }
}

async fn exchange_tcp(
    server: SocketAddr,
    request: &[u8],
    timeout: Duration,
) -> Result<Vec<u8>, QueryError> {
    let mut stream = with_timeout(timeout, TcpStream::connect(server)).await?;

    let len = u16::try_from(request.len())
        .map_err(|_| QueryError::Transport("query too large for tcp".to_owned()))?;
    let mut framed = Vec::with_capacity(request.len() + 2);
    framed.extend_from_slice(&len.to_be_bytes());
    framed.extend_from_slice(request);
    with_timeout(timeout, stream.write_all(&framed)).await?;

    let len = with_timeout(timeout, stream.read_u16()).await?;
    let mut response = vec![0u8; usize::from(len)];
    with_timeout(timeout, stream.read_exact(&mut response)).await?;
    Ok(response)
}

async fn with_timeout<T>(
    duration: Duration,
    future: impl Future<Output = io::Result<T>>,
) -> Result<T, QueryError> {
    tokio::time::timeout(duration, future)
        .await
        .map_err(|_elapsed| QueryError::Timeout(duration))?
        .map_err(transport_error)
}

fn transport_error(error: impl std::fmt::Display) -> QueryError {
    QueryError::Transport(error.to_string())
}
