use super::server::DnsServerHandler;
use bitflip_dns_domain::DomainError;
use socket2::{Domain, Protocol, Socket, Type};
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use thiserror::Error;
use tokio::net::UdpSocket;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

const RECV_BUFFER_SIZE: usize = 4096;
const SOCKET_BUFFER_SIZE: usize = 512 * 1024;

#[derive(Error, Debug)]
pub enum ListenerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("Socket error on {addr}: {source}")]
    Io {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("Audit log failure on {addr}: {source}")]
    AuditLog {
        addr: SocketAddr,
        #[source]
        source: DomainError,
    },
}

impl ListenerError {
    /// Fatal errors stop every listener, not just the one that hit them.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ListenerError::AuditLog { .. })
    }

    pub fn addr(&self) -> SocketAddr {
        match self {
            ListenerError::Bind { addr, .. }
            | ListenerError::Io { addr, .. }
            | ListenerError::AuditLog { addr, .. } => *addr,
        }
    }
}

/// One UDP socket serving one configured bind
pub struct UdpListener {
    socket: UdpSocket,
    local: SocketAddr,
}

impl UdpListener {
    pub fn bind(addr: SocketAddr) -> Result<Self, ListenerError> {
        let socket = create_udp_socket(addr).map_err(|source| ListenerError::Bind { addr, source })?;
        let local = socket
            .local_addr()
            .map_err(|source| ListenerError::Bind { addr, source })?;

        info!(bind_address = %local, "UDP listener bound");
        Ok(Self { socket, local })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.local
    }

    /// Serve datagrams until `shutdown` fires or the socket fails.
    ///
    /// Datagrams are handled one at a time; the replies of a request are sent
    /// in order before the next datagram is read.
    pub async fn run(
        self,
        handler: Arc<DnsServerHandler>,
        shutdown: CancellationToken,
    ) -> Result<(), ListenerError> {
        let mut recv_buf = [0u8; RECV_BUFFER_SIZE];
        let addr = self.local;

        loop {
            let (n, from) = tokio::select! {
                _ = shutdown.cancelled() => {
                    info!(bind_address = %addr, "UDP listener stopping");
                    return Ok(());
                }
                received = self.socket.recv_from(&mut recv_buf) => match received {
                    Ok(received) => received,
                    Err(e) if is_transient(&e) => {
                        debug!(bind_address = %addr, error = %e, "Transient UDP recv error");
                        continue;
                    }
                    Err(source) => {
                        error!(bind_address = %addr, error = %source, "UDP recv error");
                        return Err(ListenerError::Io { addr, source });
                    }
                },
            };

            let replies = match handler.handle_datagram(&recv_buf[..n], addr, from).await {
                Ok(replies) => replies,
                Err(source) if source.is_fatal() => {
                    error!(bind_address = %addr, error = %source, "Stopping listener");
                    return Err(ListenerError::AuditLog { addr, source });
                }
                Err(e) => {
                    warn!(bind_address = %addr, client = %from, error = %e, "Query dropped");
                    continue;
                }
            };

            for reply in &replies {
                if let Err(e) = self.socket.send_to(reply, from).await {
                    warn!(bind_address = %addr, client = %from, error = %e, "UDP send failed");
                    break;
                }
            }
        }
    }
}

fn is_transient(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        io::ErrorKind::ConnectionReset
            | io::ErrorKind::ConnectionRefused
            | io::ErrorKind::Interrupted
            | io::ErrorKind::WouldBlock
    )
}

fn create_udp_socket(addr: SocketAddr) -> io::Result<UdpSocket> {
    let domain = if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;
    if addr.is_ipv6() {
        socket.set_only_v6(true)?;
    }
    socket.set_reuse_address(true)?;
    socket.set_recv_buffer_size(SOCKET_BUFFER_SIZE)?;
    socket.set_send_buffer_size(SOCKET_BUFFER_SIZE)?;
    socket.bind(&addr.into())?;
    socket.set_nonblocking(true)?;

    let std_socket: std::net::UdpSocket = socket.into();
    UdpSocket::from_std(std_socket)
}
