use bitflip_dns_infrastructure::dns::{DnsServerHandler, ListenerError, UdpListener};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

/// Why the listener set stopped
#[derive(Debug)]
pub enum Shutdown {
    /// The token was cancelled from outside (ctrl-c)
    Requested,
    /// A listener hit an error that stops the whole process
    Fatal(ListenerError),
    /// Every listener failed on its own
    AllFailed,
}

impl Shutdown {
    pub fn is_success(&self) -> bool {
        matches!(self, Shutdown::Requested)
    }
}

/// Bind every address, logging the ones that fail.
///
/// A failed bind only removes that listener; the rest still serve.
pub fn bind_listeners(addrs: &[SocketAddr]) -> Vec<UdpListener> {
    addrs
        .iter()
        .filter_map(|addr| match UdpListener::bind(*addr) {
            Ok(listener) => Some(listener),
            Err(e) => {
                error!(bind_address = %addr, error = %e, "Listener failed to start");
                None
            }
        })
        .collect()
}

/// Run the listeners until `shutdown` is cancelled, a fatal error occurs, or
/// none are left.
pub async fn supervise(
    listeners: Vec<UdpListener>,
    handler: Arc<DnsServerHandler>,
    shutdown: CancellationToken,
) -> Shutdown {
    let mut join_set: JoinSet<Result<(), ListenerError>> = JoinSet::new();

    for listener in listeners {
        let handler = handler.clone();
        let shutdown = shutdown.clone();
        join_set.spawn(listener.run(handler, shutdown));
    }

    info!(listeners = join_set.len(), "DNS listeners running");

    while let Some(joined) = join_set.join_next().await {
        match joined {
            Ok(Ok(())) => {}
            Ok(Err(e)) if e.is_fatal() => {
                error!(error = %e, "Fatal listener error, stopping all listeners");
                shutdown.cancel();
                drain(&mut join_set).await;
                return Shutdown::Fatal(e);
            }
            Ok(Err(e)) => {
                error!(bind_address = %e.addr(), error = %e, "Listener stopped");
            }
            Err(e) => {
                error!(error = %e, "Listener task panicked");
            }
        }
    }

    if shutdown.is_cancelled() {
        Shutdown::Requested
    } else {
        Shutdown::AllFailed
    }
}

async fn drain(join_set: &mut JoinSet<Result<(), ListenerError>>) {
    while let Some(joined) = join_set.join_next().await {
        if let Ok(Err(e)) = joined {
            warn!(error = %e, "Listener error during shutdown");
        }
    }
}
