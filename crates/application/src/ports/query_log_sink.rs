use async_trait::async_trait;
use bitflip_dns_domain::{DomainError, QueryLogEntry};

/// Append-only audit sink
///
/// `record` returns only after the entry is durably handed to the sink.
/// Implementations are shared by every listener and must serialize their
/// own writes.
#[async_trait]
pub trait QueryLogSink: Send + Sync {
    async fn record(&self, entry: &QueryLogEntry) -> Result<(), DomainError>;
}
