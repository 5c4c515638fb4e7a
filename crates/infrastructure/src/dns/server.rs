use super::reply_builder::ReplyBuilder;
use bitflip_dns_application::use_cases::HandleQueryUseCase;
use bitflip_dns_domain::{DnsRequest, DomainError};
use hickory_proto::op::Message;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{debug, warn};

/// Wire-level front of the query use case
///
/// Parses one datagram, runs the use case and returns the encoded replies in
/// send order. Requests that cannot be parsed are dropped (an empty list), a
/// reply that cannot be encoded is skipped without affecting the others; only
/// fatal errors are returned.
pub struct DnsServerHandler {
    use_case: Arc<HandleQueryUseCase>,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<HandleQueryUseCase>) -> Self {
        Self { use_case }
    }

    pub async fn handle_datagram(
        &self,
        datagram: &[u8],
        local: SocketAddr,
        remote: SocketAddr,
    ) -> Result<Vec<Vec<u8>>, DomainError> {
        if is_response(datagram) {
            debug!(client = %remote, "Dropping non-query message");
            return Ok(Vec::new());
        }

        let request = match Message::from_vec(datagram) {
            Ok(message) => message,
            Err(e) => {
                debug!(client = %remote, error = %e, "Dropping unparsable datagram");
                return Ok(Vec::new());
            }
        };

        let Some(query) = request.queries().first() else {
            debug!(client = %remote, "Dropping query without question");
            return Ok(Vec::new());
        };

        let dns_request = DnsRequest::new(
            query.name().to_ascii(),
            u16::from(query.query_type()),
            u16::from(query.query_class()),
            local,
            remote,
        );

        let replies = self.use_case.execute(&dns_request).await?;

        let mut wire = Vec::with_capacity(replies.len());
        for reply in &replies {
            match ReplyBuilder::build(&request, reply).and_then(|m| ReplyBuilder::serialize(&m)) {
                Ok(bytes) => wire.push(bytes),
                Err(e) => {
                    warn!(
                        domain = %dns_request.name,
                        reply_name = %reply.name,
                        error = %e,
                        "Failed to encode reply, skipping it"
                    );
                }
            }
        }

        Ok(wire)
    }
}

/// QR bit of the raw header; short buffers are left for the parser to reject.
fn is_response(datagram: &[u8]) -> bool {
    datagram.len() > 2 && datagram[2] & 0x80 != 0
}
