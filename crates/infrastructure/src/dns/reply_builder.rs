//! DNS reply construction
//!
//! Turns a `SyntheticReply` into a `hickory_proto` response message for a
//! given request and serializes it to wire format.

use super::record_mapper::{parse_name, RecordMapper};
use bitflip_dns_domain::{DomainError, ReplyCode, SyntheticReply};
use hickory_proto::op::{Message, MessageType, ResponseCode};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};

pub struct ReplyBuilder;

impl ReplyBuilder {
    /// Build a response to `request`
    ///
    /// Copies id, opcode and the RD flag from the request. The question is the
    /// request's first question with its name replaced by `reply.name`.
    /// Answers go to the answer section, authority records to the authority
    /// section and the disclaimer to the additional section.
    pub fn build(request: &Message, reply: &SyntheticReply) -> Result<Message, DomainError> {
        let question = request.queries().first().ok_or_else(|| {
            DomainError::InvalidDnsMessage("request has no question".to_string())
        })?;

        let mut query = question.clone();
        query.set_name(parse_name(&reply.name)?);

        let mut message = Message::new(request.id(), MessageType::Response, request.op_code());
        message.set_recursion_desired(request.recursion_desired());
        message.set_response_code(match reply.code {
            ReplyCode::NoError => ResponseCode::NoError,
            ReplyCode::Refused => ResponseCode::Refused,
        });
        message.add_query(query);

        for record in &reply.answers {
            message.add_answer(RecordMapper::to_hickory(record)?);
        }
        for record in &reply.authority {
            message.add_name_server(RecordMapper::to_hickory(record)?);
        }
        message.add_additional(RecordMapper::to_hickory(&reply.disclaimer)?);

        Ok(message)
    }

    /// Serialize a Message to wire format bytes
    pub fn serialize(message: &Message) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            DomainError::InvalidDnsMessage(format!("Failed to serialize DNS message: {}", e))
        })?;

        Ok(buf)
    }
}
