use super::SyntheticRecord;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyCode {
    NoError,
    Refused,
}

/// One outbound message worth of records
///
/// `name` is the question echoed back; for the second reply of a flipped
/// query it is the rewritten name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntheticReply {
    pub name: Arc<str>,

    pub code: ReplyCode,

    pub answers: Vec<SyntheticRecord>,

    pub authority: Vec<SyntheticRecord>,

    pub disclaimer: SyntheticRecord,
}

impl SyntheticReply {
    pub fn is_refused(&self) -> bool {
        self.code == ReplyCode::Refused
    }
}
