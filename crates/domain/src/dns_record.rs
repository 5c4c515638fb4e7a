mod record;
mod record_type;
mod reply;

pub use record::{RecordData, SyntheticRecord};
pub use record_type::RecordType;
pub use reply::{ReplyCode, SyntheticReply};
