//! Bitflip DNS Domain Layer
pub mod config;
pub mod dns_record;
pub mod dns_request;
pub mod errors;
pub mod flip_table;
pub mod query_log;
pub mod zone;

pub use config::{
    mailbox_from_contact, AnswerSet, AnswersConfig, BindConfig, Config, ConfigError, LoggingConfig,
};
pub use dns_record::{RecordData, RecordType, ReplyCode, SyntheticRecord, SyntheticReply};
pub use dns_request::{DnsRequest, DNS_CLASS_IN};
pub use errors::DomainError;
pub use flip_table::FlipCorrelationTable;
pub use query_log::QueryLogEntry;
pub use zone::{leading_label, to_fqdn, ZoneKind, ZoneMatch};
