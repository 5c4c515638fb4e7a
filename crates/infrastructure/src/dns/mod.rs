pub mod listener;
pub mod query_logger;
pub mod record_mapper;
pub mod reply_builder;
pub mod server;

pub use listener::{ListenerError, UdpListener};
pub use query_logger::JsonQueryLogger;
pub use record_mapper::RecordMapper;
pub use reply_builder::ReplyBuilder;
pub use server::DnsServerHandler;
