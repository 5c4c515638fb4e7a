pub mod answers;
pub mod bind;
pub mod errors;
pub mod logging;
pub mod root;

pub use answers::{AnswerSet, AnswersConfig};
pub use bind::BindConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{mailbox_from_contact, Config};
