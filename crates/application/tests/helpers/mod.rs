#![allow(dead_code)]
mod config;
mod mock_query_log;

pub use config::{request, sample_config, sample_config_with, CONTROL, LOCAL, REMOTE};
pub use mock_query_log::{FailingQueryLogSink, MockQueryLogSink};
