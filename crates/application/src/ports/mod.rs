mod query_log_sink;

pub use query_log_sink::QueryLogSink;
