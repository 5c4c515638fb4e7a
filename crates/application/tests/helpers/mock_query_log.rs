use async_trait::async_trait;
use bitflip_dns_application::ports::QueryLogSink;
use bitflip_dns_domain::{DomainError, QueryLogEntry};
use std::sync::{Arc, Mutex};

pub struct MockQueryLogSink {
    entries: Arc<Mutex<Vec<QueryLogEntry>>>,
}

impl MockQueryLogSink {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn entries(&self) -> Vec<QueryLogEntry> {
        self.entries.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.entries.lock().unwrap().len()
    }
}

impl Default for MockQueryLogSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QueryLogSink for MockQueryLogSink {
    async fn record(&self, entry: &QueryLogEntry) -> Result<(), DomainError> {
        self.entries.lock().unwrap().push(entry.clone());
        Ok(())
    }
}

pub struct FailingQueryLogSink;

#[async_trait]
impl QueryLogSink for FailingQueryLogSink {
    async fn record(&self, _entry: &QueryLogEntry) -> Result<(), DomainError> {
        Err(DomainError::AuditLog("disk full".to_string()))
    }
}
