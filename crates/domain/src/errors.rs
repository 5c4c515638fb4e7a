use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid DNS message: {0}")]
    InvalidDnsMessage(String),

    #[error("Audit log write failed: {0}")]
    AuditLog(String),

    #[error("I/O error: {0}")]
    IoError(String),
}

impl DomainError {
    /// Audit failures stop the whole process; everything else drops one request.
    pub fn is_fatal(&self) -> bool {
        matches!(self, DomainError::AuditLog(_))
    }
}
