use async_trait::async_trait;
use bitflip_dns_application::ports::QueryLogSink;
use bitflip_dns_domain::{DomainError, QueryLogEntry};
use std::path::{Path, PathBuf};
use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::{error, info};

/// JSON-lines audit log
///
/// One object per line, appended and flushed before `record` returns. The
/// mutex keeps concurrent listeners from interleaving partial lines.
pub struct JsonQueryLogger {
    path: PathBuf,
    file: Mutex<File>,
}

impl JsonQueryLogger {
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref().to_path_buf();

        let mut options = OpenOptions::new();
        options.append(true).create(true);
        #[cfg(unix)]
        options.mode(0o600);

        let file = options.open(&path).await.map_err(|e| {
            DomainError::IoError(format!("Failed to open audit log {}: {}", path.display(), e))
        })?;

        info!(path = %path.display(), "Audit log opened");

        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl QueryLogSink for JsonQueryLogger {
    async fn record(&self, entry: &QueryLogEntry) -> Result<(), DomainError> {
        let mut line = serde_json::to_vec(entry)
            .map_err(|e| DomainError::AuditLog(format!("Failed to encode entry: {}", e)))?;
        line.push(b'\n');

        let mut file = self.file.lock().await;
        let written = async {
            file.write_all(&line).await?;
            file.flush().await
        }
        .await;

        written.map_err(|e| {
            error!(path = %self.path.display(), error = %e, "Audit log write failed");
            DomainError::AuditLog(e.to_string())
        })
    }
}
