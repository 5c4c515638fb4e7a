use bitflip_dns_application::ports::QueryLogSink;
use bitflip_dns_domain::{DnsRequest, QueryLogEntry, ZoneKind};
use bitflip_dns_infrastructure::dns::JsonQueryLogger;
use std::sync::Arc;
use tempfile::TempDir;

fn entry(name: &str, port: u16) -> QueryLogEntry {
    let request = DnsRequest::new(
        name,
        1,
        1,
        "192.0.2.53:53".parse().unwrap(),
        format!("198.51.100.7:{}", port).parse().unwrap(),
    );
    QueryLogEntry::from_request(&request, ZoneKind::Correct)
}

#[tokio::test]
async fn test_record_appends_one_json_line() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("audit.json");
    let logger = JsonQueryLogger::open(&path).await.unwrap();

    logger.record(&entry("ok.example.", 1234)).await.unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.ends_with('\n'));
    let value: serde_json::Value = serde_json::from_str(contents.trim_end()).unwrap();
    assert_eq!(value["type"], 2);
    assert_eq!(value["qName"], "ok.example.");
    assert_eq!(value["port"], "1234");
    assert!(value["timestamp"].is_string());
}

#[tokio::test]
async fn test_reopen_appends_instead_of_truncating() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("audit.json");

    {
        let logger = JsonQueryLogger::open(&path).await.unwrap();
        logger.record(&entry("a.ok.example.", 1)).await.unwrap();
    }
    let logger = JsonQueryLogger::open(&path).await.unwrap();
    logger.record(&entry("b.ok.example.", 2)).await.unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents.lines().count(), 2);
}

#[tokio::test]
async fn test_concurrent_records_never_interleave() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("audit.json");
    let logger = Arc::new(JsonQueryLogger::open(&path).await.unwrap());

    let mut tasks = Vec::new();
    for i in 0..50u16 {
        let logger = logger.clone();
        tasks.push(tokio::spawn(async move {
            logger
                .record(&entry(&format!("host{}.ok.example.", i), 10_000 + i))
                .await
                .unwrap();
        }));
    }
    for task in tasks {
        task.await.unwrap();
    }

    let contents = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 50);
    for line in lines {
        let value: serde_json::Value = serde_json::from_str(line).unwrap();
        assert!(value["qName"].as_str().unwrap().ends_with(".ok.example."));
    }
}

#[cfg(unix)]
#[tokio::test]
async fn test_new_log_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("audit.json");
    let _logger = JsonQueryLogger::open(&path).await.unwrap();

    let mode = std::fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[tokio::test]
async fn test_open_fails_for_missing_directory() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("audit.json");

    assert!(JsonQueryLogger::open(&path).await.is_err());
}
