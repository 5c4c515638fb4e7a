use crate::dns_request::DnsRequest;
use crate::zone::ZoneKind;
use serde::{Serialize, Serializer};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// One audit record per inbound query
///
/// Serialized field names are the on-disk JSON format consumed by the
/// analysis tooling; do not rename them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryLogEntry {
    pub timestamp: String,

    #[serde(rename = "type")]
    pub kind: u8,

    #[serde(rename = "dst")]
    pub destination: String,

    #[serde(rename = "src")]
    pub source: String,

    #[serde(serialize_with = "port_as_string")]
    pub port: u16,

    #[serde(rename = "qName")]
    pub query_name: String,

    #[serde(rename = "qType")]
    pub query_type: u16,

    #[serde(rename = "qClass")]
    pub query_class: u16,
}

impl QueryLogEntry {
    pub fn from_request(request: &DnsRequest, kind: ZoneKind) -> Self {
        Self {
            timestamp: chrono::Local::now().format(TIMESTAMP_FORMAT).to_string(),
            kind: kind.code(),
            destination: request.local.ip().to_string(),
            source: request.remote.ip().to_string(),
            port: request.remote.port(),
            query_name: request.name.to_string(),
            query_type: request.query_type,
            query_class: request.query_class,
        }
    }
}

fn port_as_string<S: Serializer>(port: &u16, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(port)
}
