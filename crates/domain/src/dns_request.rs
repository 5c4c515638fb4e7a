use std::net::SocketAddr;
use std::sync::Arc;

pub const DNS_CLASS_IN: u16 = 1;

/// Parsed question plus the transport endpoints it arrived on
#[derive(Debug, Clone)]
pub struct DnsRequest {
    pub name: Arc<str>,
    pub query_type: u16,
    pub query_class: u16,
    pub local: SocketAddr,
    pub remote: SocketAddr,
}

impl DnsRequest {
    pub fn new(
        name: impl Into<Arc<str>>,
        query_type: u16,
        query_class: u16,
        local: SocketAddr,
        remote: SocketAddr,
    ) -> Self {
        Self {
            name: name.into(),
            query_type,
            query_class,
            local,
            remote,
        }
    }

    pub fn is_internet_class(&self) -> bool {
        self.query_class == DNS_CLASS_IN
    }
}
