use super::RecordType;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::Arc;

/// Record payload, independent of any wire library
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    A(Ipv4Addr),
    AAAA(Ipv6Addr),
    NS(Arc<str>),
    SOA {
        mname: Arc<str>,
        rname: Arc<str>,
        serial: u32,
        refresh: i32,
        retry: i32,
        expire: i32,
        minimum: u32,
    },
    MX {
        preference: u16,
        exchange: Arc<str>,
    },
    TXT(Arc<str>),
}

impl RecordData {
    pub fn record_type(&self) -> RecordType {
        match self {
            RecordData::A(_) => RecordType::A,
            RecordData::AAAA(_) => RecordType::AAAA,
            RecordData::NS(_) => RecordType::NS,
            RecordData::SOA { .. } => RecordType::SOA,
            RecordData::MX { .. } => RecordType::MX,
            RecordData::TXT(_) => RecordType::TXT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntheticRecord {
    pub name: Arc<str>,

    pub ttl: u32,

    pub data: RecordData,
}

impl SyntheticRecord {
    pub fn new(name: impl Into<Arc<str>>, ttl: u32, data: RecordData) -> Self {
        Self {
            name: name.into(),
            ttl,
            data,
        }
    }

    pub fn record_type(&self) -> RecordType {
        self.data.record_type()
    }
}
