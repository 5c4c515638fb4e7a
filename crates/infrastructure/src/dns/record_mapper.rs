//! Mapping from the domain's `SyntheticRecord` to `hickory_proto::rr::Record`
//!
//! The only place that knows how synthetic records look on the wire.

use bitflip_dns_domain::{DomainError, RecordData, SyntheticRecord};
use hickory_proto::rr::rdata::{A, AAAA, MX, NS, SOA, TXT};
use hickory_proto::rr::{Name, RData, Record};
use std::str::FromStr;

pub struct RecordMapper;

impl RecordMapper {
    pub fn to_hickory(record: &SyntheticRecord) -> Result<Record, DomainError> {
        let name = parse_name(&record.name)?;
        let rdata = match &record.data {
            RecordData::A(ip) => RData::A(A(*ip)),
            RecordData::AAAA(ip) => RData::AAAA(AAAA(*ip)),
            RecordData::NS(target) => RData::NS(NS(parse_name(target)?)),
            RecordData::SOA {
                mname,
                rname,
                serial,
                refresh,
                retry,
                expire,
                minimum,
            } => RData::SOA(SOA::new(
                parse_name(mname)?,
                parse_name(rname)?,
                *serial,
                *refresh,
                *retry,
                *expire,
                *minimum,
            )),
            RecordData::MX {
                preference,
                exchange,
            } => RData::MX(MX::new(*preference, parse_name(exchange)?)),
            RecordData::TXT(text) => RData::TXT(TXT::new(vec![text.to_string()])),
        };

        Ok(Record::from_rdata(name, record.ttl, rdata))
    }
}

pub(crate) fn parse_name(name: &str) -> Result<Name, DomainError> {
    Name::from_str(name)
        .map_err(|e| DomainError::InvalidDomainName(format!("Invalid domain '{}': {}", name, e)))
}
