use bitflip_dns_domain::{RecordData, SyntheticRecord};
use bitflip_dns_infrastructure::dns::RecordMapper;
use hickory_proto::rr::{RData, RecordType};
use std::net::Ipv4Addr;
use std::sync::Arc;

#[test]
fn test_maps_a_record() {
    let record = SyntheticRecord::new(
        "ok.example.",
        1,
        RecordData::A(Ipv4Addr::new(10, 0, 0, 2)),
    );

    let mapped = RecordMapper::to_hickory(&record).unwrap();

    assert_eq!(mapped.record_type(), RecordType::A);
    assert_eq!(mapped.ttl(), 1);
    assert_eq!(mapped.name().to_ascii(), "ok.example.");
    match mapped.data() {
        RData::A(a) => assert_eq!(a.0, Ipv4Addr::new(10, 0, 0, 2)),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_maps_soa_fields() {
    let record = SyntheticRecord::new(
        "ctrl.example.",
        604_800,
        RecordData::SOA {
            mname: Arc::from("ns1.ctrl.example."),
            rname: Arc::from("admin.example.com."),
            serial: 1,
            refresh: 28_800,
            retry: 7_200,
            expire: 604_800,
            minimum: 60,
        },
    );

    let mapped = RecordMapper::to_hickory(&record).unwrap();

    match mapped.data() {
        RData::SOA(soa) => {
            assert_eq!(soa.mname().to_ascii(), "ns1.ctrl.example.");
            assert_eq!(soa.rname().to_ascii(), "admin.example.com.");
            assert_eq!(soa.serial(), 1);
            assert_eq!(soa.refresh(), 28_800);
            assert_eq!(soa.retry(), 7_200);
            assert_eq!(soa.expire(), 604_800);
            assert_eq!(soa.minimum(), 60);
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_maps_mx_and_ns() {
    let mx = SyntheticRecord::new(
        "ok.example.",
        1,
        RecordData::MX {
            preference: 1,
            exchange: Arc::from("mx.ctrl.example."),
        },
    );
    let ns = SyntheticRecord::new(
        "ok.example.",
        604_800,
        RecordData::NS(Arc::from("ns2.ctrl.example.")),
    );

    match RecordMapper::to_hickory(&mx).unwrap().data() {
        RData::MX(mx) => {
            assert_eq!(mx.preference(), 1);
            assert_eq!(mx.exchange().to_ascii(), "mx.ctrl.example.");
        }
        other => panic!("unexpected {:?}", other),
    }
    match RecordMapper::to_hickory(&ns).unwrap().data() {
        RData::NS(ns) => assert_eq!(ns.0.to_ascii(), "ns2.ctrl.example."),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_rejects_invalid_owner_name() {
    let label = "a".repeat(70);
    let record = SyntheticRecord::new(
        format!("{}.example.", label).as_str(),
        1,
        RecordData::A(Ipv4Addr::LOCALHOST),
    );

    assert!(RecordMapper::to_hickory(&record).is_err());
}
