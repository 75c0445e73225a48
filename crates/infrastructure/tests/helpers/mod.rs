#![allow(dead_code)]

use hickory_proto::rr::rdata::{A, AAAA, CNAME, MX};
use hickory_proto::rr::{Name, RData, Record};
use rrdns_domain::LocalRecord;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

pub fn name(s: &str) -> Name {
    Name::from_str(s).unwrap()
}

pub fn a_record(owner: &str, ip: &str) -> Record {
    Record::from_rdata(name(owner), 60, RData::A(A(Ipv4Addr::from_str(ip).unwrap())))
}

pub fn aaaa_record(owner: &str, ip: &str) -> Record {
    Record::from_rdata(
        name(owner),
        60,
        RData::AAAA(AAAA(Ipv6Addr::from_str(ip).unwrap())),
    )
}

pub fn cname_record(owner: &str, target: &str) -> Record {
    Record::from_rdata(name(owner), 60, RData::CNAME(CNAME(name(target))))
}

pub fn mx_record(owner: &str, exchange: &str) -> Record {
    Record::from_rdata(name(owner), 60, RData::MX(MX::new(10, name(exchange))))
}

/// Presentation form of each record's data, in answer order.
pub fn rdata_strings(records: &[Record]) -> Vec<String> {
    records.iter().map(|r| r.data().to_string()).collect()
}

pub fn local(name: &str, record_type: &str, value: &str) -> LocalRecord {
    LocalRecord {
        name: name.to_string(),
        record_type: record_type.to_string(),
        value: value.to_string(),
        ttl: None,
        preference: None,
    }
}
