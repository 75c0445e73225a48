use hickory_proto::rr::{RData, Record};
use rrdns_domain::{AddressFamily, AddressRecord};

/// Answer record as it travels through the rotation engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireRecord(pub Record);

impl WireRecord {
    pub fn into_inner(self) -> Record {
        self.0
    }

    pub fn wrap_all(records: Vec<Record>) -> Vec<WireRecord> {
        records.into_iter().map(WireRecord).collect()
    }

    pub fn unwrap_all(records: Vec<WireRecord>) -> Vec<Record> {
        records.into_iter().map(WireRecord::into_inner).collect()
    }
}

impl From<Record> for WireRecord {
    fn from(record: Record) -> Self {
        Self(record)
    }
}

impl AddressRecord for WireRecord {
    fn address(&self, family: AddressFamily) -> Option<String> {
        match (self.0.data(), family) {
            (RData::A(a), AddressFamily::A) => Some(a.0.to_string()),
            (RData::AAAA(aaaa), AddressFamily::AAAA) => Some(aaaa.0.to_string()),
            _ => None,
        }
    }
}
