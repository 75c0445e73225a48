//! Mapping between `rrdns_domain::RecordType` and `hickory_proto::rr::RecordType`.
//!
//! Both sides carry the IANA type code, so the conversion goes through `u16`
//! and never loses a type the domain does not name.

use hickory_proto::rr::RecordType as HickoryRecordType;
use rrdns_domain::RecordType;

/// Bidirectional mapper between domain and hickory record types
pub struct RecordTypeMapper;

impl RecordTypeMapper {
    /// Convert domain RecordType → hickory RecordType (for building records)
    pub fn to_hickory(record_type: RecordType) -> HickoryRecordType {
        HickoryRecordType::from(record_type.to_u16())
    }

    /// Convert hickory RecordType → domain RecordType (for incoming queries)
    pub fn from_hickory(hickory_type: HickoryRecordType) -> RecordType {
        RecordType::from_u16(u16::from(hickory_type))
    }
}
