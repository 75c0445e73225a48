use crate::dns_record::RecordType;
use std::fmt;

/// Address record family whose order is rotated.
///
/// A and AAAA answers keep independent rotation cursors, so a client asking
/// for both never shares one order between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AddressFamily {
    A,
    AAAA,
}

impl AddressFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            AddressFamily::A => "A",
            AddressFamily::AAAA => "AAAA",
        }
    }

    pub fn record_type(&self) -> RecordType {
        match self {
            AddressFamily::A => RecordType::A,
            AddressFamily::AAAA => RecordType::AAAA,
        }
    }

    /// Family rotated for a query of the given type. Everything that is not
    /// an AAAA query rotates the A records of the answer.
    pub fn for_query_type(query_type: RecordType) -> Self {
        match query_type {
            RecordType::AAAA => AddressFamily::AAAA,
            _ => AddressFamily::A,
        }
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
