use compact_str::CompactString;
use std::fmt;

pub const MISSING_SUBNET: &str = "missing-subnet";
pub const EMPTY_SUBNET: &str = "empty-subnet";

/// What the request told us about the client network.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubnetSignal {
    /// The request carried no client subnet option.
    #[default]
    Missing,
    /// The option was present but carried no address bits.
    Empty,
    /// Textual `address/prefix` declared by the client or its resolver.
    Subnet(String),
}

/// Partition key of the rotation state.
///
/// Requests without a client subnet and requests with an explicitly empty one
/// map to different sentinels, so the two populations never share cursors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClientKey(CompactString);

impl ClientKey {
    pub fn missing() -> Self {
        Self(CompactString::const_new(MISSING_SUBNET))
    }

    pub fn empty() -> Self {
        Self(CompactString::const_new(EMPTY_SUBNET))
    }

    pub fn from_signal(signal: &SubnetSignal) -> Self {
        match signal {
            SubnetSignal::Missing => Self::missing(),
            SubnetSignal::Empty => Self::empty(),
            SubnetSignal::Subnet(subnet) if subnet.is_empty() => Self::empty(),
            SubnetSignal::Subnet(subnet) => Self(CompactString::from(subnet.as_str())),
        }
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<&SubnetSignal> for ClientKey {
    fn from(signal: &SubnetSignal) -> Self {
        Self::from_signal(signal)
    }
}

impl fmt::Display for ClientKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
