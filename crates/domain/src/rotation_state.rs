use crate::address_family::AddressFamily;
use crate::client_key::ClientKey;
use compact_str::CompactString;
use std::fmt;
use std::time::{Duration, Instant};

/// Composite key of one rotation cursor: client subnet, question name as
/// received, and address family.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StateKey {
    pub client: ClientKey,
    pub question: CompactString,
    pub family: AddressFamily,
}

impl StateKey {
    #[inline]
    pub fn new(client: ClientKey, question: &str, family: AddressFamily) -> Self {
        Self {
            client,
            question: CompactString::from(question),
            family,
        }
    }
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}][{}][{}]", self.client, self.question, self.family)
    }
}

/// Stored rotation cursor.
///
/// `order` only ever holds addresses seen in the latest response processed
/// for its key; the first element is the address served first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateEntry {
    pub last_seen: Instant,
    pub order: Vec<String>,
}

impl StateEntry {
    pub fn new(order: Vec<String>, last_seen: Instant) -> Self {
        Self { last_seen, order }
    }

    pub fn idle_for(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.last_seen)
    }

    pub fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        self.idle_for(now) >= ttl
    }
}
