use crate::errors::DomainError;
use std::fmt;
use std::str::FromStr;

pub const STRATEGY_STATEFUL: &str = "stateful";
pub const STRATEGY_STATELESS: &str = "stateless";
pub const STRATEGY_RANDOM: &str = "random";
pub const STRATEGY_WEIGHT: &str = "weight";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RotationStrategy {
    /// Per-client cursors kept in server memory.
    #[default]
    Stateful,
    /// Cursor echoed back and forth with the client.
    Stateless,
    /// Uniform shuffle of the address records, no cursor.
    Random,
}

impl RotationStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stateful => STRATEGY_STATEFUL,
            Self::Stateless => STRATEGY_STATELESS,
            Self::Random => STRATEGY_RANDOM,
        }
    }
}

impl FromStr for RotationStrategy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | STRATEGY_STATEFUL => Ok(Self::Stateful),
            STRATEGY_STATELESS => Ok(Self::Stateless),
            STRATEGY_RANDOM => Ok(Self::Random),
            STRATEGY_WEIGHT => Err(DomainError::StrategyNotImplemented(s.to_string())),
            _ => Err(DomainError::UnknownStrategy(s.to_string())),
        }
    }
}

impl fmt::Display for RotationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
