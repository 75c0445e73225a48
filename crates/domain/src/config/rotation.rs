use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::errors::ConfigError;
use crate::rotation_strategy::RotationStrategy;

/// Idle time after which a rotation cursor is reaped.
pub const DEFAULT_STATE_TTL_SECS: u64 = 600;
/// Period of the rotation state sweep.
pub const DEFAULT_GC_INTERVAL_SECS: u64 = 5;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RotationConfig {
    /// `stateful`, `stateless` or `random`
    #[serde(default = "default_strategy")]
    pub strategy: String,

    #[serde(default = "default_state_ttl_secs")]
    pub state_ttl_secs: u64,

    #[serde(default = "default_gc_interval_secs")]
    pub gc_interval_secs: u64,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            strategy: default_strategy(),
            state_ttl_secs: default_state_ttl_secs(),
            gc_interval_secs: default_gc_interval_secs(),
        }
    }
}

impl RotationConfig {
    pub fn strategy(&self) -> Result<RotationStrategy, ConfigError> {
        self.strategy
            .parse()
            .map_err(|e: crate::DomainError| ConfigError::Validation(e.to_string()))
    }

    pub fn state_ttl(&self) -> Duration {
        Duration::from_secs(self.state_ttl_secs)
    }

    pub fn gc_interval(&self) -> Duration {
        Duration::from_secs(self.gc_interval_secs)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.strategy()?;

        if self.state_ttl_secs == 0 {
            return Err(ConfigError::Validation(
                "Rotation state TTL cannot be 0".to_string(),
            ));
        }
        if self.gc_interval_secs == 0 {
            return Err(ConfigError::Validation(
                "Rotation GC interval cannot be 0".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_strategy() -> String {
    RotationStrategy::default().as_str().to_string()
}

fn default_state_ttl_secs() -> u64 {
    DEFAULT_STATE_TTL_SECS
}

fn default_gc_interval_secs() -> u64 {
    DEFAULT_GC_INTERVAL_SECS
}
