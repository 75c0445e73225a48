//! rrdns Domain Layer
pub mod address_family;
pub mod client_key;
pub mod config;
pub mod dns_record;
pub mod errors;
pub mod rotation_state;
pub mod rotation_strategy;
pub mod shuffle_request;

pub use address_family::AddressFamily;
pub use client_key::{ClientKey, SubnetSignal};
pub use config::{CliOverrides, Config, ConfigError, LocalRecord, RotationConfig};
pub use dns_record::{AddressRecord, RecordType};
pub use errors::DomainError;
pub use rotation_state::{StateEntry, StateKey};
pub use rotation_strategy::RotationStrategy;
pub use shuffle_request::{Question, ShuffleOutcome, ShuffleRequest};
