use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use crate::dns_record::RecordType;

/// A record served by the built-in authoritative responder.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LocalRecord {
    pub name: String,

    pub record_type: String,

    /// Address for A/AAAA, target for CNAME/MX, text for TXT.
    pub value: String,

    #[serde(default)]
    pub ttl: Option<u32>,

    /// MX preference.
    #[serde(default)]
    pub preference: Option<u16>,
}

impl LocalRecord {
    pub fn fqdn(&self) -> String {
        if self.name.ends_with('.') {
            self.name.clone()
        } else {
            format!("{}.", self.name)
        }
    }

    pub fn ttl_or_default(&self) -> u32 {
        self.ttl.unwrap_or(300)
    }

    pub fn parsed_type(&self) -> Result<RecordType, ConfigError> {
        let record_type: RecordType = self
            .record_type
            .parse()
            .map_err(|e: crate::DomainError| ConfigError::Validation(e.to_string()))?;
        if !record_type.is_servable() {
            return Err(ConfigError::Validation(format!(
                "Record '{}' has unsupported type {}",
                self.name, record_type
            )));
        }
        Ok(record_type)
    }
}
