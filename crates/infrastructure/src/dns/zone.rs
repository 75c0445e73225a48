use crate::dns::record_type_map::RecordTypeMapper;
use compact_str::CompactString;
use hickory_proto::rr::rdata::{A, AAAA, CNAME, MX, TXT};
use hickory_proto::rr::{Name, RData, Record, RecordType as HickoryRecordType};
use rrdns_domain::{DomainError, LocalRecord, RecordType};
use rustc_hash::FxHashMap;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;
use tracing::{debug, info};

const MAX_CNAME_HOPS: usize = 8;

/// Records declared in the configuration, indexed by owner name and type.
///
/// Owner names are matched case-insensitively; the records keep the owner
/// name exactly as written in the configuration.
#[derive(Debug, Default)]
pub struct LocalZone {
    records: FxHashMap<(CompactString, u16), Vec<Record>>,
}

impl LocalZone {
    pub fn from_config(records: &[LocalRecord]) -> Result<Self, DomainError> {
        let mut zone = Self::default();
        for record in records {
            zone.insert(record)?;
        }
        info!(records = records.len(), owners = zone.owner_count(), "Local zone loaded");
        Ok(zone)
    }

    pub fn insert(&mut self, local: &LocalRecord) -> Result<(), DomainError> {
        let record_type = local
            .parsed_type()
            .map_err(|e| DomainError::InvalidRecord(e.to_string()))?;
        let fqdn = local.fqdn();
        let owner = Name::from_str(&fqdn)
            .map_err(|e| DomainError::InvalidDomainName(format!("{}: {}", fqdn, e)))?;
        let rdata = build_rdata(record_type, local)?;
        let record = Record::from_rdata(owner, local.ttl_or_default(), rdata);

        self.records
            .entry(zone_key(&fqdn, record_type))
            .or_default()
            .push(record);
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains_name(&self, name: &str) -> bool {
        let owner = normalize(name);
        self.records.keys().any(|(n, _)| *n == owner)
    }

    fn owner_count(&self) -> usize {
        let mut owners: Vec<&CompactString> = self.records.keys().map(|(n, _)| n).collect();
        owners.sort();
        owners.dedup();
        owners.len()
    }

    /// Answer section for `name`/`query_type`, following CNAMEs declared in
    /// the zone. ANY returns every record owned by `name`.
    pub fn lookup(&self, name: &str, query_type: HickoryRecordType) -> Vec<Record> {
        let record_type = RecordTypeMapper::from_hickory(query_type);
        if record_type == RecordType::ANY {
            let owner = normalize(name);
            return self
                .records
                .iter()
                .filter(|((n, _), _)| *n == owner)
                .flat_map(|(_, records)| records.iter().cloned())
                .collect();
        }

        let mut answer = Vec::new();
        let mut current = normalize(name);

        for _ in 0..MAX_CNAME_HOPS {
            if let Some(records) = self.records.get(&(current.clone(), record_type.to_u16())) {
                answer.extend(records.iter().cloned());
                return answer;
            }
            if record_type == RecordType::CNAME {
                break;
            }
            let Some(aliases) = self.records.get(&(current.clone(), RecordType::CNAME.to_u16()))
            else {
                break;
            };
            answer.extend(aliases.iter().cloned());
            match aliases.first().map(Record::data) {
                Some(RData::CNAME(target)) => current = normalize(&target.0.to_ascii()),
                _ => break,
            }
        }

        if !answer.is_empty() {
            debug!(name, "CNAME chain left unresolved in local zone");
        }
        answer
    }
}

fn normalize(name: &str) -> CompactString {
    let mut owner = CompactString::from(name.to_ascii_lowercase());
    if !owner.ends_with('.') {
        owner.push('.');
    }
    owner
}

fn zone_key(fqdn: &str, record_type: RecordType) -> (CompactString, u16) {
    (normalize(fqdn), record_type.to_u16())
}

fn parse_target(value: &str) -> Result<Name, DomainError> {
    let fqdn = if value.ends_with('.') {
        value.to_string()
    } else {
        format!("{}.", value)
    };
    Name::from_str(&fqdn).map_err(|e| DomainError::InvalidDomainName(format!("{}: {}", value, e)))
}

fn build_rdata(record_type: RecordType, local: &LocalRecord) -> Result<RData, DomainError> {
    let value = local.value.trim();
    match record_type {
        RecordType::A => Ipv4Addr::from_str(value)
            .map(|ip| RData::A(A(ip)))
            .map_err(|_| DomainError::InvalidIpAddress(value.to_string())),
        RecordType::AAAA => Ipv6Addr::from_str(value)
            .map(|ip| RData::AAAA(AAAA(ip)))
            .map_err(|_| DomainError::InvalidIpAddress(value.to_string())),
        RecordType::CNAME => parse_target(value).map(|target| RData::CNAME(CNAME(target))),
        RecordType::MX => {
            parse_target(value).map(|exchange| RData::MX(MX::new(local.preference.unwrap_or(10), exchange)))
        }
        RecordType::TXT => Ok(RData::TXT(TXT::new(vec![local.value.clone()]))),
        other => Err(DomainError::UnsupportedRecordType(other.to_string())),
    }
}
