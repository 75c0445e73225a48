use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid IP address: {0}")]
    InvalidIpAddress(String),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("Unsupported record type: {0}")]
    UnsupportedRecordType(String),

    #[error("Missing request")]
    MissingRequest,

    #[error("Request has no question")]
    EmptyQuestion,

    #[error("Invalid rotation token: {0}")]
    InvalidRotationToken(String),

    #[error("Unknown rotation strategy: {0}")]
    UnknownStrategy(String),

    #[error("Rotation strategy not implemented: {0}")]
    StrategyNotImplemented(String),
}
