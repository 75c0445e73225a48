pub mod errors;
pub mod logging;
pub mod records;
pub mod root;
pub mod rotation;
pub mod server;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use records::LocalRecord;
pub use root::{CliOverrides, Config};
pub use rotation::RotationConfig;
pub use server::ServerConfig;
