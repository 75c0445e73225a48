pub mod edns;
pub mod record_type_map;
pub mod response_rotator;
pub mod rotation_store;
pub mod server;
pub mod wire_record;
pub mod zone;

pub use edns::{read_subnet, read_rotation_token, rotation_option, shuffle_request, ROTATION_OPTION_CODE};
pub use record_type_map::RecordTypeMapper;
pub use response_rotator::ResponseRotator;
pub use rotation_store::DashMapRotationStore;
pub use server::RotationDnsHandler;
pub use wire_record::WireRecord;
pub use zone::LocalZone;
