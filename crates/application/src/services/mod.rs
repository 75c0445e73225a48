pub mod answer_partitioner;
pub mod rotation;
pub mod rotation_token;

pub use answer_partitioner::{partition, Partition};
pub use rotation::{reconcile, rotate_left_once};
pub use rotation_token::{decode_token, encode_token, try_decode_token, ROTATION_TOKEN_PREFIX};
