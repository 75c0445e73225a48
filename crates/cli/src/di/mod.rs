mod rotation;

pub use rotation::RotationServices;
