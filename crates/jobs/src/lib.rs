pub mod rotation_state_gc;
pub mod runner;

pub use rotation_state_gc::RotationStateGcJob;
pub use runner::JobRunner;
