mod collect_rotation_state;

pub use collect_rotation_state::{CollectRotationStateUseCase, RotationStateSummary};
