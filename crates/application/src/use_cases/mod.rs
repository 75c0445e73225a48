pub mod rotation_state;
pub mod shuffle;

pub use rotation_state::{CollectRotationStateUseCase, RotationStateSummary};
pub use shuffle::{build_shuffler, RandomShuffler, StatefulShuffler, StatelessShuffler};
