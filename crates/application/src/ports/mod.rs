mod answer_shuffler;
mod rotation_state_store;

pub use answer_shuffler::AnswerShuffler;
pub use rotation_state_store::RotationStateStore;
