mod random;
mod stateful;
mod stateless;

pub use random::RandomShuffler;
pub use stateful::StatefulShuffler;
pub use stateless::StatelessShuffler;

use crate::ports::{AnswerShuffler, RotationStateStore};
use rrdns_domain::{AddressRecord, DomainError, Question, RotationStrategy, ShuffleRequest};
use std::sync::Arc;

/// Builds the shuffler selected by configuration.
pub fn build_shuffler<R>(
    strategy: RotationStrategy,
    store: Arc<dyn RotationStateStore>,
) -> Arc<dyn AnswerShuffler<R>>
where
    R: AddressRecord + Send + 'static,
{
    match strategy {
        RotationStrategy::Stateful => Arc::new(StatefulShuffler::new(store)),
        RotationStrategy::Stateless => Arc::new(StatelessShuffler::new()),
        RotationStrategy::Random => Arc::new(RandomShuffler::new()),
    }
}

/// Rejects requests the cursor strategies cannot key: no request at all, or
/// a request without a question.
pub(crate) fn require_question(
    request: Option<&ShuffleRequest>,
) -> Result<(&ShuffleRequest, &Question), DomainError> {
    let request = request.ok_or(DomainError::MissingRequest)?;
    let question = request
        .question
        .as_ref()
        .ok_or(DomainError::EmptyQuestion)?;
    Ok((request, question))
}
