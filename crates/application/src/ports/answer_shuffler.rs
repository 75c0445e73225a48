use rrdns_domain::{ShuffleOutcome, ShuffleRequest};

/// Port for answer reordering strategies.
///
/// Called once per outbound response, after every other response-shaping
/// step. Shuffling never fails: when the request is unusable the answer is
/// returned in its original order.
pub trait AnswerShuffler<R>: Send + Sync {
    fn shuffle(&self, request: Option<&ShuffleRequest>, answer: Vec<R>) -> ShuffleOutcome<R>;

    fn name(&self) -> &'static str;
}
