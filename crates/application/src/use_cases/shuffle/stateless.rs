use super::require_question;
use crate::ports::AnswerShuffler;
use crate::services::{decode_token, encode_token, partition, reconcile};
use rrdns_domain::{AddressRecord, ShuffleOutcome, ShuffleRequest};
use tracing::debug;

/// Round robin with the cursor carried by the client.
///
/// The previous order arrives in the request's rotation token and the new
/// order leaves in the outcome's token; nothing is stored server-side.
#[derive(Debug, Default, Clone, Copy)]
pub struct StatelessShuffler;

impl StatelessShuffler {
    pub fn new() -> Self {
        Self
    }
}

impl<R: AddressRecord + Send> AnswerShuffler<R> for StatelessShuffler {
    fn shuffle(&self, request: Option<&ShuffleRequest>, answer: Vec<R>) -> ShuffleOutcome<R> {
        let (request, question) = match require_question(request) {
            Ok(parts) => parts,
            Err(e) => {
                debug!(error = %e, "Answer left in original order");
                return ShuffleOutcome::new(answer);
            }
        };

        let previous = request
            .rotation_token
            .as_deref()
            .map(decode_token)
            .unwrap_or_default();

        let split = partition(answer, question.family());
        let order = reconcile(&previous, &split.addresses);
        let token = encode_token(&order);

        ShuffleOutcome::new(split.assemble(&order)).with_rotation_token(token)
    }

    fn name(&self) -> &'static str {
        "stateless"
    }
}
