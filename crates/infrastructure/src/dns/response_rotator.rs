use crate::dns::wire_record::WireRecord;
use hickory_proto::op::ResponseCode;
use hickory_proto::rr::Record;
use rrdns_application::ports::AnswerShuffler;
use rrdns_domain::{ShuffleOutcome, ShuffleRequest};
use std::sync::Arc;
use tracing::trace;

/// Response-side hook that runs the configured shuffler over an answer
/// section right before it is written to the client.
///
/// Error responses and zone transfers are written untouched.
#[derive(Clone)]
pub struct ResponseRotator {
    shuffler: Arc<dyn AnswerShuffler<WireRecord>>,
}

impl ResponseRotator {
    pub fn new(shuffler: Arc<dyn AnswerShuffler<WireRecord>>) -> Self {
        Self { shuffler }
    }

    pub fn strategy_name(&self) -> &'static str {
        self.shuffler.name()
    }

    pub fn rotate(
        &self,
        request: &ShuffleRequest,
        response_code: ResponseCode,
        answers: Vec<Record>,
    ) -> ShuffleOutcome<Record> {
        if response_code != ResponseCode::NoError {
            trace!(rcode = ?response_code, "Passing through error response");
            return ShuffleOutcome::new(answers);
        }

        let zone_transfer = request
            .question
            .as_ref()
            .is_some_and(|q| q.query_type.is_zone_transfer());
        if zone_transfer {
            trace!("Passing through zone transfer");
            return ShuffleOutcome::new(answers);
        }

        let outcome = self
            .shuffler
            .shuffle(Some(request), WireRecord::wrap_all(answers));

        ShuffleOutcome {
            answer: WireRecord::unwrap_all(outcome.answer),
            rotation_token: outcome.rotation_token,
        }
    }
}
