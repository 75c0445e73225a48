use crate::ports::AnswerShuffler;
use rrdns_domain::{AddressFamily, AddressRecord, ShuffleOutcome, ShuffleRequest};

/// Uniform shuffle of every A and AAAA record; other records follow in
/// their original order.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomShuffler;

impl RandomShuffler {
    pub fn new() -> Self {
        Self
    }
}

fn is_address<R: AddressRecord>(record: &R) -> bool {
    record.address(AddressFamily::A).is_some() || record.address(AddressFamily::AAAA).is_some()
}

impl<R: AddressRecord + Send> AnswerShuffler<R> for RandomShuffler {
    fn shuffle(&self, _request: Option<&ShuffleRequest>, answer: Vec<R>) -> ShuffleOutcome<R> {
        let (mut addresses, others): (Vec<R>, Vec<R>) = answer.into_iter().partition(is_address);
        fastrand::shuffle(&mut addresses);
        addresses.extend(others);
        ShuffleOutcome::new(addresses)
    }

    fn name(&self) -> &'static str {
        "random"
    }
}
