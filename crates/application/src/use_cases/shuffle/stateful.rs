use super::require_question;
use crate::ports::{AnswerShuffler, RotationStateStore};
use crate::services::{partition, reconcile};
use rrdns_domain::{
    AddressRecord, ClientKey, ShuffleOutcome, ShuffleRequest, StateEntry, StateKey,
};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, trace};

/// Round robin with the cursor kept in server memory, one per client
/// subnet, question name and address family.
pub struct StatefulShuffler {
    store: Arc<dyn RotationStateStore>,
}

impl StatefulShuffler {
    pub fn new(store: Arc<dyn RotationStateStore>) -> Self {
        Self { store }
    }

    /// Advances the cursor under `key` against the addresses of the current
    /// answer and returns the new order. A key is created on first use and
    /// refreshed on every later call, even when `current` is empty.
    pub fn refresh(&self, key: StateKey, current: &[String], now: Instant) -> Vec<String> {
        let entry = self.store.refresh(key, &mut |previous| {
            let previous = previous.map(|e| e.order.as_slice()).unwrap_or(&[]);
            StateEntry::new(reconcile(previous, current), now)
        });
        entry.order
    }
}

impl<R: AddressRecord + Send> AnswerShuffler<R> for StatefulShuffler {
    fn shuffle(&self, request: Option<&ShuffleRequest>, answer: Vec<R>) -> ShuffleOutcome<R> {
        let (request, question) = match require_question(request) {
            Ok(parts) => parts,
            Err(e) => {
                debug!(error = %e, "Answer left in original order");
                return ShuffleOutcome::new(answer);
            }
        };

        let family = question.family();
        let key = StateKey::new(
            ClientKey::from_signal(&request.subnet),
            &question.name,
            family,
        );

        let split = partition(answer, family);
        trace!(key = %key, addresses = split.addresses.len(), "Refreshing rotation state");
        let order = self.refresh(key, &split.addresses, Instant::now());

        ShuffleOutcome::new(split.assemble(&order))
    }

    fn name(&self) -> &'static str {
        "stateful"
    }
}
