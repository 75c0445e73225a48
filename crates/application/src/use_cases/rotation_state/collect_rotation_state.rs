use crate::ports::RotationStateStore;
use rustc_hash::FxHashSet;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;

/// Size of the rotation table, as reported after a sweep.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RotationStateSummary {
    pub entries: usize,
    pub clients: usize,
    pub questions: usize,
}

/// Use case: drop rotation cursors idle for longer than the TTL.
/// Driven on a fixed period by the background job runner.
pub struct CollectRotationStateUseCase {
    store: Arc<dyn RotationStateStore>,
    ttl: Duration,
}

impl CollectRotationStateUseCase {
    pub fn new(store: Arc<dyn RotationStateStore>, ttl: Duration) -> Self {
        Self { store, ttl }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn execute(&self) -> usize {
        self.execute_at(Instant::now())
    }

    /// Removes every entry idle for at least the TTL as of `now`.
    pub fn execute_at(&self, now: Instant) -> usize {
        let ttl = self.ttl;
        let removed = self
            .store
            .retain(&mut |_, entry| !entry.is_expired(now, ttl));

        if removed > 0 {
            debug!(
                removed,
                remaining = self.store.len(),
                ttl_secs = ttl.as_secs(),
                "Rotation state swept"
            );
        }
        removed
    }

    pub fn summarize(&self) -> RotationStateSummary {
        let mut entries = 0;
        let mut clients = FxHashSet::default();
        let mut questions = FxHashSet::default();

        self.store.for_each(&mut |key, _| {
            entries += 1;
            clients.insert(key.client.clone());
            questions.insert((key.client.clone(), key.question.clone()));
        });

        RotationStateSummary {
            entries,
            clients: clients.len(),
            questions: questions.len(),
        }
    }
}
