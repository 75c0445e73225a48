use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use rrdns_application::ports::RotationStateStore;
use rrdns_domain::{StateEntry, StateKey};
use rustc_hash::FxBuildHasher;
use tracing::debug;

/// Process-wide rotation table.
///
/// One flat map keyed by `(client, question, family)`. A refresh holds the
/// shard write lock for its whole read-reconcile-write, and `retain` holds
/// each shard's write lock while sweeping it, so a sweep never interleaves
/// with a refresh of the same key.
pub struct DashMapRotationStore {
    entries: DashMap<StateKey, StateEntry, FxBuildHasher>,
}

impl DashMapRotationStore {
    pub fn new() -> Self {
        Self {
            entries: DashMap::with_hasher(FxBuildHasher),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        debug!(capacity, "Initializing rotation state store");
        Self {
            entries: DashMap::with_capacity_and_hasher(capacity, FxBuildHasher),
        }
    }
}

impl Default for DashMapRotationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RotationStateStore for DashMapRotationStore {
    fn exists(&self, key: &StateKey) -> bool {
        self.entries.contains_key(key)
    }

    fn get(&self, key: &StateKey) -> Option<StateEntry> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    fn upsert(&self, key: StateKey, entry: StateEntry) {
        self.entries.insert(key, entry);
    }

    fn refresh(
        &self,
        key: StateKey,
        next: &mut dyn FnMut(Option<&StateEntry>) -> StateEntry,
    ) -> StateEntry {
        match self.entries.entry(key) {
            Entry::Occupied(mut occupied) => {
                let updated = next(Some(occupied.get()));
                occupied.insert(updated.clone());
                updated
            }
            Entry::Vacant(vacant) => {
                let created = next(None);
                vacant.insert(created.clone());
                created
            }
        }
    }

    fn for_each(&self, visitor: &mut dyn FnMut(&StateKey, &StateEntry)) {
        for item in self.entries.iter() {
            visitor(item.key(), item.value());
        }
    }

    fn retain(&self, keep: &mut dyn FnMut(&StateKey, &StateEntry) -> bool) -> usize {
        let mut removed = 0;
        self.entries.retain(|key, entry| {
            let kept = keep(key, entry);
            if !kept {
                removed += 1;
            }
            kept
        });
        removed
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
