use rrdns_application::ports::RotationStateStore;
use rrdns_domain::{StateEntry, StateKey};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

pub struct MockStateStore {
    entries: Mutex<HashMap<StateKey, StateEntry>>,
    refresh_calls: AtomicU64,
}

impl MockStateStore {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            refresh_calls: AtomicU64::new(0),
        }
    }

    pub fn refresh_call_count(&self) -> u64 {
        self.refresh_calls.load(Ordering::Relaxed)
    }
}

impl RotationStateStore for MockStateStore {
    fn exists(&self, key: &StateKey) -> bool {
        self.entries.lock().unwrap().contains_key(key)
    }

    fn get(&self, key: &StateKey) -> Option<StateEntry> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn upsert(&self, key: StateKey, entry: StateEntry) {
        self.entries.lock().unwrap().insert(key, entry);
    }

    fn refresh(
        &self,
        key: StateKey,
        next: &mut dyn FnMut(Option<&StateEntry>) -> StateEntry,
    ) -> StateEntry {
        self.refresh_calls.fetch_add(1, Ordering::Relaxed);
        let mut entries = self.entries.lock().unwrap();
        let updated = next(entries.get(&key));
        entries.insert(key, updated.clone());
        updated
    }

    fn for_each(&self, visitor: &mut dyn FnMut(&StateKey, &StateEntry)) {
        for (key, entry) in self.entries.lock().unwrap().iter() {
            visitor(key, entry);
        }
    }

    fn retain(&self, keep: &mut dyn FnMut(&StateKey, &StateEntry) -> bool) -> usize {
        let mut entries = self.entries.lock().unwrap();
        let before = entries.len();
        entries.retain(|key, entry| keep(key, entry));
        before - entries.len()
    }

    fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }
}
