use rrdns_domain::{StateEntry, StateKey};

/// Port for the process-wide table of rotation cursors.
///
/// Shared by every request handler and by the state collector. All
/// operations are total; missing keys are created on demand. Implementations
/// serialise access per key, so `refresh` is an atomic read-modify-write and
/// `retain` never interleaves with a refresh of the key it is visiting.
pub trait RotationStateStore: Send + Sync {
    fn exists(&self, key: &StateKey) -> bool;

    fn get(&self, key: &StateKey) -> Option<StateEntry>;

    fn upsert(&self, key: StateKey, entry: StateEntry);

    /// Replaces the entry under `key` with `next(previous)` while holding the
    /// key's lock, and returns a copy of the stored entry.
    fn refresh(
        &self,
        key: StateKey,
        next: &mut dyn FnMut(Option<&StateEntry>) -> StateEntry,
    ) -> StateEntry;

    fn for_each(&self, visitor: &mut dyn FnMut(&StateKey, &StateEntry));

    /// Keeps only the entries for which `keep` returns true. Returns the
    /// number of removed entries.
    fn retain(&self, keep: &mut dyn FnMut(&StateKey, &StateEntry) -> bool) -> usize;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
