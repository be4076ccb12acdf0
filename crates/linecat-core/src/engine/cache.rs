use super::transitions::{TransitionFilter, TransitionSet};
use crate::core::models::kind::CatalogKind;

/// The full parameter tuple a cached transition set was parsed with.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheKey {
    pub kind: CatalogKind,
    pub file_name: String,
    pub filter: TransitionFilter,
    /// The cap in force when the set was read; a truncated set is only valid for it.
    pub max_transitions: usize,
}

/// Holds the most recently parsed transition set.
///
/// At most one entry exists; storing a set under a different key evicts the
/// previous one. Filter limits are compared exactly.
#[derive(Debug, Default, Clone)]
pub struct TransitionCache {
    entry: Option<(CacheKey, TransitionSet)>,
}

impl TransitionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &CacheKey) -> Option<&TransitionSet> {
        match &self.entry {
            Some((cached_key, set)) if cached_key == key => Some(set),
            _ => None,
        }
    }

    pub fn contains(&self, key: &CacheKey) -> bool {
        self.get(key).is_some()
    }

    /// Returns the set cached under `key`, or loads and caches a new one.
    ///
    /// The flag is `true` on a hit. A failed load leaves the cache empty.
    pub fn get_or_try_insert_with<E, F>(
        &mut self,
        key: CacheKey,
        load: F,
    ) -> Result<(&TransitionSet, bool), E>
    where
        F: FnOnce(&CacheKey) -> Result<TransitionSet, E>,
    {
        let (entry, hit) = match self.entry.take() {
            Some((cached_key, set)) if cached_key == key => ((cached_key, set), true),
            _ => {
                let set = load(&key)?;
                ((key, set), false)
            }
        };
        Ok((&self.entry.insert(entry).1, hit))
    }

    /// The cached set, whatever its key.
    pub fn current(&self) -> Option<&TransitionSet> {
        self.entry.as_ref().map(|(_, set)| set)
    }

    /// Stores `set` under `key`, replacing whatever was cached, and returns it.
    pub fn store(&mut self, key: CacheKey, set: TransitionSet) -> &TransitionSet {
        &self.entry.insert((key, set)).1
    }

    pub fn key(&self) -> Option<&CacheKey> {
        self.entry.as_ref().map(|(key, _)| key)
    }

    pub fn clear(&mut self) {
        self.entry = None;
    }

    pub fn is_empty(&self) -> bool {
        self.entry.is_none()
    }
}
