//! The persisted set of favorite listings and its hydration gate.
//!
//! Favorites are loaded from durable storage once, after the first render.
//! Until that load finishes the store is not hydrated: toggles still change
//! the in-memory set (so the UI responds immediately) but nothing is written,
//! otherwise an empty initial state would overwrite what the user saved last
//! session. Toggles made during that window are replayed on top of the loaded
//! set, and the merged result is written once.

use dioxus_logger::tracing::debug;
use dioxus_logger::tracing::warn;
use serde::Serialize;

use crate::storage::KeyValueStorage;
use crate::storage::StorageError;
use crate::EntityId;

/// The storage key favorites are persisted under.
pub const FAVORITES_KEY: &str = "luxe-favorites";

/// Lifecycle of the load from durable storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::EnumIs)]
pub enum HydrationState {
    #[default]
    Uninitialized,
    Loading,
    Ready,
}

/// An insertion-ordered set of listing ids, compared by string form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FavoritesSet(Vec<EntityId>);

impl FavoritesSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes the persisted JSON array, collapsing duplicate ids.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let ids: Vec<EntityId> = serde_json::from_str(raw)?;
        Ok(ids.into_iter().collect())
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn contains(&self, id: &EntityId) -> bool {
        self.0.contains(id)
    }

    /// Adds `id` if absent, removes it otherwise. Returns `true` if `id` is
    /// now a favorite.
    pub fn toggle(&mut self, id: EntityId) -> bool {
        match self.0.iter().position(|existing| *existing == id) {
            Some(index) => {
                self.0.remove(index);
                false
            }
            None => {
                self.0.push(id);
                true
            }
        }
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EntityId> {
        self.0.iter()
    }

    fn apply(&mut self, op: PendingOp) {
        match op {
            PendingOp::Toggle(id) => {
                self.toggle(id);
            }
            PendingOp::Clear => self.clear(),
        }
    }
}

impl FromIterator<EntityId> for FavoritesSet {
    fn from_iter<T: IntoIterator<Item = EntityId>>(iter: T) -> Self {
        let mut set = Self::new();
        for id in iter {
            if !set.contains(&id) {
                set.0.push(id);
            }
        }
        set
    }
}

impl<'a> IntoIterator for &'a FavoritesSet {
    type Item = &'a EntityId;
    type IntoIter = std::slice::Iter<'a, EntityId>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A mutation made before hydration finished.
#[derive(Debug, Clone, PartialEq, Eq)]
enum PendingOp {
    Toggle(EntityId),
    Clear,
}

/// The favorites store: an in-memory [`FavoritesSet`] written through to a
/// [`KeyValueStorage`] once hydrated.
#[derive(Debug)]
pub struct FavoritesStore<S> {
    storage: S,
    key: String,
    favorites: FavoritesSet,
    state: HydrationState,
    pending: Vec<PendingOp>,
}

impl<S: KeyValueStorage> FavoritesStore<S> {
    /// Creates an unhydrated store persisting under [`FAVORITES_KEY`].
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, FAVORITES_KEY)
    }

    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            favorites: FavoritesSet::new(),
            state: HydrationState::Uninitialized,
            pending: Vec::new(),
        }
    }

    pub fn hydration_state(&self) -> HydrationState {
        self.state
    }

    pub fn is_hydrated(&self) -> bool {
        self.state.is_ready()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn favorites(&self) -> &FavoritesSet {
        &self.favorites
    }

    /// Loads favorites from storage and opens the persistence gate.
    ///
    /// Does nothing once the store is ready. Never fails: unreadable or
    /// corrupt data is logged and treated as an empty set.
    pub fn hydrate(&mut self) {
        if self.state.is_ready() {
            return;
        }
        self.begin_loading();
        let loaded = self.storage.get(&self.key);
        self.finish_loading(loaded);
    }

    /// Marks the load as in flight, for callers that read storage themselves.
    pub fn begin_loading(&mut self) {
        if self.state.is_uninitialized() {
            self.state = HydrationState::Loading;
        }
    }

    /// Completes hydration with the result of reading the favorites key.
    pub fn finish_loading(&mut self, loaded: Result<Option<String>, StorageError>) {
        if self.state.is_ready() {
            return;
        }

        let mut favorites = match loaded {
            Ok(Some(raw)) => FavoritesSet::from_json(&raw).unwrap_or_else(|e| {
                let err = StorageError::Corrupt {
                    key: self.key.clone(),
                    reason: e.to_string(),
                };
                warn!("Discarding saved favorites: {}", err);
                FavoritesSet::new()
            }),
            Ok(None) => FavoritesSet::new(),
            Err(err) => {
                warn!("Could not load favorites, starting empty: {}", err);
                FavoritesSet::new()
            }
        };

        let pending = std::mem::take(&mut self.pending);
        let dirty = !pending.is_empty();
        for op in pending {
            favorites.apply(op);
        }

        self.favorites = favorites;
        self.state = HydrationState::Ready;
        debug!(
            "favorites hydrated: {} saved, replayed early changes: {}",
            self.favorites.len(),
            dirty
        );

        if dirty {
            self.persist();
        }
    }

    /// Adds or removes `id`. Returns `true` if `id` is now a favorite.
    pub fn toggle_favorite(&mut self, id: impl Into<EntityId>) -> bool {
        let id = id.into();
        let now_favorite = self.favorites.toggle(id.clone());
        self.commit(PendingOp::Toggle(id));
        now_favorite
    }

    pub fn is_favorite(&self, id: impl Into<EntityId>) -> bool {
        self.favorites.contains(&id.into())
    }

    pub fn clear_favorites(&mut self) {
        self.favorites.clear();
        self.commit(PendingOp::Clear);
    }

    pub fn len(&self) -> usize {
        self.favorites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.favorites.is_empty()
    }

    fn commit(&mut self, op: PendingOp) {
        if self.state.is_ready() {
            self.persist();
        } else {
            self.pending.push(op);
        }
    }

    fn persist(&mut self) {
        let json = match self.favorites.to_json() {
            Ok(json) => json,
            Err(e) => {
                warn!("Could not encode favorites: {}", e);
                return;
            }
        };
        if let Err(err) = self.storage.set(&self.key, &json) {
            warn!("Favorites kept in memory only: {}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn hydrated(storage: &MemoryStorage) -> FavoritesStore<MemoryStorage> {
        let mut store = FavoritesStore::new(storage.clone());
        store.hydrate();
        store
    }

    #[test]
    fn number_and_string_toggles_cancel_out() {
        let storage = MemoryStorage::new();
        let mut store = hydrated(&storage);
        assert!(store.toggle_favorite(42));
        assert!(!store.toggle_favorite("42"));
        assert!(store.is_empty());
        assert_eq!(storage.value(FAVORITES_KEY).as_deref(), Some("[]"));
    }

    #[test]
    fn saved_favorites_survive_a_reload() {
        let storage = MemoryStorage::with_entry(FAVORITES_KEY, "[1,2,3]");
        let store = hydrated(&storage);
        assert!(store.is_favorite(2));
        assert!(store.is_favorite("2"));
        assert!(!store.is_favorite(4));
        assert_eq!(storage.writes(), 0);
    }

    #[test]
    fn round_trips_through_a_fresh_session() {
        let storage = MemoryStorage::new();
        {
            let mut store = hydrated(&storage);
            store.toggle_favorite(1);
            store.toggle_favorite("villa-2");
        }
        let reloaded = hydrated(&storage);
        assert_eq!(
            reloaded.favorites().iter().map(EntityId::as_str).collect::<Vec<_>>(),
            ["1", "villa-2"]
        );
        assert_eq!(storage.value(FAVORITES_KEY).as_deref(), Some(r#"[1,"villa-2"]"#));
    }

    #[test]
    fn toggles_before_hydration_are_not_written_early() {
        let storage = MemoryStorage::with_entry(FAVORITES_KEY, "[1,2,3]");
        let mut store = FavoritesStore::new(storage.clone());

        assert!(store.toggle_favorite(9));
        assert!(store.is_favorite(9));
        assert_eq!(store.hydration_state(), HydrationState::Uninitialized);
        assert_eq!(storage.writes(), 0);
        assert_eq!(storage.value(FAVORITES_KEY).as_deref(), Some("[1,2,3]"));

        store.hydrate();
        assert!(store.is_hydrated());
        assert_eq!(storage.writes(), 1);
        assert_eq!(storage.value(FAVORITES_KEY).as_deref(), Some("[1,2,3,9]"));
    }

    #[test]
    fn early_toggle_of_a_saved_id_removes_it() {
        let storage = MemoryStorage::with_entry(FAVORITES_KEY, "[1,2,3]");
        let mut store = FavoritesStore::new(storage.clone());
        store.toggle_favorite("2");
        store.hydrate();
        assert!(!store.is_favorite(2));
        assert_eq!(storage.value(FAVORITES_KEY).as_deref(), Some("[1,3]"));
    }

    #[test]
    fn split_loading_buffers_until_finished() {
        let storage = MemoryStorage::with_entry(FAVORITES_KEY, r#"["a"]"#);
        let mut store = FavoritesStore::new(storage.clone());
        store.begin_loading();
        assert!(store.hydration_state().is_loading());

        store.toggle_favorite("b");
        store.clear_favorites();
        store.toggle_favorite("c");
        assert_eq!(storage.writes(), 0);

        let raw = storage.get(FAVORITES_KEY);
        store.finish_loading(raw);
        assert_eq!(storage.value(FAVORITES_KEY).as_deref(), Some(r#"["c"]"#));
        assert_eq!(storage.writes(), 1);
    }

    #[test]
    fn hydration_without_early_changes_does_not_write() {
        let storage = MemoryStorage::new();
        let store = hydrated(&storage);
        assert!(store.is_empty());
        assert_eq!(storage.writes(), 0);
    }

    #[test]
    fn hydrate_runs_once() {
        let storage = MemoryStorage::with_entry(FAVORITES_KEY, "[1]");
        let mut store = hydrated(&storage);
        store.toggle_favorite(1);
        store.hydrate();
        assert!(store.is_empty());
    }

    #[test]
    fn corrupt_data_falls_back_to_empty() {
        for raw in ["not json", r#"{"ids":[1]}"#, "[1, true]", "[null]"] {
            let storage = MemoryStorage::with_entry(FAVORITES_KEY, raw);
            let store = hydrated(&storage);
            assert!(store.is_hydrated(), "{raw}");
            assert!(store.is_empty(), "{raw}");
        }
    }

    #[test]
    fn unreadable_storage_falls_back_to_empty() {
        let storage = MemoryStorage::with_entry(FAVORITES_KEY, "[1]");
        storage.fail_reads(true);
        let store = hydrated(&storage);
        assert!(store.is_hydrated());
        assert!(!store.is_favorite(1));
    }

    #[test]
    fn write_failures_keep_memory_state() {
        let storage = MemoryStorage::new();
        let mut store = hydrated(&storage);
        storage.fail_writes(true);
        store.toggle_favorite(5);
        assert!(store.is_favorite(5));
        assert_eq!(storage.value(FAVORITES_KEY), None);
    }

    #[test]
    fn stored_duplicates_collapse_on_load() {
        let storage = MemoryStorage::with_entry(FAVORITES_KEY, r#"[7,"7",8]"#);
        let mut store = hydrated(&storage);
        assert_eq!(store.len(), 2);
        store.toggle_favorite(8);
        assert_eq!(storage.value(FAVORITES_KEY).as_deref(), Some("[7]"));
    }

    #[test]
    fn clear_persists_an_empty_list() {
        let storage = MemoryStorage::with_entry(FAVORITES_KEY, "[1,2]");
        let mut store = hydrated(&storage);
        store.clear_favorites();
        assert!(store.is_empty());
        assert_eq!(storage.value(FAVORITES_KEY).as_deref(), Some("[]"));
    }

    #[test]
    fn custom_key_is_respected() {
        let storage = MemoryStorage::new();
        let mut store = FavoritesStore::with_key(storage.clone(), "staging-favorites");
        store.hydrate();
        store.toggle_favorite(1);
        assert_eq!(storage.value("staging-favorites").as_deref(), Some("[1]"));
        assert_eq!(storage.value(FAVORITES_KEY), None);
    }
}
