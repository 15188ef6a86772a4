use dioxus::prelude::*;
use luxe_state::favorites::FavoritesStore;
use luxe_state::EntityId;

use crate::compat::platform_storage;
use crate::compat::PlatformStorage;

/// The user's favorite listings, persisted across reloads.
#[derive(Clone, Copy, PartialEq)]
pub struct Favorites {
    store: Signal<FavoritesStore<PlatformStorage>>,
}

impl Favorites {
    pub fn is_favorite(&self, id: &EntityId) -> bool {
        self.store.read().is_favorite(id)
    }

    /// Returns `true` if `id` is now a favorite.
    pub fn toggle(&mut self, id: EntityId) -> bool {
        self.store.write().toggle_favorite(id)
    }

    pub fn clear(&mut self) {
        self.store.write().clear_favorites();
    }

    pub fn ids(&self) -> Vec<EntityId> {
        self.store.read().favorites().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.store.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.read().is_empty()
    }

    pub fn is_hydrated(&self) -> bool {
        self.store.read().is_hydrated()
    }
}

/// Creates the favorites store and provides [`Favorites`].
///
/// Storage is read in an effect, i.e. after the first render on the client,
/// so server-rendered markup and the first client render both show the
/// unhydrated state.
pub fn use_favorites_provider(key: &str) -> Favorites {
    let key = key.to_owned();
    let mut store = use_signal(move || FavoritesStore::with_key(platform_storage(), key));

    use_effect(move || {
        if !store.peek().is_hydrated() {
            store.write().hydrate();
        }
    });

    use_context_provider(|| Favorites { store })
}

pub fn use_favorites() -> Favorites {
    use_context::<Favorites>()
}
