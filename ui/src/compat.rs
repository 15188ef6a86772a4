//! Platform adapters: durable storage and the URL router for each target.
//!
//! Browser builds persist to `localStorage` and rewrite the address bar with
//! `history.replaceState`. Desktop builds have no address bar, so filters
//! live in an in-memory URL, and favorites go to a JSON file per key in the
//! user's data directory.

// Re-export the public API from the appropriate module
#[cfg(target_arch = "wasm32")]
pub use wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use non_wasm32::*;

#[cfg(target_arch = "wasm32")]
pub mod wasm32 {
    use dioxus_logger::tracing::warn;
    use luxe_state::config::build_env_var;
    use luxe_state::config::ConfigError;
    use luxe_state::config::SearchConfig;
    use luxe_state::query::with_query;
    use luxe_state::query::QueryParams;
    use luxe_state::query::QueryRouter;
    use luxe_state::storage::KeyValueStorage;
    use luxe_state::storage::StorageError;
    use wasm_bindgen::JsValue;

    pub type PlatformStorage = LocalStorage;
    pub type PlatformRouter = HistoryRouter;

    pub fn platform_storage() -> PlatformStorage {
        LocalStorage
    }

    pub fn platform_router() -> PlatformRouter {
        HistoryRouter
    }

    /// The browser has no process environment; overrides are baked in at
    /// build time. Malformed values are returned, not logged.
    pub fn platform_config() -> (SearchConfig, Vec<ConfigError>) {
        SearchConfig::parse(build_env_var)
    }

    fn js_reason(value: JsValue) -> String {
        value.as_string().unwrap_or_else(|| format!("{value:?}"))
    }

    /// [`KeyValueStorage`] over `window.localStorage`.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct LocalStorage;

    impl LocalStorage {
        fn storage() -> Result<web_sys::Storage, StorageError> {
            let window =
                web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".to_owned()))?;
            window
                .local_storage()
                .map_err(|e| StorageError::Unavailable(js_reason(e)))?
                .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_owned()))
        }
    }

    impl KeyValueStorage for LocalStorage {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            Self::storage()?
                .get_item(key)
                .map_err(|e| StorageError::Read {
                    key: key.to_owned(),
                    reason: js_reason(e),
                })
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            // Quota errors land here.
            Self::storage()?
                .set_item(key, value)
                .map_err(|e| StorageError::Write {
                    key: key.to_owned(),
                    reason: js_reason(e),
                })
        }

        fn remove(&mut self, key: &str) -> Result<(), StorageError> {
            Self::storage()?
                .remove_item(key)
                .map_err(|e| StorageError::Write {
                    key: key.to_owned(),
                    reason: js_reason(e),
                })
        }
    }

    /// [`QueryRouter`] over the browser location.
    ///
    /// Writes go through `history.replaceState`, which neither pushes a
    /// history entry nor scrolls nor reloads.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct HistoryRouter;

    impl QueryRouter for HistoryRouter {
        fn path(&self) -> String {
            web_sys::window()
                .and_then(|window| window.location().pathname().ok())
                .unwrap_or_else(|| "/".to_owned())
        }

        fn query_param(&self, key: &str) -> Option<String> {
            let search = web_sys::window()?.location().search().ok()?;
            QueryParams::parse(&search).get(key).map(str::to_owned)
        }

        fn replace_query_param(&mut self, key: &str, value: Option<&str>) {
            let Some(window) = web_sys::window() else {
                warn!("No window, cannot update `{}` in the URL", key);
                return;
            };
            let location = window.location();

            let mut params = QueryParams::parse(&location.search().unwrap_or_default());
            match value {
                Some(value) => params.set(key, value),
                None => params.remove(key),
            }
            let hash = location.hash().unwrap_or_default();
            let url = format!("{}{}", with_query(&self.path(), &params), hash);

            let result = window
                .history()
                .and_then(|history| history.replace_state_with_url(&JsValue::NULL, "", Some(&url)));
            if let Err(e) = result {
                warn!("Could not update the URL: {}", js_reason(e));
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub mod non_wasm32 {
    use std::fs;
    use std::io::ErrorKind;
    use std::path::PathBuf;

    use luxe_state::config::env_var;
    use luxe_state::config::ConfigError;
    use luxe_state::config::SearchConfig;
    use luxe_state::query::MemoryRouter;
    use luxe_state::storage::KeyValueStorage;
    use luxe_state::storage::StorageError;

    pub type PlatformStorage = FileStorage;
    pub type PlatformRouter = MemoryRouter;

    const APP_DIR: &str = "luxe-search";
    const START_URL: &str = "/search";

    pub fn platform_storage() -> PlatformStorage {
        FileStorage::new(dirs::data_dir().map(|dir| dir.join(APP_DIR)))
    }

    pub fn platform_router() -> PlatformRouter {
        MemoryRouter::new(START_URL)
    }

    /// Overrides come from the process environment. Malformed values are
    /// returned, not logged.
    pub fn platform_config() -> (SearchConfig, Vec<ConfigError>) {
        SearchConfig::parse(env_var)
    }

    /// [`KeyValueStorage`] keeping one `<key>.json` file per key in `dir`.
    ///
    /// With no directory (the platform has no data dir) every call fails
    /// with [`StorageError::Unavailable`].
    #[derive(Debug, Clone)]
    pub struct FileStorage {
        dir: Option<PathBuf>,
    }

    impl FileStorage {
        pub fn new(dir: Option<PathBuf>) -> Self {
            Self { dir }
        }

        fn path(&self, key: &str) -> Result<PathBuf, StorageError> {
            let dir = self
                .dir
                .as_ref()
                .ok_or_else(|| StorageError::Unavailable("no data directory".to_owned()))?;
            Ok(dir.join(format!("{key}.json")))
        }
    }

    impl KeyValueStorage for FileStorage {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            match fs::read_to_string(self.path(key)?) {
                Ok(contents) => Ok(Some(contents)),
                Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
                Err(e) => Err(StorageError::Read {
                    key: key.to_owned(),
                    reason: e.to_string(),
                }),
            }
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            let path = self.path(key)?;
            let write_error = |e: std::io::Error| StorageError::Write {
                key: key.to_owned(),
                reason: e.to_string(),
            };
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).map_err(write_error)?;
            }
            fs::write(&path, value).map_err(write_error)
        }

        fn remove(&mut self, key: &str) -> Result<(), StorageError> {
            match fs::remove_file(self.path(key)?) {
                Ok(()) => Ok(()),
                Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
                Err(e) => Err(StorageError::Write {
                    key: key.to_owned(),
                    reason: e.to_string(),
                }),
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use luxe_state::favorites::FavoritesStore;

        #[test]
        fn missing_file_reads_as_none() {
            let dir = tempfile::tempdir().unwrap();
            let storage = FileStorage::new(Some(dir.path().to_path_buf()));
            assert_eq!(storage.get("luxe-favorites"), Ok(None));
        }

        #[test]
        fn set_creates_the_directory_and_round_trips() {
            let dir = tempfile::tempdir().unwrap();
            let mut storage = FileStorage::new(Some(dir.path().join("nested")));
            storage.set("k", "[1]").unwrap();
            assert_eq!(storage.get("k"), Ok(Some("[1]".to_owned())));
            storage.remove("k").unwrap();
            storage.remove("k").unwrap();
            assert_eq!(storage.get("k"), Ok(None));
        }

        #[test]
        fn no_data_dir_is_unavailable() {
            let mut storage = FileStorage::new(None);
            assert!(matches!(storage.get("k"), Err(StorageError::Unavailable(_))));
            assert!(matches!(storage.set("k", "v"), Err(StorageError::Unavailable(_))));
        }

        #[test]
        fn favorites_persist_across_stores() {
            let dir = tempfile::tempdir().unwrap();
            let storage = FileStorage::new(Some(dir.path().to_path_buf()));

            let mut first = FavoritesStore::new(storage.clone());
            first.hydrate();
            first.toggle_favorite(1);
            first.toggle_favorite(2);

            let mut second = FavoritesStore::new(storage);
            second.hydrate();
            assert!(second.is_favorite("2"));
            assert!(!second.is_favorite(3));
        }

        #[test]
        fn unavailable_storage_still_tracks_favorites_in_memory() {
            let mut store = FavoritesStore::new(FileStorage::new(None));
            store.hydrate();
            assert!(store.is_hydrated());
            assert!(store.toggle_favorite("villa"));
            assert!(store.is_favorite("villa"));
        }
    }
}
