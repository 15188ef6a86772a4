use std::ops::Deref;
use std::sync::Arc;

use luxe_state::config::SearchConfig;

use crate::sample_listings::SampleListings;

/// Startup data every screen reads but none changes.
#[derive(Debug, PartialEq)]
pub struct AppStateData {
    pub config: SearchConfig,
    pub listings: SampleListings,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppState(Arc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AppState {
    pub fn new(config: SearchConfig, listings: SampleListings) -> Self {
        Self(Arc::new(AppStateData { config, listings }))
    }
}
