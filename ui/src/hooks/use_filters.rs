use dioxus::prelude::*;
use luxe_state::filters::FilterChip;
use luxe_state::filters::FilterSelection;
use luxe_state::filters::FilterSync;

use crate::compat::platform_router;
use crate::compat::PlatformRouter;

/// The lifestyle filter selection, mirrored into the `lifestyle` query
/// parameter of the current URL.
#[derive(Clone, Copy, PartialEq)]
pub struct Filters {
    sync: Signal<FilterSync<PlatformRouter>>,
}

impl Filters {
    pub fn selection(&self) -> FilterSelection {
        self.sync.read().selection().clone()
    }

    pub fn chips(&self) -> Vec<FilterChip> {
        self.sync.read().selection().chips()
    }

    /// Toggles a tag. One state update, one URL write.
    pub fn toggle(&mut self, id: &str) {
        self.sync.write().toggle(id);
    }

    pub fn reset(&mut self) {
        self.sync.write().reset();
    }
}

/// Reads the initial selection from the URL and provides [`Filters`].
pub fn use_filters_provider() -> Filters {
    let sync = use_signal(|| FilterSync::mount(platform_router()));
    use_context_provider(|| Filters { sync })
}

pub fn use_filters() -> Filters {
    use_context::<Filters>()
}
