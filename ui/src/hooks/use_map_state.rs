use dioxus::prelude::*;
use dioxus_logger::tracing::warn;
use luxe_state::filters::FilterSelection;
use luxe_state::listing::ListingQuery;
use luxe_state::viewport::Bounds;
use luxe_state::viewport::LatLng;
use luxe_state::viewport::MapState;
use luxe_state::viewport::Viewport;
use luxe_state::EntityId;

/// Reactive handle to the map camera and map-interaction flags.
///
/// Invalid camera input (a non-positive zoom, say) is logged and ignored;
/// the map keeps its previous state.
#[derive(Clone, Copy, PartialEq)]
pub struct MapControls {
    state: Signal<MapState>,
}

impl MapControls {
    pub fn viewport(&self) -> Viewport {
        *self.state.read().viewport()
    }

    pub fn is_search_as_move(&self) -> bool {
        self.state.read().is_search_as_move()
    }

    pub fn highlighted(&self) -> Option<EntityId> {
        self.state.read().highlighted().cloned()
    }

    pub fn search_query(&self, filters: &FilterSelection) -> ListingQuery {
        self.state.read().search_query(filters)
    }

    /// See [`MapState::refetch_bounds`].
    pub fn refetch_bounds(&self, previous: Option<&Bounds>) -> Option<Bounds> {
        self.state.read().refetch_bounds(previous)
    }

    /// Records the extent the map surface reports. Unchanged bounds are not
    /// written, so reporting from an effect cannot loop.
    pub fn update_bounds(&mut self, bounds: Bounds) {
        if self.state.peek().bounds() != Some(bounds) {
            self.state.write().update_bounds(bounds);
        }
    }

    pub fn update_center(&mut self, center: LatLng, zoom: Option<f64>) {
        if let Err(e) = self.state.write().update_center(center, zoom) {
            warn!("Ignoring camera move: {}", e);
        }
    }

    pub fn zoom_by(&mut self, delta: f64) {
        if let Err(e) = self.state.write().zoom_by(delta) {
            warn!("Ignoring zoom: {}", e);
        }
    }

    pub fn toggle_search_as_move(&mut self) {
        self.state.write().toggle_search_as_move();
    }

    pub fn reset_viewport(&mut self) {
        self.state.write().reset_viewport();
    }

    pub fn highlight_property(&mut self, id: Option<EntityId>) {
        if self.state.peek().highlighted() != id.as_ref() {
            self.state.write().highlight_property(id);
        }
    }
}

/// Creates map state starting at `home` and provides [`MapControls`].
pub fn use_map_provider(home: Viewport) -> MapControls {
    let state = use_signal(|| MapState::new(home));
    use_context_provider(|| MapControls { state })
}

pub fn use_map_controls() -> MapControls {
    use_context::<MapControls>()
}
