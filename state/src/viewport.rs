//! Map camera state and the map-side interaction flags.

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::filters::FilterSelection;
use crate::listing::ListingQuery;
use crate::EntityId;

/// Center of the default market region.
pub const DEFAULT_CENTER: LatLng = LatLng {
    lat: -34.9126,
    lng: -54.8711,
};

pub const DEFAULT_ZOOM: f64 = 11.0;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ViewportError {
    /// Zoom levels must be positive, finite numbers.
    #[error("invalid zoom level {0}")]
    InvalidZoom(f64),
}

/// A geographic coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// The visible extent of the map, as reported by the map surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl Bounds {
    /// Returns `true` if `point` lies inside, edges included. Bounds whose
    /// west edge is east of their east edge wrap the antimeridian.
    pub fn contains(&self, point: LatLng) -> bool {
        let within_lat = point.lat <= self.north && point.lat >= self.south;
        let within_lng = if self.west <= self.east {
            point.lng >= self.west && point.lng <= self.east
        } else {
            point.lng >= self.west || point.lng <= self.east
        };
        within_lat && within_lng
    }
}

/// Map camera: center, zoom and, once reported, visible bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    pub center: LatLng,
    zoom: f64,
    pub bounds: Option<Bounds>,
}

impl Viewport {
    pub fn new(center: LatLng, zoom: f64) -> Result<Self, ViewportError> {
        Ok(Self {
            center,
            zoom: validate_zoom(zoom)?,
            bounds: None,
        })
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            bounds: None,
        }
    }
}

fn validate_zoom(zoom: f64) -> Result<f64, ViewportError> {
    if zoom.is_finite() && zoom > 0.0 {
        Ok(zoom)
    } else {
        Err(ViewportError::InvalidZoom(zoom))
    }
}

/// Camera plus the map-interaction flags shared with the list.
///
/// Every operation is a synchronous state transition. Nothing here fetches
/// listings; a collaborator watches [`MapState::refetch_bounds`] or
/// [`MapState::search_query`] and decides when to search again.
#[derive(Debug, Clone, PartialEq)]
pub struct MapState {
    viewport: Viewport,
    home: Viewport,
    is_search_as_move: bool,
    highlighted: Option<EntityId>,
}

impl Default for MapState {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}

impl MapState {
    /// Creates map state starting at `home`, which is also where
    /// [`MapState::reset_viewport`] returns to.
    pub fn new(home: Viewport) -> Self {
        let home = Viewport {
            bounds: None,
            ..home
        };
        Self {
            viewport: home,
            home,
            is_search_as_move: false,
            highlighted: None,
        }
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn bounds(&self) -> Option<Bounds> {
        self.viewport.bounds
    }

    pub fn is_search_as_move(&self) -> bool {
        self.is_search_as_move
    }

    pub fn highlighted(&self) -> Option<&EntityId> {
        self.highlighted.as_ref()
    }

    /// Replaces the reported bounds; center and zoom are kept.
    pub fn update_bounds(&mut self, bounds: Bounds) {
        self.viewport.bounds = Some(bounds);
    }

    /// Moves the camera. Zoom changes only when supplied; an invalid zoom is
    /// rejected before anything is modified.
    pub fn update_center(
        &mut self,
        center: LatLng,
        zoom: Option<f64>,
    ) -> Result<(), ViewportError> {
        let zoom = zoom.map(validate_zoom).transpose()?;
        self.viewport.center = center;
        if let Some(zoom) = zoom {
            self.viewport.zoom = zoom;
        }
        Ok(())
    }

    /// Adjusts zoom by `delta`, keeping the center.
    pub fn zoom_by(&mut self, delta: f64) -> Result<(), ViewportError> {
        self.viewport.zoom = validate_zoom(self.viewport.zoom + delta)?;
        Ok(())
    }

    /// Flips "search as map moves" and returns the new value.
    pub fn toggle_search_as_move(&mut self) -> bool {
        self.is_search_as_move = !self.is_search_as_move;
        self.is_search_as_move
    }

    /// Restores the home viewport, clearing reported bounds.
    pub fn reset_viewport(&mut self) {
        self.viewport = self.home;
    }

    pub fn highlight_property(&mut self, id: Option<EntityId>) {
        self.highlighted = id;
    }

    /// The bounds to search within, if search-as-move is on and the bounds
    /// differ from `previous`.
    pub fn refetch_bounds(&self, previous: Option<&Bounds>) -> Option<Bounds> {
        if !self.is_search_as_move {
            return None;
        }
        match (self.viewport.bounds, previous) {
            (Some(current), Some(previous)) if current == *previous => None,
            (current, _) => current,
        }
    }

    /// The query the listing collaborator should run: the selected tags,
    /// limited to the visible bounds while search-as-move is on.
    pub fn search_query(&self, filters: &FilterSelection) -> ListingQuery {
        ListingQuery {
            tags: filters.ids().to_vec(),
            bounds: if self.is_search_as_move {
                self.viewport.bounds
            } else {
                None
            },
        }
    }
}
