//! Web Mercator math for the map panel.
//!
//! The panel is a fixed-size surface. Everything here maps between degrees
//! and panel pixels for a given camera, using 256px tiles.

use std::f64::consts::PI;

use luxe_state::viewport::Bounds;
use luxe_state::viewport::LatLng;
use luxe_state::viewport::Viewport;

pub const PANEL_WIDTH: f64 = 640.0;
pub const PANEL_HEIGHT: f64 = 420.0;

const TILE_SIZE: f64 = 256.0;
const MAX_LATITUDE: f64 = 85.051_128_78;

fn world_size(zoom: f64) -> f64 {
    TILE_SIZE * zoom.exp2()
}

/// Degrees to world pixels at `zoom`.
fn to_world(point: LatLng, zoom: f64) -> (f64, f64) {
    let size = world_size(zoom);
    let lat = point.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
    let x = (point.lng + 180.0) / 360.0 * size;
    let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0 * size;
    (x, y)
}

/// World pixels at `zoom` to degrees. Longitude is wrapped into -180..=180.
fn from_world(x: f64, y: f64, zoom: f64) -> LatLng {
    let size = world_size(zoom);
    let lng = x / size * 360.0 - 180.0;
    let n = PI - 2.0 * PI * y / size;
    let lat = n.sinh().atan().to_degrees();
    LatLng::new(lat.clamp(-MAX_LATITUDE, MAX_LATITUDE), wrap_lng(lng))
}

fn wrap_lng(lng: f64) -> f64 {
    if (-180.0..=180.0).contains(&lng) {
        lng
    } else {
        (lng + 180.0).rem_euclid(360.0) - 180.0
    }
}

/// The extent a `width` by `height` panel shows for `viewport`.
pub fn visible_bounds(viewport: &Viewport, width: f64, height: f64) -> Bounds {
    let zoom = viewport.zoom();
    let (cx, cy) = to_world(viewport.center, zoom);
    let north_west = from_world(cx - width / 2.0, cy - height / 2.0, zoom);
    let south_east = from_world(cx + width / 2.0, cy + height / 2.0, zoom);

    // Wider than the world: every longitude is visible.
    let (west, east) = if width >= world_size(zoom) {
        (-180.0, 180.0)
    } else {
        (north_west.lng, south_east.lng)
    };

    Bounds {
        north: north_west.lat,
        south: south_east.lat,
        east,
        west,
    }
}

/// Position of `point` in panel pixels, origin top-left. `None` if the point
/// falls outside the panel.
pub fn project(viewport: &Viewport, point: LatLng, width: f64, height: f64) -> Option<(f64, f64)> {
    let zoom = viewport.zoom();
    let size = world_size(zoom);
    let (cx, cy) = to_world(viewport.center, zoom);
    let (px, py) = to_world(point, zoom);

    // Take the shortest way around the world horizontally.
    let mut dx = px - cx;
    if dx > size / 2.0 {
        dx -= size;
    } else if dx < -size / 2.0 {
        dx += size;
    }

    let x = width / 2.0 + dx;
    let y = height / 2.0 + (py - cy);
    ((0.0..=width).contains(&x) && (0.0..=height).contains(&y)).then_some((x, y))
}

/// The center after dragging the map by `dx`, `dy` panel pixels.
pub fn pan(viewport: &Viewport, dx: f64, dy: f64) -> LatLng {
    let zoom = viewport.zoom();
    let (cx, cy) = to_world(viewport.center, zoom);
    from_world(cx + dx, cy + dy, zoom)
}
