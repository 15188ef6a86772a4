//! A lightweight map surface: markers projected onto a fixed panel, with
//! zoom, pan and reset controls.
//!
//! The panel plays the part of the map widget. It reports its visible extent
//! back to the map state whenever the camera changes, exactly as a tile map
//! would on `moveend`.

use dioxus::prelude::*;
use luxe_state::broadcast::InteractionBroadcast;
use luxe_state::listing::Listing;
use luxe_state::EntityId;

use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Switch;
use crate::currency::format_price;
use crate::currency::format_price_compact;
use crate::hooks::use_map_controls;
use crate::hooks::MapControls;
use crate::hooks::Broadcaster;
use crate::projection::pan;
use crate::projection::project;
use crate::projection::visible_bounds;
use crate::projection::PANEL_HEIGHT;
use crate::projection::PANEL_WIDTH;

/// Fraction of the panel one pan click moves.
const PAN_STEP: f64 = 0.25;

#[component]
pub fn MapPanel(listings: Vec<Listing>, broadcaster: Broadcaster) -> Element {
    let mut map = use_map_controls();

    let bounds = use_memo(move || visible_bounds(&map.viewport(), PANEL_WIDTH, PANEL_HEIGHT));

    // Report the extent after every camera change. Reading the viewport also
    // catches a reset to the same camera, which clears the stored bounds.
    use_effect(move || {
        let current = bounds();
        if map.viewport().bounds != Some(current) {
            map.update_bounds(current);
        }
    });

    let viewport = map.viewport();
    let highlighted = map.highlighted();
    let search_as_move = map.is_search_as_move();

    let markers = listings
        .iter()
        .filter_map(|listing| {
            project(&viewport, listing.position, PANEL_WIDTH, PANEL_HEIGHT)
                .map(|(x, y)| (listing.clone(), x, y))
        })
        .collect::<Vec<_>>();

    let popup = highlighted
        .as_ref()
        .and_then(|id| listings.iter().find(|listing| &listing.id == id))
        .cloned();

    rsx! {
        section {
            class: "map-panel",
            div {
                class: "map-surface",
                style: "width: {PANEL_WIDTH}px; height: {PANEL_HEIGHT}px;",
                onclick: move |_| map.highlight_property(None),
                for (listing, x, y) in markers {
                    Marker {
                        key: "{listing.id}",
                        id: listing.id.clone(),
                        label: format_price_compact(listing.price),
                        x,
                        y,
                        highlighted: highlighted.as_ref() == Some(&listing.id),
                        broadcaster,
                    }
                }
                if let Some(listing) = popup {
                    div {
                        class: "map-popup",
                        onclick: |evt| evt.stop_propagation(),
                        strong { "{listing.title}" }
                        br {}
                        "{format_price(listing.price)}"
                    }
                }
            }
            div {
                class: "map-controls",
                Button {
                    button_type: ButtonType::Secondary,
                    outline: true,
                    title: "Zoom in",
                    on_click: move |_| map.zoom_by(1.0),
                    "+"
                }
                Button {
                    button_type: ButtonType::Secondary,
                    outline: true,
                    title: "Zoom out",
                    disabled: viewport.zoom() <= 1.0,
                    on_click: move |_| map.zoom_by(-1.0),
                    "−"
                }
                Button {
                    button_type: ButtonType::Secondary,
                    outline: true,
                    title: "Pan west",
                    on_click: move |_| pan_map(map, -PAN_STEP, 0.0),
                    "←"
                }
                Button {
                    button_type: ButtonType::Secondary,
                    outline: true,
                    title: "Pan north",
                    on_click: move |_| pan_map(map, 0.0, -PAN_STEP),
                    "↑"
                }
                Button {
                    button_type: ButtonType::Secondary,
                    outline: true,
                    title: "Pan south",
                    on_click: move |_| pan_map(map, 0.0, PAN_STEP),
                    "↓"
                }
                Button {
                    button_type: ButtonType::Secondary,
                    outline: true,
                    title: "Pan east",
                    on_click: move |_| pan_map(map, PAN_STEP, 0.0),
                    "→"
                }
                Button {
                    button_type: ButtonType::Contrast,
                    outline: true,
                    on_click: move |_| map.reset_viewport(),
                    "Reset map"
                }
                Switch {
                    label: "Search as I move the map",
                    checked: search_as_move,
                    on_toggle: move |_| map.toggle_search_as_move(),
                }
            }
        }
    }
}

/// Moves the camera by a fraction of the panel size.
fn pan_map(mut map: MapControls, dx: f64, dy: f64) {
    let center = pan(&map.viewport(), dx * PANEL_WIDTH, dy * PANEL_HEIGHT);
    map.update_center(center, None);
}

#[component]
fn Marker(
    id: EntityId,
    label: String,
    x: f64,
    y: f64,
    highlighted: bool,
    broadcaster: Broadcaster,
) -> Element {
    let mut map = use_map_controls();
    let mut broadcaster = broadcaster;
    let emphasized = highlighted || broadcaster.is_emphasized(&id);

    let enter_id = id.clone();
    let leave_id = id.clone();

    rsx! {
        button {
            class: if emphasized { "map-marker emphasized" } else { "map-marker" },
            style: "left: {x}px; top: {y}px;",
            onmouseenter: move |_| broadcaster.set_hovered(Some(enter_id.clone())),
            onmouseleave: move |_| broadcaster.clear_hover_if(&leave_id),
            onclick: move |evt: MouseEvent| {
                evt.stop_propagation();
                map.highlight_property(Some(id.clone()));
                broadcaster.set_active(Some(id.clone()));
            },
            "{label}"
        }
    }
}
