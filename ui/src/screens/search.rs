//=============================================================================
// File: src/screens/search.rs
//=============================================================================

use dioxus::prelude::*;
use dioxus_logger::tracing::debug;
use luxe_state::listing::ListingSource;
use luxe_state::viewport::Bounds;

use crate::app_state::AppState;
use crate::components::empty_state::EmptyState;
use crate::components::filter_chips::FilterChips;
use crate::components::listing_list::ListingList;
use crate::components::map_panel::MapPanel;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::hooks::provide_broadcaster;
use crate::hooks::use_filters;
use crate::hooks::use_map_controls;

/// Filter bar, results list and map, side by side.
///
/// This screen owns the interaction broadcaster: it is created when the
/// screen mounts and dropped with it, so hover and selection never outlive
/// the search page.
#[component]
pub fn SearchScreen() -> Element {
    let app_state = use_context::<AppState>();
    let mut filters = use_filters();
    let map = use_map_controls();
    let broadcaster = provide_broadcaster();

    let query = use_memo(move || map.search_query(&filters.selection()));
    let results = use_memo(move || app_state.listings.listings(&query()));

    // Bounds of the last search-as-move refetch.
    let mut searched_bounds = use_signal(|| None::<Bounds>);
    use_effect(move || {
        let previous = *searched_bounds.peek();
        if let Some(bounds) = map.refetch_bounds(previous.as_ref()) {
            debug!("Refetching listings within {:?}", bounds);
            searched_bounds.set(Some(bounds));
        }
    });

    let listings = results();
    let has_filters = !filters.selection().is_empty();

    rsx! {
        div {
            class: "search-screen",
            FilterChips {}
            div {
                class: "search-layout",
                if listings.is_empty() && has_filters {
                    EmptyState {
                        title: "No properties match",
                        description: "Try removing a lifestyle filter or moving the map.",
                        icon: "🏝",
                        primary_action: rsx! {
                            Button {
                                button_type: ButtonType::Secondary,
                                on_click: move |_| filters.reset(),
                                "Clear filters"
                            }
                        },
                    }
                } else if listings.is_empty() {
                    EmptyState {
                        title: "No properties here",
                        description: "Try moving the map or turning off search as you move.",
                        icon: "🏝",
                    }
                } else {
                    ListingList {
                        listings: listings.clone(),
                        broadcaster,
                    }
                }
                MapPanel {
                    listings: listings.clone(),
                    broadcaster,
                }
            }
        }
    }
}
