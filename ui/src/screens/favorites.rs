use dioxus::prelude::*;
use itertools::Either;
use itertools::Itertools;
use luxe_state::listing::ListingSource;

use crate::app_state::AppState;
use crate::components::empty_state::EmptyState;
use crate::components::favorite_button::FavoriteButton;
use crate::components::listing_card::ListingCard;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Card;
use crate::components::pico::Modal;
use crate::components::screen_link::ScreenLink;
use crate::hooks::provide_broadcaster;
use crate::hooks::use_favorites;
use crate::Screen;

#[component]
pub fn FavoritesScreen() -> Element {
    let app_state = use_context::<AppState>();
    let mut favorites = use_favorites();
    let broadcaster = provide_broadcaster();
    let mut confirm_clear = use_signal(|| false);

    if !favorites.is_hydrated() {
        return rsx! {
            Card {
                p { "aria-busy": "true", "Loading favorites…" }
            }
        };
    }

    if favorites.is_empty() {
        return rsx! {
            EmptyState {
                title: "No favorites yet",
                description: "Tap the heart on any property to keep it here.",
                icon: "♡",
                primary_action: rsx! {
                    ScreenLink {
                        to: Screen::Search,
                        "Browse properties"
                    }
                },
            }
        };
    }

    // Saved ids can outlive the listing they point at.
    let (found, missing): (Vec<_>, Vec<_>) =
        favorites
            .ids()
            .into_iter()
            .partition_map(|id| match app_state.listings.listing(&id) {
                Some(listing) => Either::Left(listing),
                None => Either::Right(id),
            });

    rsx! {
        div {
            class: "favorites-screen",
            header {
                h3 { "Saved properties ({favorites.len()})" }
                Button {
                    button_type: ButtonType::Contrast,
                    outline: true,
                    on_click: move |_| confirm_clear.set(true),
                    "Clear all"
                }
            }
            section {
                class: "listing-list",
                for listing in found {
                    ListingCard {
                        key: "{listing.id}",
                        listing: listing.clone(),
                        broadcaster,
                    }
                }
                for id in missing {
                    article {
                        key: "{id}",
                        class: "listing-card unavailable",
                        header {
                            span { "Listing {id} is no longer available" }
                            FavoriteButton { id: id.clone() }
                        }
                    }
                }
            }
            Modal {
                is_open: confirm_clear,
                title: "Clear favorites?",
                p { "This removes every saved property." }
                footer {
                    Button {
                        button_type: ButtonType::Secondary,
                        outline: true,
                        on_click: move |_| confirm_clear.set(false),
                        "Cancel"
                    }
                    Button {
                        on_click: move |_| {
                            favorites.clear();
                            confirm_clear.set(false);
                        },
                        "Clear"
                    }
                }
            }
        }
    }
}
