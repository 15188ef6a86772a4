use dioxus::prelude::*;
use luxe_state::EntityId;

use crate::hooks::use_favorites;

/// Heart toggle for one listing.
#[component]
pub fn FavoriteButton(id: EntityId) -> Element {
    let mut favorites = use_favorites();
    let is_favorite = favorites.is_favorite(&id);
    let (glyph, label) = if is_favorite {
        ("♥", "Remove from favorites")
    } else {
        ("♡", "Save to favorites")
    };

    rsx! {
        button {
            class: if is_favorite { "favorite-button saved" } else { "favorite-button" },
            title: label,
            "aria-label": label,
            "aria-pressed": if is_favorite { "true" } else { "false" },
            onclick: move |evt: MouseEvent| {
                // Keep the click from also selecting the card.
                evt.stop_propagation();
                favorites.toggle(id.clone());
            },
            "{glyph}"
        }
    }
}
