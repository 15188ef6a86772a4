use dioxus::prelude::*;
use luxe_state::broadcast::InteractionBroadcast;
use luxe_state::catalog::find_tag;
use luxe_state::listing::Listing;

use crate::components::favorite_button::FavoriteButton;
use crate::currency::format_price;
use crate::hooks::Broadcaster;

#[component]
pub fn ListingCard(listing: Listing, broadcaster: Broadcaster) -> Element {
    let mut broadcaster = broadcaster;
    let id = listing.id.clone();
    let emphasized = broadcaster.is_emphasized(&id);
    let is_active = broadcaster.active().as_ref() == Some(&id);

    let enter_id = id.clone();
    let leave_id = id.clone();
    let click_id = id.clone();

    rsx! {
        article {
            class: if emphasized { "listing-card emphasized" } else { "listing-card" },
            onmouseenter: move |_| broadcaster.set_hovered(Some(enter_id.clone())),
            onmouseleave: move |_| broadcaster.clear_hover_if(&leave_id),
            onclick: move |_| {
                let next = (!is_active).then(|| click_id.clone());
                broadcaster.set_active(next);
            },
            header {
                strong { "{listing.title}" }
                FavoriteButton { id: id.clone() }
            }
            p { class: "listing-price", "{format_price(listing.price)}" }
            ul {
                class: "listing-tags",
                for tag in listing.lifestyle.iter().filter_map(|tag| find_tag(tag)) {
                    li {
                        key: "{tag.id}",
                        style: "--chip-accent: {tag.accent_color};",
                        "{tag.icon.glyph()} {tag.label}"
                    }
                }
            }
        }
    }
}
