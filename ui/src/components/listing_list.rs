use dioxus::prelude::*;
use luxe_state::listing::Listing;

use crate::components::listing_card::ListingCard;
use crate::hooks::Broadcaster;

#[component]
pub fn ListingList(listings: Vec<Listing>, broadcaster: Broadcaster) -> Element {
    let count = match listings.len() {
        1 => "1 property".to_string(),
        n => format!("{n} properties"),
    };

    rsx! {
        section {
            class: "listing-list",
            p { class: "listing-count", "{count}" }
            for listing in listings {
                ListingCard {
                    key: "{listing.id}",
                    listing: listing.clone(),
                    broadcaster,
                }
            }
        }
    }
}
