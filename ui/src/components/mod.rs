//! Shared components for the search screens.
pub mod empty_state;
pub mod favorite_button;
pub mod filter_chips;
pub mod listing_card;
pub mod listing_list;
pub mod map_panel;
pub mod pico;
pub mod screen_link;
