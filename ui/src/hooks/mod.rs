//! Hooks providing the search state to components.
//!
//! Each `use_*_provider` hook creates the state once, at the top of the tree,
//! and provides a `Copy` handle as context. The matching `use_*` hook fetches
//! that handle further down.

pub mod use_broadcaster;
pub mod use_favorites;
pub mod use_filters;
pub mod use_map_state;

pub use use_broadcaster::*;
pub use use_favorites::*;
pub use use_filters::*;
pub use use_map_state::*;
