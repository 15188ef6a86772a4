//! Client-side interaction state for the Luxe property search.
//!
//! Everything in this crate is renderer independent: the Dioxus layer in the
//! `ui` crate wraps these types in signals, while tests drive them directly
//! with the in-memory storage and router implementations.

pub mod broadcast;
pub mod catalog;
pub mod config;
pub mod entity_id;
pub mod favorites;
pub mod filters;
pub mod listing;
pub mod query;
pub mod storage;
pub mod viewport;

pub use entity_id::EntityId;
