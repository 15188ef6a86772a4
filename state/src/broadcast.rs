//! Hover and selection state shared between the listing list and the map.
//!
//! Neither view owns the other. The search page establishes the state, hands
//! it to each renderer, and any renderer may read or replace the active and
//! hovered ids. Acquiring it where it was never established is a wiring bug
//! and fails immediately with [`ContextError::NotEstablished`].

use thiserror::Error;

use crate::EntityId;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextError {
    #[error("interaction broadcaster used outside of an established search scope")]
    NotEstablished,
}

/// The shared ids. Transient; never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BroadcastState {
    pub active: Option<EntityId>,
    pub hovered: Option<EntityId>,
}

/// Read/write access to the shared hover and active ids.
pub trait InteractionBroadcast {
    fn active(&self) -> Option<EntityId>;

    fn hovered(&self) -> Option<EntityId>;

    fn set_active(&mut self, id: Option<EntityId>);

    fn set_hovered(&mut self, id: Option<EntityId>);

    /// Whether `id` should be drawn emphasized in either view.
    fn is_emphasized(&self, id: &EntityId) -> bool {
        self.hovered().as_ref() == Some(id) || self.active().as_ref() == Some(id)
    }

    /// Clears hover only if `id` is still the hovered entity, so a late
    /// mouse-leave from one row cannot wipe the hover another row just set.
    fn clear_hover_if(&mut self, id: &EntityId) {
        if self.hovered().as_ref() == Some(id) {
            self.set_hovered(None);
        }
    }
}

impl InteractionBroadcast for BroadcastState {
    fn active(&self) -> Option<EntityId> {
        self.active.clone()
    }

    fn hovered(&self) -> Option<EntityId> {
        self.hovered.clone()
    }

    fn set_active(&mut self, id: Option<EntityId>) {
        self.active = id;
    }

    fn set_hovered(&mut self, id: Option<EntityId>) {
        self.hovered = id;
    }
}
