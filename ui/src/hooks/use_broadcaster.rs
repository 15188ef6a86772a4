//=============================================================================
// File: src/hooks/use_broadcaster.rs
//=============================================================================

use dioxus::prelude::*;
use luxe_state::broadcast::BroadcastState;
use luxe_state::broadcast::ContextError;
use luxe_state::broadcast::InteractionBroadcast;
use luxe_state::EntityId;

/// Hover and active listing ids shared by the list and the map.
///
/// The search screen establishes it with [`provide_broadcaster`] and passes
/// it to the list and map as a prop; nested components may also acquire it
/// with [`use_broadcaster`]. It lives as long as the search screen does, so
/// leaving the screen resets it.
#[derive(Clone, Copy, PartialEq)]
pub struct Broadcaster {
    state: Signal<BroadcastState>,
}

impl InteractionBroadcast for Broadcaster {
    fn active(&self) -> Option<EntityId> {
        self.state.read().active()
    }

    fn hovered(&self) -> Option<EntityId> {
        self.state.read().hovered()
    }

    fn set_active(&mut self, id: Option<EntityId>) {
        // Skip no-op writes; every write re-renders both views.
        if self.state.peek().active != id {
            self.state.write().set_active(id);
        }
    }

    fn set_hovered(&mut self, id: Option<EntityId>) {
        if self.state.peek().hovered != id {
            self.state.write().set_hovered(id);
        }
    }
}

/// Establishes the broadcaster for this component and its children.
pub fn provide_broadcaster() -> Broadcaster {
    let state = use_signal(BroadcastState::default);
    use_context_provider(|| Broadcaster { state })
}

/// Acquires the broadcaster, reporting a missing provider as an error.
pub fn try_use_broadcaster() -> Result<Broadcaster, ContextError> {
    try_use_context::<Broadcaster>().ok_or(ContextError::NotEstablished)
}

/// Acquires the broadcaster.
///
/// # Panics
///
/// Panics if no ancestor called [`provide_broadcaster`]. That is a wiring
/// bug, not a runtime condition to recover from.
pub fn use_broadcaster() -> Broadcaster {
    match try_use_broadcaster() {
        Ok(broadcaster) => broadcaster,
        Err(e) => panic!("{e}: render listings and map inside SearchScreen"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    thread_local! {
        static ACQUIRED: Cell<Option<bool>> = const { Cell::new(None) };
    }

    fn record_acquisition() {
        let acquired = try_use_broadcaster().is_ok();
        ACQUIRED.with(|cell| cell.set(Some(acquired)));
    }

    #[component]
    fn Consumer() -> Element {
        record_acquisition();
        rsx! {}
    }

    fn orphan() -> Element {
        rsx! {
            Consumer {}
        }
    }

    fn scoped() -> Element {
        provide_broadcaster();
        rsx! {
            Consumer {}
        }
    }

    thread_local! {
        static HOVERED: Cell<Option<bool>> = const { Cell::new(None) };
    }

    fn stale_leave() -> Element {
        let mut broadcaster = provide_broadcaster();
        use_hook(move || {
            broadcaster.set_hovered(Some(EntityId::from(1)));
            broadcaster.set_hovered(Some(EntityId::from(2)));
            broadcaster.clear_hover_if(&EntityId::from(1));
            let kept = broadcaster.hovered() == Some(EntityId::from(2));
            broadcaster.clear_hover_if(&EntityId::from(2));
            HOVERED.with(|cell| cell.set(Some(kept && broadcaster.hovered().is_none())));
        });
        rsx! {}
    }

    #[test]
    fn late_mouse_leave_keeps_the_newer_hover() {
        HOVERED.with(|cell| cell.set(None));
        let mut dom = VirtualDom::new(stale_leave);
        dom.rebuild_in_place();
        assert_eq!(HOVERED.with(|cell| cell.get()), Some(true));
    }

    fn render(app: fn() -> Element) -> Option<bool> {
        ACQUIRED.with(|cell| cell.set(None));
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        ACQUIRED.with(|cell| cell.get())
    }

    #[test]
    fn acquisition_fails_without_a_provider() {
        assert_eq!(render(orphan), Some(false));
    }

    #[test]
    fn acquisition_succeeds_under_a_provider() {
        assert_eq!(render(scoped), Some(true));
    }
}
