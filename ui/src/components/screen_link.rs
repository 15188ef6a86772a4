use dioxus::prelude::*;

use crate::Screen;

/// A link that switches the active screen instead of navigating.
///
/// Reads the `Signal<Screen>` the app shell provides.
#[component]
pub fn ScreenLink(to: Screen, children: Element) -> Element {
    let mut active_screen = use_context::<Signal<Screen>>();
    let is_current = active_screen() == to;

    rsx! {
        a {
            href: "#",
            "aria-current": if is_current { "page" } else { "false" },
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                if *active_screen.peek() != to {
                    active_screen.set(to);
                }
            },
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    thread_local! {
        static RENDERED: Cell<bool> = const { Cell::new(false) };
    }

    #[component]
    fn Marker() -> Element {
        RENDERED.with(|cell| cell.set(true));
        rsx! { "Browse properties" }
    }

    fn shell() -> Element {
        use_context_provider(|| Signal::new(Screen::Favorites));
        rsx! {
            ScreenLink {
                to: Screen::Search,
                Marker {}
            }
        }
    }

    #[test]
    fn renders_its_children_under_the_app_shell() {
        RENDERED.with(|cell| cell.set(false));
        let mut dom = VirtualDom::new(shell);
        dom.rebuild_in_place();
        assert!(RENDERED.with(|cell| cell.get()));
    }
}
