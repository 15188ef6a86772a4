use dioxus::prelude::*;
use luxe_state::filters::FilterChip;

use crate::hooks::use_filters;

/// The lifestyle filter bar. Catalog tags toggle; ids from the URL that are
/// not in the catalog show as selected but cannot be clicked.
#[component]
pub fn FilterChips() -> Element {
    let mut filters = use_filters();
    let chips = filters.chips();
    let any_selected = chips.iter().any(|chip| chip.selected);

    rsx! {
        div {
            class: "filter-chips",
            role: "group",
            "aria-label": "Lifestyle",
            for chip in chips {
                Chip {
                    key: "{chip.id}",
                    chip: chip.clone(),
                    on_toggle: move |id: String| filters.toggle(&id),
                }
            }
            if any_selected {
                a {
                    href: "#",
                    class: "filter-reset",
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        filters.reset();
                    },
                    "Clear filters"
                }
            }
        }
    }
}

#[component]
fn Chip(chip: FilterChip, on_toggle: EventHandler<String>) -> Element {
    let class = match (chip.is_known(), chip.selected) {
        (false, _) => "chip chip-inert",
        (true, true) => "chip chip-selected",
        (true, false) => "chip",
    };
    let style = chip
        .tag
        .filter(|_| chip.selected)
        .map(|tag| format!("--chip-accent: {};", tag.accent_color))
        .unwrap_or_default();
    let glyph = chip.tag.map(|tag| tag.icon.glyph());
    let id = chip.id.clone();

    rsx! {
        button {
            class: "{class}",
            style: "{style}",
            disabled: !chip.is_known(),
            "aria-pressed": if chip.selected { "true" } else { "false" },
            onclick: move |_| on_toggle.call(id.clone()),
            if let Some(glyph) = glyph {
                span { class: "chip-icon", "{glyph}" }
            }
            "{chip.label()}"
        }
    }
}
