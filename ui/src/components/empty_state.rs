use dioxus::prelude::*;

/// Placeholder shown when a list has nothing to show.
#[component]
pub fn EmptyState(
    #[props(into)] title: String,
    #[props(default, into)] description: Option<String>,
    #[props(default)] primary_action: Option<Element>,
    #[props(default)] icon: Option<&'static str>,
) -> Element {
    rsx! {
        div {
            class: "empty-state",
            if let Some(icon) = icon {
                div { class: "empty-state-icon", "{icon}" }
            }
            h4 { "{title}" }
            if let Some(description) = description {
                p { "{description}" }
            }
            if let Some(action) = primary_action {
                div { {action} }
            }
        }
    }
}
