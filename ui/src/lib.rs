// The client-side Dioxus application: lifestyle filters, map and favorites
// for the property search page.

use dioxus::prelude::*;
use dioxus_logger::tracing::error;
use dioxus_logger::tracing::warn;
use strum::EnumIter;
use strum::IntoEnumIterator;

mod app_state;
pub mod compat;
mod components;
mod currency;
pub mod hooks;
mod projection;
mod sample_listings;
mod screens;

use app_state::AppState;
use components::pico::Container;
use hooks::use_favorites;
use hooks::use_favorites_provider;
use hooks::use_filters_provider;
use hooks::use_map_provider;
use luxe_state::config::SearchConfig;
use sample_listings::SampleListings;
use screens::favorites::FavoritesScreen;
use screens::search::SearchScreen;

const PICO_CSS: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css";

/// The screens in our application, in tab order.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, EnumIter)]
enum Screen {
    #[default]
    Search,
    Favorites,
}

impl Screen {
    fn name(&self) -> &'static str {
        match self {
            Screen::Search => "Search",
            Screen::Favorites => "Favorites",
        }
    }
}

#[component]
fn Tabs(active_screen: Signal<Screen>) -> Element {
    let favorites = use_favorites();

    rsx! {
        nav {
            class: "tab-menu",
            ul {
                for screen in Screen::iter() {
                    li {
                        a {
                            href: "#",
                            class: if active_screen() == screen { "active-tab" } else { "" },
                            "aria-current": if active_screen() == screen { "page" } else { "false" },
                            onclick: move |event| {
                                event.prevent_default();
                                active_screen.set(screen);
                            },
                            "{screen.name()}"
                            // Hidden until hydrated so the first render matches the server's.
                            if screen == Screen::Favorites && favorites.is_hydrated() && !favorites.is_empty() {
                                span { class: "tab-badge", "{favorites.len()}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let responsive_css = r#"
    * { box-sizing: border-box; }

    html, body { height: 100%; margin: 0; }

    .app-main-container { padding: 10px; }

    .app-main-container header {
        padding: 0 1rem;
        --pico-nav-element-spacing-vertical: 0.5rem;
    }

    /* --- NAVIGATION TABS --- */
    .tab-menu a.active-tab {
        color: var(--pico-primary) !important;
        border-bottom: 3px solid var(--pico-primary);
        text-decoration: none;
    }
    .tab-menu a:not(.active-tab) {
        color: var(--pico-muted-color);
        border-bottom: 3px solid transparent;
    }
    .tab-badge {
        margin-left: 0.4rem;
        padding: 0 0.45rem;
        border-radius: 1rem;
        font-size: 0.75rem;
        background: var(--pico-primary-background);
        color: var(--pico-primary-inverse);
    }

    /* --- FILTER CHIPS --- */
    .filter-chips { display: flex; flex-wrap: wrap; gap: 0.5rem; align-items: center; margin-bottom: 1rem; }
    .chip {
        --chip-accent: var(--pico-primary);
        width: auto;
        margin: 0;
        padding: 0.25rem 0.8rem;
        border-radius: 2rem;
        font-size: 0.85rem;
        background: transparent;
        color: var(--pico-color);
        border: 1px solid var(--pico-muted-border-color);
    }
    .chip-selected { background: var(--chip-accent); border-color: var(--chip-accent); color: #fff; }
    .chip-inert { opacity: 0.5; border-style: dashed; cursor: not-allowed; }
    .chip-icon { margin-right: 0.35rem; }
    .filter-reset { font-size: 0.85rem; }

    /* --- RESULTS + MAP --- */
    .search-layout { display: grid; grid-template-columns: minmax(0, 1fr) auto; gap: 1rem; align-items: start; }
    @media (max-width: 1100px) { .search-layout { grid-template-columns: 1fr; } }
    .listing-list { display: flex; flex-direction: column; gap: 0.75rem; }
    .listing-count { color: var(--pico-muted-color); margin: 0; }
    .listing-card { margin: 0; cursor: pointer; border: 2px solid transparent; transition: border-color 0.15s; }
    .listing-card.emphasized { border-color: var(--pico-primary); }
    .listing-card.unavailable { cursor: default; color: var(--pico-muted-color); }
    .listing-card header { display: flex; justify-content: space-between; align-items: center; }
    .listing-price { font-weight: bold; margin: 0.5rem 0; }
    .listing-tags { display: flex; flex-wrap: wrap; gap: 0.4rem; padding: 0; margin: 0; }
    .listing-tags li { list-style: none; font-size: 0.75rem; padding: 0.1rem 0.5rem; border-radius: 1rem; border: 1px solid var(--chip-accent); }
    .favorite-button { width: auto; margin: 0; padding: 0.1rem 0.5rem; background: none; border: none; color: #e11d48; font-size: 1.3rem; }

    .map-panel { display: flex; flex-direction: column; gap: 0.5rem; }
    .map-surface {
        position: relative;
        overflow: hidden;
        border-radius: var(--pico-border-radius);
        background: linear-gradient(160deg, #cfe8f3 0%, #e7f0e1 55%, #f3ecd9 100%);
    }
    .map-marker {
        position: absolute;
        transform: translate(-50%, -100%);
        width: auto;
        margin: 0;
        padding: 0.1rem 0.45rem;
        font-size: 0.75rem;
        border-radius: 0.4rem;
        background: var(--pico-background-color);
        color: var(--pico-color);
        border: 1px solid var(--pico-muted-border-color);
    }
    .map-marker.emphasized { background: var(--pico-primary-background); color: var(--pico-primary-inverse); z-index: 2; }
    .map-popup {
        position: absolute;
        left: 0.75rem; bottom: 0.75rem;
        padding: 0.5rem 0.75rem;
        border-radius: var(--pico-border-radius);
        background: var(--pico-card-background-color);
        box-shadow: var(--pico-card-box-shadow);
        font-size: 0.85rem;
        z-index: 3;
    }
    .map-controls { display: flex; flex-wrap: wrap; gap: 0.4rem; align-items: center; }
    .map-controls button { width: auto; margin: 0; padding: 0.25rem 0.6rem; }
    .map-controls label { margin: 0 0 0 0.5rem; }

    /* --- EMPTY STATE --- */
    .empty-state {
        display: flex;
        flex-direction: column;
        align-items: center;
        padding: 2rem;
        text-align: center;
        color: var(--pico-muted-color);
        border: 2px dashed var(--pico-card-border-color);
        border-radius: var(--pico-border-radius);
    }
    .empty-state-icon { font-size: 3rem; margin-bottom: 1rem; opacity: 0.8; }
    .empty-state p { max-width: 400px; margin: 0 auto 1.5rem auto; }

    .favorites-screen > header { display: flex; justify-content: space-between; align-items: center; }
    .favorites-screen > header button { width: auto; }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: "{PICO_CSS}",
        }
        style {
            "{responsive_css}"
        }
        AppBody {}
    }
}

#[component]
fn AppBody() -> Element {
    // Launchers parse the config before the logger exists and provide it.
    let launched = try_use_context::<SearchConfig>();
    let loaded = use_hook(move || {
        let config = launched.unwrap_or_else(|| {
            let (config, errors) = compat::platform_config();
            for e in &errors {
                warn!("{}", e);
            }
            config
        });
        SampleListings::load()
            .map(|listings| AppState::new(config, listings))
            .map_err(|e| {
                error!("Could not load listings: {}", e);
                e.to_string()
            })
    });

    match loaded {
        Ok(app_state) => rsx! {
            LoadedApp {
                app_state,
            }
        },
        Err(e) => rsx! {
            p {
                "An error occurred: {e}"
            }
        },
    }
}

/// Provides every piece of search state, then renders the active screen.
#[component]
fn LoadedApp(app_state: AppState) -> Element {
    // Provide the stable, non-reactive AppState.
    use_context_provider(|| app_state.clone());

    let SearchConfig {
        default_viewport,
        favorites_key,
        ..
    } = &app_state.config;
    use_filters_provider();
    use_map_provider(*default_viewport);
    use_favorites_provider(favorites_key);

    let active_screen = use_signal(Screen::default);
    use_context_provider(|| active_screen);

    rsx! {
        div {
            class: "app-main-container",
            Container {
                header {
                    nav {
                        ul {
                            li {
                                strong { "Luxe Estates" }
                            }
                        }
                        ul {
                            li {
                                Tabs {
                                    active_screen,
                                }
                            }
                        }
                    }
                }
                div {
                    class: "content",
                    match active_screen() {
                        Screen::Search => rsx! {
                            SearchScreen {}
                        },
                        Screen::Favorites => rsx! {
                            FavoritesScreen {}
                        },
                    }
                }
            }
        }
    }
}
