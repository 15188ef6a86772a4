use dioxus::prelude::*;
use dioxus_logger::tracing::warn;

fn main() {
    // LUXE_LOG_LEVEL and the other overrides are read from the process
    // environment on desktop.
    let (config, errors) = ui::compat::platform_config();
    dioxus_logger::init(config.log_level).expect("failed to init logger");
    for e in &errors {
        warn!("{}", e);
    }

    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}

#[component]
fn App() -> Element {
    ui::App()
}
