//! Hero inference form web app.
//!
//! Mounts a single `HeroForm` under a page header. The form posts to the
//! default inference endpoint and renders whatever object comes back.

use dioxus::prelude::*;
use hero_core::{GatewayConfig, HeroCatalog};
use hero_ui::components::HeroForm;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("hero-form-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let catalog = HeroCatalog::builtin();
    log::info!("Hero form ready with {} catalog entries", catalog.len());

    rsx! {
        div {
            style: "max-width: 720px; margin: 0 auto; padding: 16px; font-family: system-ui, -apple-system, sans-serif;",
            style { "@keyframes spin {{ from {{ transform: rotate(0deg); }} to {{ transform: rotate(360deg); }} }}" }
            h2 {
                style: "margin: 0 0 16px 0; text-align: center; color: #333;",
                "Which hero are you?"
            }
            HeroForm {
                catalog,
                config: GatewayConfig::default(),
            }
        }
    }
}
