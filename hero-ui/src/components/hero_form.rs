//! The hero inference form.
//!
//! Collects name, age and hero, posts them to the inference endpoint and
//! shows either the returned result or the error text.

use crate::components::{ErrorDisplay, HeroPicklist, LoadingSpinner, ResultDisplay};
use crate::state::AppState;
use dioxus::prelude::*;
use hero_core::{Field, GatewayConfig, HeroCatalog};

const INPUT_STYLE: &str = "padding: 12px 16px; font-size: 16px; border: 2px solid transparent; border-radius: 8px; outline: none; background: #fff;";
const LABEL_STYLE: &str = "color: #fff; font-size: 14px; font-weight: 600; text-transform: uppercase; letter-spacing: 0.5px; display: flex; justify-content: space-between; align-items: center;";
const GROUP_STYLE: &str = "display: flex; flex-direction: column; gap: 6px;";

#[derive(Props, Clone, PartialEq)]
pub struct HeroFormProps {
    /// Heroes offered in the picklist
    #[props(default)]
    pub catalog: HeroCatalog,
    /// Endpoint configuration for submissions
    #[props(default)]
    pub config: GatewayConfig,
}

/// Self-contained form. Each instance owns its own `AppState`.
#[component]
pub fn HeroForm(props: HeroFormProps) -> Element {
    let mut state =
        use_context_provider(|| AppState::new(props.catalog.clone(), props.config.clone()));

    let form = state.form.read().clone();
    let loading = form.is_loading();

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let (ticket, payload) = match state.form.write().begin_submission() {
            Ok(started) => started,
            Err(e) => {
                log::info!("Submission rejected: {}", e);
                return;
            }
        };
        let gateway = state.gateway.read().clone();
        spawn(async move {
            let outcome = gateway.submit(&payload).await;
            state.form.write().complete(ticket, outcome);
        });
    };

    let submit_style = if loading {
        "padding: 14px 24px; font-size: 18px; font-weight: bold; color: #fff; background: linear-gradient(135deg, #f093fb 0%, #f5576c 100%); border: none; border-radius: 8px; margin-top: 10px; opacity: 0.7; cursor: not-allowed;"
    } else {
        "padding: 14px 24px; font-size: 18px; font-weight: bold; color: #fff; background: linear-gradient(135deg, #f093fb 0%, #f5576c 100%); border: none; border-radius: 8px; margin-top: 10px; cursor: pointer; box-shadow: 0 4px 15px rgba(245, 87, 108, 0.4);"
    };
    let toggle_label = if form.show_list { "Hide Options" } else { "Show Options" };

    rsx! {
        div {
            form {
                style: "display: flex; flex-direction: column; gap: 20px; padding: 20px; background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); border-radius: 12px; box-shadow: 0 8px 32px rgba(0,0,0,0.1);",
                onsubmit: on_submit,

                div {
                    style: GROUP_STYLE,
                    label { style: LABEL_STYLE, "Your Name" }
                    input {
                        r#type: "text",
                        placeholder: "e.g., John Doe",
                        value: "{form.name}",
                        required: true,
                        style: INPUT_STYLE,
                        oninput: move |evt: FormEvent| state.form.write().set_field(Field::Name, evt.value()),
                    }
                }

                div {
                    style: GROUP_STYLE,
                    label { style: LABEL_STYLE, "Age" }
                    input {
                        r#type: "number",
                        placeholder: "e.g., 25",
                        value: "{form.age}",
                        required: true,
                        min: "1",
                        max: "120",
                        style: INPUT_STYLE,
                        oninput: move |evt: FormEvent| state.form.write().set_field(Field::Age, evt.value()),
                    }
                }

                div {
                    style: GROUP_STYLE,
                    label {
                        style: LABEL_STYLE,
                        "Favorite Hero"
                        button {
                            r#type: "button",
                            style: "padding: 4px 12px; font-size: 12px; background: rgba(255,255,255,0.2); color: #fff; border: 1px solid rgba(255,255,255,0.3); border-radius: 4px; cursor: pointer;",
                            onclick: move |_| state.form.write().toggle_hero_list(),
                            "{toggle_label}"
                        }
                    }
                    input {
                        r#type: "text",
                        placeholder: "Type or select from list below",
                        value: "{form.hero}",
                        required: true,
                        style: INPUT_STYLE,
                        oninput: move |evt: FormEvent| state.form.write().set_field(Field::Hero, evt.value()),
                    }
                    HeroPicklist {}
                }

                button {
                    r#type: "submit",
                    disabled: loading,
                    style: "{submit_style}",
                    if loading {
                        LoadingSpinner {}
                    } else {
                        "Get ML Prediction"
                    }
                }
            }

            if let Some(message) = form.error() {
                ErrorDisplay { message: message.to_string() }
            }

            if let Some(result) = form.result() {
                ResultDisplay { result: result.clone() }
            }
        }
    }
}
