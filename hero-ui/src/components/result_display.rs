//! Renders the key/value result returned by the inference endpoint.

use dioxus::prelude::*;
use hero_core::{ResultValue, SubmissionResult};

#[derive(Props, Clone, PartialEq)]
pub struct ResultDisplayProps {
    pub result: SubmissionResult,
}

/// One row per result entry, in response order. Nested values keep their
/// pretty-printed line breaks.
#[component]
pub fn ResultDisplay(props: ResultDisplayProps) -> Element {
    rsx! {
        div {
            style: "margin-top: 20px; padding: 20px; background: linear-gradient(135deg, #a8edea 0%, #fed6e3 100%); border-radius: 12px; box-shadow: 0 8px 32px rgba(0,0,0,0.1);",
            h3 {
                style: "margin: 0 0 16px 0; color: #333; font-size: 20px; font-weight: bold;",
                "ML Inference Result"
            }
            div {
                style: "display: flex; flex-direction: column; gap: 12px;",
                for (key, value) in props.result.iter() {
                    div {
                        key: "{key}",
                        style: "display: flex; flex-direction: column; gap: 4px; padding: 12px; background: rgba(255,255,255,0.7); border-radius: 6px; border-left: 4px solid #667eea;",
                        span {
                            style: "font-size: 12px; font-weight: bold; color: #667eea; text-transform: uppercase; letter-spacing: 0.5px;",
                            "{key}:"
                        }
                        span {
                            style: value_style(value),
                            "{value}"
                        }
                    }
                }
            }
        }
    }
}

fn value_style(value: &ResultValue) -> &'static str {
    if value.is_nested() {
        "font-size: 16px; color: #333; word-break: break-word; white-space: pre-wrap; font-family: monospace;"
    } else {
        "font-size: 16px; color: #333; font-weight: 500; word-break: break-word; white-space: pre-wrap;"
    }
}
