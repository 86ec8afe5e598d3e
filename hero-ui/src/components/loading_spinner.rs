//! Inline spinner shown inside the submit button.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct LoadingSpinnerProps {
    #[props(default = "Processing...".to_string())]
    pub label: String,
}

/// Spinning ring followed by a label.
#[component]
pub fn LoadingSpinner(props: LoadingSpinnerProps) -> Element {
    rsx! {
        span {
            style: "display: flex; align-items: center; justify-content: center; gap: 10px;",
            span {
                style: "width: 16px; height: 16px; border: 3px solid rgba(255,255,255,0.3); border-top: 3px solid #fff; border-radius: 50%; animation: spin 1s linear infinite; display: inline-block;",
            }
            "{props.label}"
        }
    }
}
