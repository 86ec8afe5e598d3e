//! Error display component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Displays a submission or validation error inline.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            style: "margin-top: 20px; padding: 16px; background: #FFEEEE; color: #CC3333; border-radius: 8px; border: 2px solid #FFCCCC;",
            strong { "Error: " }
            "{props.message}"
        }
    }
}
