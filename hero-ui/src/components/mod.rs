//! Reusable Dioxus RSX components for the hero form.

mod error_display;
mod hero_form;
mod hero_picklist;
mod loading_spinner;
mod result_display;

pub use error_display::ErrorDisplay;
pub use hero_form::HeroForm;
pub use hero_picklist::{HeroChip, HeroPicklist};
pub use loading_spinner::LoadingSpinner;
pub use result_display::ResultDisplay;
