//! Form state managed via Dioxus context.
//!
//! `AppState` bundles the reactive signals for one form instance. It is
//! provided by `HeroForm` with `use_context_provider`; child components
//! retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use hero_core::{FormState, GatewayConfig, HeroCatalog, SubmissionGateway};

/// Shared state for a single hero form.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Field values and submission lifecycle
    pub form: Signal<FormState>,
    /// Heroes offered in the picklist
    pub catalog: Signal<HeroCatalog>,
    /// Where submissions are sent
    pub gateway: Signal<SubmissionGateway>,
}

impl AppState {
    pub fn new(catalog: HeroCatalog, config: GatewayConfig) -> Self {
        Self {
            form: Signal::new(FormState::new()),
            catalog: Signal::new(catalog),
            gateway: Signal::new(SubmissionGateway::with_config(config)),
        }
    }
}
