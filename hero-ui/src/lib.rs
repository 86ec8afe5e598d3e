//! Dioxus components for the hero inference form.
//!
//! This crate provides:
//! - `state`: reactive `AppState` holding the form, catalog and gateway
//! - `components`: the form itself plus its picklist, result and error views

pub mod components;
pub mod state;
