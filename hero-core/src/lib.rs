//! Core types for the hero inference form.
//!
//! This crate provides:
//! - `catalog`: the fixed, ordered list of selectable heroes
//! - `form`: field values, picklist visibility and the submission lifecycle
//! - `payload`: the JSON body posted to the inference endpoint
//! - `result`: the ordered key/value result returned by the endpoint
//! - `gateway`: the HTTP submission path, behind a `Transport` seam

pub mod catalog;
pub mod error;
pub mod form;
pub mod gateway;
pub mod payload;
pub mod result;

pub use catalog::HeroCatalog;
pub use error::{FormError, SubmitError};
pub use form::{Field, FormState, RequestTicket, SubmissionStatus};
pub use gateway::{GatewayConfig, ReqwestTransport, SubmissionGateway, Transport};
pub use payload::SubmissionPayload;
pub use result::{ResultValue, SubmissionResult};
