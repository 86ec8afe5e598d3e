//! Form state and the submission lifecycle.
//!
//! `FormState` owns the three text fields, picklist visibility and the
//! status of the latest submission. Error and result live inside
//! `SubmissionStatus`, so at most one of them is ever present.
//!
//! Each call to `begin_submission` issues a `RequestTicket` carrying a
//! generation number. `complete` only applies an outcome whose ticket is
//! the latest one issued; completions of superseded requests are dropped.

use crate::error::{FormError, SubmitError};
use crate::payload::SubmissionPayload;
use crate::result::SubmissionResult;
use log::debug;

/// Editable text fields of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Age,
    Hero,
}

/// Identifies one submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn generation(self) -> u64 {
        self.0
    }
}

/// Lifecycle of the latest submission.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Loading,
    Success(SubmissionResult),
    Failed(String),
}

/// State of a single form instance.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormState {
    pub name: String,
    pub age: String,
    pub hero: String,
    pub show_list: bool,
    status: SubmissionStatus,
    generation: u64,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite a field with free text. No validation happens here.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Age => self.age = value,
            Field::Hero => self.hero = value,
        }
    }

    pub fn toggle_hero_list(&mut self) {
        self.show_list = !self.show_list;
    }

    /// Pick a hero from the list and close it.
    pub fn select_hero(&mut self, hero: impl Into<String>) {
        self.hero = hero.into();
        self.show_list = false;
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, SubmissionStatus::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            SubmissionStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn result(&self) -> Option<&SubmissionResult> {
        match &self.status {
            SubmissionStatus::Success(result) => Some(result),
            _ => None,
        }
    }

    /// Start a submission.
    ///
    /// Clears any previous error or result. On valid input, enters
    /// `Loading` and returns the ticket and payload for the request.
    /// Invalid input fails the attempt immediately, and any request still
    /// in flight is superseded.
    pub fn begin_submission(&mut self) -> Result<(RequestTicket, SubmissionPayload), FormError> {
        self.generation += 1;
        let ticket = RequestTicket(self.generation);
        match SubmissionPayload::from_fields(&self.name, &self.age, &self.hero) {
            Ok(payload) => {
                self.status = SubmissionStatus::Loading;
                Ok((ticket, payload))
            }
            Err(err) => {
                self.status = SubmissionStatus::Failed(err.to_string());
                Err(err)
            }
        }
    }

    /// Apply the outcome of the request identified by `ticket`.
    ///
    /// Returns `false` if a newer submission has started since, in which
    /// case the state is left untouched.
    pub fn complete(
        &mut self,
        ticket: RequestTicket,
        outcome: Result<SubmissionResult, SubmitError>,
    ) -> bool {
        if ticket.0 != self.generation {
            debug!(
                "Dropping stale completion for request {} (latest is {})",
                ticket.0, self.generation
            );
            return false;
        }
        self.status = match outcome {
            Ok(result) => SubmissionStatus::Success(result),
            Err(err) => SubmissionStatus::Failed(err.to_string()),
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormState {
        let mut form = FormState::new();
        form.set_field(Field::Name, "Ada");
        form.set_field(Field::Age, "30");
        form.set_field(Field::Hero, "IronMan");
        form
    }

    fn prediction() -> SubmissionResult {
        SubmissionResult::from_json_str(r#"{"prediction":"Avenger"}"#).unwrap()
    }

    #[test]
    fn test_initial_state_is_idle() {
        let form = FormState::new();
        assert_eq!(form.status(), &SubmissionStatus::Idle);
        assert!(!form.is_loading());
        assert!(!form.show_list);
        assert!(form.error().is_none());
        assert!(form.result().is_none());
    }

    #[test]
    fn test_toggle_and_select_hero() {
        let mut form = FormState::new();
        form.toggle_hero_list();
        assert!(form.show_list);
        form.select_hero("BlackWidow");
        assert_eq!(form.hero, "BlackWidow");
        assert!(!form.show_list);
        form.toggle_hero_list();
        form.toggle_hero_list();
        assert!(!form.show_list);
    }

    #[test]
    fn test_select_hero_overwrites_typed_text() {
        let mut form = FormState::new();
        form.set_field(Field::Hero, "Iron");
        form.toggle_hero_list();
        form.select_hero("IronMan");
        assert_eq!(form.hero, "IronMan");
    }

    #[test]
    fn test_success_lifecycle() {
        let mut form = filled();
        let (ticket, payload) = form.begin_submission().unwrap();
        assert!(form.is_loading());
        assert_eq!(payload.age, 30);

        assert!(form.complete(ticket, Ok(prediction())));
        assert!(!form.is_loading());
        assert!(form.error().is_none());
        assert_eq!(form.result(), Some(&prediction()));
    }

    #[test]
    fn test_failure_lifecycle() {
        let mut form = filled();
        let (ticket, _) = form.begin_submission().unwrap();
        assert!(form.complete(ticket, Err(SubmitError::Status(500))));
        assert!(!form.is_loading());
        assert!(form.result().is_none());
        assert!(form.error().unwrap().contains("500"));
    }

    #[test]
    fn test_resubmit_clears_previous_outcome() {
        let mut form = filled();
        let (ticket, _) = form.begin_submission().unwrap();
        form.complete(ticket, Err(SubmitError::Status(503)));

        form.begin_submission().unwrap();
        assert!(form.is_loading());
        assert!(form.error().is_none());
        assert!(form.result().is_none());
    }

    #[test]
    fn test_stale_completion_is_ignored() {
        let mut form = filled();
        let (first, _) = form.begin_submission().unwrap();
        let (second, _) = form.begin_submission().unwrap();
        assert!(second > first);

        assert!(form.complete(second, Ok(prediction())));
        assert!(!form.complete(first, Err(SubmitError::Status(500))));
        assert_eq!(form.result(), Some(&prediction()));
        assert!(form.error().is_none());
    }

    #[test]
    fn test_loading_holds_until_latest_completes() {
        let mut form = filled();
        let (first, _) = form.begin_submission().unwrap();
        let (second, _) = form.begin_submission().unwrap();

        assert!(!form.complete(first, Ok(prediction())));
        assert!(form.is_loading());
        assert!(form.complete(second, Err(SubmitError::Transport("reset".into()))));
        assert!(!form.is_loading());
        assert_eq!(form.error(), Some("reset"));
    }

    #[test]
    fn test_invalid_age_fails_without_loading() {
        let mut form = filled();
        form.set_field(Field::Age, "thirty");
        let err = form.begin_submission().unwrap_err();
        assert_eq!(err, FormError::InvalidAge("thirty".to_string()));
        assert!(!form.is_loading());
        assert!(form.error().unwrap().contains("thirty"));
    }

    #[test]
    fn test_invalid_input_supersedes_in_flight_request() {
        let mut form = filled();
        let (ticket, _) = form.begin_submission().unwrap();
        form.set_field(Field::Name, "");
        assert!(form.begin_submission().is_err());
        assert!(!form.complete(ticket, Ok(prediction())));
        assert_eq!(form.error(), Some("Name is required"));
    }
}
