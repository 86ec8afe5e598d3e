//! One-shot submission from the command line.

use hero_core::{Field, FormState, HeroCatalog, SubmissionGateway, SubmissionStatus, Transport};
use log::{info, warn};

/// Submit the given fields through `gateway` and return the result rendered
/// as `key: value` lines.
///
/// Runs through the same `FormState` lifecycle as the web form, so input
/// validation and error text match.
pub async fn run_submit<T: Transport>(
    gateway: &SubmissionGateway<T>,
    name: &str,
    age: &str,
    hero: &str,
) -> anyhow::Result<String> {
    let mut form = FormState::new();
    form.set_field(Field::Name, name);
    form.set_field(Field::Age, age);
    form.set_field(Field::Hero, hero);

    if !HeroCatalog::builtin().contains(hero) {
        warn!("{} is not in the stock hero catalog", hero);
    }

    let (ticket, payload) = form.begin_submission()?;
    let outcome = gateway.submit(&payload).await;
    form.complete(ticket, outcome);

    match form.status() {
        SubmissionStatus::Success(result) => {
            info!("Received {} result entries", result.len());
            Ok(result.to_string())
        }
        SubmissionStatus::Failed(message) => anyhow::bail!("{}", message),
        SubmissionStatus::Idle | SubmissionStatus::Loading => {
            anyhow::bail!("Submission did not complete")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::run_submit;
    use hero_core::error::Result;
    use hero_core::gateway::{HttpResponse, DEFAULT_ENDPOINT};
    use hero_core::{GatewayConfig, SubmissionGateway, Transport};
    use std::cell::RefCell;

    /// Answers every request with a fixed status and body, keeping the
    /// request bodies it saw.
    struct CannedTransport {
        status: u16,
        body: &'static str,
        sent: RefCell<Vec<String>>,
    }

    impl CannedTransport {
        fn new(status: u16, body: &'static str) -> Self {
            Self {
                status,
                body,
                sent: RefCell::new(Vec::new()),
            }
        }
    }

    impl Transport for &CannedTransport {
        async fn post_json(&self, _url: &str, body: String) -> Result<HttpResponse> {
            self.sent.borrow_mut().push(body);
            Ok(HttpResponse {
                status: self.status,
                body: self.body.to_string(),
            })
        }
    }

    fn gateway(transport: &CannedTransport) -> SubmissionGateway<&CannedTransport> {
        SubmissionGateway::new(GatewayConfig::default(), transport)
    }

    #[tokio::test]
    async fn test_success_prints_result_lines() {
        let transport = CannedTransport::new(200, r#"{"prediction":"Avenger"}"#);
        let output = run_submit(&gateway(&transport), "Ada", "30", "IronMan")
            .await
            .unwrap();
        assert_eq!(output, "prediction: Avenger\n");
        assert_eq!(
            *transport.sent.borrow(),
            vec![r#"{"name":"Ada","age":30,"hero":"IronMan"}"#.to_string()]
        );
    }

    #[tokio::test]
    async fn test_server_error_fails_with_status() {
        let transport = CannedTransport::new(500, "");
        let err = run_submit(&gateway(&transport), "Ada", "30", "IronMan")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Server returned 500");
        assert_eq!(transport.sent.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_invalid_age_never_reaches_the_network() {
        let transport = CannedTransport::new(200, "{}");
        let err = run_submit(&gateway(&transport), "Ada", "thirty", "IronMan")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Age must be a whole number, got \"thirty\"");
        assert!(transport.sent.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_missing_name() {
        let transport = CannedTransport::new(200, "{}");
        let err = run_submit(&gateway(&transport), "", "30", "IronMan")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Name is required");
        assert!(transport.sent.borrow().is_empty());
    }

    #[test]
    fn test_default_gateway_endpoint() {
        let transport = CannedTransport::new(200, "{}");
        assert_eq!(gateway(&transport).endpoint(), DEFAULT_ENDPOINT);
    }
}
