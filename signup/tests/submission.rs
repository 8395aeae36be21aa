//! End-to-end submissions against a scripted signup endpoint.

use std::cell::RefCell;
use std::time::Duration;

use deep_mirror_signup::{
    FormView, SignupAttempt, SignupClient, SignupRequest, SignupResponse, SignupStatus,
    TransportError,
};
use futures::executor::block_on;
use pretty_assertions::assert_eq;

/// Answers every call with the same canned body and records what it was sent.
struct ScriptedEndpoint {
    reply: Result<String, TransportError>,
    seen: RefCell<Vec<SignupRequest>>,
}

impl ScriptedEndpoint {
    fn body(json: &str) -> Self {
        Self {
            reply: Ok(json.to_owned()),
            seen: RefCell::new(Vec::new()),
        }
    }

    fn failing(err: TransportError) -> Self {
        Self {
            reply: Err(err),
            seen: RefCell::new(Vec::new()),
        }
    }

    fn calls(&self) -> usize {
        self.seen.borrow().len()
    }
}

impl SignupClient for ScriptedEndpoint {
    async fn signup(&self, request: &SignupRequest) -> Result<SignupResponse, TransportError> {
        self.seen.borrow_mut().push(request.clone());
        let body = self.reply.clone()?;
        SignupResponse::from_json(&body)
    }
}

fn submit(email: &str, endpoint: &ScriptedEndpoint) -> SignupAttempt {
    let mut attempt = SignupAttempt::new();
    attempt.set_email(email);
    assert!(block_on(attempt.submit(endpoint)));
    attempt
}

#[test]
fn accepted_signup_shows_confirmation_and_clears_input() {
    let endpoint = ScriptedEndpoint::body(r#"{"success":true}"#);
    let attempt = submit("a@b.com", &endpoint);

    assert_eq!(attempt.status(), &SignupStatus::Success);
    assert_eq!(attempt.email(), "");
    assert_eq!(
        endpoint.seen.borrow().as_slice(),
        &[SignupRequest {
            email: "a@b.com".into()
        }]
    );

    let view = attempt.view();
    assert!(view.show_confirmation);
    assert_eq!(view.input_value, "");
    assert_eq!(
        FormView::CONFIRMATION,
        "Thanks for signing up! We'll be in touch."
    );
}

#[test]
fn rejected_signup_shows_server_message() {
    let endpoint = ScriptedEndpoint::body(r#"{"success":false,"error":"X"}"#);
    let attempt = submit("a@b.com", &endpoint);

    assert_eq!(attempt.status(), &SignupStatus::Error("X".into()));
    assert_eq!(attempt.error_msg(), "X");
}

#[test]
fn rejected_signup_without_reason_uses_fallback() {
    let endpoint = ScriptedEndpoint::body(r#"{"success":false}"#);
    let attempt = submit("a@b.com", &endpoint);

    assert_eq!(attempt.error_msg(), "Something went wrong");
}

#[test]
fn network_failure_shows_generic_message() {
    let endpoint =
        ScriptedEndpoint::failing(TransportError::Request("TypeError: Failed to fetch".into()));
    let attempt = submit("a@b.com", &endpoint);

    assert!(matches!(attempt.status(), SignupStatus::Error(_)));
    assert_eq!(attempt.error_msg(), "Network error — please try again");
}

#[test]
fn non_json_body_is_treated_as_network_failure() {
    let endpoint = ScriptedEndpoint::body("<!DOCTYPE html><title>500</title>");
    let attempt = submit("a@b.com", &endpoint);

    assert_eq!(attempt.error_msg(), "Network error — please try again");
}

#[test]
fn loosely_typed_body_is_an_application_answer() {
    let cases = [
        (r#"{"success":1}"#, SignupStatus::Success),
        (r#"{"success":null}"#, SignupStatus::Error("Something went wrong".into())),
        (r#"{"success":false,"error":42}"#, SignupStatus::Error("Something went wrong".into())),
        ("[]", SignupStatus::Error("Something went wrong".into())),
    ];
    for (body, expected) in cases {
        let endpoint = ScriptedEndpoint::body(body);
        let attempt = submit("a@b.com", &endpoint);
        assert_eq!(attempt.status(), &expected, "body: {body}");
    }
}

#[test]
fn null_body_is_treated_as_network_failure() {
    let endpoint = ScriptedEndpoint::body("null");
    let attempt = submit("a@b.com", &endpoint);

    assert_eq!(attempt.error_msg(), "Network error — please try again");
}

#[test]
fn timeout_is_treated_as_network_failure() {
    let endpoint = ScriptedEndpoint::failing(TransportError::TimedOut(Duration::from_secs(15)));
    let attempt = submit("a@b.com", &endpoint);

    assert_eq!(attempt.error_msg(), "Network error — please try again");
}

#[test]
fn submit_while_loading_sends_nothing() {
    let endpoint = ScriptedEndpoint::body(r#"{"success":true}"#);
    let mut attempt = SignupAttempt::new();
    attempt.set_email("a@b.com");
    attempt.begin().unwrap();
    assert!(attempt.view().submit_disabled);

    assert!(!block_on(attempt.submit(&endpoint)));
    assert_eq!(endpoint.calls(), 0);
    assert!(attempt.status().is_loading());
}

#[test]
fn manual_retry_after_error_sends_one_more_request() {
    let failing = ScriptedEndpoint::failing(TransportError::Request("offline".into()));
    let mut attempt = submit("a@b.com", &failing);
    assert_eq!(failing.calls(), 1);

    let healthy = ScriptedEndpoint::body(r#"{"success":true}"#);
    assert!(block_on(attempt.submit(&healthy)));
    assert_eq!(healthy.calls(), 1);
    assert_eq!(failing.calls(), 1);
    assert_eq!(attempt.status(), &SignupStatus::Success);
    assert_eq!(attempt.error_msg(), "");
}
