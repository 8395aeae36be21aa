// Signup form state machine
// Developed by The Deep Mirror Team (c)2026

use tracing::{debug, info, warn};

use crate::client::{SignupClient, settle};
use crate::error::SignupError;
use crate::wire::SignupRequest;

const SUBMIT_LABEL: &str = "Get Early Access";
const SENDING_LABEL: &str = "Sending...";

/// Where the form is in its lifecycle.
///
/// The error message lives inside [`SignupStatus::Error`], so a message can
/// never exist without the error state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SignupStatus {
    /// Nothing submitted yet.
    #[default]
    Idle,
    /// One request in flight.
    Loading,
    /// The endpoint recorded the address.
    Success,
    /// The last attempt failed. Holds the non-empty text shown to the visitor.
    Error(String),
}

impl SignupStatus {
    /// True while a request is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Success => "success",
            Self::Error(_) => "error",
        }
    }
}

/// State of one rendered signup form. Discarded with the page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupAttempt {
    email: String,
    status: SignupStatus,
}

impl SignupAttempt {
    /// A fresh, idle form with an empty input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current input value.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Current lifecycle state.
    pub fn status(&self) -> &SignupStatus {
        &self.status
    }

    /// Error text, or `""` outside the error state.
    pub fn error_msg(&self) -> &str {
        match &self.status {
            SignupStatus::Error(msg) => msg,
            _ => "",
        }
    }

    /// Mirror the input control.
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    /// Start a submission.
    ///
    /// Moves to `Loading` and clears any previous error before anything is
    /// sent. Returns `None` without touching state if a request is already in
    /// flight, so a form instance never has two requests outstanding.
    pub fn begin(&mut self) -> Option<SignupRequest> {
        if self.status.is_loading() {
            debug!("signup already in flight, ignoring submit");
            return None;
        }
        debug!(from = self.status.name(), "signup submitted");
        self.status = SignupStatus::Loading;
        Some(SignupRequest {
            email: self.email.clone(),
        })
    }

    /// Apply the outcome of the request started by [`begin`](Self::begin).
    pub fn resolve(&mut self, outcome: Result<(), SignupError>) {
        if !self.status.is_loading() {
            debug!(
                status = self.status.name(),
                "dropping signup outcome with no request in flight"
            );
            return;
        }
        match outcome {
            Ok(()) => {
                info!("signup recorded");
                self.status = SignupStatus::Success;
                self.email.clear();
            }
            Err(err) => {
                warn!(error = %err, "signup failed");
                self.status = SignupStatus::Error(err.user_message());
            }
        }
    }

    /// Run a whole submission against `client`.
    ///
    /// Returns `false` when the submission was refused because one is
    /// already in flight; the client is not called in that case.
    pub async fn submit<C: SignupClient>(&mut self, client: &C) -> bool {
        let Some(request) = self.begin() else {
            return false;
        };
        let response = client.signup(&request).await;
        self.resolve(settle(response));
        true
    }

    /// What the form should display right now.
    pub fn view(&self) -> FormView {
        let loading = self.status.is_loading();
        FormView {
            show_confirmation: matches!(self.status, SignupStatus::Success),
            input_value: self.email.clone(),
            submit_disabled: loading,
            submit_label: if loading { SENDING_LABEL } else { SUBMIT_LABEL },
            error_text: match &self.status {
                SignupStatus::Error(msg) => Some(msg.clone()),
                _ => None,
            },
        }
    }
}

/// Presentation derived from a [`SignupAttempt`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    /// Replace the form with [`FormView::CONFIRMATION`].
    pub show_confirmation: bool,
    /// Value bound to the email input.
    pub input_value: String,
    /// Disable the submit button.
    pub submit_disabled: bool,
    /// Submit button caption.
    pub submit_label: &'static str,
    /// Message rendered below the form.
    pub error_text: Option<String>,
}

impl FormView {
    /// Text shown in place of the form once the address is recorded.
    pub const CONFIRMATION: &'static str = "Thanks for signing up! We'll be in touch.";
}
