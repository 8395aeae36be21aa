use std::time::Duration;

use thiserror::Error;

/// Shown when the endpoint rejects a signup without saying why.
pub const FALLBACK_ERROR_MESSAGE: &str = "Something went wrong";

/// Shown for every transport failure. Raw detail only goes to the log.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error — please try again";

/// The request never produced a usable response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Sending failed or the connection dropped.
    #[error("signup request failed: {0}")]
    Request(String),
    /// A response arrived but its body was not JSON, or was JSON `null`.
    #[error("signup response body was unusable: {0}")]
    Decode(String),
    /// No response before the configured deadline.
    #[error("signup endpoint did not answer within {0:?}")]
    TimedOut(Duration),
}

/// Why a submission ended in the error state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignupError {
    /// The endpoint answered with `success: false`.
    #[error(
        "signup rejected: {}",
        .message.as_deref().filter(|m| !m.is_empty()).unwrap_or(FALLBACK_ERROR_MESSAGE)
    )]
    Application {
        /// Server-provided reason, if any.
        message: Option<String>,
    },
    /// See [`TransportError`].
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl SignupError {
    /// Text rendered under the form. Never empty.
    pub fn user_message(&self) -> String {
        match self {
            Self::Application { message } => message
                .as_deref()
                .filter(|m| !m.is_empty())
                .unwrap_or(FALLBACK_ERROR_MESSAGE)
                .to_owned(),
            Self::Transport(_) => NETWORK_ERROR_MESSAGE.to_owned(),
        }
    }
}
