use std::future::Future;

use crate::error::{SignupError, TransportError};
use crate::wire::{SignupRequest, SignupResponse};

/// Anything that can deliver a [`SignupRequest`] to the signup endpoint.
///
/// Implementations send exactly one request per call. They do not retry,
/// and every failure to obtain a parsed body is a [`TransportError`].
pub trait SignupClient {
    /// Send `request` and wait for the endpoint's answer.
    fn signup(
        &self,
        request: &SignupRequest,
    ) -> impl Future<Output = Result<SignupResponse, TransportError>>;
}

/// Collapse a client result into the outcome the form state understands.
pub fn settle(response: Result<SignupResponse, TransportError>) -> Result<(), SignupError> {
    response?.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settle_maps_each_branch() {
        assert_eq!(
            settle(Ok(SignupResponse {
                success: true,
                error: None
            })),
            Ok(())
        );
        assert_eq!(
            settle(Ok(SignupResponse {
                success: false,
                error: Some("X".into())
            })),
            Err(SignupError::Application {
                message: Some("X".into())
            })
        );
        assert_eq!(
            settle(Err(TransportError::Request("offline".into()))),
            Err(SignupError::Transport(TransportError::Request(
                "offline".into()
            )))
        );
    }

    #[test]
    fn success_flag_wins_over_stray_error_text() {
        let response = SignupResponse {
            success: true,
            error: Some("ignored".into()),
        };
        assert_eq!(settle(Ok(response)), Ok(()));
    }
}
