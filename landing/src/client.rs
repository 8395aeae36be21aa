// Browser transport for the signup form
// Developed by The Deep Mirror Team (c)2026

use std::pin::pin;

use deep_mirror_signup::{
    SignupClient, SignupConfig, SignupRequest, SignupResponse, TransportError,
};
use futures::future::{self, Either};
use gloo_net::http::Request;
use gloo_timers::future::sleep;
use tracing::debug;

/// Posts signups with `fetch`.
///
/// The body decides the outcome: an error status with a well-formed
/// `{success, error}` body is still an application answer.
#[derive(Debug, Clone)]
pub struct FetchSignupClient {
    config: SignupConfig,
}

impl FetchSignupClient {
    pub fn new(config: SignupConfig) -> Self {
        Self { config }
    }

    async fn post(&self, request: &SignupRequest) -> Result<SignupResponse, TransportError> {
        // `json` also sets `Content-Type: application/json`
        let response = Request::post(&self.config.endpoint)
            .json(request)
            .map_err(request_failed)?
            .send()
            .await
            .map_err(request_failed)?;

        if !response.ok() {
            debug!(status = response.status(), "signup endpoint returned error status");
        }
        let body = response.text().await.map_err(request_failed)?;
        SignupResponse::from_json(&body)
    }
}

impl SignupClient for FetchSignupClient {
    async fn signup(&self, request: &SignupRequest) -> Result<SignupResponse, TransportError> {
        let Some(limit) = self.config.timeout else {
            return self.post(request).await;
        };
        // losing the race drops our handle; the browser may still finish the request
        match future::select(pin!(self.post(request)), pin!(sleep(limit))).await {
            Either::Left((response, _)) => response,
            Either::Right(((), _)) => Err(TransportError::TimedOut(limit)),
        }
    }
}

fn request_failed(err: gloo_net::Error) -> TransportError {
    TransportError::Request(err.to_string())
}
