use std::time::Duration;

/// Path the form posts to.
pub const DEFAULT_ENDPOINT: &str = "/api/signup";

/// How long a submission may stay in flight before it counts as a network error.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Where and how a [`SignupClient`](crate::SignupClient) reaches the endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupConfig {
    /// Endpoint URL, absolute or relative to the page origin.
    pub endpoint: String,
    /// `None` waits as long as the platform lets the request live.
    pub timeout: Option<Duration>,
}

impl Default for SignupConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            timeout: Some(DEFAULT_TIMEOUT),
        }
    }
}

impl SignupConfig {
    /// Post to a different endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Give up after `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Never give up on our side.
    pub fn without_timeout(mut self) -> Self {
        self.timeout = None;
        self
    }
}
