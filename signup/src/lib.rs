//! # deep-mirror-signup
//!
//! Email capture for The Deep Mirror landing page.
//!
//! The crate owns the signup form's state machine and nothing else:
//!
//! ```text
//! Idle ──begin──▶ Loading ──resolve──▶ Success
//!                    ▲        └──────▶ Error(message)
//!                    └── begin (from Success or Error)
//! ```
//!
//! The network call sits behind [`SignupClient`], so the controller runs the
//! same way in the browser (see the `landing` crate's fetch client) and in
//! native tests with a scripted client.
//!
//! ## Quick Start
//!
//! ```rust
//! use deep_mirror_signup::{settle, SignupAttempt, SignupResponse, SignupStatus};
//!
//! let mut attempt = SignupAttempt::new();
//! attempt.set_email("a@b.com");
//!
//! let request = attempt.begin().expect("not loading yet");
//! assert_eq!(attempt.status(), &SignupStatus::Loading);
//! assert_eq!(request.email, "a@b.com");
//!
//! let response = SignupResponse::from_json(r#"{"success":true}"#);
//! attempt.resolve(settle(response));
//!
//! assert_eq!(attempt.status(), &SignupStatus::Success);
//! assert_eq!(attempt.email(), "");
//! ```
//!
//! ---
//!
//! Developed by The Deep Mirror Team (c)2026

#![warn(missing_docs)]

mod client;
mod config;
mod error;
mod state;
mod wire;

pub use client::{SignupClient, settle};
pub use config::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT, SignupConfig};
pub use error::{FALLBACK_ERROR_MESSAGE, NETWORK_ERROR_MESSAGE, SignupError, TransportError};
pub use state::{FormView, SignupAttempt, SignupStatus};
pub use wire::{SignupRequest, SignupResponse};
