//! What the customer is told when checkout fails.
//!
//! `Display` on these types is the user-facing sentence. Raw service errors
//! are logged, then reduced to a [`ServiceFailure`] category.

use thiserror::Error;

use super::validation::ValidationError;

/// Category of a failed service call, derived from the raw error text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceFailure {
    StillConnecting,
    Unreachable,
    TimedOut,
    Security,
    Unexpected,
}

const STILL_CONNECTING_SIGNATURES: [&str; 3] =
    ["actor not available", "actor is null", "not initialized"];
const UNREACHABLE_SIGNATURES: [&str; 4] = ["fetch", "network", "connection", "actor closed"];
const TIMED_OUT_SIGNATURES: [&str; 3] = ["timeout", "timed out", "actor dropped"];
const SECURITY_SIGNATURES: [&str; 3] = ["certificate", "ssl", "tls"];

impl ServiceFailure {
    /// First matching signature group wins; matching ignores case.
    pub fn classify(raw: &str) -> Self {
        let raw = raw.to_lowercase();
        let matches = |signatures: &[&str]| signatures.iter().any(|s| raw.contains(s));

        if matches(&STILL_CONNECTING_SIGNATURES) {
            ServiceFailure::StillConnecting
        } else if matches(&UNREACHABLE_SIGNATURES) {
            ServiceFailure::Unreachable
        } else if matches(&TIMED_OUT_SIGNATURES) {
            ServiceFailure::TimedOut
        } else if matches(&SECURITY_SIGNATURES) {
            ServiceFailure::Security
        } else {
            ServiceFailure::Unexpected
        }
    }

    pub fn user_message(self) -> &'static str {
        match self {
            ServiceFailure::StillConnecting => {
                "We are still connecting to the service. Please wait a moment and try again."
            }
            ServiceFailure::Unreachable => {
                "Unable to reach the service. Please check your internet connection and try again."
            }
            ServiceFailure::TimedOut => "The request took too long. Please try again.",
            ServiceFailure::Security => {
                "There was a security error connecting to the service. Please refresh the page."
            }
            ServiceFailure::Unexpected => "Failed to submit order. Please try again.",
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CheckoutError {
    #[error("{0}")]
    Validation(#[from] ValidationError),
    #[error("Connecting to the service. Please wait a moment...")]
    StillConnecting,
    #[error("Unable to connect to the service. Please check your internet connection and try again.")]
    ConnectionFailed,
    #[error("Your order is already being submitted. Please wait.")]
    AlreadyPending,
    #[error("{}", .0.user_message())]
    Service(ServiceFailure),
}

impl CheckoutError {
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    /// Whether offering a "try again" is worthwhile. Validation errors need
    /// the customer to change something first.
    pub fn is_retryable(&self) -> bool {
        match self {
            CheckoutError::Validation(_) | CheckoutError::AlreadyPending => false,
            CheckoutError::StillConnecting
            | CheckoutError::ConnectionFailed
            | CheckoutError::Service(_) => true,
        }
    }
}
