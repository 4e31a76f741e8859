//! Client for the authoritative scoring service.
//!
//! The service computes the definitive score; this module only speaks its
//! request/response contract. Any transport, status, or decode problem is
//! one generic failure class with no structured payload.

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckError {
    /// Rejected locally, no request is sent.
    #[error("Please enter a password to check")]
    EmptyPassword,
    /// Transport failure, non-OK status, or undecodable response body.
    #[error("Error checking password. Please try again.")]
    Request(#[from] reqwest::Error),
}

#[derive(Serialize)]
struct CheckRequest<'a> {
    password: &'a str,
}

/// Authoritative check result.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CheckResponse {
    /// Score on the service's 0-10 scale, one decimal of precision.
    pub score: f64,
    pub strength_text: String,
    pub strength_color: String,
    /// Human-readable estimate, e.g. "3 hours".
    pub crack_time: String,
}

/// Client for the scoring endpoint.
#[derive(Debug, Clone)]
pub struct ScoringClient {
    http: Client,
    base_url: String,
}

impl ScoringClient {
    /// Creates a client for the service at `base_url` (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Creates a client reusing an existing `reqwest::Client`.
    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Submits the password for authoritative scoring.
    ///
    /// The password is trimmed first; if nothing remains, the check is
    /// rejected locally and no request goes out. No retry, no dedup of
    /// overlapping calls: the UI's disabled button is the only guard.
    pub async fn check(&self, password: &SecretString) -> Result<CheckResponse, CheckError> {
        let trimmed = password.expose_secret().trim();
        if trimmed.is_empty() {
            return Err(CheckError::EmptyPassword);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!("submitting password for authoritative check");

        let response = self
            .http
            .post(format!("{}/check_password", self.base_url))
            .json(&CheckRequest { password: trimmed })
            .send()
            .await?
            .error_for_status()?
            .json::<CheckResponse>()
            .await?;

        Ok(response)
    }
}
