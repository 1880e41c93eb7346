//! Strava v3 API client.
//!
//! This module wraps the Strava REST API: it builds request URLs, attaches the
//! bearer token, issues one HTTP call per operation and decodes the JSON
//! response into typed records.
//!
//! # Modules
//!
//! - `models` - Typed records mirroring the upstream JSON resources
//! - `requester` - The [`StravaApi`] trait and its HTTP implementation [`StravaClient`]
//! - `transport` - Construction of the authenticated HTTP client
//!
//! # Examples
//!
//! ```no_run
//! use strava_wrapper::strava::{STRAVA_API_URL, StravaApi, StravaClient};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = StravaClient::with_token(STRAVA_API_URL, "access-token")?;
//! let athlete = client.get_athlete().await?;
//! println!("Hello {}", athlete.summary.firstname);
//! # Ok(())
//! # }
//! ```

mod models;
mod requester;
mod transport;

pub use crate::strava::models::*;
pub use crate::strava::requester::{ActivityFilter, MockStravaApi, Page, StravaApi, StravaClient};
pub use crate::strava::transport::bearer_client;

use reqwest::StatusCode;
use thiserror::Error;

/// Base URL of the Strava v3 API.
pub const STRAVA_API_URL: &str = "https://www.strava.com/api/v3";

/// Errors returned by every [`StravaApi`] operation.
///
/// None of them is retried or classified: they are surfaced to the caller as
/// soon as they happen.
#[derive(Debug, Error)]
pub enum StravaError {
    /// The request could not be sent or the response body could not be read.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// Upstream answered with a non-success status. The body is not parsed.
    #[error("unexpected status: {0}")]
    UnexpectedStatus(StatusCode),
    /// The response body is not the expected JSON.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}
