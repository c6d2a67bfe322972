//! Response type shared by all API operations.
//!
//! SoundCloud owns the response schemas; this crate does not model them.
//! Every operation therefore hands back an [`ApiResponse`] carrying the raw
//! body, and the caller picks the representation: [`text`](ApiResponse::text)
//! for the untouched payload, [`json`](ApiResponse::json) for a dynamic
//! [`serde_json::Value`], or [`parse`](ApiResponse::parse) for a caller-owned
//! `Deserialize` type.

use crate::error::Result;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// A successful (2xx) API response: status plus the raw body, decoded on
/// demand.
///
/// Non-2xx responses never produce an `ApiResponse`; they surface as
/// [`SoundcloudError::Status`](crate::SoundcloudError::Status) instead.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: StatusCode,
    body: String,
}

impl ApiResponse {
    pub(crate) fn new(status: StatusCode, body: String) -> Self {
        Self { status, body }
    }

    /// HTTP status of the response (always 2xx).
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// The response body exactly as the server sent it.
    pub fn text(&self) -> &str {
        &self.body
    }

    /// Consume the response, returning the raw body.
    pub fn into_text(self) -> String {
        self.body
    }

    /// Decode the body as dynamic JSON.
    pub fn json(&self) -> Result<Value> {
        Ok(serde_json::from_str(&self.body)?)
    }

    /// Decode the body into a caller-supplied type.
    pub fn parse<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(&self.body)?)
    }
}
