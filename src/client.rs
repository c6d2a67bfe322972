//! HTTP client for the SoundCloud api-v2 endpoints.
//!
//! Every operation goes through the same funnel:
//!
//! 1. Compose `https://api-v2.soundcloud.com{path}`
//! 2. Append `client_id` (always) and `app_version` (versioned endpoints,
//!    when known) to the query string
//! 3. Send with `Authorization: <credential>`, `Accept: application/json`
//!    and the client-level `User-Agent`
//! 4. Check the status: non-2xx becomes
//!    [`SoundcloudError::Status`](crate::SoundcloudError::Status), 2xx
//!    becomes an [`ApiResponse`] holding the raw body
//!
//! The one exception is the repost pair, whose documented result is the raw
//! HTTP status code of the request (see
//! [`repost_track`](SoundcloudClient::repost_track)).

use crate::error::{Result, SoundcloudError};
use crate::types::ApiResponse;
use crate::version::Versions;
use reqwest::Method;
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde_json::Value;

const BASE_URL: &str = "https://api-v2.soundcloud.com";

/// User-agent used when no [`Versions`] bootstrap is supplied.
const STATIC_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:104.0) \
    Gecko/20100101 Firefox/104.0";

/// Blocking HTTP client for the SoundCloud api-v2 API.
///
/// Holds the bearer credential, the 32-character client id, and an optional
/// `app_version` derived from a [`Versions`] bootstrap. Immutable once built;
/// API methods are implemented in separate modules (`user`, `track`,
/// `playlist`, `discover`) as `impl SoundcloudClient` blocks.
#[derive(Debug)]
pub struct SoundcloudClient {
    http: Client,
    base_url: String,
    credential: String,
    client_id: String,
    app_version: Option<String>,
}

impl SoundcloudClient {
    /// Create a client with a fixed user-agent and no `app_version`.
    ///
    /// `credential` is the account's bearer token, sent verbatim in the
    /// `Authorization` header. `client_id` must be exactly 32 characters.
    ///
    /// # Errors
    ///
    /// [`SoundcloudError::InvalidArgument`] if the client id length is
    /// not 32.
    pub fn new(credential: &str, client_id: &str) -> Result<Self> {
        Self::build(credential, client_id, STATIC_USER_AGENT.to_owned(), None)
    }

    /// Create a client whose user-agent and `app_version` come from a
    /// [`Versions`] bootstrap (see [`Versions::fetch`]).
    pub fn with_versions(
        credential: &str,
        client_id: &str,
        versions: &Versions,
    ) -> Result<Self> {
        Self::build(
            credential,
            client_id,
            versions.user_agent(),
            Some(versions.app.clone()),
        )
    }

    /// Point the client at a different API host.
    ///
    /// Mainly useful for tests running against a local mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn build(
        credential: &str,
        client_id: &str,
        user_agent: String,
        app_version: Option<String>,
    ) -> Result<Self> {
        let len = client_id.chars().count();
        if len != 32 {
            return Err(SoundcloudError::InvalidArgument(format!(
                "client id must be 32 characters, got {len}"
            )));
        }
        let http = Client::builder()
            .user_agent(user_agent)
            .timeout(std::time::Duration::from_secs(30))
            .build()?;
        Ok(Self {
            http,
            base_url: BASE_URL.to_owned(),
            credential: credential.to_owned(),
            client_id: client_id.to_owned(),
            app_version,
        })
    }

    /// The configured 32-character client id.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// The `app_version` sent on versioned endpoints, if configured.
    pub fn app_version(&self) -> Option<&str> {
        self.app_version.as_deref()
    }

    /// Bare HTTP handle for requests outside the authenticated funnel
    /// (the second, credential-free leg of stream URL resolution).
    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    /// Build an authenticated request to `path`.
    ///
    /// `client_id` is always appended; `app_version` only when `versioned`
    /// and the client knows one.
    fn request(
        &self,
        method: Method,
        path: &str,
        extra: &[(&str, String)],
        versioned: bool,
    ) -> RequestBuilder {
        let mut query: Vec<(&str, &str)> = vec![("client_id", &self.client_id)];
        for (k, v) in extra {
            query.push((*k, v.as_str()));
        }
        if versioned {
            if let Some(app) = &self.app_version {
                query.push(("app_version", app.as_str()));
            }
        }
        self.http
            .request(method, format!("{}{}", self.base_url, path))
            .query(&query)
            .header(AUTHORIZATION, &self.credential)
            .header(ACCEPT, "application/json")
    }

    /// Send a built request, mapping non-2xx statuses to
    /// [`SoundcloudError::Status`].
    fn send(&self, req: RequestBuilder) -> Result<ApiResponse> {
        let resp = req.send()?;
        let status = resp.status();
        let body = resp.text()?;
        if !status.is_success() {
            return Err(SoundcloudError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(ApiResponse::new(status, body))
    }

    pub(crate) fn get(&self, path: &str, extra: &[(&str, String)]) -> Result<ApiResponse> {
        self.send(self.request(Method::GET, path, extra, false))
    }

    pub(crate) fn get_versioned(
        &self,
        path: &str,
        extra: &[(&str, String)],
    ) -> Result<ApiResponse> {
        self.send(self.request(Method::GET, path, extra, true))
    }

    pub(crate) fn put_versioned(&self, path: &str) -> Result<ApiResponse> {
        self.send(self.request(Method::PUT, path, &[], true))
    }

    pub(crate) fn delete_versioned(&self, path: &str) -> Result<ApiResponse> {
        self.send(self.request(Method::DELETE, path, &[], true))
    }

    pub(crate) fn post_versioned(&self, path: &str, body: &Value) -> Result<ApiResponse> {
        self.send(self.request(Method::POST, path, &[], true).json(body))
    }

    /// Send a versioned request and return the raw HTTP status, whatever
    /// it is. Used by operations whose contract is the status code itself.
    pub(crate) fn status_versioned(&self, method: Method, path: &str) -> Result<u16> {
        let resp = self.request(method, path, &[], true).send()?;
        Ok(resp.status().as_u16())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLIENT_ID: &str = "abcdefghijklmnopqrstuvwxyz012345";

    #[test]
    fn accepts_32_char_client_id() {
        assert_eq!(CLIENT_ID.len(), 32);
        let client = SoundcloudClient::new("OAuth 2-123", CLIENT_ID).unwrap();
        assert_eq!(client.client_id(), CLIENT_ID);
        assert_eq!(client.app_version(), None);
    }

    #[test]
    fn rejects_short_and_long_client_ids() {
        let long = format!("{CLIENT_ID}6");
        for bad in ["", "abc", &CLIENT_ID[..31], long.as_str()] {
            let err = SoundcloudClient::new("OAuth 2-123", bad).unwrap_err();
            assert!(
                matches!(err, SoundcloudError::InvalidArgument(_)),
                "expected InvalidArgument for {bad:?}, got {err:?}"
            );
        }
    }

    #[test]
    fn with_versions_carries_app_version() {
        let versions = Versions {
            firefox: "130.0".into(),
            app: "1693487714".into(),
        };
        let client =
            SoundcloudClient::with_versions("OAuth 2-123", CLIENT_ID, &versions).unwrap();
        assert_eq!(client.app_version(), Some("1693487714"));
    }

    #[test]
    fn with_versions_still_validates_client_id() {
        let versions = Versions {
            firefox: "130.0".into(),
            app: "1693487714".into(),
        };
        let err =
            SoundcloudClient::with_versions("OAuth 2-123", "too-short", &versions).unwrap_err();
        assert!(matches!(err, SoundcloudError::InvalidArgument(_)));
    }
}
