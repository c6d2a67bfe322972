//! Browser/app version bootstrap.
//!
//! Some SoundCloud endpoints expect an `app_version` query parameter and a
//! browser-looking `User-Agent`. Both values drift over time, so a client
//! can bootstrap them from two public version feeds:
//!
//! - `https://product-details.mozilla.org/1.0/firefox_versions.json`
//!   → `{ "LATEST_FIREFOX_VERSION": "130.0", ... }`
//! - `https://soundcloud.com/versions.json`
//!   → `{ "app": "1693487714", ... }` (sometimes a bare number)
//!
//! [`Versions::fetch`] performs those two lookups. Callers that need to stay
//! offline (or pin versions for reproducibility) can build a [`Versions`]
//! from literals instead, or skip it entirely via
//! [`SoundcloudClient::new`](crate::SoundcloudClient::new), which uses a
//! fixed user-agent and sends no `app_version`.

use crate::error::{Result, SoundcloudError};
use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::Value;

const FIREFOX_VERSIONS_URL: &str =
    "https://product-details.mozilla.org/1.0/firefox_versions.json";
const APP_VERSION_URL: &str = "https://soundcloud.com/versions.json";

/// Version pair used to derive the user-agent and `app_version` parameter.
#[derive(Debug, Clone)]
pub struct Versions {
    /// Latest Firefox release, e.g. `130.0`.
    pub firefox: String,
    /// Current SoundCloud web app version, e.g. `1693487714`.
    pub app: String,
}

#[derive(Deserialize)]
struct FirefoxVersions {
    #[serde(rename = "LATEST_FIREFOX_VERSION")]
    latest_firefox_version: String,
}

impl Versions {
    /// Look up both versions from their public feeds.
    ///
    /// Issues two plain GET requests (no credential involved). A non-2xx
    /// answer from either feed fails with
    /// [`SoundcloudError::Status`], same as the API operations.
    pub fn fetch() -> Result<Self> {
        Self::fetch_from(FIREFOX_VERSIONS_URL, APP_VERSION_URL)
    }

    /// Same as [`fetch`](Self::fetch), with explicit feed URLs
    /// (mirrors, or a local mock server in tests).
    pub fn fetch_from(firefox_url: &str, app_url: &str) -> Result<Self> {
        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()?;

        let firefox: FirefoxVersions = serde_json::from_value(fetch_json(&http, firefox_url)?)?;

        // `app` is documented as a string but has been observed as a number.
        let app_json = fetch_json(&http, app_url)?;
        let app = match &app_json["app"] {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            _ => return Err(SoundcloudError::Missing("app".into())),
        };

        Ok(Self {
            firefox: firefox.latest_firefox_version,
            app,
        })
    }

    /// Format the Firefox-style user-agent string sent with every request.
    pub(crate) fn user_agent(&self) -> String {
        format!(
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:{v}) \
             Gecko/20100101 Firefox/{v}",
            v = self.firefox
        )
    }
}

fn fetch_json(http: &Client, url: &str) -> Result<Value> {
    let resp = http.get(url).send()?;
    let status = resp.status();
    let body = resp.text()?;
    if !status.is_success() {
        return Err(SoundcloudError::Status {
            status: status.as_u16(),
            body,
        });
    }
    Ok(serde_json::from_str(&body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_reads_both_feeds() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/firefox_versions.json")
            .with_body(r#"{"LATEST_FIREFOX_VERSION":"130.0"}"#)
            .create();
        server
            .mock("GET", "/versions.json")
            .with_body(r#"{"app":1693487714}"#)
            .create();

        let versions = Versions::fetch_from(
            &format!("{}/firefox_versions.json", server.url()),
            &format!("{}/versions.json", server.url()),
        )
        .unwrap();
        assert_eq!(versions.firefox, "130.0");
        // Numeric `app` values come back as their decimal string.
        assert_eq!(versions.app, "1693487714");
    }

    #[test]
    fn fetch_maps_non_2xx_to_status() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/firefox_versions.json")
            .with_status(503)
            .with_body("upstream down")
            .create();

        let err = Versions::fetch_from(
            &format!("{}/firefox_versions.json", server.url()),
            &format!("{}/versions.json", server.url()),
        )
        .unwrap_err();
        match err {
            SoundcloudError::Status { status, body } => {
                assert_eq!(status, 503);
                assert_eq!(body, "upstream down");
            }
            other => panic!("expected Status error, got {other:?}"),
        }
    }

    #[test]
    fn user_agent_embeds_version_twice() {
        let versions = Versions {
            firefox: "130.0".into(),
            app: "1693487714".into(),
        };
        let ua = versions.user_agent();
        assert_eq!(ua.matches("130.0").count(), 2);
        assert!(ua.starts_with("Mozilla/5.0 (Windows NT 10.0"));
        assert!(ua.ends_with("Firefox/130.0"));
    }

    #[test]
    fn firefox_feed_deserializes() {
        let json = r#"{"FIREFOX_DEVEDITION":"131.0b9","LATEST_FIREFOX_VERSION":"130.0.1"}"#;
        let parsed: FirefoxVersions = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.latest_firefox_version, "130.0.1");
    }
}
