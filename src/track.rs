//! Track detail, history, social, and stream URL APIs.
//!
//! # Endpoints
//!
//! | Method | Endpoint | Notes |
//! |--------|----------|-------|
//! | [`get_last_track_info`](crate::SoundcloudClient::get_last_track_info) | `GET /me/play-history/tracks` | |
//! | [`get_track_details`](crate::SoundcloudClient::get_track_details) | `GET /tracks?ids={id}` | returns a JSON array |
//! | [`get_track_likes_users`](crate::SoundcloudClient::get_track_likes_users) | `GET /tracks/{id}/likers` | |
//! | [`get_tracks_liked`](crate::SoundcloudClient::get_tracks_liked) | `GET /me/track_likes/ids` | versioned |
//! | [`get_comments_track`](crate::SoundcloudClient::get_comments_track) | `GET /tracks/{id}/comments` | versioned |
//! | [`like_a_track`](crate::SoundcloudClient::like_a_track) | `PUT /users/{me}/track_likes/{id}` | self-lookup first |
//! | [`unlike_a_track`](crate::SoundcloudClient::unlike_a_track) | `DELETE /users/{me}/track_likes/{id}` | self-lookup first |
//! | [`repost_track`](crate::SoundcloudClient::repost_track) | `PUT /me/track_reposts/{id}` | returns status code |
//! | [`unrepost_track`](crate::SoundcloudClient::unrepost_track) | `DELETE /me/track_reposts/{id}` | returns status code |
//! | [`get_stream_url`](crate::SoundcloudClient::get_stream_url) | two requests | see below |
//!
//! # Stream URL resolution
//!
//! `/tracks?ids={id}` answers with an array of track objects:
//!
//! ```json
//! [{
//!   "id": 99,
//!   "media": { "transcodings": [{ "url": "https://api-v2.soundcloud.com/media/.../stream/hls", ... }] },
//!   "track_authorization": "eyJ0eXAi..."
//! }]
//! ```
//!
//! Redeeming `transcodings[0].url` with `client_id` and
//! `track_authorization` as query parameters (no `Authorization` header)
//! yields `{ "url": "<signed, time-limited media URL>" }`.

use crate::client::SoundcloudClient;
use crate::error::{Result, SoundcloudError};
use crate::types::ApiResponse;
use reqwest::Method;
use serde_json::Value;

impl SoundcloudClient {
    /// Get the acting account's most recently played tracks
    /// (`GET /me/play-history/tracks`).
    ///
    /// `limit` defaults to 1 (just the last track).
    pub fn get_last_track_info(&self, limit: Option<u64>) -> Result<ApiResponse> {
        self.get(
            "/me/play-history/tracks",
            &[("limit", limit.unwrap_or(1).to_string())],
        )
    }

    /// Get full track metadata (`GET /tracks?ids={id}`).
    ///
    /// The body is a JSON array even for a single id.
    pub fn get_track_details(&self, track_id: &str) -> Result<ApiResponse> {
        self.get("/tracks", &[("ids", track_id.to_owned())])
    }

    /// Get users who liked a track (`GET /tracks/{id}/likers`).
    pub fn get_track_likes_users(&self, track_id: &str) -> Result<ApiResponse> {
        self.get(&format!("/tracks/{track_id}/likers"), &[])
    }

    /// Get ids of tracks the acting account liked
    /// (`GET /me/track_likes/ids`).
    ///
    /// `limit` defaults to 50.
    pub fn get_tracks_liked(&self, limit: Option<u64>) -> Result<ApiResponse> {
        self.get_versioned(
            "/me/track_likes/ids",
            &[("limit", limit.unwrap_or(50).to_string())],
        )
    }

    /// Get comments on a track (`GET /tracks/{id}/comments`).
    ///
    /// `limit` defaults to 100. The response carries a `next_href` cursor
    /// for fetching further pages manually.
    pub fn get_comments_track(
        &self,
        track_id: &str,
        limit: Option<u64>,
    ) -> Result<ApiResponse> {
        self.get_versioned(
            &format!("/tracks/{track_id}/comments"),
            &[
                ("threaded", "0".to_owned()),
                ("filter_replies", "1".to_owned()),
                ("limit", limit.unwrap_or(100).to_string()),
                ("offset", "0".to_owned()),
                ("linked_partitioning", "1".to_owned()),
            ],
        )
    }

    /// Like a track on behalf of the acting account.
    ///
    /// Resolves the account's own id with a `/me` lookup first, then issues
    /// `PUT /users/{me}/track_likes/{track_id}`. The lookup happens on every
    /// call; a failed lookup aborts before the like request is sent.
    ///
    /// The API answers the PUT with a bare `OK` body.
    pub fn like_a_track(&self, track_id: &str) -> Result<ApiResponse> {
        let me = self.my_user_id()?;
        self.put_versioned(&format!("/users/{me}/track_likes/{track_id}"))
    }

    /// Remove a like, mirroring [`like_a_track`](Self::like_a_track)
    /// (`DELETE /users/{me}/track_likes/{track_id}`).
    pub fn unlike_a_track(&self, track_id: &str) -> Result<ApiResponse> {
        let me = self.my_user_id()?;
        self.delete_versioned(&format!("/users/{me}/track_likes/{track_id}"))
    }

    /// Repost a track (`PUT /me/track_reposts/{id}`).
    ///
    /// Returns the raw HTTP status code of the PUT; the API sends no useful
    /// body. A non-2xx status is returned as-is, not mapped to an error.
    pub fn repost_track(&self, track_id: &str) -> Result<u16> {
        self.status_versioned(Method::PUT, &format!("/me/track_reposts/{track_id}"))
    }

    /// Undo a repost (`DELETE /me/track_reposts/{id}`).
    ///
    /// Same status-code contract as [`repost_track`](Self::repost_track).
    pub fn unrepost_track(&self, track_id: &str) -> Result<u16> {
        self.status_versioned(Method::DELETE, &format!("/me/track_reposts/{track_id}"))
    }

    /// Resolve a signed, time-limited media URL for a track.
    ///
    /// Two requests: fetch the track's metadata, then redeem its first
    /// transcoding URL (always index 0, no rendition selection) together
    /// with the track's `track_authorization`. The second request is
    /// unauthenticated — the signed transcoding URL needs no credential.
    ///
    /// # Errors
    ///
    /// [`SoundcloudError::Missing`] if the track has no transcodings or no
    /// `track_authorization`; [`SoundcloudError::Json`] if either body is
    /// not the expected JSON.
    pub fn get_stream_url(&self, track_id: &str) -> Result<String> {
        let details = self.get_track_details(track_id)?.json()?;
        let track = details
            .as_array()
            .and_then(|tracks| tracks.first())
            .ok_or_else(|| SoundcloudError::Missing(format!("track not found: {track_id}")))?;

        let media_url = track["media"]["transcodings"]
            .as_array()
            .and_then(|t| t.first())
            .and_then(|t| t["url"].as_str())
            .ok_or_else(|| SoundcloudError::Missing("media.transcodings[0].url".into()))?;
        let track_auth = track["track_authorization"]
            .as_str()
            .ok_or_else(|| SoundcloudError::Missing("track_authorization".into()))?;

        let stream_url = format!(
            "{media_url}?client_id={}&track_authorization={}",
            self.client_id(),
            urlencoding::encode(track_auth),
        );
        let resp = self.http().get(&stream_url).send()?;
        let status = resp.status();
        let body = resp.text()?;
        if !status.is_success() {
            return Err(SoundcloudError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let json: Value = serde_json::from_str(&body)?;
        json["url"]
            .as_str()
            .map(ToOwned::to_owned)
            .ok_or_else(|| SoundcloudError::Missing("url".into()))
    }
}
