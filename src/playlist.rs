//! Playlist and library APIs.
//!
//! # Endpoints
//!
//! | Method | Endpoint | Notes |
//! |--------|----------|-------|
//! | [`get_account_playlists`](crate::SoundcloudClient::get_account_playlists) | `GET /me/library/all` | |
//! | [`get_playlist_details`](crate::SoundcloudClient::get_playlist_details) | `GET /playlists/{id}` | `representation=full` |
//! | [`get_playlists_liked`](crate::SoundcloudClient::get_playlists_liked) | `GET /me/playlist_likes/ids` | versioned |
//! | [`create_playlist`](crate::SoundcloudClient::create_playlist) | `POST /playlists` | versioned, JSON body |
//! | [`delete_playlist`](crate::SoundcloudClient::delete_playlist) | `DELETE /playlists/{id}` | versioned |
//!
//! # Create body
//!
//! ```json
//! {
//!   "playlist": {
//!     "title": "Road Trip",
//!     "sharing": "public",
//!     "tracks": ["11", "22", "33"],
//!     "_resource_type": "playlist"
//!   }
//! }
//! ```
//!
//! `description` is added to the inner object only when supplied.

use crate::client::SoundcloudClient;
use crate::error::{Result, SoundcloudError};
use crate::types::ApiResponse;
use serde_json::{Value, json};

impl SoundcloudClient {
    /// Get everything in the acting account's library, playlists included
    /// (`GET /me/library/all`).
    pub fn get_account_playlists(&self) -> Result<ApiResponse> {
        self.get("/me/library/all", &[])
    }

    /// Get a playlist with its full track list
    /// (`GET /playlists/{id}?representation=full`).
    pub fn get_playlist_details(&self, playlist_id: &str) -> Result<ApiResponse> {
        self.get(
            &format!("/playlists/{playlist_id}"),
            &[("representation", "full".to_owned())],
        )
    }

    /// Get ids of playlists the acting account liked
    /// (`GET /me/playlist_likes/ids`).
    ///
    /// `limit` defaults to 50.
    pub fn get_playlists_liked(&self, limit: Option<u64>) -> Result<ApiResponse> {
        self.get_versioned(
            "/me/playlist_likes/ids",
            &[
                ("limit", limit.unwrap_or(50).to_string()),
                ("linked_partitioning", "1".to_owned()),
            ],
        )
    }

    /// Create a playlist from an ordered list of track ids
    /// (`POST /playlists`).
    ///
    /// `public` controls the `sharing` field (`false` = private, the
    /// default on the platform). `description` is optional.
    ///
    /// # Errors
    ///
    /// [`SoundcloudError::InvalidArgument`] if `track_list` is empty; the
    /// request is never sent in that case.
    pub fn create_playlist(
        &self,
        title: &str,
        track_list: &[&str],
        public: bool,
        description: Option<&str>,
    ) -> Result<ApiResponse> {
        if track_list.is_empty() {
            return Err(SoundcloudError::InvalidArgument(
                "empty track list for creating playlist".into(),
            ));
        }
        let body = playlist_body(title, track_list, public, description);
        self.post_versioned("/playlists", &body)
    }

    /// Delete a playlist by id (`DELETE /playlists/{id}`).
    pub fn delete_playlist(&self, playlist_id: &str) -> Result<ApiResponse> {
        self.delete_versioned(&format!("/playlists/{playlist_id}"))
    }
}

fn playlist_body(
    title: &str,
    track_list: &[&str],
    public: bool,
    description: Option<&str>,
) -> Value {
    let sharing = if public { "public" } else { "private" };
    let mut playlist = json!({
        "title": title,
        "sharing": sharing,
        "tracks": track_list,
        "_resource_type": "playlist",
    });
    if let Some(description) = description {
        playlist["description"] = json!(description);
    }
    json!({ "playlist": playlist })
}
