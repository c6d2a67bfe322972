//! Account and user APIs.
//!
//! # Endpoints
//!
//! | Method | Endpoint | Notes |
//! |--------|----------|-------|
//! | [`get_account_details`](crate::SoundcloudClient::get_account_details) | `GET /me` | acting account |
//! | [`get_user_details`](crate::SoundcloudClient::get_user_details) | `GET /users/{id}` | |
//! | [`get_followers`](crate::SoundcloudClient::get_followers) | `GET /me/followers/ids` | versioned |
//! | [`get_recommended_users`](crate::SoundcloudClient::get_recommended_users) | `GET /me/suggested/users/who_to_follow` | versioned |
//!
//! `/me` returns the acting account's profile, e.g.:
//!
//! ```json
//! { "id": 123456789, "username": "someone", "permalink": "someone", ... }
//! ```
//!
//! The numeric `id` is what the like/unlike operations embed in their path.

use crate::client::SoundcloudClient;
use crate::error::{Result, SoundcloudError};
use crate::types::ApiResponse;

impl SoundcloudClient {
    /// Get the acting account's profile (`GET /me`).
    pub fn get_account_details(&self) -> Result<ApiResponse> {
        self.get("/me", &[])
    }

    /// Get a user's profile by id (`GET /users/{id}`).
    pub fn get_user_details(&self, user_id: &str) -> Result<ApiResponse> {
        self.get(&format!("/users/{user_id}"), &[])
    }

    /// Get ids of accounts following the acting account
    /// (`GET /me/followers/ids`).
    ///
    /// `limit` defaults to 500.
    pub fn get_followers(&self, limit: Option<u64>) -> Result<ApiResponse> {
        self.get_versioned(
            "/me/followers/ids",
            &[
                ("linked_partitioning", "1".to_owned()),
                ("limit", limit.unwrap_or(500).to_string()),
            ],
        )
    }

    /// Get accounts suggested for the acting account to follow
    /// (`GET /me/suggested/users/who_to_follow`).
    ///
    /// `limit` defaults to 5.
    pub fn get_recommended_users(&self, limit: Option<u64>) -> Result<ApiResponse> {
        self.get_versioned(
            "/me/suggested/users/who_to_follow",
            &[
                ("view", "recommended-first".to_owned()),
                ("limit", limit.unwrap_or(5).to_string()),
                ("offset", "0".to_owned()),
                ("linked_partitioning", "1".to_owned()),
            ],
        )
    }

    /// Resolve the acting account's numeric id via a fresh `/me` lookup.
    ///
    /// Deliberately not cached: like/unlike must embed the id the API
    /// returns at call time.
    pub(crate) fn my_user_id(&self) -> Result<u64> {
        let me = self.get_account_details()?.json()?;
        me["id"]
            .as_u64()
            .ok_or_else(|| SoundcloudError::Missing("id".into()))
    }
}
