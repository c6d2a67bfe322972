//! Recommendation and discovery APIs.
//!
//! # Endpoints
//!
//! | Method | Endpoint | Notes |
//! |--------|----------|-------|
//! | [`get_recommended`](crate::SoundcloudClient::get_recommended) | `GET /tracks/{id}/related` | |
//! | [`get_mixed_selection`](crate::SoundcloudClient::get_mixed_selection) | `GET /mixed-selections` | versioned |

use crate::client::SoundcloudClient;
use crate::error::Result;
use crate::types::ApiResponse;

impl SoundcloudClient {
    /// Get tracks related to the given one (`GET /tracks/{id}/related`).
    pub fn get_recommended(&self, track_id: &str) -> Result<ApiResponse> {
        self.get(&format!("/tracks/{track_id}/related"), &[])
    }

    /// Get the home-page selection of curated playlist buckets
    /// (`GET /mixed-selections`).
    ///
    /// `limit` defaults to 5. The `variant_ids` parameter is sent empty,
    /// as the web app does.
    pub fn get_mixed_selection(&self, limit: Option<u64>) -> Result<ApiResponse> {
        self.get_versioned(
            "/mixed-selections",
            &[
                ("variant_ids", String::new()),
                ("limit", limit.unwrap_or(5).to_string()),
            ],
        )
    }
}
