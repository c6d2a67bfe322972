//! SoundCloud api-v2 client library.
//!
//! Wraps the private web API used by the SoundCloud web app: profile,
//! track, playlist, comment, and recommendation reads, like/repost and
//! playlist mutations, and two-step stream URL resolution.
//!
//! # Authentication
//!
//! Every call needs a bearer credential (the `oauth_token` of a logged-in
//! browser session) and the web app's 32-character client id, both supplied
//! at construction:
//!
//! ```no_run
//! use soundcloud_api::SoundcloudClient;
//!
//! let client = SoundcloudClient::new(
//!     "OAuth 2-294731-...",
//!     "abcdefghijklmnopqrstuvwxyz012345",
//! ).unwrap();
//!
//! let me = client.get_account_details().unwrap();
//! println!("{}", me.text());
//! ```
//!
//! Pass a [`Versions`] bootstrap (see [`Versions::fetch`]) to
//! [`SoundcloudClient::with_versions`] to mimic the web app's current
//! user-agent and `app_version` parameter instead of the built-in static
//! ones.
//!
//! # API endpoint mapping
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | [`SoundcloudClient::get_account_details`] | `GET /me` | Acting account profile |
//! | [`SoundcloudClient::get_user_details`] | `GET /users/{id}` | User profile |
//! | [`SoundcloudClient::get_followers`] | `GET /me/followers/ids` | Follower ids |
//! | [`SoundcloudClient::get_recommended_users`] | `GET /me/suggested/users/who_to_follow` | Who to follow |
//! | [`SoundcloudClient::get_last_track_info`] | `GET /me/play-history/tracks` | Recently played |
//! | [`SoundcloudClient::get_track_details`] | `GET /tracks?ids={id}` | Track metadata |
//! | [`SoundcloudClient::get_track_likes_users`] | `GET /tracks/{id}/likers` | Who liked a track |
//! | [`SoundcloudClient::get_tracks_liked`] | `GET /me/track_likes/ids` | Liked track ids |
//! | [`SoundcloudClient::get_comments_track`] | `GET /tracks/{id}/comments` | Track comments |
//! | [`SoundcloudClient::like_a_track`] | `PUT /users/{me}/track_likes/{id}` | Like |
//! | [`SoundcloudClient::unlike_a_track`] | `DELETE /users/{me}/track_likes/{id}` | Unlike |
//! | [`SoundcloudClient::repost_track`] | `PUT /me/track_reposts/{id}` | Repost |
//! | [`SoundcloudClient::unrepost_track`] | `DELETE /me/track_reposts/{id}` | Un-repost |
//! | [`SoundcloudClient::get_stream_url`] | (two requests) | Signed media URL |
//! | [`SoundcloudClient::get_account_playlists`] | `GET /me/library/all` | Library |
//! | [`SoundcloudClient::get_playlist_details`] | `GET /playlists/{id}` | Playlist with tracks |
//! | [`SoundcloudClient::get_playlists_liked`] | `GET /me/playlist_likes/ids` | Liked playlist ids |
//! | [`SoundcloudClient::create_playlist`] | `POST /playlists` | Create |
//! | [`SoundcloudClient::delete_playlist`] | `DELETE /playlists/{id}` | Delete |
//! | [`SoundcloudClient::get_recommended`] | `GET /tracks/{id}/related` | Related tracks |
//! | [`SoundcloudClient::get_mixed_selection`] | `GET /mixed-selections` | Curated buckets |
//!
//! # Response contract
//!
//! SoundCloud owns the response schemas; this crate does not model them.
//! Read operations return an [`ApiResponse`] (raw body plus decode-on-demand
//! accessors), `repost_track`/`unrepost_track` return the raw HTTP status
//! code, and `get_stream_url` returns the final signed URL as a `String`.
//! Non-2xx statuses surface as [`SoundcloudError::Status`] everywhere except
//! the repost pair.

pub mod client;
mod discover;
pub mod error;
mod playlist;
mod track;
pub mod types;
mod user;
pub mod version;

pub use client::SoundcloudClient;
pub use error::{Result, SoundcloudError};
pub use types::ApiResponse;
pub use version::Versions;
