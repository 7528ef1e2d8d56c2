//! # Backend Module
//!
//! HTTP access to the spolib backend, which owns the user's Spotify session
//! and does the actual library work. This module only builds URLs and query
//! strings, sends the session cookie and sorts the answers into
//! [`ApiError`] variants.
//!
//! ## Endpoints
//!
//! - `GET /track/summary?min=&max=` - Artist summaries
//! - `DELETE /track/by-artist/{artistId}` - Delete every track of one artist
//! - `DELETE /track/by-range?min=&max=` - Delete tracks of artists within a count range
//! - `GET /playlist/list` - The user's playlists
//! - `DELETE /playlist/delete-tracks?id=` - Empty a playlist
//! - `DELETE /playlist/delete-tracks-and-library?id=` - Empty a playlist and remove its tracks from the library
//! - `GET /auth/login` - Browser entry point of the OAuth handshake
//! - `GET /auth/callback?code=` - Exchange the one-time code for a session
//! - `GET /auth/is-auth` - Session status
//! - `POST /auth/logout` - End the session
//!
//! ## Error Handling
//!
//! No request is retried. Transport failures, 401 and 5xx answers are
//! announced once by [`intercept`]; everything else is left to the caller.

mod client;
mod error;
mod interceptor;

pub use client::BackendClient;
pub use client::classify;
pub use error::ApiError;
pub use interceptor::CONNECTION_MESSAGE;
pub use interceptor::SERVER_ERROR_MESSAGE;
pub use interceptor::SESSION_EXPIRED_MESSAGE;
pub use interceptor::intercept;

use serde_json::Value;

use crate::types::{ApiResponse, ArtistSummary, AuthResponse, PlaylistAction, RangeQuery, UserPlaylist};

/// The calls the workflows make against the backend.
#[allow(async_fn_in_trait)]
pub trait LibraryApi {
    async fn track_summary(&self, range: &RangeQuery) -> Result<Vec<ArtistSummary>, ApiError>;

    async fn delete_by_artist(&self, artist_id: &str) -> Result<ApiResponse<Value>, ApiError>;

    async fn delete_by_range(&self, range: &RangeQuery) -> Result<ApiResponse<Value>, ApiError>;

    async fn playlists(&self) -> Result<Vec<UserPlaylist>, ApiError>;

    async fn clear_playlist(
        &self,
        playlist_id: &str,
        action: PlaylistAction,
    ) -> Result<ApiResponse<Value>, ApiError>;

    async fn exchange_code(&self, code: &str) -> Result<AuthResponse, ApiError>;

    async fn auth_status(&self) -> Result<AuthResponse, ApiError>;

    async fn logout(&self) -> Result<AuthResponse, ApiError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    TrackSummary,
    DeleteByArtist,
    DeleteByRange,
    PlaylistList,
    ClearPlaylist,
    AuthCallback,
    AuthStatus,
    Logout,
}

impl Endpoint {
    /// The status check answers 401 for a plain "not logged in"; that is
    /// not a session expiry.
    pub fn is_status_check(&self) -> bool {
        matches!(self, Endpoint::AuthStatus)
    }
}
