use std::sync::Arc;

use reqwest::{
    Client, RequestBuilder, StatusCode, Url,
    cookie::{CookieStore, Jar},
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    backend::{ApiError, LibraryApi},
    types::{ApiResponse, ArtistSummary, AuthResponse, PlaylistAction, RangeQuery, UserPlaylist},
};

/// HTTP client for the backend API.
///
/// The backend keeps the session in a cookie. The jar is seeded from the
/// cookies stored by the previous run and read back with [`cookies`] so the
/// caller can persist them again.
///
/// [`cookies`]: BackendClient::cookies
#[derive(Clone)]
pub struct BackendClient {
    http: Client,
    jar: Arc<Jar>,
    base_url: Url,
}

impl BackendClient {
    pub fn new(api_url: &str, cookies: &[String]) -> Result<Self, ApiError> {
        let base_url = Url::parse(api_url.trim_end_matches('/'))
            .map_err(|e| ApiError::Decode(format!("invalid API URL {}: {}", api_url, e)))?;

        let jar = Arc::new(Jar::default());
        for cookie in cookies {
            jar.add_cookie_str(&format!("{}; Path=/", cookie), &base_url);
        }

        let http = Client::builder()
            .cookie_provider(Arc::clone(&jar))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            jar,
            base_url,
        })
    }

    /// The session cookies currently held for the backend host, as
    /// `name=value` pairs.
    pub fn cookies(&self) -> Vec<String> {
        self.jar
            .cookies(&self.base_url)
            .and_then(|header| header.to_str().map(str::to_string).ok())
            .map(|header| {
                header
                    .split("; ")
                    .filter(|pair| !pair.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Where the browser starts the OAuth handshake. Opened, never fetched.
    pub fn login_url(&self) -> String {
        self.endpoint("/auth/login")
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{base}{path}",
            base = self.base_url.as_str().trim_end_matches('/'),
            path = path
        )
    }

    fn range_params(range: &RangeQuery) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(min) = range.min {
            params.push(("min", min.to_string()));
        }
        if let Some(max) = range.max {
            params.push(("max", max.to_string()));
        }
        params
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(classify(status, &body));
        }

        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Like [`send`](Self::send) for endpoints answering with the response
    /// envelope; `success: false` becomes [`ApiError::Business`].
    async fn send_envelope(&self, request: RequestBuilder) -> Result<ApiResponse<Value>, ApiError> {
        let envelope: ApiResponse<Value> = self.send(request).await?;
        if !envelope.success {
            return Err(ApiError::Business(
                envelope.server_message().map(str::to_string),
            ));
        }
        Ok(envelope)
    }
}

/// Maps a non-2xx answer onto the error taxonomy.
pub fn classify(status: StatusCode, body: &str) -> ApiError {
    if status == StatusCode::UNAUTHORIZED {
        return ApiError::Unauthorized;
    }
    if status.is_server_error() {
        return ApiError::Server(status.as_u16());
    }

    let message = serde_json::from_str::<ApiResponse<Value>>(body)
        .ok()
        .and_then(|envelope| envelope.server_message().map(str::to_string));

    ApiError::Http {
        status: status.as_u16(),
        message,
    }
}

impl LibraryApi for BackendClient {
    async fn track_summary(&self, range: &RangeQuery) -> Result<Vec<ArtistSummary>, ApiError> {
        let request = self
            .http
            .get(self.endpoint("/track/summary"))
            .query(&Self::range_params(range));
        self.send(request).await
    }

    async fn delete_by_artist(&self, artist_id: &str) -> Result<ApiResponse<Value>, ApiError> {
        let mut url = Url::parse(&self.endpoint("/track/by-artist"))
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| ApiError::Decode("API URL cannot be a base".to_string()))?
            .push(artist_id);

        self.send_envelope(self.http.delete(url)).await
    }

    async fn delete_by_range(&self, range: &RangeQuery) -> Result<ApiResponse<Value>, ApiError> {
        let request = self
            .http
            .delete(self.endpoint("/track/by-range"))
            .query(&Self::range_params(range));
        self.send_envelope(request).await
    }

    async fn playlists(&self) -> Result<Vec<UserPlaylist>, ApiError> {
        self.send(self.http.get(self.endpoint("/playlist/list")))
            .await
    }

    async fn clear_playlist(
        &self,
        playlist_id: &str,
        action: PlaylistAction,
    ) -> Result<ApiResponse<Value>, ApiError> {
        let path = match action {
            PlaylistAction::ClearPlaylist => "/playlist/delete-tracks",
            PlaylistAction::ClearPlaylistAndLibrary => "/playlist/delete-tracks-and-library",
        };
        let request = self
            .http
            .delete(self.endpoint(path))
            .query(&[("id", playlist_id)]);
        self.send_envelope(request).await
    }

    async fn exchange_code(&self, code: &str) -> Result<AuthResponse, ApiError> {
        let request = self
            .http
            .get(self.endpoint("/auth/callback"))
            .query(&[("code", code)]);
        self.send(request).await
    }

    async fn auth_status(&self) -> Result<AuthResponse, ApiError> {
        self.send(self.http.get(self.endpoint("/auth/is-auth")))
            .await
    }

    async fn logout(&self) -> Result<AuthResponse, ApiError> {
        self.send(self.http.post(self.endpoint("/auth/logout")))
            .await
    }
}
