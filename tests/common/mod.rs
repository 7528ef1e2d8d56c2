#![allow(dead_code)]

use std::sync::Mutex;

use serde_json::Value;
use spolib::{
    backend::{ApiError, LibraryApi},
    types::{
        ApiResponse, ArtistSummary, AuthResponse, PlaylistAction, RangeQuery, User, UserPlaylist,
    },
    ui::{Route, Toast, ToastLevel, Ui},
};

// Helper function to create a test artist summary
pub fn artist(id: &str, name: &str, count: u64) -> ArtistSummary {
    ArtistSummary {
        id: id.to_string(),
        name: name.to_string(),
        count,
        image_url: None,
    }
}

pub fn ok_response(message: Option<&str>) -> ApiResponse<Value> {
    ApiResponse {
        success: true,
        message: message.map(str::to_string),
        data: None,
        error: None,
    }
}

pub fn auth_response(success: bool, user: Option<&str>) -> AuthResponse {
    AuthResponse {
        success,
        authenticated: None,
        message: None,
        user: user.map(|name| User {
            id: format!("{}_id", name),
            display_name: Some(name.to_string()),
            email: None,
        }),
    }
}

pub fn playlist(id: &str, name: &str) -> UserPlaylist {
    UserPlaylist {
        id: id.to_string(),
        name: name.to_string(),
        description: None,
        tracks_total: Some(12),
        owner: None,
        image_url: None,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Toast(Toast),
    Confirm(String),
    LoadingStarted(String),
    LoadingStopped,
    Navigate(Route),
}

/// Records everything a workflow shows; answers prompts with a fixed value.
pub struct RecordingUi {
    answer: bool,
    events: Mutex<Vec<UiEvent>>,
}

impl RecordingUi {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            events: Mutex::new(Vec::new()),
        }
    }

    pub fn events(&self) -> Vec<UiEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                UiEvent::Toast(t) => Some(t),
                _ => None,
            })
            .collect()
    }

    pub fn toasts_of(&self, level: ToastLevel) -> Vec<Toast> {
        self.toasts()
            .into_iter()
            .filter(|t| t.level == level)
            .collect()
    }

    pub fn navigations(&self) -> Vec<Route> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                UiEvent::Navigate(r) => Some(r),
                _ => None,
            })
            .collect()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                UiEvent::Confirm(p) => Some(p),
                _ => None,
            })
            .collect()
    }

    /// True when every started loading indicator was stopped again.
    pub fn loading_balanced(&self) -> bool {
        let events = self.events();
        let started = events
            .iter()
            .filter(|e| matches!(e, UiEvent::LoadingStarted(_)))
            .count();
        let stopped = events
            .iter()
            .filter(|e| matches!(e, UiEvent::LoadingStopped))
            .count();
        started == stopped
    }

    fn push(&self, event: UiEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl Ui for RecordingUi {
    fn notify(&self, toast: Toast) {
        self.push(UiEvent::Toast(toast));
    }

    fn confirm(&self, prompt: &str) -> bool {
        self.push(UiEvent::Confirm(prompt.to_string()));
        self.answer
    }

    fn start_loading(&self, message: &str) {
        self.push(UiEvent::LoadingStarted(message.to_string()));
    }

    fn stop_loading(&self) {
        self.push(UiEvent::LoadingStopped);
    }

    fn navigate(&self, route: Route) {
        self.push(UiEvent::Navigate(route));
    }
}

/// In-memory backend. Every call is logged; answers are set per endpoint.
pub struct FakeApi {
    pub calls: Mutex<Vec<String>>,
    pub summary: Mutex<Result<Vec<ArtistSummary>, ApiError>>,
    pub delete: Mutex<Result<ApiResponse<Value>, ApiError>>,
    pub playlists: Mutex<Result<Vec<UserPlaylist>, ApiError>>,
    pub clear: Mutex<Result<ApiResponse<Value>, ApiError>>,
    pub exchange: Mutex<Result<AuthResponse, ApiError>>,
    pub status: Mutex<Result<AuthResponse, ApiError>>,
    pub logout: Mutex<Result<AuthResponse, ApiError>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            summary: Mutex::new(Ok(Vec::new())),
            delete: Mutex::new(Ok(ok_response(None))),
            playlists: Mutex::new(Ok(Vec::new())),
            clear: Mutex::new(Ok(ok_response(None))),
            exchange: Mutex::new(Ok(auth_response(true, None))),
            status: Mutex::new(Ok(auth_response(true, None))),
            logout: Mutex::new(Ok(auth_response(true, None))),
        }
    }

    pub fn with_summary(self, artists: Vec<ArtistSummary>) -> Self {
        *self.summary.lock().unwrap() = Ok(artists);
        self
    }

    pub fn with_delete(self, result: Result<ApiResponse<Value>, ApiError>) -> Self {
        *self.delete.lock().unwrap() = result;
        self
    }

    pub fn with_playlists(self, playlists: Vec<UserPlaylist>) -> Self {
        *self.playlists.lock().unwrap() = Ok(playlists);
        self
    }

    pub fn with_clear(self, result: Result<ApiResponse<Value>, ApiError>) -> Self {
        *self.clear.lock().unwrap() = result;
        self
    }

    pub fn with_exchange(self, result: Result<AuthResponse, ApiError>) -> Self {
        *self.exchange.lock().unwrap() = result;
        self
    }

    pub fn with_status(self, result: Result<AuthResponse, ApiError>) -> Self {
        *self.status.lock().unwrap() = result;
        self
    }

    pub fn with_logout(self, result: Result<AuthResponse, ApiError>) -> Self {
        *self.logout.lock().unwrap() = result;
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn log(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

impl LibraryApi for FakeApi {
    async fn track_summary(&self, range: &RangeQuery) -> Result<Vec<ArtistSummary>, ApiError> {
        self.log(format!("summary {:?} {:?}", range.min, range.max));
        self.summary.lock().unwrap().clone()
    }

    async fn delete_by_artist(&self, artist_id: &str) -> Result<ApiResponse<Value>, ApiError> {
        self.log(format!("delete-artist {}", artist_id));
        self.delete.lock().unwrap().clone()
    }

    async fn delete_by_range(&self, range: &RangeQuery) -> Result<ApiResponse<Value>, ApiError> {
        self.log(format!("delete-range {:?} {:?}", range.min, range.max));
        self.delete.lock().unwrap().clone()
    }

    async fn playlists(&self) -> Result<Vec<UserPlaylist>, ApiError> {
        self.log("playlists".to_string());
        self.playlists.lock().unwrap().clone()
    }

    async fn clear_playlist(
        &self,
        playlist_id: &str,
        action: PlaylistAction,
    ) -> Result<ApiResponse<Value>, ApiError> {
        self.log(format!("clear {} {:?}", playlist_id, action));
        self.clear.lock().unwrap().clone()
    }

    async fn exchange_code(&self, code: &str) -> Result<AuthResponse, ApiError> {
        self.log(format!("exchange {}", code));
        self.exchange.lock().unwrap().clone()
    }

    async fn auth_status(&self) -> Result<AuthResponse, ApiError> {
        self.log("status".to_string());
        self.status.lock().unwrap().clone()
    }

    async fn logout(&self) -> Result<AuthResponse, ApiError> {
        self.log("logout".to_string());
        self.logout.lock().unwrap().clone()
    }
}
