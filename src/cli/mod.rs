//! # CLI Module
//!
//! This module provides the command-line interface layer for spolib. Each
//! command loads the stored preferences, builds a backend client around the
//! saved session cookies, runs one workflow and saves the preferences again.
//!
//! ## Command Categories
//!
//! ### Authentication
//!
//! - [`login`] - Opens the backend login page and completes the OAuth callback
//! - [`logout`] - Ends the backend session and clears local state
//! - [`status`] - Shows whether the backend still considers the session valid
//!
//! ### Library
//!
//! - [`dashboard`] - Totals, top artists chart and a searchable, sortable, paged table
//! - [`delete_artist`] - Deletes every track of one artist
//! - [`delete_range`] - Deletes the tracks of all artists within a track-count range
//!
//! ### Playlists
//!
//! - [`list_playlists`] - Lists the user's playlists
//! - [`clear_playlist`] - Empties a playlist, optionally removing its tracks from the library
//!
//! ### Preferences
//!
//! - [`theme`] - Shows or changes the table theme
//!
//! ## Protected Commands
//!
//! Everything except `auth login`, `auth status` and `theme` goes through the
//! route guard first. When the session cannot be confirmed the command stops
//! and points the user to `spolib auth login`.

mod auth;
mod dashboard;
mod playlist;
mod theme;
mod tracks;

pub use auth::login;
pub use auth::logout;
pub use auth::status;
pub use dashboard::DashboardOptions;
pub use dashboard::dashboard;
pub use dashboard::render_dashboard;
pub use playlist::clear_playlist;
pub use playlist::list_playlists;
pub use theme::ThemeChoice;
pub use theme::theme;
pub use tracks::delete_artist;
pub use tracks::delete_range;

use crate::{
    backend::{BackendClient, Endpoint, LibraryApi, intercept},
    config, error,
    management::{AuthState, LibraryStore, Navigation, PreferencesManager, Session},
    types::RangeQuery,
    ui::{ConsoleUi, Toast, Ui},
    warning,
    workflow::AuthWorkflow,
};

/// Everything a command needs for one run.
pub(crate) struct Context {
    pub prefs: PreferencesManager,
    pub client: BackendClient,
    pub session: Session,
    pub ui: ConsoleUi,
}

impl Context {
    pub async fn load(assume_yes: bool) -> Self {
        let prefs = PreferencesManager::load_or_default(None).await;
        let client = match BackendClient::new(&config::api_url(), &prefs.get().cookies) {
            Ok(client) => client,
            Err(e) => error!("Cannot create backend client. Err: {}", e),
        };
        let session = Session::restore(prefs.get());

        Self {
            prefs,
            client,
            session,
            ui: ConsoleUi::new(assume_yes),
        }
    }

    /// Persists the advisory auth flag and the session cookies. A session
    /// known to be dead keeps no cookies.
    pub async fn save(&mut self) {
        let authenticated = self.session.advisory_flag();
        let cookies = match self.session.state() {
            AuthState::Unauthenticated => Vec::new(),
            _ => self.client.cookies(),
        };

        self.prefs
            .set_authenticated(authenticated)
            .set_cookies(cookies);
        if let Err(e) = self.prefs.persist().await {
            warning!("Failed to save preferences. Err: {}", e);
        }
    }

    pub fn auth(&self) -> AuthWorkflow<'_, BackendClient, ConsoleUi> {
        AuthWorkflow::new(&self.client, &self.ui, &self.session)
    }

    /// Runs the route guard; `false` means the command must stop.
    pub async fn authorize(&self) -> bool {
        self.auth().ensure_authenticated().await == Navigation::Proceed
    }

    /// Loads the summary list for `range` into `store`.
    pub async fn load_summary(&self, store: &LibraryStore, range: &RangeQuery) -> bool {
        self.ui.start_loading("Fetching library summary...");
        let result = intercept(
            Endpoint::TrackSummary,
            self.client.track_summary(range).await,
            &self.session,
            &self.ui,
        );
        self.ui.stop_loading();

        match result {
            Ok(artists) => {
                store.replace(artists);
                true
            }
            Err(err) => {
                if !err.is_reported_centrally() {
                    self.ui.notify(Toast::error(
                        "Summary unavailable",
                        err.server_message()
                            .map(str::to_string)
                            .unwrap_or_else(|| err.to_string()),
                    ));
                }
                false
            }
        }
    }
}
