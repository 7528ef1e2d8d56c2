use crate::{
    backend::{ApiError, Endpoint, LibraryApi, intercept},
    management::{OperationLog, Session},
    types::{PlaylistAction, UserPlaylist},
    ui::{Toast, Ui},
    workflow::Outcome,
};

pub const CLEAR_FAILED_MESSAGE: &str = "Failed to clear the playlist. Please try again.";

pub struct PlaylistWorkflow<'a, A: LibraryApi, U: Ui> {
    api: &'a A,
    ui: &'a U,
    session: &'a Session,
    log: &'a OperationLog,
}

impl<'a, A: LibraryApi, U: Ui> PlaylistWorkflow<'a, A, U> {
    pub fn new(api: &'a A, ui: &'a U, session: &'a Session, log: &'a OperationLog) -> Self {
        Self {
            api,
            ui,
            session,
            log,
        }
    }

    pub async fn list(&self) -> Result<Vec<UserPlaylist>, ApiError> {
        self.ui.start_loading("Fetching playlists...");
        let result = intercept(
            Endpoint::PlaylistList,
            self.api.playlists().await,
            self.session,
            self.ui,
        );
        self.ui.stop_loading();

        if let Err(err) = &result {
            if !err.is_reported_centrally() {
                self.ui.notify(Toast::error(
                    "Playlists unavailable",
                    err.server_message().unwrap_or("Failed to load playlists."),
                ));
            }
        }
        result
    }

    /// Confirms with the user, then issues one clear request for `playlist`.
    /// A successful clear becomes the last recorded operation.
    ///
    /// Takes `&mut self`: one workflow never has two clears in flight.
    pub async fn clear(&mut self, playlist: &UserPlaylist, action: PlaylistAction) -> Outcome {
        let prompt = format!(
            "This will {} \"{}\". Continue?",
            action.describe(),
            playlist.name
        );
        if !self.ui.confirm(&prompt) {
            self.ui.notify(Toast::info("Cancelled", "The playlist was left unchanged."));
            return Outcome::Cancelled;
        }

        self.ui.start_loading("Clearing playlist...");
        let result = intercept(
            Endpoint::ClearPlaylist,
            self.api.clear_playlist(&playlist.id, action).await,
            self.session,
            self.ui,
        );
        self.ui.stop_loading();

        match result {
            Ok(response) => {
                self.log.record(&playlist.id, action);
                let message = response
                    .server_message()
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("\"{}\" has been cleared.", playlist.name));
                self.ui.notify(Toast::success("Playlist cleared", message.clone()));
                Outcome::Done(message)
            }
            Err(err) => {
                if !err.is_reported_centrally() {
                    self.ui.notify(Toast::error(
                        "Operation failed",
                        err.server_message().unwrap_or(CLEAR_FAILED_MESSAGE),
                    ));
                }
                Outcome::Failed(err)
            }
        }
    }
}
