use crate::{
    backend::{ApiError, Endpoint, LibraryApi, intercept},
    management::{LibraryStore, Session},
    types::RangeQuery,
    ui::{Toast, Ui},
    utils,
    workflow::{Outcome, Refusal},
};

pub const DELETE_FAILED_MESSAGE: &str = "Failed to delete tracks. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeletionTarget {
    Artist { id: String, name: String },
    Range(RangeQuery),
}

impl DeletionTarget {
    /// Scope phrase for prompts and messages. `None` for a range without bounds.
    pub fn describe(&self) -> Option<String> {
        match self {
            DeletionTarget::Artist { name, .. } => Some(format!("\"{}\"", name)),
            DeletionTarget::Range(range) => {
                utils::describe_range(range).map(|phrase| format!("artists with {}", phrase))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeletionState {
    Idle,
    AwaitingConfirmation(DeletionTarget),
    InFlight(DeletionTarget),
}

/// Idle → AwaitingConfirmation → InFlight → Idle.
///
/// Each confirmed deletion issues exactly one request. On success the summary
/// list is reloaded from the backend rather than patched locally.
pub struct DeletionWorkflow<'a, A: LibraryApi, U: Ui> {
    api: &'a A,
    ui: &'a U,
    session: &'a Session,
    store: &'a LibraryStore,
    reload_range: RangeQuery,
    state: DeletionState,
}

impl<'a, A: LibraryApi, U: Ui> DeletionWorkflow<'a, A, U> {
    pub fn new(api: &'a A, ui: &'a U, session: &'a Session, store: &'a LibraryStore) -> Self {
        Self {
            api,
            ui,
            session,
            store,
            reload_range: RangeQuery::default(),
            state: DeletionState::Idle,
        }
    }

    /// Range used when reloading the summary list after a deletion.
    pub fn with_reload_range(mut self, range: RangeQuery) -> Self {
        self.reload_range = range;
        self
    }

    pub fn state(&self) -> &DeletionState {
        &self.state
    }

    /// Moves to `AwaitingConfirmation` and returns the prompt to show.
    pub fn request(&mut self, target: DeletionTarget) -> Result<String, Refusal> {
        if self.state != DeletionState::Idle {
            self.ui.notify(Toast::warning(
                "Please wait",
                "A deletion is already in progress.",
            ));
            return Err(Refusal::Busy);
        }

        if let DeletionTarget::Range(range) = &target {
            if range.is_unbounded() {
                self.ui.notify(Toast::warning(
                    "No range given",
                    "Set a minimum and/or maximum track count before deleting.",
                ));
                return Err(Refusal::NoBounds);
            }
            if let Err(message) = utils::validate_range(range) {
                self.ui.notify(Toast::error("Invalid range", message.clone()));
                return Err(Refusal::InvalidRange(message));
            }
        }

        let scope = target.describe().unwrap_or_default();
        let prompt = format!("Delete all tracks of {} from your library?", scope);
        self.state = DeletionState::AwaitingConfirmation(target);
        Ok(prompt)
    }

    pub fn cancel(&mut self) -> Result<(), Refusal> {
        match self.state {
            DeletionState::AwaitingConfirmation(_) => {
                self.state = DeletionState::Idle;
                self.ui.notify(Toast::info("Cancelled", "Nothing was deleted."));
                Ok(())
            }
            _ => Err(Refusal::NothingPending),
        }
    }

    pub async fn confirm(&mut self) -> Outcome {
        let target = match &self.state {
            DeletionState::AwaitingConfirmation(target) => target.clone(),
            _ => return Outcome::Refused(Refusal::NothingPending),
        };
        self.state = DeletionState::InFlight(target.clone());

        self.ui.start_loading("Deleting tracks...");
        let result = match &target {
            DeletionTarget::Artist { id, .. } => intercept(
                Endpoint::DeleteByArtist,
                self.api.delete_by_artist(id).await,
                self.session,
                self.ui,
            ),
            DeletionTarget::Range(range) => intercept(
                Endpoint::DeleteByRange,
                self.api.delete_by_range(range).await,
                self.session,
                self.ui,
            ),
        };
        self.ui.stop_loading();

        let outcome = match result {
            Ok(response) => {
                let message = response
                    .server_message()
                    .map(str::to_string)
                    .unwrap_or_else(|| {
                        format!(
                            "Deleted tracks of {}.",
                            target.describe().unwrap_or_default()
                        )
                    });
                self.ui.notify(Toast::success("Tracks deleted", message.clone()));
                self.reload().await;
                Outcome::Done(message)
            }
            Err(err) => {
                self.report_failure(&err);
                Outcome::Failed(err)
            }
        };

        self.state = DeletionState::Idle;
        outcome
    }

    /// Request, prompt, then confirm or cancel depending on the answer.
    pub async fn run(&mut self, target: DeletionTarget) -> Outcome {
        let prompt = match self.request(target) {
            Ok(prompt) => prompt,
            Err(refusal) => return Outcome::Refused(refusal),
        };

        if self.ui.confirm(&prompt) {
            self.confirm().await
        } else {
            // cannot fail: request() just moved us to AwaitingConfirmation
            let _ = self.cancel();
            Outcome::Cancelled
        }
    }

    async fn reload(&self) {
        self.ui.start_loading("Refreshing library summary...");
        let result = intercept(
            Endpoint::TrackSummary,
            self.api.track_summary(&self.reload_range).await,
            self.session,
            self.ui,
        );
        self.ui.stop_loading();

        match result {
            Ok(artists) => {
                self.store.replace(artists);
            }
            Err(err) if !err.is_reported_centrally() => self.ui.notify(Toast::warning(
                "Refresh failed",
                format!("Could not reload the library summary: {}", err),
            )),
            Err(_) => {}
        }
    }

    fn report_failure(&self, err: &ApiError) {
        if err.is_reported_centrally() {
            return;
        }
        let message = err.server_message().unwrap_or(DELETE_FAILED_MESSAGE);
        self.ui.notify(Toast::error("Deletion failed", message));
    }
}
