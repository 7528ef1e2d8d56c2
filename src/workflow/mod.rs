//! # Workflows
//!
//! User-triggered actions, each issuing at most one backend request per
//! trigger and reporting through the [`Ui`](crate::ui::Ui) seam:
//!
//! - [`DeletionWorkflow`] - delete tracks by artist or by track-count range
//! - [`PlaylistWorkflow`] - list and clear playlists
//! - [`AuthWorkflow`] - OAuth callback, status check and logout

mod auth;
mod deletion;
mod playlist;

pub use auth::{AuthWorkflow, LOGIN_FAILED_MESSAGE};
pub use deletion::{DELETE_FAILED_MESSAGE, DeletionState, DeletionTarget, DeletionWorkflow};
pub use playlist::{CLEAR_FAILED_MESSAGE, PlaylistWorkflow};

use crate::backend::ApiError;

/// Why an action was stopped before any request went out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Refusal {
    /// Another request of the same workflow has not finished yet.
    Busy,
    /// A range deletion without any bound.
    NoBounds,
    InvalidRange(String),
    /// `confirm` or `cancel` called with nothing awaiting confirmation.
    NothingPending,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The backend accepted the action; carries the message shown to the user.
    Done(String),
    Cancelled,
    Refused(Refusal),
    Failed(ApiError),
}

impl Outcome {
    pub fn is_done(&self) -> bool {
        matches!(self, Outcome::Done(_))
    }
}
