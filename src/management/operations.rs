use chrono::Utc;

use crate::{
    management::Signal,
    types::{OperationRecord, PlaylistAction},
};

/// Keeps the most recent playlist operation for display. In memory only.
#[derive(Clone)]
pub struct OperationLog {
    last: Signal<Option<OperationRecord>>,
}

impl OperationLog {
    pub fn new() -> Self {
        Self {
            last: Signal::new(None),
        }
    }

    pub fn record(&self, playlist_id: &str, action: PlaylistAction) -> OperationRecord {
        let record = OperationRecord {
            playlist_id: playlist_id.to_string(),
            action,
            timestamp: Utc::now(),
        };
        self.last.set(Some(record.clone()));
        record
    }

    pub fn last(&self) -> Option<OperationRecord> {
        self.last.get()
    }
}

impl Default for OperationLog {
    fn default() -> Self {
        Self::new()
    }
}
