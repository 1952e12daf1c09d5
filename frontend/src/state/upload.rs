//! Upload state: drag affordance, uploading flag, latest result or error.
//!
//! Every upload gets a ticket. Only the newest ticket may resolve the state;
//! a completion for an older ticket is discarded, so overlapping uploads end
//! with the result of the last one started.

use crate::config::ANALYSIS_FALLBACK_MESSAGE;
use crate::types::{OperationResult, ResultSet};

/// Handle for one dispatched upload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UploadTicket(u64);

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UploadState {
    drag_active: bool,
    uploading: bool,
    generation: u64,
    revision: u64,
    file_name: Option<String>,
    results: Option<ResultSet>,
    error: Option<String>,
}

impl UploadState {
    pub fn drag_active(&self) -> bool {
        self.drag_active
    }

    pub fn is_uploading(&self) -> bool {
        self.uploading
    }

    /// Name of the most recently submitted file.
    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    pub fn results(&self) -> Option<&ResultSet> {
        self.results.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Bumped each time an upload resolves, even when the visible outcome
    /// looks the same as before.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn begin_drag(&mut self) {
        self.drag_active = true;
    }

    pub fn end_drag(&mut self) {
        self.drag_active = false;
    }

    /// Mark a new upload as dispatched, superseding any pending one.
    ///
    /// The previous result or error stays visible until this one resolves.
    pub fn begin_upload(&mut self, file_name: impl Into<String>) -> UploadTicket {
        self.generation += 1;
        self.drag_active = false;
        self.uploading = true;
        self.file_name = Some(file_name.into());
        UploadTicket(self.generation)
    }

    /// Apply the outcome of `ticket`.
    ///
    /// Returns `false` when the ticket was superseded and nothing changed.
    pub fn finish_upload(&mut self, ticket: UploadTicket, outcome: OperationResult<ResultSet>) -> bool {
        if ticket.0 != self.generation {
            return false;
        }
        self.uploading = false;
        self.revision += 1;
        match outcome {
            Ok(results) => {
                self.results = Some(results);
                self.error = None;
            }
            Err(failure) => {
                self.results = None;
                self.error = Some(failure.user_message(ANALYSIS_FALLBACK_MESSAGE));
            }
        }
        true
    }
}
