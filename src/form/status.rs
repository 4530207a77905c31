// SPDX-License-Identifier: MPL-2.0
//! Form status and its presentational category.

use crate::error::{TransportError, ValidationError};

/// Why the last submission did not go through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    Validation(ValidationError),
    Transport(TransportError),
}

/// Lifecycle of a submission as shown under the submit button.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Status {
    /// Nothing to report.
    #[default]
    Idle,
    /// Checking email and images before anything is sent.
    Validating,
    /// One request is in flight.
    Uploading,
    /// The endpoint accepted the last submission.
    Success,
    /// Validation or the upload failed.
    Failure(FailureReason),
}

/// Coarse classification used for color coding only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCategory {
    Success,
    Failure,
}

impl Status {
    /// Returns the i18n key of the status line, if one is shown.
    #[must_use]
    pub fn message_key(&self) -> Option<&'static str> {
        match self {
            Status::Idle | Status::Validating => None,
            Status::Uploading => Some("status-uploading"),
            Status::Success => Some("status-success"),
            Status::Failure(FailureReason::Validation(err)) => Some(err.i18n_key()),
            Status::Failure(FailureReason::Transport(_)) => Some("status-upload-failed"),
        }
    }

    /// Returns the transport error behind a failed upload, for the detail line.
    #[must_use]
    pub fn transport_error(&self) -> Option<&TransportError> {
        match self {
            Status::Failure(FailureReason::Transport(err)) => Some(err),
            _ => None,
        }
    }

    /// Returns the color category of the status line.
    ///
    /// An upload in progress is rendered like a success.
    #[must_use]
    pub fn category(&self) -> Option<StatusCategory> {
        match self {
            Status::Idle | Status::Validating => None,
            Status::Uploading | Status::Success => Some(StatusCategory::Success),
            Status::Failure(_) => Some(StatusCategory::Failure),
        }
    }
}
