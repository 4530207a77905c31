// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::TransportError;
use crate::media::PickedFile;
use crate::ui::upload_form;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. The variants forward
/// form messages and carry the results of background work back in.
#[derive(Debug, Clone)]
pub enum Message {
    Form(upload_form::Message),
    /// Result of the open dialog. `None` when the dialog was cancelled.
    FilesPicked(Option<Vec<PathBuf>>),
    /// Picked or dropped files, read into memory and tagged.
    FilesLoaded(Vec<PickedFile>),
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    /// Outcome of the in-flight upload.
    UploadFinished(Result<(), TransportError>),
    EscapePressed,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional upload endpoint. Takes precedence over `[upload] endpoint`.
    pub endpoint: Option<String>,
}
