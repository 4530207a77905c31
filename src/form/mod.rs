// SPDX-License-Identifier: MPL-2.0
//! Upload form controller.
//!
//! `UploadForm` owns every piece of mutable form state (email, selected
//! images, zoomed preview, status) and is only changed through the
//! transition methods below. It never performs I/O: [`UploadForm::submit`]
//! hands back an [`UploadRequest`] for the transport, and the outcome is fed
//! back through [`UploadForm::finish_upload`].
//!
//! At most one submission is in flight: while the status is
//! [`Status::Uploading`], `submit` is rejected without touching state.

mod image;
mod status;

pub use image::{ImageId, Preview, SelectedImage};
pub use status::{FailureReason, Status, StatusCategory};

use crate::error::{TransportError, ValidationError};
use crate::media::PickedFile;
use crate::transport::UploadRequest;

/// Reasons a call to [`UploadForm::submit`] did not produce a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Another upload is still in flight.
    Busy,
    /// Email or images are missing.
    Invalid(ValidationError),
}

#[derive(Debug, Default)]
pub struct UploadForm {
    email: String,
    images: Vec<SelectedImage>,
    status: Status,
    zoomed: Option<ImageId>,
}

impl UploadForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn images(&self) -> &[SelectedImage] {
        &self.images
    }

    #[must_use]
    pub fn status(&self) -> &Status {
        &self.status
    }

    #[must_use]
    pub fn zoomed_id(&self) -> Option<ImageId> {
        self.zoomed
    }

    /// Resolves the zoom reference. An entry that has since been removed
    /// resolves to `None`.
    #[must_use]
    pub fn zoomed_image(&self) -> Option<&SelectedImage> {
        let id = self.zoomed?;
        self.images.iter().find(|image| image.id() == id)
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        matches!(self.status, Status::Uploading)
    }

    /// Whether the submit trigger should be enabled.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.email.is_empty() && !self.images.is_empty() && !self.is_busy()
    }

    /// Appends the image files of `files` in their original order.
    ///
    /// Non-image entries are dropped silently. The status line is cleared
    /// unless an upload is in flight.
    pub fn select_files<I>(&mut self, files: I)
    where
        I: IntoIterator<Item = PickedFile>,
    {
        let before = self.images.len();
        let mut rejected = 0usize;

        for file in files {
            if file.is_image() {
                self.images.push(SelectedImage::from_picked(file));
            } else {
                tracing::debug!(name = %file.name, media_type = %file.media_type, "ignoring non-image file");
                rejected += 1;
            }
        }

        tracing::debug!(
            added = self.images.len() - before,
            rejected,
            total = self.images.len(),
            "files selected"
        );

        if !self.is_busy() {
            self.status = Status::Idle;
        }
    }

    /// Removes the image at `index`. Out-of-range indices are ignored.
    pub fn remove_image(&mut self, index: usize) {
        if index < self.images.len() {
            let removed = self.images.remove(index);
            tracing::debug!(index, name = %removed.name(), "image removed");
        }
    }

    /// Replaces the email verbatim. Format is not checked.
    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
    }

    /// Sets or clears the zoomed preview.
    pub fn zoom(&mut self, image: Option<ImageId>) {
        self.zoomed = image;
    }

    /// Validates the form and, on success, switches to
    /// [`Status::Uploading`] and returns the request to send.
    pub fn submit(&mut self) -> Result<UploadRequest, Rejection> {
        if self.is_busy() {
            tracing::debug!("submit ignored: upload already in flight");
            return Err(Rejection::Busy);
        }

        self.status = Status::Validating;

        if self.email.is_empty() {
            return Err(self.reject(ValidationError::MissingEmail));
        }
        if self.images.is_empty() {
            return Err(self.reject(ValidationError::MissingImages));
        }

        self.status = Status::Uploading;
        Ok(UploadRequest {
            email: self.email.clone(),
            images: self
                .images
                .iter()
                .map(SelectedImage::to_upload_part)
                .collect(),
        })
    }

    fn reject(&mut self, error: ValidationError) -> Rejection {
        tracing::debug!(?error, "submit rejected");
        self.status = Status::Failure(FailureReason::Validation(error));
        Rejection::Invalid(error)
    }

    /// Applies the transport outcome of the in-flight submission.
    ///
    /// Success clears email and images; failure keeps them for a retry.
    /// The zoom reference is left alone either way.
    pub fn finish_upload(&mut self, result: Result<(), TransportError>) {
        if !self.is_busy() {
            tracing::warn!("upload result received with no upload in flight");
            return;
        }

        match result {
            Ok(()) => {
                self.status = Status::Success;
                self.email.clear();
                self.images.clear();
            }
            Err(err) => {
                tracing::warn!("upload failed: {err}");
                self.status = Status::Failure(FailureReason::Transport(err));
            }
        }
    }
}
