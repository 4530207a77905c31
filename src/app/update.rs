// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Handlers mutate the form controller and return the follow-up work
//! (file dialog, file reads, upload) as Iced tasks.

use super::Message;
use crate::error::TransportError;
use crate::form::{Rejection, UploadForm};
use crate::i18n::fluent::I18n;
use crate::media::{self, extensions::IMAGE_EXTENSIONS, PickedFile};
use crate::transport::HttpTransport;
use crate::ui::upload_form;
use iced::Task;
use std::path::PathBuf;

/// Borrowed application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub form: &'a mut UploadForm,
    pub transport: &'a Result<HttpTransport, TransportError>,
}

pub fn handle_form_message(
    ctx: &mut UpdateContext<'_>,
    message: upload_form::Message,
) -> Task<Message> {
    match message {
        upload_form::Message::EmailChanged(value) => {
            ctx.form.set_email(value);
            Task::none()
        }
        upload_form::Message::ChooseImages => open_image_dialog(ctx.i18n),
        upload_form::Message::RemoveImage(index) => {
            ctx.form.remove_image(index);
            Task::none()
        }
        upload_form::Message::ZoomImage(id) => {
            ctx.form.zoom(Some(id));
            Task::none()
        }
        upload_form::Message::CloseZoom => {
            ctx.form.zoom(None);
            Task::none()
        }
        upload_form::Message::Submit => start_upload(ctx),
    }
}

/// Opens the multi-select file dialog with an images filter and an
/// all-files filter.
fn open_image_dialog(i18n: &I18n) -> Task<Message> {
    let title = i18n.tr("images-dialog-title");
    let images_filter = i18n.tr("images-dialog-filter-images");
    let all_filter = i18n.tr("images-dialog-filter-all");

    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .set_title(&title)
                .add_filter(images_filter, IMAGE_EXTENSIONS)
                .add_filter(all_filter, &["*"])
                .pick_files()
                .await
                .map(|handles| {
                    handles
                        .iter()
                        .map(|handle| handle.path().to_path_buf())
                        .collect()
                })
        },
        Message::FilesPicked,
    )
}

pub fn handle_files_picked(paths: Option<Vec<PathBuf>>) -> Task<Message> {
    match paths {
        Some(paths) if !paths.is_empty() => load_files(paths),
        _ => {
            tracing::debug!("file dialog cancelled");
            Task::none()
        }
    }
}

pub fn handle_file_dropped(path: PathBuf) -> Task<Message> {
    tracing::debug!(path = %path.display(), "file dropped");
    load_files(vec![path])
}

fn load_files(paths: Vec<PathBuf>) -> Task<Message> {
    Task::perform(media::load_picked_files(paths), Message::FilesLoaded)
}

pub fn handle_files_loaded(ctx: &mut UpdateContext<'_>, files: Vec<PickedFile>) -> Task<Message> {
    ctx.form.select_files(files);
    Task::none()
}

/// Validates the form and, when accepted, sends the request in the
/// background.
fn start_upload(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let request = match ctx.form.submit() {
        Ok(request) => request,
        Err(Rejection::Busy) => return Task::none(),
        Err(Rejection::Invalid(reason)) => {
            tracing::debug!(?reason, "submission rejected");
            return Task::none();
        }
    };

    match ctx.transport {
        Ok(transport) => {
            let transport = transport.clone();
            Task::perform(
                async move { transport.upload(request).await },
                Message::UploadFinished,
            )
        }
        Err(err) => {
            tracing::error!(%err, "no HTTP client available for upload");
            ctx.form.finish_upload(Err(err.clone()));
            Task::none()
        }
    }
}

pub fn handle_upload_finished(
    ctx: &mut UpdateContext<'_>,
    result: Result<(), TransportError>,
) -> Task<Message> {
    ctx.form.finish_upload(result);
    Task::none()
}

pub fn handle_escape(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if ctx.form.zoomed_id().is_some() {
        ctx.form.zoom(None);
    }
    Task::none()
}
