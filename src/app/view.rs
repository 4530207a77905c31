// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::form::UploadForm;
use crate::i18n::fluent::I18n;
use crate::ui::upload_form;
use iced::Element;

/// Context for rendering the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub form: &'a UploadForm,
}

/// Renders the form screen and lifts its messages.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    upload_form::view(upload_form::ViewContext {
        i18n: ctx.i18n,
        form: ctx.form,
    })
    .map(Message::Form)
}
