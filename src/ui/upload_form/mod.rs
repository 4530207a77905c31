// SPDX-License-Identifier: MPL-2.0
//! Claim form screen.
//!
//! Renders the email field, the image picker, the thumbnail grid, the
//! submit button and the status line, plus the zoom overlay when a
//! thumbnail has been clicked. The screen owns no state: everything is read
//! from the [`UploadForm`] controller and user intent is reported through
//! [`Message`].

mod grid;
mod zoom;

use crate::form::{ImageId, Preview, StatusCategory, UploadForm};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{button, container, image, scrollable, svg, text, text_input, Column, Stack},
    Color, ContentFit, Element, Length,
};

/// Contextual data needed to render the form.
#[derive(Clone, Copy)]
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub form: &'a UploadForm,
}

/// Messages emitted by the form screen.
#[derive(Debug, Clone)]
pub enum Message {
    EmailChanged(String),
    ChooseImages,
    RemoveImage(usize),
    ZoomImage(ImageId),
    CloseZoom,
    Submit,
}

/// Render the form, with the zoom overlay on top when one is open.
#[must_use]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let page = scrollable(
        container(form_panel(ctx))
            .width(Length::Fill)
            .align_x(Horizontal::Center)
            .padding(spacing::LG),
    )
    .width(Length::Fill)
    .height(Length::Fill);

    match ctx.form.zoomed_image() {
        Some(selected) => Stack::new()
            .push(page)
            .push(zoom::view(selected, ctx.i18n))
            .into(),
        None => page.into(),
    }
}

fn form_panel(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;
    let form = ctx.form;

    let title = text(i18n.tr("form-title")).size(typography::TITLE_LG);

    let email_section = Column::new()
        .spacing(spacing::XS)
        .push(text(i18n.tr("email-label")).size(typography::BODY_LG))
        .push(
            text_input(&i18n.tr("email-placeholder"), form.email())
                .on_input(Message::EmailChanged)
                .size(typography::BODY_LG)
                .padding(spacing::SM),
        );

    let mut images_section = Column::new()
        .spacing(spacing::XS)
        .push(text(i18n.tr("images-label")).size(typography::BODY_LG))
        .push(
            button(text(i18n.tr("images-choose-button")).size(typography::BODY))
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::primary)
                .on_press(Message::ChooseImages),
        )
        .push(muted_caption(i18n.tr("images-drop-hint")));

    if !form.images().is_empty() {
        images_section = images_section
            .push(muted_caption(
                i18n.tr_count("images-selected-count", form.images().len()),
            ))
            .push(grid::view(form.images()));
    }

    let submit = button(
        container(text(i18n.tr("submit-button")).size(typography::BODY_LG))
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .width(Length::Fill)
    .padding(spacing::SM)
    .style(styles::button::primary)
    .on_press_maybe(form.can_submit().then_some(Message::Submit));

    let content = Column::new()
        .spacing(spacing::LG)
        .push(title)
        .push(email_section)
        .push(images_section)
        .push(submit)
        .push(status_line(ctx));

    container(content)
        .max_width(sizing::FORM_MAX_WIDTH)
        .width(Length::Fill)
        .padding(spacing::XL)
        .style(styles::container::panel)
        .into()
}

/// Status message colored by category, plus the transport detail on failure.
fn status_line(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let status = ctx.form.status();
    let Some(key) = status.message_key() else {
        return Column::new().into();
    };

    let color = match status.category() {
        Some(StatusCategory::Failure) => palette::ERROR_500,
        _ => palette::SUCCESS_500,
    };

    let mut line = Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .push(text(ctx.i18n.tr(key)).size(typography::BODY).color(color));

    if let Some(err) = status.transport_error() {
        line = line.push(muted_caption(
            ctx.i18n.tr_with_args(err.i18n_key(), &err.i18n_args()),
        ));
    }

    line.into()
}

fn muted_caption<'a>(content: String) -> Element<'a, Message> {
    text(content)
        .size(typography::CAPTION)
        .color(Color {
            a: opacity::MUTED_TEXT,
            ..palette::GRAY_400
        })
        .into()
}

/// Renders the preview of an entry at the given size.
fn preview_widget<'a>(
    preview: &Preview,
    width: Length,
    height: Length,
    fit: ContentFit,
) -> Element<'a, Message> {
    match preview {
        Preview::Raster(handle) => image(handle.clone())
            .width(width)
            .height(height)
            .content_fit(fit)
            .into(),
        Preview::Vector(handle) => svg(handle.clone())
            .width(width)
            .height(height)
            .content_fit(fit)
            .into(),
    }
}
