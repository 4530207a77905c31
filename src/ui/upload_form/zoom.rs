// SPDX-License-Identifier: MPL-2.0
//! Full-window zoom of one selected image.

use super::{preview_widget, Message};
use crate::form::SelectedImage;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    mouse,
    widget::{container, mouse_area, opaque, text, Column},
    Color, ContentFit, Element, Length,
};

/// Overlay showing `selected` at full size over a dimmed backdrop.
///
/// A click anywhere on the overlay closes it. Input never reaches the form
/// underneath while the overlay is open.
pub(super) fn view<'a>(selected: &'a SelectedImage, i18n: &I18n) -> Element<'a, Message> {
    let picture = preview_widget(
        selected.preview(),
        Length::Fill,
        Length::Fill,
        ContentFit::Contain,
    );

    let hint = text(i18n.tr("zoom-dismiss-hint"))
        .size(typography::CAPTION)
        .color(Color {
            a: opacity::MUTED_TEXT,
            ..palette::WHITE
        });

    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(picture)
        .push(text(selected.name()).size(typography::BODY).color(palette::WHITE))
        .push(hint);

    let backdrop = container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XXL)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::backdrop);

    opaque(
        mouse_area(backdrop)
            .on_press(Message::CloseZoom)
            .interaction(mouse::Interaction::ZoomOut),
    )
}
