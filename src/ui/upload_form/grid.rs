// SPDX-License-Identifier: MPL-2.0
//! Thumbnail grid of the selected images.

use super::{preview_widget, Message};
use crate::form::SelectedImage;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    mouse,
    widget::{button, container, mouse_area, text, Column, Row, Stack},
    ContentFit, Element, Length,
};

/// Longest file name shown under a thumbnail before it gets shortened.
const MAX_CAPTION_CHARS: usize = 18;

/// Lays the images out row by row, in selection order.
pub(super) fn view(images: &[SelectedImage]) -> Element<'_, Message> {
    let mut grid = Column::new().spacing(spacing::MD);

    for (row_index, chunk) in images.chunks(sizing::GRID_COLUMNS).enumerate() {
        let mut row = Row::new().spacing(spacing::MD);
        for (offset, selected) in chunk.iter().enumerate() {
            row = row.push(card(row_index * sizing::GRID_COLUMNS + offset, selected));
        }
        grid = grid.push(row);
    }

    grid.into()
}

fn card(index: usize, selected: &SelectedImage) -> Element<'_, Message> {
    let picture = mouse_area(preview_widget(
        selected.preview(),
        Length::Fill,
        Length::Fixed(sizing::THUMBNAIL_HEIGHT),
        ContentFit::Cover,
    ))
    .on_press(Message::ZoomImage(selected.id()))
    .interaction(mouse::Interaction::ZoomIn);

    let remove = button(
        container(text("×").size(typography::BODY))
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .width(Length::Fixed(sizing::REMOVE_BUTTON))
    .height(Length::Fixed(sizing::REMOVE_BUTTON))
    .padding(0)
    .style(styles::button::danger)
    .on_press(Message::RemoveImage(index));

    let remove_layer = container(remove)
        .width(Length::Fill)
        .align_x(Horizontal::Right)
        .padding(spacing::XXS);

    let content = Column::new()
        .spacing(spacing::XXS)
        .push(Stack::new().push(picture).push(remove_layer))
        .push(text(shorten_name(selected.name(), MAX_CAPTION_CHARS)).size(typography::CAPTION));

    container(content)
        .width(Length::Fixed(sizing::THUMBNAIL_CARD_WIDTH))
        .padding(spacing::XXS)
        .style(styles::container::card)
        .into()
}

/// Shortens `name` to at most `max_chars` characters, keeping the extension
/// visible when possible.
fn shorten_name(name: &str, max_chars: usize) -> String {
    let total = name.chars().count();
    if total <= max_chars {
        return name.to_string();
    }

    let extension = name
        .rfind('.')
        .map(|dot| &name[dot..])
        .filter(|ext| ext.chars().count() < max_chars / 2)
        .unwrap_or("");
    let keep = max_chars.saturating_sub(extension.chars().count() + 1);
    let head: String = name.chars().take(keep).collect();

    format!("{head}…{extension}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_names_are_untouched() {
        assert_eq!(shorten_name("car.jpg", 18), "car.jpg");
    }

    #[test]
    fn long_names_keep_their_extension() {
        let shortened = shorten_name("front-bumper-damage-closeup.jpeg", 18);
        assert_eq!(shortened.chars().count(), 18);
        assert!(shortened.ends_with("….jpeg"));
        assert!(shortened.starts_with("front-bumper"));
    }

    #[test]
    fn long_names_without_extension_are_cut() {
        let shortened = shorten_name("abcdefghijklmnopqrstuvwxyz", 10);
        assert_eq!(shortened, "abcdefghi…");
    }

    #[test]
    fn multibyte_names_do_not_split_characters() {
        let shortened = shorten_name("éééééééééééééééééééé.png", 12);
        assert!(shortened.ends_with("….png"));
        assert_eq!(shortened.chars().count(), 12);
    }
}
