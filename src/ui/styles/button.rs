// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action style (choose images, submit).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => disabled()(_theme, status),
    }
}

/// Round destructive button shown on a thumbnail card.
pub fn danger(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::ERROR_400,
        _ => palette::ERROR_500,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: shadow::SM,
        snap: true,
    }
}

/// Greyed-out style for actions that cannot run yet.
///
/// Status is ignored so the button looks inert even while hovered.
pub fn disabled() -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, _status: button::Status| {
        let is_light = matches!(theme, Theme::Light);
        let background = if is_light {
            palette::GRAY_200
        } else {
            palette::GRAY_400
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: Color {
                a: opacity::MUTED_TEXT,
                ..WHITE
            },
            border: Border {
                color: palette::GRAY_400,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_uses_brand_colors() {
        let style = primary(&Theme::Dark, button::Status::Active);

        if let Some(Background::Color(bg)) = style.background {
            assert_eq!(bg, palette::PRIMARY_500);
        } else {
            panic!("Expected background color");
        }
    }

    #[test]
    fn disabled_style_ignores_hover() {
        let style_fn = disabled();
        let active = style_fn(&Theme::Light, button::Status::Active);
        let hovered = style_fn(&Theme::Light, button::Status::Hovered);
        assert_eq!(active.background, hovered.background);
        assert_eq!(active.shadow, shadow::NONE);
    }

    #[test]
    fn danger_button_lightens_on_hover() {
        let normal = danger(&Theme::Dark, button::Status::Active);
        let hover = danger(&Theme::Dark, button::Status::Hovered);
        assert_ne!(normal.background, hover.background);
    }
}
