// SPDX-License-Identifier: MPL-2.0
//! Centralized widget styles.

use crate::ui::design_tokens::{opacity, palette, radius};
use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};

/// Style for the translucent controls floating over the lightbox
/// (close, previous, next).
pub fn overlay_button(theme: &Theme, status: button::Status) -> button::Style {
    let _ = theme;
    let alpha = match status {
        button::Status::Hovered | button::Status::Pressed => opacity::OVERLAY_HOVER,
        _ => opacity::OVERLAY_IDLE,
    };

    button::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..palette::BLACK
        })),
        text_color: palette::WHITE,
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: radius::SM.into(),
        },
        ..button::Style::default()
    }
}

/// Style for grid tiles: flat at rest, subtly outlined under the pointer so
/// keyboard and mouse users can tell which tile is active.
pub fn tile_button(theme: &Theme, status: button::Status) -> button::Style {
    let _ = theme;
    let border = match status {
        button::Status::Hovered | button::Status::Pressed => Border {
            color: palette::GRAY_200,
            width: 1.0,
            radius: radius::SM.into(),
        },
        _ => Border {
            color: Color::TRANSPARENT,
            width: 1.0,
            radius: radius::SM.into(),
        },
    };

    button::Style {
        background: Some(Background::Color(palette::GRAY_700)),
        text_color: palette::WHITE,
        border,
        ..button::Style::default()
    }
}

/// Style for the dimmed backdrop behind the lightbox photo.
pub fn backdrop(theme: &Theme) -> container::Style {
    let _ = theme;
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BACKDROP,
            ..palette::BLACK
        })),
        ..container::Style::default()
    }
}

/// Style for the counter/caption bar under the lightbox photo.
pub fn caption_bar(theme: &Theme) -> container::Style {
    let _ = theme;
    container::Style {
        text_color: Some(palette::GRAY_200),
        ..container::Style::default()
    }
}

/// Style for the veil drawn over a hovered tile.
pub fn tile_hover_veil(theme: &Theme) -> container::Style {
    let _ = theme;
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::TILE_HOVER,
            ..palette::BLACK
        })),
        ..container::Style::default()
    }
}
