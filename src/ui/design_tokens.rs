// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens: palette, opacity, spacing, and typography
//! scales shared by every view.

use iced::Color;

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.08, 0.08, 0.09);
    pub const GRAY_700: Color = Color::from_rgb(0.18, 0.18, 0.2);
    pub const GRAY_400: Color = Color::from_rgb(0.45, 0.45, 0.48);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.77);
}

pub mod opacity {
    /// Lightbox backdrop dim level.
    pub const BACKDROP: f32 = 0.92;

    /// Overlay controls at rest.
    pub const OVERLAY_IDLE: f32 = 0.35;

    /// Overlay controls under the pointer.
    pub const OVERLAY_HOVER: f32 = 0.6;

    /// Tile hover veil.
    pub const TILE_HOVER: f32 = 0.45;

    /// Photo opacity while the fade transition is running.
    pub const FADING: f32 = 0.35;
}

/// Spacing scale on an 8px grid.
pub mod spacing {
    pub const XS: f32 = 4.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

pub mod typography {
    pub const CAPTION: f32 = 13.0;
    pub const BODY: f32 = 15.0;
    pub const COUNTER: f32 = 14.0;
    pub const TITLE: f32 = 22.0;
}

pub mod sizing {
    /// Edge length of the square overlay control buttons.
    pub const CONTROL: f32 = 44.0;

    /// Edge length of inline icons.
    pub const ICON: f32 = 22.0;

    /// Edge length of the tile hover magnifier.
    pub const ICON_LG: f32 = 36.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
}

/// Surface color behind the grid.
pub fn grid_surface_color() -> Color {
    palette::GRAY_900
}
