// SPDX-License-Identifier: MPL-2.0
//! Default values for every configurable setting.

/// Default window width in pixels.
pub const DEFAULT_WINDOW_WIDTH: u32 = 1100;

/// Default window height in pixels.
pub const DEFAULT_WINDOW_HEIGHT: u32 = 800;

/// Default tile edge length in the grid, in pixels.
pub const DEFAULT_THUMBNAIL_SIZE: u32 = 240;

/// Default number of tiles per grid row.
pub const DEFAULT_GRID_COLUMNS: usize = 4;

/// Default duration of the lightbox fade transition, in milliseconds.
pub const DEFAULT_FADE_MILLIS: u64 = 160;

/// Default horizontal distance a swipe must travel to count as navigation,
/// in pixels.
pub const DEFAULT_SWIPE_THRESHOLD_PX: f32 = 48.0;

/// Default photo cache budget in megabytes.
pub const DEFAULT_CACHE_MB: u32 = 64;
