// SPDX-License-Identifier: MPL-2.0
//! UI components: the thumbnail grid, the lightbox, and shared styling.

pub mod design_tokens;
pub mod grid;
pub mod icons;
pub mod lightbox;
pub mod styles;
