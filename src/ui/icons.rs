// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module.
//!
//! Icons are small stroke-based SVGs embedded at compile time; handles are
//! cached in a `OnceLock` so each icon is parsed once per process.

use iced::widget::svg::{Handle, Svg};
use std::sync::OnceLock;

/// Defines an icon function with a cached handle.
macro_rules! define_icon {
    ($name:ident, $data:expr, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            let handle = HANDLE.get_or_init(|| Handle::from_memory($data.as_bytes()));
            Svg::new(handle.clone())
        }
    };
}

const CLOSE_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="#ffffff" stroke-width="1.8" stroke-linecap="round"><line x1="18" y1="6" x2="6" y2="18"/><line x1="6" y1="6" x2="18" y2="18"/></svg>"##;

const CHEVRON_LEFT_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="22" height="22" viewBox="0 0 24 24" fill="none" stroke="#ffffff" stroke-width="1.6" stroke-linecap="round"><polyline points="15 18 9 12 15 6"/></svg>"##;

const CHEVRON_RIGHT_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="22" height="22" viewBox="0 0 24 24" fill="none" stroke="#ffffff" stroke-width="1.6" stroke-linecap="round"><polyline points="9 18 15 12 9 6"/></svg>"##;

const MAGNIFIER_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="36" height="36" viewBox="0 0 24 24" fill="none" stroke="#ffffff" stroke-width="1.3" stroke-linecap="round"><circle cx="11" cy="11" r="8"/><line x1="21" y1="21" x2="16.65" y2="16.65"/><line x1="11" y1="8" x2="11" y2="14"/><line x1="8" y1="11" x2="14" y2="11"/></svg>"##;

const PICTURE_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="48" height="48" viewBox="0 0 24 24" fill="none" stroke="#737378" stroke-width="1.3" stroke-linecap="round"><rect x="3" y="3" width="18" height="18" rx="2"/><circle cx="8.5" cy="8.5" r="1.5"/><polyline points="21 15 16 10 5 21"/></svg>"##;

define_icon!(close, CLOSE_SVG, "Close cross for the lightbox.");
define_icon!(
    chevron_left,
    CHEVRON_LEFT_SVG,
    "Left chevron for previous-photo navigation."
);
define_icon!(
    chevron_right,
    CHEVRON_RIGHT_SVG,
    "Right chevron for next-photo navigation."
);
define_icon!(
    magnifier,
    MAGNIFIER_SVG,
    "Zoom magnifier shown over a hovered tile."
);
define_icon!(
    picture,
    PICTURE_SVG,
    "Picture placeholder for empty and failed states."
);

/// Sizes an icon to a square of `size` pixels.
pub fn sized(icon: Svg<'static>, size: f32) -> Svg<'static> {
    icon.width(size).height(size)
}
