// SPDX-License-Identifier: MPL-2.0
//! `photogrid` is a photo album viewer built with the Iced GUI framework.
//!
//! It renders a thumbnail grid for an album directory and a full-screen
//! lightbox with wraparound navigation driven by clicks, keyboard arrows,
//! and horizontal swipe gestures.

pub mod album;
pub mod app;
pub mod error;
pub mod media;
pub mod ui;

pub use app::config;
