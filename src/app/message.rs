// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::{grid, lightbox};
use std::path::PathBuf;

/// Launch parameters collected in `main.rs`.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Album directory to open; defaults to the current directory.
    pub album_dir: Option<PathBuf>,
}

/// Top-level messages consumed by `App::update`. The variants forward
/// component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Grid(grid::Message),
    Lightbox(lightbox::Message),
}
