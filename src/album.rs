// SPDX-License-Identifier: MPL-2.0
//! Album loading and photo records.
//!
//! An album is an ordered list of photos rooted at a base directory. The list
//! comes from an `album.toml` manifest when one exists, or from scanning the
//! directory for supported image files otherwise. Insertion order is display
//! order and never changes after construction.

use crate::error::{Error, Result};
use crate::media;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Name of the optional manifest file inside an album directory.
pub const MANIFEST_FILE: &str = "album.toml";

/// One photo in an album: a filename relative to the album base and an
/// optional caption. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoRecord {
    pub file: String,
    pub caption: String,
}

impl PhotoRecord {
    /// Returns the text used to describe this photo: the caption when one
    /// was provided, otherwise a label derived from the filename.
    pub fn label(&self) -> String {
        if self.caption.is_empty() {
            derive_label(&self.file)
        } else {
            self.caption.clone()
        }
    }
}

/// A manifest photo entry: either a bare filename string or a full record.
///
/// ```toml
/// photos = [
///     "dawn.jpg",
///     { file = "golden-gate.jpg", caption = "Golden Gate at sunset" },
/// ]
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PhotoEntry {
    File(String),
    Captioned {
        file: String,
        #[serde(default)]
        caption: String,
    },
}

impl From<PhotoEntry> for PhotoRecord {
    fn from(entry: PhotoEntry) -> Self {
        match entry {
            PhotoEntry::File(file) => PhotoRecord {
                file,
                caption: String::new(),
            },
            PhotoEntry::Captioned { file, caption } => PhotoRecord { file, caption },
        }
    }
}

#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    photos: Vec<PhotoEntry>,
}

/// An ordered, fixed collection of photos rooted at a base directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Album {
    title: Option<String>,
    base: PathBuf,
    photos: Vec<PhotoRecord>,
}

impl Album {
    /// Creates an empty album with no base directory.
    pub fn empty() -> Self {
        Self {
            title: None,
            base: PathBuf::new(),
            photos: Vec::new(),
        }
    }

    /// Builds an album from explicit entries.
    ///
    /// Entries are normalized to [`PhotoRecord`]s in input order. A trailing
    /// slash on `base` is stripped before use.
    pub fn from_entries(
        base: &str,
        entries: impl IntoIterator<Item = PhotoEntry>,
        title: Option<String>,
    ) -> Self {
        let base = PathBuf::from(base.trim_end_matches('/'));
        Self {
            title,
            base,
            photos: entries.into_iter().map(PhotoRecord::from).collect(),
        }
    }

    /// Loads the album rooted at `dir`.
    ///
    /// Reads `album.toml` when present; otherwise scans the directory for
    /// supported image files sorted alphabetically. Returns an error if the
    /// directory cannot be read or the manifest cannot be parsed.
    pub fn load(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            return Err(Error::Album(format!(
                "not a directory: {}",
                dir.display()
            )));
        }

        let manifest_path = dir.join(MANIFEST_FILE);
        if manifest_path.is_file() {
            let contents = std::fs::read_to_string(&manifest_path)?;
            let manifest: Manifest = toml::from_str(&contents)?;
            let base = dir.to_string_lossy();
            return Ok(Self::from_entries(&base, manifest.photos, manifest.title));
        }

        let mut files = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.is_file() && media::is_supported_image(&path) {
                if let Some(name) = path.file_name() {
                    files.push(name.to_string_lossy().into_owned());
                }
            }
        }
        files.sort();

        let base = dir.to_string_lossy();
        Ok(Self::from_entries(
            &base,
            files.into_iter().map(PhotoEntry::File),
            None,
        ))
    }

    /// Album title from the manifest, if any.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Base directory the photo files resolve against.
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Photos in display order.
    pub fn photos(&self) -> &[PhotoRecord] {
        &self.photos
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    /// Returns the photo at `index`, if in range.
    pub fn photo(&self, index: usize) -> Option<&PhotoRecord> {
        self.photos.get(index)
    }

    /// Resolves the on-disk path of the photo at `index`.
    pub fn photo_path(&self, index: usize) -> Option<PathBuf> {
        self.photos.get(index).map(|p| self.base.join(&p.file))
    }
}

/// Derives a human-readable label from a filename: the extension is
/// stripped, runs of dashes and underscores become single spaces, and the
/// result is trimmed.
pub fn derive_label(file: &str) -> String {
    let stem = match file.rfind('.') {
        Some(pos) if pos > 0 => &file[..pos],
        _ => file,
    };

    let mut label = String::with_capacity(stem.len());
    let mut in_separator = false;
    for c in stem.chars() {
        if c == '-' || c == '_' {
            if !in_separator {
                label.push(' ');
                in_separator = true;
            }
        } else {
            label.push(c);
            in_separator = false;
        }
    }
    label.trim().to_string()
}
