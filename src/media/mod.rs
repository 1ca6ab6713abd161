// SPDX-License-Identifier: MPL-2.0
//! Image decoding and caching for the lightbox.

pub mod cache;
pub mod image;

use std::path::Path;

pub use cache::{load_photo, CacheConfig, PhotoCache};
pub use image::{load_image, ImageData};

/// Image file extensions recognized when scanning an album directory.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "bmp"];

/// Checks whether a path points at a supported image format by extension.
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn recognizes_supported_extensions() {
        assert!(is_supported_image(&PathBuf::from("photo.jpg")));
        assert!(is_supported_image(&PathBuf::from("photo.PNG")));
        assert!(is_supported_image(&PathBuf::from("photo.webp")));
    }

    #[test]
    fn rejects_unsupported_extensions() {
        assert!(!is_supported_image(&PathBuf::from("notes.txt")));
        assert!(!is_supported_image(&PathBuf::from("clip.mp4")));
        assert!(!is_supported_image(&PathBuf::from("no_extension")));
    }
}
