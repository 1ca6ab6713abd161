// SPDX-License-Identifier: MPL-2.0
//! Image loading and decoding into display handles.

use crate::error::Result;
use iced::widget::image;
use image_rs::GenericImageView;
use std::path::Path;
use std::sync::Arc;

/// A decoded photo ready for display: an iced image handle plus dimensions.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
    /// Original RGBA bytes, shared so clones stay cheap.
    rgba_bytes: Arc<Vec<u8>>,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let rgba_bytes = Arc::new(pixels);
        let handle = image::Handle::from_rgba(width, height, rgba_bytes.to_vec());
        Self {
            handle,
            width,
            height,
            rgba_bytes,
        }
    }

    /// Returns a reference to the original RGBA bytes.
    pub fn rgba_bytes(&self) -> &[u8] {
        &self.rgba_bytes
    }

    /// Approximate memory footprint of the decoded pixels in bytes.
    pub fn size_bytes(&self) -> usize {
        (self.width as usize) * (self.height as usize) * 4
    }
}

/// Decodes the image at `path` into RGBA pixels.
///
/// This blocks on file I/O and decoding and is meant to run on the blocking
/// pool, not the UI thread.
pub fn load_image(path: &Path) -> Result<ImageData> {
    let decoded = image_rs::open(path)?;
    let (width, height) = decoded.dimensions();
    let rgba = decoded.into_rgba8().into_raw();
    Ok(ImageData::from_rgba(width, height, rgba))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn from_rgba_records_dimensions() {
        let data = ImageData::from_rgba(4, 3, vec![0u8; 4 * 3 * 4]);
        assert_eq!(data.width, 4);
        assert_eq!(data.height, 3);
        assert_eq!(data.size_bytes(), 48);
        assert_eq!(data.rgba_bytes().len(), 48);
    }

    #[test]
    fn load_image_decodes_png() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("pixel.png");
        let img = image_rs::RgbaImage::from_pixel(2, 2, image_rs::Rgba([10, 20, 30, 255]));
        img.save(&path).expect("failed to save test image");

        let data = load_image(&path).expect("decode failed");
        assert_eq!(data.width, 2);
        assert_eq!(data.height, 2);
    }

    #[test]
    fn load_image_reports_error_for_garbage() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("broken.jpg");
        fs::write(&path, b"not an image").expect("write failed");

        assert!(load_image(&path).is_err());
    }

    #[test]
    fn load_image_reports_error_for_missing_file() {
        assert!(load_image(Path::new("/nope/missing.jpg")).is_err());
    }
}
