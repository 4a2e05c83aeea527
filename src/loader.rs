//! Image loading.

use crate::{PicasciiError, Result};
use image::{DynamicImage, GenericImageView, ImageError, RgbaImage};
use std::path::Path;

fn check(image: DynamicImage) -> Result<DynamicImage> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(PicasciiError::InvalidDimension {
            width: i64::from(width),
            height: i64::from(height),
        });
    }
    Ok(image)
}

/// Decode an image file. The format is guessed from its contents.
///
/// Unreadable files surface as [`PicasciiError::ImageDecode`] too.
pub fn load_path(path: impl AsRef<Path>) -> Result<DynamicImage> {
    let path = path.as_ref();
    log::debug!("loading {}", path.display());
    let image = image::ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(ImageError::IoError)?
        .decode()?;
    check(image)
}

/// Decode an in-memory encoded image (PNG, JPEG, ...).
pub fn load_bytes(bytes: &[u8]) -> Result<DynamicImage> {
    check(image::load_from_memory(bytes)?)
}

/// Wrap raw RGBA8 pixel data, as handed out by a browser canvas.
pub fn from_rgba(data: &[u8], width: u32, height: u32) -> Result<DynamicImage> {
    let rgba = RgbaImage::from_raw(width, height, data.to_vec()).ok_or(
        PicasciiError::InvalidDimension { width: i64::from(width), height: i64::from(height) },
    )?;
    check(DynamicImage::ImageRgba8(rgba))
}
