//! Image resizing - scales the source to one pixel per output character.

use crate::{PicasciiError, Result};
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};

// Terminal cells are taller than wide
pub const ASPECT_CORRECTION: f64 = 0.55;

const FILTER: FilterType = FilterType::Triangle;

/// Output height for an image of `src_w` x `src_h` scaled to `width` columns.
///
/// `round(width * src_h / src_w * 0.55)`, never less than 1.
pub fn target_height(src_w: u32, src_h: u32, width: u32) -> Result<u32> {
    if width == 0 || src_w == 0 || src_h == 0 {
        return Err(PicasciiError::InvalidDimension {
            width: i64::from(width),
            height: i64::from(src_h),
        });
    }
    let aspect = f64::from(src_h) / f64::from(src_w);
    let height = (f64::from(width) * aspect * ASPECT_CORRECTION).round();
    if height > f64::from(u32::MAX) {
        return Err(PicasciiError::InvalidDimension {
            width: i64::from(width),
            height: height as i64,
        });
    }
    Ok((height as u32).max(1))
}

/// Resize to `width` columns and the aspect-corrected row count.
pub fn resize(image: &DynamicImage, width: u32) -> Result<DynamicImage> {
    let (src_w, src_h) = image.dimensions();
    let height = target_height(src_w, src_h, width)?;
    log::debug!("resizing {}x{} -> {}x{}", src_w, src_h, width, height);
    Ok(image.resize_exact(width, height, FILTER))
}
