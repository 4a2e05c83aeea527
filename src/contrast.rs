//! Linear contrast stretch around the image's mean intensity.

use crate::{grayscale, PicasciiError, Result};
use image::{DynamicImage, GrayImage};

pub fn check_factor(factor: f32) -> Result<()> {
    if factor.is_finite() && factor > 0.0 {
        Ok(())
    } else {
        Err(PicasciiError::InvalidParameter { name: "contrast", value: f64::from(factor) })
    }
}

/// Mean luminance, rounded to the nearest integer level.
pub fn mean_intensity(gray: &GrayImage) -> f32 {
    let count = u64::from(gray.width()) * u64::from(gray.height());
    if count == 0 {
        return 0.0;
    }
    let sum: u64 = gray.as_raw().iter().map(|&v| u64::from(v)).sum();
    (sum as f64 / count as f64).round() as f32
}

/// Remap table for `v' = clamp(mean + (v - mean) * factor, 0, 255)`.
fn stretch_table(mean: f32, factor: f32) -> [u8; 256] {
    let mut table = [0u8; 256];
    for (v, slot) in table.iter_mut().enumerate() {
        let stretched = mean + (v as f32 - mean) * factor;
        *slot = stretched.round().clamp(0.0, 255.0) as u8;
    }
    table
}

/// Applies the stretch to every channel with one shared mean.
///
/// Single-channel images stay single-channel; anything else is
/// converted to 8-bit RGB first and alpha is dropped.
pub fn adjust(image: &DynamicImage, factor: f32) -> Result<DynamicImage> {
    check_factor(factor)?;
    let mean = mean_intensity(&grayscale::reduce(image));
    log::debug!("contrast x{} around mean {}", factor, mean);
    let table = stretch_table(mean, factor);

    let adjusted = if grayscale::is_single_channel(image) {
        let mut gray = image.to_luma8();
        gray.iter_mut().for_each(|v| *v = table[usize::from(*v)]);
        DynamicImage::ImageLuma8(gray)
    } else {
        let mut rgb = image.to_rgb8();
        rgb.iter_mut().for_each(|v| *v = table[usize::from(*v)]);
        DynamicImage::ImageRgb8(rgb)
    };
    Ok(adjusted)
}
