//! Grayscale reduction.
//!
//! Uses the `image` crate's luma conversion: Rec. 709 weights
//! (0.2126 R + 0.7152 G + 0.0722 B) in integer arithmetic. Each weight is
//! positive, so the result is non-decreasing in every channel.

use image::{DynamicImage, GrayImage};

pub fn is_single_channel(image: &DynamicImage) -> bool {
    !image.color().has_color()
}

pub fn reduce(image: &DynamicImage) -> GrayImage {
    image.to_luma8()
}
