//! Image to ASCII art converter.
//!
//! The pipeline runs resize, contrast, grayscale, character mapping and line
//! assembly in that order. Every stage is a pure function over an
//! `image::DynamicImage` or a flat intensity buffer.

pub mod charset;
pub mod contrast;
pub mod grayscale;
pub mod lines;
pub mod loader;
pub mod resize;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use charset::{CharacterSet, CharsetRegistry, DEFAULT_CHARSET};

use image::DynamicImage;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PicasciiError {
    #[error("Image error: {0}")]
    ImageDecode(#[from] image::ImageError),
    #[error("Invalid dimension: {width}x{height}")]
    InvalidDimension { width: i64, height: i64 },
    #[error("Invalid parameter {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },
    #[error("Character set '{0}' is empty")]
    EmptyCharacterSet(String),
    #[error("Unknown character set '{0}'")]
    UnknownCharacterSet(String),
    #[error("Charset file error: {0}")]
    Charsets(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PicasciiError>;

/// Per-call conversion parameters.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConversionConfig {
    /// Output width in characters.
    pub width: u32,
    /// Contrast stretch factor around the image mean. 1.0 leaves samples unchanged.
    pub contrast: f32,
    /// Name looked up in the charset registry.
    pub charset: String,
    /// Fail on unknown charset names instead of using the default set.
    pub strict_charset: bool,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            width: 120,
            contrast: 1.5,
            charset: DEFAULT_CHARSET.to_string(),
            strict_charset: false,
        }
    }
}

impl ConversionConfig {
    pub fn new(width: u32, contrast: f32, charset: impl Into<String>) -> Self {
        Self { width, contrast, charset: charset.into(), ..Self::default() }
    }

    pub fn with_strict_charset(mut self, strict: bool) -> Self {
        self.strict_charset = strict;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 {
            return Err(PicasciiError::InvalidDimension { width: 0, height: 0 });
        }
        contrast::check_factor(self.contrast)
    }
}

/// Converter bound to a charset registry.
pub struct Converter<'a> {
    registry: &'a CharsetRegistry,
    config: ConversionConfig,
}

impl<'a> Converter<'a> {
    pub fn new(registry: &'a CharsetRegistry, config: ConversionConfig) -> Self {
        Self { registry, config }
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    /// Runs the full pipeline. Nothing is returned on failure.
    pub fn convert(&self, image: &DynamicImage) -> Result<String> {
        self.config.validate()?;
        let set = if self.config.strict_charset {
            self.registry.get_strict(&self.config.charset)?
        } else {
            self.registry.get(&self.config.charset)
        };
        if set.is_empty() {
            return Err(PicasciiError::EmptyCharacterSet(set.name().to_string()));
        }

        let resized = resize::resize(image, self.config.width)?;
        let adjusted = contrast::adjust(&resized, self.config.contrast)?;
        let gray = grayscale::reduce(&adjusted);
        let (width, height) = gray.dimensions();
        log::debug!("mapping {}x{} cells with charset '{}'", width, height, set.name());

        let chars = charset::map_pixels(gray.as_raw(), width as usize, set)?;
        lines::assemble(&chars, width as usize)
    }

    pub fn convert_path(&self, path: impl AsRef<Path>) -> Result<String> {
        let image = loader::load_path(path)?;
        self.convert(&image)
    }

    pub fn convert_bytes(&self, bytes: &[u8]) -> Result<String> {
        let image = loader::load_bytes(bytes)?;
        self.convert(&image)
    }
}

/// Converts an image file with the built-in charsets.
///
/// Unknown charset names fall back to [`DEFAULT_CHARSET`].
pub fn convert(
    path: impl AsRef<Path>,
    width: u32,
    contrast: f32,
    charset: &str,
) -> Result<String> {
    let registry = CharsetRegistry::builtin();
    Converter::new(&registry, ConversionConfig::new(width, contrast, charset)).convert_path(path)
}

/// Converts an already decoded image.
pub fn convert_image(
    image: &DynamicImage,
    registry: &CharsetRegistry,
    config: &ConversionConfig,
) -> Result<String> {
    Converter::new(registry, config.clone()).convert(image)
}
