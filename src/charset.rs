//! Named density ramps and the intensity to character mapper.

use crate::{PicasciiError, Result};
use std::collections::BTreeMap;
use std::path::Path;

#[cfg(not(target_arch = "wasm32"))]
use rayon::prelude::*;

/// Name of the set used when a lookup misses.
pub const DEFAULT_CHARSET: &str = "Best";

// Dark pixels map to the start of each ramp. Repeats widen a glyph's tonal band.
const BUILTIN: &[(&str, &str)] = &[
    ("Standard", "@%#*+=-:. "),
    ("Detailed", "@%#*+=-:. "),
    ("Enhanced", "@@@##%%***++++====----::::....    "),
    ("Best", "@@@##%%***++++====----::::......        "),
    ("Extreme", "@WWMMBBAA88&&%%%???***+++===---...'''\"\"\" "),
];

/// An ordered density ramp. Index 0 is used for intensity 0.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharacterSet {
    name: String,
    chars: Vec<char>,
}

impl CharacterSet {
    pub fn new(name: impl Into<String>, ramp: &str) -> Self {
        Self { name: name.into(), chars: ramp.chars().collect() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Character for one intensity value.
    pub fn map(&self, intensity: u8) -> Result<char> {
        let index = bucket(intensity, self.len())
            .ok_or_else(|| PicasciiError::EmptyCharacterSet(self.name.clone()))?;
        Ok(self.chars[index])
    }

    /// Precomputed table for all 256 intensities.
    fn lut(&self) -> Result<[char; 256]> {
        let mut lut = [' '; 256];
        for (p, slot) in lut.iter_mut().enumerate() {
            *slot = self.map(p as u8)?;
        }
        Ok(lut)
    }
}

/// Ramp index for `intensity` in a set of `len` glyphs: `min(p * len / 256, len - 1)`.
///
/// Returns `None` for an empty set.
pub fn bucket(intensity: u8, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some((usize::from(intensity) * len / 256).min(len - 1))
}

/// Maps row-major intensities to characters in the same order.
///
/// `width` is the row length used to split work across threads; the output
/// order never depends on it.
pub fn map_pixels(pixels: &[u8], width: usize, set: &CharacterSet) -> Result<Vec<char>> {
    if width == 0 {
        return Err(PicasciiError::InvalidDimension { width: 0, height: 0 });
    }
    let lut = set.lut()?;

    #[cfg(not(target_arch = "wasm32"))]
    let chars = pixels
        .par_chunks(width)
        .flat_map_iter(|row| row.iter().map(|&p| lut[usize::from(p)]))
        .collect();

    #[cfg(target_arch = "wasm32")]
    let chars = pixels.iter().map(|&p| lut[usize::from(p)]).collect();

    Ok(chars)
}

/// Immutable table of named character sets.
#[derive(Clone, Debug)]
pub struct CharsetRegistry {
    sets: Vec<CharacterSet>,
}

impl CharsetRegistry {
    pub fn builtin() -> Self {
        Self {
            sets: BUILTIN.iter().map(|(name, ramp)| CharacterSet::new(*name, ramp)).collect(),
        }
    }

    /// Adds a set, replacing any set with the same name.
    pub fn with_set(mut self, name: &str, ramp: &str) -> Self {
        let set = CharacterSet::new(name, ramp);
        match self.sets.iter_mut().find(|s| s.name == name) {
            Some(slot) => *slot = set,
            None => self.sets.push(set),
        }
        self
    }

    /// Merges ramps from a JSON object of `{"name": "ramp"}` pairs.
    pub fn load_json(self, path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        self.merge_json(&text)
    }

    pub fn merge_json(self, text: &str) -> Result<Self> {
        let ramps: BTreeMap<String, String> = serde_json::from_str(text)?;
        log::debug!("loaded {} custom charsets", ramps.len());
        Ok(ramps.iter().fold(self, |registry, (name, ramp)| registry.with_set(name, ramp)))
    }

    pub fn iter(&self) -> impl Iterator<Item = &CharacterSet> {
        self.sets.iter()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Looks up `name`, falling back to [`DEFAULT_CHARSET`] when it is unknown.
    pub fn get(&self, name: &str) -> &CharacterSet {
        if let Some(set) = self.find(name) {
            return set;
        }
        log::warn!("unknown charset '{}', using '{}'", name, DEFAULT_CHARSET);
        self.default_set()
    }

    /// Looks up `name` without fallback.
    pub fn get_strict(&self, name: &str) -> Result<&CharacterSet> {
        self.find(name)
            .ok_or_else(|| PicasciiError::UnknownCharacterSet(name.to_string()))
    }

    fn find(&self, name: &str) -> Option<&CharacterSet> {
        self.sets.iter().find(|s| s.name == name)
    }

    fn default_set(&self) -> &CharacterSet {
        // Sets are only ever added or replaced, so the built-in default stays registered.
        let index = self.sets.iter().position(|s| s.name == DEFAULT_CHARSET).unwrap_or(0);
        &self.sets[index]
    }
}

impl Default for CharsetRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
