//! WebAssembly bindings for picascii

use wasm_bindgen::prelude::*;
use crate::{loader, CharsetRegistry, ConversionConfig, Converter, DEFAULT_CHARSET};

#[wasm_bindgen]
pub struct WasmConverter {
    registry: CharsetRegistry,
    config: ConversionConfig,
}

#[wasm_bindgen]
impl WasmConverter {
    /// Create a converter with the built-in character sets and default settings
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmConverter {
        WasmConverter {
            registry: CharsetRegistry::builtin(),
            config: ConversionConfig::default(),
        }
    }

    #[wasm_bindgen]
    pub fn set_width(&mut self, width: u32) {
        self.config.width = width;
    }

    #[wasm_bindgen]
    pub fn set_contrast(&mut self, contrast: f32) {
        self.config.contrast = contrast;
    }

    #[wasm_bindgen]
    pub fn set_charset(&mut self, name: String) {
        if !self.registry.contains(&name) {
            web_sys::console::warn_1(
                &format!("unknown charset '{}', using '{}'", name, DEFAULT_CHARSET).into(),
            );
        }
        self.config.charset = name;
    }

    /// Register an extra character set, e.g. from a user-supplied ramp
    #[wasm_bindgen]
    pub fn add_charset(&mut self, name: String, ramp: String) {
        self.registry = std::mem::take(&mut self.registry).with_set(&name, &ramp);
    }

    #[wasm_bindgen]
    pub fn charset_names(&self) -> Vec<String> {
        self.registry.iter().map(|s| s.name().to_string()).collect()
    }

    /// Convert an encoded image file (PNG, JPEG, ...)
    #[wasm_bindgen]
    pub fn convert_bytes(&self, bytes: &[u8]) -> Result<String, JsValue> {
        Converter::new(&self.registry, self.config.clone())
            .convert_bytes(bytes)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Convert raw RGBA canvas data
    #[wasm_bindgen]
    pub fn convert_rgba(&self, image_data: &[u8], width: u32, height: u32) -> Result<String, JsValue> {
        let image = loader::from_rgba(image_data, width, height)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Converter::new(&self.registry, self.config.clone())
            .convert(&image)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl Default for WasmConverter {
    fn default() -> Self {
        Self::new()
    }
}
