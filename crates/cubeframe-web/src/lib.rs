//! Cubeframe Web - Browser entry point
//!
//! Builds the Bevy application around `cubeframe-scene` and reads the
//! startup configuration from the page URL.

mod app;
mod config_loader;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging with filtering to reduce wgpu noise
    tracing_wasm::set_as_global_default_with_config(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(tracing::Level::INFO)
            .build()
    );

    // Run the Bevy app
    app::run();
}
