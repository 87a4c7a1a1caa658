#![cfg_attr(target_arch = "wasm32", allow(dead_code))]

//! Animated particle field background for a webpage.
//!
//! The animation core is plain Rust and builds on every target; the WebGL2
//! renderer and browser wiring only compile for wasm32.

pub mod animator;
pub mod color;
pub mod config;
pub mod error;
pub mod field;
pub mod pointer;
pub mod view;

pub use animator::{Animator, FrameView, HostEvent, Renderer};
pub use color::Theme;
pub use config::FieldConfig;
pub use error::InitError;
pub use field::ParticleField;

/// Id of the canvas the background draws into.
pub const CANVAS_ID: &str = "three-canvas";
/// Id of the overlay that receives the fallback message.
pub const OVERLAY_ID: &str = "ui-overlay";
/// Notice placed in the overlay when the background cannot start.
pub const FALLBACK_MESSAGE: &str = "3D background failed to load. Displaying 2D UI only.";

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
mod wasm {
    use anyhow::Context;
    use wasm_bindgen::prelude::*;

    mod fallback;
    mod host;
    mod render;

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();

        if let Err(e) = host::start(super::CANVAS_ID).context("particle background initialization failed") {
            log::error!("{:#}", e);
            fallback::show(super::CANVAS_ID, super::OVERLAY_ID);
        }
        Ok(())
    }

    /// Start the background on another canvas, e.g. one added after load.
    #[wasm_bindgen(js_name = startBackground)]
    pub fn start_background(canvas_id: &str) -> Result<(), JsValue> {
        host::start(canvas_id).map_err(JsValue::from)
    }

    /// Swap the background for the static notice shown when startup fails.
    #[wasm_bindgen(js_name = showFallback)]
    pub fn show_fallback(canvas_id: &str, overlay_id: &str) {
        fallback::show(canvas_id, overlay_id);
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm::{show_fallback, start_background};

// When compiling for non-wasm targets (e.g., `cargo test` on host),
// provide an empty stub so the crate still builds.
#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
