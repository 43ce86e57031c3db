//! Platform adapters
//!
//! Native builds draw into [`crate::surface::RecordingSurface`] and need
//! nothing from here. In the browser, [`web`] provides the canvas surface, DOM
//! input wiring, the animation-frame loop and image loading.

#[cfg(target_arch = "wasm32")]
pub mod web;
