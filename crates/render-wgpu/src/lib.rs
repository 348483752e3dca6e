//! wgpu render backend for the lane game.
//!
//! Draws flat-colored rects with a single pipeline and one shared unit quad.
//! Each rect gets its own slot in a dynamic-offset uniform buffer
//! (translate, scale, color); geometry is uploaded once and never touched again.
//!
//! # Invariants
//! - Renderer never mutates game state.
//! - The surface is reconfigured only when the backing size actually changes.
//! - Startup failures surface as [`RenderError`]; per-frame work never fails.

mod display;
mod error;
mod geometry;
mod gpu;
mod shaders;

pub use display::{
    MSAA_SAMPLES, align_to, msaa_sample_count, resize_target, slot_capacity, surface_extent,
};
pub use error::RenderError;
pub use geometry::{QuadVertex, RectUniform, UNIT_QUAD};
pub use gpu::WgpuRenderer;
