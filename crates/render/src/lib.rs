//! Rendering adapter: renderer-agnostic rect interface and scene composition.
//!
//! # Invariants
//! - Renderers never mutate game state; they only read [`DrawData`](laneswitch_game::DrawData).
//! - Draw order is fixed: scenery first, then the car from back to front.
//! - Coordinates are clip-space units, independent of surface resolution.

mod renderer;
mod scene;

pub use renderer::{DebugTextRenderer, RectRenderer};
pub use scene::{CLEAR_COLOR, SCENE_DRAW_COUNT, compose_scene, palette, render_frame};

pub fn crate_info() -> &'static str {
    "laneswitch-render v0.1.0"
}
