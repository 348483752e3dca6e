//! Game state: lanes, the car, and the target lane the car is smoothing toward.
//!
//! # Invariants
//! - The target lane changes only through [`Game::handle_action`].
//! - The car's current x is always finite.
//! - Smoothing is frame-rate independent: one step of `dt` equals any split of `dt`.
//! - No graphics calls; renderers only read [`DrawData`].

pub mod game;
pub mod lane;
pub mod timing;

pub use game::{CarRect, DrawData, Game, GameConfig};
pub use lane::{Lane, LaneRegistry};
pub use timing::{FrameClock, MAX_FRAME_DT, clamp_frame_dt};
