//! Shared value types passed between the simulation and the renderers.

pub mod types;

pub use types::{Color, DrawRect};
