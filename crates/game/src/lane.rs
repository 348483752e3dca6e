use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two fixed horizontal slots the car can occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lane {
    Left,
    Right,
}

impl Lane {
    pub fn name(self) -> &'static str {
        match self {
            Lane::Left => "left",
            Lane::Right => "right",
        }
    }
}

impl fmt::Display for Lane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Horizontal clip-space position of each lane. Fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaneRegistry {
    left: f64,
    right: f64,
}

impl LaneRegistry {
    pub fn new(left: f64, right: f64) -> Self {
        Self { left, right }
    }

    pub fn x(&self, lane: Lane) -> f64 {
        match lane {
            Lane::Left => self.left,
            Lane::Right => self.right,
        }
    }

    pub fn left(&self) -> f64 {
        self.left
    }

    pub fn right(&self) -> f64 {
        self.right
    }
}

impl Default for LaneRegistry {
    fn default() -> Self {
        Self::new(-0.35, 0.35)
    }
}
