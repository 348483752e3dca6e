use crate::lane::{Lane, LaneRegistry};
use laneswitch_input::Action;
use serde::{Deserialize, Serialize};

/// Fixed parameters of a game. Immutable once the game is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub lanes: LaneRegistry,
    pub car_y: f64,
    pub car_w: f64,
    pub car_h: f64,
    /// Exponential smoothing rate toward the target lane, per second.
    pub lane_snap_speed: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            lanes: LaneRegistry::default(),
            car_y: -0.6,
            car_w: 0.18,
            car_h: 0.28,
            lane_snap_speed: 14.0,
        }
    }
}

/// The car's rectangle in clip-space units, centered on `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarRect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

/// Read-only snapshot of everything a renderer needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawData {
    pub lanes: LaneRegistry,
    pub car: CarRect,
    pub target_lane: Lane,
    pub current_x: f64,
}

impl DrawData {
    /// Human-readable status, e.g. `Lane: LEFT (x=-0.350)`.
    pub fn status_line(&self) -> String {
        format!(
            "Lane: {} (x={:.3})",
            self.target_lane.name().to_ascii_uppercase(),
            self.current_x
        )
    }
}

/// Lane-switching simulation.
///
/// Owns the car exclusively. The target lane moves only in response to lane
/// actions; the car's x follows it every [`Game::update`].
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    target_lane: Lane,
    current_x: f64,
}

impl Game {
    /// New game with the car parked in the left lane.
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    pub fn with_config(config: GameConfig) -> Self {
        Self {
            current_x: config.lanes.x(Lane::Left),
            target_lane: Lane::Left,
            config,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn target_lane(&self) -> Lane {
        self.target_lane
    }

    pub fn current_x(&self) -> f64 {
        self.current_x
    }

    /// Apply a discrete input action. Anything other than a lane action is ignored.
    pub fn handle_action(&mut self, action: &Action) {
        let lane = match action {
            Action::LaneLeft => Lane::Left,
            Action::LaneRight => Lane::Right,
            Action::Noop => return,
        };
        if lane != self.target_lane {
            tracing::debug!(from = %self.target_lane, to = %lane, "target lane changed");
        }
        self.target_lane = lane;
    }

    /// Advance the car `dt` seconds toward the target lane.
    ///
    /// Blends with `k = 1 - exp(-speed * dt)`: `dt = 0` leaves the car in place,
    /// large `dt` snaps it onto the lane, and the result never overshoots.
    /// A negative or non-finite `dt` is treated as zero.
    pub fn update(&mut self, dt: f64) {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        let target_x = self.config.lanes.x(self.target_lane);
        let k = 1.0 - (-self.config.lane_snap_speed * dt).exp();
        self.current_x += (target_x - self.current_x) * k;
    }

    pub fn draw_data(&self) -> DrawData {
        DrawData {
            lanes: self.config.lanes,
            car: CarRect {
                x: self.current_x,
                y: self.config.car_y,
                w: self.config.car_w,
                h: self.config.car_h,
            },
            target_lane: self.target_lane,
            current_x: self.current_x,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
