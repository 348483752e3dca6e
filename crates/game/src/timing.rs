use std::time::Instant;

/// Largest simulation step a single frame may take, in seconds.
///
/// Bounds the step after a stall (window hidden, debugger pause) so the car
/// never jumps in one frame.
pub const MAX_FRAME_DT: f64 = 0.05;

/// Clamp a raw frame delta into `[0, MAX_FRAME_DT]`. NaN maps to zero.
pub fn clamp_frame_dt(seconds: f64) -> f64 {
    if seconds.is_nan() {
        return 0.0;
    }
    seconds.clamp(0.0, MAX_FRAME_DT)
}

/// Wall-clock frame timer yielding clamped deltas.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    last: Instant,
}

impl FrameClock {
    pub fn starting_at(last: Instant) -> Self {
        Self { last }
    }

    /// Seconds since the previous tick, clamped. `now` earlier than the previous
    /// tick yields zero.
    pub fn tick(&mut self, now: Instant) -> f64 {
        let raw = now.saturating_duration_since(self.last).as_secs_f64();
        self.last = now;
        clamp_frame_dt(raw)
    }
}
