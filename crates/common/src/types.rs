use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Straight (non-premultiplied) RGBA color, each channel in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color(pub [f32; 4]);

impl Color {
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self([r, g, b, a])
    }

    pub fn r(self) -> f32 {
        self.0[0]
    }

    pub fn g(self) -> f32 {
        self.0[1]
    }

    pub fn b(self) -> f32 {
        self.0[2]
    }

    pub fn a(self) -> f32 {
        self.0[3]
    }
}

/// A single immediate rectangle draw command.
///
/// `center` and `size` are in clip-space units (roughly -1..+1 on both axes),
/// independent of the surface's pixel resolution. The rectangle is axis-aligned
/// and centered on `center`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawRect {
    pub center: Vec2,
    pub size: Vec2,
    pub color: Color,
}

impl DrawRect {
    pub fn new(x: f32, y: f32, w: f32, h: f32, color: Color) -> Self {
        Self {
            center: Vec2::new(x, y),
            size: Vec2::new(w, h),
            color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_channels() {
        let c = Color::rgba(0.1, 0.2, 0.3, 0.4);
        assert_eq!(c.r(), 0.1);
        assert_eq!(c.g(), 0.2);
        assert_eq!(c.b(), 0.3);
        assert_eq!(c.a(), 0.4);
    }

    #[test]
    fn rect_new_sets_center_and_size() {
        let r = DrawRect::new(0.5, -0.5, 1.0, 0.25, Color::rgba(1.0, 1.0, 1.0, 1.0));
        assert_eq!(r.center, Vec2::new(0.5, -0.5));
        assert_eq!(r.size, Vec2::new(1.0, 0.25));
    }
}
