use bytemuck::{Pod, Zeroable};
use laneswitch_common::DrawRect;

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct QuadVertex {
    pub position: [f32; 2],
}

/// Unit quad centered at the origin, extent ±0.5: two triangles, six vertices.
#[rustfmt::skip]
pub const UNIT_QUAD: [QuadVertex; 6] = [
    QuadVertex { position: [-0.5, -0.5] },
    QuadVertex { position: [ 0.5, -0.5] },
    QuadVertex { position: [-0.5,  0.5] },
    QuadVertex { position: [-0.5,  0.5] },
    QuadVertex { position: [ 0.5, -0.5] },
    QuadVertex { position: [ 0.5,  0.5] },
];

/// Per-draw uniform block. Layout matches `RectUniform` in the WGSL shader.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct RectUniform {
    pub translate: [f32; 2],
    pub scale: [f32; 2],
    pub color: [f32; 4],
}

impl RectUniform {
    pub const SIZE: u64 = std::mem::size_of::<Self>() as u64;

    pub fn from_rect(rect: &DrawRect) -> Self {
        Self {
            translate: rect.center.to_array(),
            scale: rect.size.to_array(),
            color: rect.color.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use laneswitch_common::Color;

    #[test]
    fn unit_quad_spans_half_extent() {
        for v in UNIT_QUAD {
            assert!(v.position.iter().all(|c| c.abs() == 0.5));
        }
        let area: f32 = UNIT_QUAD
            .chunks(3)
            .map(|t| {
                let [a, b, c] = [t[0].position, t[1].position, t[2].position];
                ((b[0] - a[0]) * (c[1] - a[1]) - (c[0] - a[0]) * (b[1] - a[1])) * 0.5
            })
            .sum();
        assert_eq!(area, 1.0);
    }

    #[test]
    fn uniform_matches_wgsl_layout() {
        assert_eq!(RectUniform::SIZE, 32);
        assert_eq!(std::mem::align_of::<RectUniform>(), 4);
    }

    #[test]
    fn uniform_from_rect() {
        let rect = DrawRect::new(0.25, -0.6, 0.18, 0.28, Color::rgba(0.9, 0.2, 0.25, 1.0));
        let u = RectUniform::from_rect(&rect);
        assert_eq!(u.translate, [0.25, -0.6]);
        assert_eq!(u.scale, [0.18, 0.28]);
        assert_eq!(u.color, [0.9, 0.2, 0.25, 1.0]);

        let bytes = bytemuck::bytes_of(&u);
        assert_eq!(bytes.len(), 32);
        assert_eq!(&bytes[..4], &0.25f32.to_ne_bytes());
    }
}
