/// WGSL shader for flat-colored rects.
///
/// `pos` is a unit-quad corner (extent ±0.5); the per-draw uniform scales and
/// translates it straight into clip space.
pub const RECT_SHADER: &str = r#"
struct RectUniform {
    translate: vec2<f32>,
    scale: vec2<f32>,
    color: vec4<f32>,
};

@group(0) @binding(0)
var<uniform> rect: RectUniform;

@vertex
fn vs_main(@location(0) pos: vec2<f32>) -> @builtin(position) vec4<f32> {
    let p = pos * rect.scale + rect.translate;
    return vec4<f32>(p, 0.0, 1.0);
}

@fragment
fn fs_main() -> @location(0) vec4<f32> {
    return rect.color;
}
"#;

pub const VS_ENTRY: &str = "vs_main";
pub const FS_ENTRY: &str = "fs_main";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_points_exist() {
        assert!(RECT_SHADER.contains(&format!("fn {VS_ENTRY}(")));
        assert!(RECT_SHADER.contains(&format!("fn {FS_ENTRY}(")));
    }
}
