use laneswitch_common::{Color, DrawRect};

/// Renderer-agnostic rect interface. All renderers implement this trait.
///
/// A frame is one `clear` followed by any number of `draw_rect` calls, drawn in
/// call order. Draw commands are consumed immediately and never retained across
/// frames.
pub trait RectRenderer {
    /// Set the clear color for the frame and clear the color target.
    fn clear(&mut self, color: Color);

    /// Draw one axis-aligned, flat-colored rectangle.
    fn draw_rect(&mut self, rect: &DrawRect);
}

/// Debug text renderer: records a frame's commands as readable text.
///
/// Used by the headless runner and by tests of the scene composition.
#[derive(Debug, Default)]
pub struct DebugTextRenderer {
    clear: Option<Color>,
    rects: Vec<DrawRect>,
}

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rects drawn since the last `clear`, in draw order.
    pub fn rects(&self) -> &[DrawRect] {
        &self.rects
    }

    pub fn clear_color(&self) -> Option<Color> {
        self.clear
    }

    pub fn to_text(&self) -> String {
        let mut out = String::new();
        match self.clear {
            Some(c) => out.push_str(&format!(
                "clear rgba=({:.2}, {:.2}, {:.2}, {:.2})\n",
                c.r(),
                c.g(),
                c.b(),
                c.a()
            )),
            None => out.push_str("clear (none)\n"),
        }
        out.push_str(&format!("rects: {}\n", self.rects.len()));
        for (i, r) in self.rects.iter().enumerate() {
            let c = r.color;
            out.push_str(&format!(
                "  [{i}] pos=({:.3}, {:.3}) size=({:.3}, {:.3}) rgba=({:.2}, {:.2}, {:.2}, {:.2})\n",
                r.center.x,
                r.center.y,
                r.size.x,
                r.size.y,
                c.r(),
                c.g(),
                c.b(),
                c.a()
            ));
        }
        out
    }
}

impl RectRenderer for DebugTextRenderer {
    fn clear(&mut self, color: Color) {
        self.clear = Some(color);
        self.rects.clear();
    }

    fn draw_rect(&mut self, rect: &DrawRect) {
        self.rects.push(*rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_renderer_empty_frame() {
        let renderer = DebugTextRenderer::new();
        let output = renderer.to_text();
        assert!(output.contains("clear (none)"));
        assert!(output.contains("rects: 0"));
    }

    #[test]
    fn clear_starts_a_new_frame() {
        let mut renderer = DebugTextRenderer::new();
        let white = Color::rgba(1.0, 1.0, 1.0, 1.0);
        renderer.clear(white);
        renderer.draw_rect(&DrawRect::new(0.0, 0.0, 1.0, 1.0, white));
        assert_eq!(renderer.rects().len(), 1);

        renderer.clear(white);
        assert!(renderer.rects().is_empty());
        assert_eq!(renderer.clear_color(), Some(white));
    }

    #[test]
    fn text_lists_rects_in_order() {
        let mut renderer = DebugTextRenderer::new();
        renderer.clear(Color::rgba(0.0, 0.0, 0.0, 1.0));
        renderer.draw_rect(&DrawRect::new(0.1, 0.2, 0.3, 0.4, Color::rgba(1.0, 0.0, 0.0, 1.0)));
        renderer.draw_rect(&DrawRect::new(-0.5, 0.0, 0.5, 0.5, Color::rgba(0.0, 1.0, 0.0, 0.5)));

        let text = renderer.to_text();
        let first = text.find("[0] pos=(0.100, 0.200)").unwrap();
        let second = text.find("[1] pos=(-0.500, 0.000)").unwrap();
        assert!(first < second);
        assert!(text.contains("rects: 2"));
    }

    #[test]
    fn text_is_one_line_per_command() {
        let mut renderer = DebugTextRenderer::new();
        renderer.clear(Color::rgba(0.25, 0.5, 0.75, 1.0));
        renderer.draw_rect(&DrawRect::new(0.0, 0.0, 1.0, 1.0, Color::rgba(1.0, 1.0, 1.0, 1.0)));

        let text = renderer.to_text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "clear rgba=(0.25, 0.50, 0.75, 1.00)");
        assert_eq!(lines[1], "rects: 1");
        assert!(text.ends_with('\n'));
    }
}
