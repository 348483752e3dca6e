//! The fixed road scene drawn every frame.

use crate::renderer::RectRenderer;
use glam::Vec2;
use laneswitch_common::{Color, DrawRect};
use laneswitch_game::DrawData;

/// Color the surface is cleared to before the scene is drawn.
pub const CLEAR_COLOR: Color = Color::rgba(0.07, 0.07, 0.08, 1.0);

/// Number of rects [`compose_scene`] emits per frame.
pub const SCENE_DRAW_COUNT: usize = 7;

pub mod palette {
    use laneswitch_common::Color;

    pub const ROAD: Color = Color::rgba(0.12, 0.12, 0.13, 1.0);
    pub const LANE: Color = Color::rgba(0.16, 0.16, 0.18, 1.0);
    pub const DIVIDER: Color = Color::rgba(0.75, 0.75, 0.75, 0.25);
    pub const SHADOW: Color = Color::rgba(0.0, 0.0, 0.0, 0.35);
    pub const CAR_BODY: Color = Color::rgba(0.9, 0.2, 0.25, 1.0);
    pub const WINDSHIELD: Color = Color::rgba(0.7, 0.85, 0.95, 0.9);
}

const ROAD_SIZE: Vec2 = Vec2::new(1.4, 1.9);
const LANE_SIZE: Vec2 = Vec2::new(0.55, 1.8);
const DIVIDER_SIZE: Vec2 = Vec2::new(0.02, 1.8);
const SHADOW_OFFSET: Vec2 = Vec2::new(0.03, -0.03);
const WINDSHIELD_RISE: f32 = 0.06;

/// Emit the scene in back-to-front order: road, both lane strips, center
/// divider, then the car's shadow, body and windshield.
pub fn compose_scene(data: &DrawData, out: &mut impl RectRenderer) {
    let rect = |center: Vec2, size: Vec2, color: Color| DrawRect {
        center,
        size,
        color,
    };

    out.draw_rect(&rect(Vec2::ZERO, ROAD_SIZE, palette::ROAD));

    let left = Vec2::new(data.lanes.left() as f32, 0.0);
    let right = Vec2::new(data.lanes.right() as f32, 0.0);
    out.draw_rect(&rect(left, LANE_SIZE, palette::LANE));
    out.draw_rect(&rect(right, LANE_SIZE, palette::LANE));

    out.draw_rect(&rect(Vec2::ZERO, DIVIDER_SIZE, palette::DIVIDER));

    let car_pos = Vec2::new(data.car.x as f32, data.car.y as f32);
    let car_size = Vec2::new(data.car.w as f32, data.car.h as f32);

    out.draw_rect(&rect(car_pos + SHADOW_OFFSET, car_size, palette::SHADOW));
    out.draw_rect(&rect(car_pos, car_size, palette::CAR_BODY));
    out.draw_rect(&rect(
        car_pos + Vec2::new(0.0, WINDSHIELD_RISE),
        car_size * Vec2::new(0.7, 0.25),
        palette::WINDSHIELD,
    ));
}

/// One full frame: clear, then the scene.
pub fn render_frame(data: &DrawData, out: &mut impl RectRenderer) {
    out.clear(CLEAR_COLOR);
    compose_scene(data, out);
    tracing::trace!(rects = SCENE_DRAW_COUNT, "scene composed");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::DebugTextRenderer;
    use laneswitch_game::Game;
    use laneswitch_input::Action;

    fn frame_for(game: &Game) -> DebugTextRenderer {
        let mut out = DebugTextRenderer::new();
        render_frame(&game.draw_data(), &mut out);
        out
    }

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a - b).abs().max_element() < 1e-6
    }

    #[test]
    fn frame_clears_then_draws_fixed_count() {
        let out = frame_for(&Game::new());
        assert_eq!(out.clear_color(), Some(CLEAR_COLOR));
        assert_eq!(out.rects().len(), SCENE_DRAW_COUNT);
    }

    #[test]
    fn scenery_comes_first_in_order() {
        let out = frame_for(&Game::new());
        let rects = out.rects();
        assert_eq!(rects[0].color, palette::ROAD);
        assert_eq!(rects[0].size, ROAD_SIZE);
        assert_eq!(rects[1].color, palette::LANE);
        assert!(approx(rects[1].center, Vec2::new(-0.35, 0.0)));
        assert_eq!(rects[2].color, palette::LANE);
        assert!(approx(rects[2].center, Vec2::new(0.35, 0.0)));
        assert_eq!(rects[3].color, palette::DIVIDER);
        assert_eq!(rects[3].center, Vec2::ZERO);
    }

    #[test]
    fn car_layers_follow_car_position() {
        let mut game = Game::new();
        game.handle_action(&Action::LaneRight);
        game.update(0.05);
        let x = game.current_x() as f32;

        let out = frame_for(&game);
        let rects = out.rects();
        let (shadow, body, windshield) = (rects[4], rects[5], rects[6]);

        assert_eq!(body.color, palette::CAR_BODY);
        assert!(approx(body.center, Vec2::new(x, -0.6)));
        assert!(approx(body.size, Vec2::new(0.18, 0.28)));

        assert_eq!(shadow.color, palette::SHADOW);
        assert!(approx(shadow.center, body.center + SHADOW_OFFSET));
        assert_eq!(shadow.size, body.size);

        assert_eq!(windshield.color, palette::WINDSHIELD);
        assert!(approx(windshield.center, Vec2::new(x, -0.54)));
        assert!(approx(windshield.size, Vec2::new(0.126, 0.07)));
    }

    #[test]
    fn scenery_does_not_move_with_car() {
        let parked = frame_for(&Game::new());
        let mut game = Game::new();
        game.handle_action(&Action::LaneRight);
        game.update(1.0);
        let moved = frame_for(&game);

        assert_eq!(&parked.rects()[..4], &moved.rects()[..4]);
        assert_ne!(parked.rects()[5], moved.rects()[5]);
    }
}
