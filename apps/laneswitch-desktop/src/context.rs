use laneswitch_game::{DrawData, FrameClock, Game};
use laneswitch_input::{Action, Key, KeyboardSource, Subscription, install_input};
use laneswitch_render::render_frame;
use laneswitch_render_wgpu::{RenderError, WgpuRenderer};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Instant;
use winit::window::Window;

/// Game plus its input wiring and frame clock. No GPU involved.
pub struct Simulation {
    game: Game,
    clock: FrameClock,
    keyboard: KeyboardSource,
    pending: Rc<RefCell<Vec<Action>>>,
    input: Subscription,
}

impl Simulation {
    pub fn new(start: Instant) -> Self {
        let keyboard = KeyboardSource::new();
        let pending = Rc::new(RefCell::new(Vec::new()));
        let sink = pending.clone();
        let input = install_input(&keyboard, move |action| sink.borrow_mut().push(action));
        Self {
            game: Game::new(),
            clock: FrameClock::starting_at(start),
            keyboard,
            pending,
            input,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Feed one key-down through the input adapter and apply the resulting
    /// actions before returning.
    pub fn key_down(&mut self, key: &Key) {
        self.keyboard.key_down(key);
        let actions = std::mem::take(&mut *self.pending.borrow_mut());
        for action in actions {
            tracing::debug!(%action, "action");
            self.game.handle_action(&action);
        }
    }

    /// Advance the game to `now` with a clamped delta.
    pub fn step(&mut self, now: Instant) -> DrawData {
        let dt = self.clock.tick(now);
        self.game.update(dt);
        self.game.draw_data()
    }

    pub fn shutdown(&mut self) {
        self.input.unsubscribe();
    }
}

/// Everything the frame loop needs, built once when the window exists and
/// owned by the application handler.
pub struct AppContext {
    sim: Simulation,
    renderer: WgpuRenderer,
    status: String,
}

impl AppContext {
    pub fn new(window: Arc<Window>) -> Result<Self, RenderError> {
        let renderer = WgpuRenderer::new(window)?;
        renderer.window().set_title("laneswitch: GPU OK");
        Ok(Self {
            sim: Simulation::new(Instant::now()),
            renderer,
            status: String::new(),
        })
    }

    pub fn window(&self) -> &Window {
        self.renderer.window()
    }

    pub fn key_down(&mut self, key: &Key) {
        self.sim.key_down(key);
    }

    /// One frame: resize check, simulate, draw, present, status.
    pub fn frame(&mut self, now: Instant) {
        self.renderer.resize_to_display_size();
        let data = self.sim.step(now);
        render_frame(&data, &mut self.renderer);
        self.renderer.present();

        let status = data.status_line();
        if status != self.status {
            self.renderer.window().set_title(&format!("laneswitch: {status}"));
            self.status = status;
        }
    }

    pub fn shutdown(&mut self) {
        self.sim.shutdown();
        tracing::info!(status = %self.status, "shutting down");
    }
}
