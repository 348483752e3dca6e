mod context;

use anyhow::Result;
use clap::Parser;
use context::AppContext;
use laneswitch_input::Key;
use std::sync::Arc;
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{Key as WinitKey, NamedKey};
use winit::window::{Window, WindowId};

#[derive(Parser)]
#[command(name = "laneswitch-desktop", about = "Lane-switching car game")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Initial window width in logical pixels
    #[arg(long, default_value = "540")]
    width: u32,

    /// Initial window height in logical pixels
    #[arg(long, default_value = "720")]
    height: u32,
}

struct LaneApp {
    size: LogicalSize<u32>,
    context: Option<AppContext>,
    startup_error: Option<anyhow::Error>,
}

impl LaneApp {
    fn new(width: u32, height: u32) -> Self {
        Self {
            size: LogicalSize::new(width, height),
            context: None,
            startup_error: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        tracing::error!("startup failed: {err:#}");
        self.startup_error = Some(err);
        event_loop.exit();
    }
}

impl ApplicationHandler for LaneApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.context.is_some() || self.startup_error.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title("laneswitch")
            .with_inner_size(self.size);
        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => return self.fail(event_loop, e.into()),
        };

        match AppContext::new(window.clone()) {
            Ok(ctx) => {
                tracing::info!("renderer ready");
                ctx.window().request_redraw();
                self.context = Some(ctx);
            }
            Err(e) => {
                window.set_title(&format!("laneswitch: {e}"));
                self.fail(event_loop, e.into());
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(ctx) = &mut self.context else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                ctx.shutdown();
                event_loop.exit();
            }
            WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. } => {
                ctx.window().request_redraw();
            }
            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                ctx.key_down(&key_from_winit(&event.logical_key));
            }
            WindowEvent::RedrawRequested => {
                ctx.frame(Instant::now());
                ctx.window().request_redraw();
            }
            _ => {}
        }
    }
}

/// Translate winit's logical key into the input adapter's key identity.
fn key_from_winit(key: &WinitKey) -> Key {
    match key {
        WinitKey::Named(NamedKey::ArrowLeft) => Key::ArrowLeft,
        WinitKey::Named(NamedKey::ArrowRight) => Key::ArrowRight,
        WinitKey::Character(s) => Key::Character(s.to_string()),
        _ => Key::Other,
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    tracing::info!("laneswitch-desktop starting");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = LaneApp::new(cli.width, cli.height);
    event_loop.run_app(&mut app)?;

    match app.startup_error {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
