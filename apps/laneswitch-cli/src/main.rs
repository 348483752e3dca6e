use clap::{Parser, Subcommand};
use laneswitch_game::{DrawData, Game, GameConfig, MAX_FRAME_DT, clamp_frame_dt};
use laneswitch_input::{Action, Key, KeyboardSource, install_input};
use laneswitch_render::{DebugTextRenderer, render_frame};
use serde::Serialize;
use std::cell::RefCell;
use std::convert::Infallible;
use std::rc::Rc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "laneswitch-cli", about = "Headless runner for the lane game")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print crate info and the default game constants
    Info,
    /// Step the simulation headlessly and print each frame
    Simulate(SimulateArgs),
}

#[derive(clap::Args, Debug, Clone)]
struct SimulateArgs {
    /// Actions applied before the first frame (LANE_LEFT, LANE_RIGHT; any other
    /// tag is an unrecognized action and is ignored)
    #[arg(short, long, value_delimiter = ',', value_parser = parse_action)]
    actions: Vec<Action>,

    /// Key-downs fed through the keyboard adapter before the first frame
    /// (ArrowLeft, ArrowRight, or a single character)
    #[arg(short, long, value_delimiter = ',')]
    keys: Vec<String>,

    /// Number of frames to step
    #[arg(short, long, default_value = "10")]
    frames: u32,

    /// Seconds per frame
    #[arg(long, default_value = "0.1")]
    dt: f64,

    /// Clamp each step to the desktop loop's maximum frame delta
    #[arg(long)]
    clamp: bool,

    /// Print one JSON object per frame instead of status lines
    #[arg(long)]
    json: bool,

    /// Print the final frame's draw commands
    #[arg(long)]
    scene: bool,
}

#[derive(Debug, Serialize)]
struct FrameRecord {
    frame: u32,
    elapsed: f64,
    draw: DrawData,
}

fn parse_action(tag: &str) -> Result<Action, Infallible> {
    Ok(Action::from_tag(tag))
}

fn parse_key(name: &str) -> Key {
    match name {
        "ArrowLeft" => Key::ArrowLeft,
        "ArrowRight" => Key::ArrowRight,
        s if s.chars().count() == 1 => Key::Character(s.to_string()),
        _ => Key::Other,
    }
}

/// Apply the scripted input, then step `frames` times. Returns the final game
/// alongside one record per frame.
fn run_simulation(args: &SimulateArgs) -> (Game, Vec<FrameRecord>) {
    let mut game = Game::new();

    for action in &args.actions {
        game.handle_action(action);
    }

    if !args.keys.is_empty() {
        let keyboard = KeyboardSource::new();
        let pending = Rc::new(RefCell::new(Vec::new()));
        let sink = pending.clone();
        let mut sub = install_input(&keyboard, move |a| sink.borrow_mut().push(a));
        for name in &args.keys {
            keyboard.key_down(&parse_key(name));
        }
        sub.unsubscribe();
        for action in pending.borrow().iter() {
            game.handle_action(action);
        }
    }

    let dt = if args.clamp {
        clamp_frame_dt(args.dt)
    } else {
        args.dt
    };
    tracing::debug!(dt, frames = args.frames, target = %game.target_lane(), "simulating");

    let mut elapsed = 0.0;
    let mut records = Vec::with_capacity(args.frames as usize);
    for frame in 1..=args.frames {
        game.update(dt);
        elapsed += dt;
        records.push(FrameRecord {
            frame,
            elapsed,
            draw: game.draw_data(),
        });
    }
    (game, records)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Info => {
            let config = GameConfig::default();
            println!("laneswitch-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("input: {}", laneswitch_input::crate_info());
            println!("render: {}", laneswitch_render::crate_info());
            println!(
                "lanes: left={} right={}",
                config.lanes.left(),
                config.lanes.right()
            );
            println!(
                "car: y={} w={} h={}",
                config.car_y, config.car_w, config.car_h
            );
            println!("lane snap speed: {}/s", config.lane_snap_speed);
            println!("max frame dt: {MAX_FRAME_DT}s");
        }
        Commands::Simulate(args) => {
            let (game, records) = run_simulation(&args);
            for record in &records {
                if args.json {
                    println!("{}", serde_json::to_string(record)?);
                } else {
                    println!(
                        "frame {:>4} t={:.3}s {}",
                        record.frame,
                        record.elapsed,
                        record.draw.status_line()
                    );
                }
            }
            if args.scene {
                let mut out = DebugTextRenderer::new();
                render_frame(&game.draw_data(), &mut out);
                print!("{}", out.to_text());
            }
        }
    }

    Ok(())
}
