//! Runs a match without a display: a scripted pointer plays the human side,
//! the host serves whenever the ball is at rest, and the final state is
//! printed as JSON.

mod input;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use game_core::{Config, Side, Simulation};

use crate::input::PointerBot;

#[derive(Debug, Parser)]
#[command(name = "pong-headless", about = "Run a Pong match headless")]
struct Args {
    /// JSON config file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Width available to the field (capped at the config's max field width)
    #[arg(long)]
    width: Option<f32>,

    /// Field width / height
    #[arg(long)]
    aspect_ratio: Option<f32>,

    /// Pursuit paddle speed scaling
    #[arg(long)]
    hardness: Option<f32>,

    /// Field width / serve speed
    #[arg(long)]
    serve_speed_divisor: Option<f32>,

    /// Simulated seconds to run
    #[arg(long, default_value_t = 60.0)]
    seconds: f32,

    /// Ticks per simulated second
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// RNG seed for serves and paddle deflections
    #[arg(long, default_value_t = 12345)]
    seed: u64,

    /// Pointer speed of the scripted human player
    #[arg(long, default_value_t = 600.0)]
    pointer_speed: f32,
}

fn load_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => Config::default(),
    };

    if let Some(width) = args.width {
        config = config.fitted(width);
    }
    if let Some(aspect_ratio) = args.aspect_ratio {
        config.aspect_ratio = aspect_ratio;
    }
    if let Some(hardness) = args.hardness {
        config.hardness = hardness;
    }
    if let Some(divisor) = args.serve_speed_divisor {
        config.serve_speed_divisor = divisor;
    }
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    anyhow::ensure!(args.fps > 0, "fps must be positive");

    let config = load_config(&args)?;
    let mut sim = Simulation::with_seed(config, args.seed).context("invalid configuration")?;
    let field = sim.field_size();
    log::info!(
        "field {:.0}x{:.0}, pursuit speed {:.1}, serve speed {:.1}",
        field.x,
        field.y,
        sim.config().pursuit_speed(),
        sim.config().start_speed()
    );

    let dt = 1.0 / args.fps as f32;
    let ticks = (args.seconds * args.fps as f32).round() as u64;
    let mut pointer = PointerBot::new(field.y / 2.0, args.pointer_speed);
    let mut paddle_hits = 0u32;

    for _ in 0..ticks {
        sim.serve();

        let y = pointer.update(&sim, dt);
        sim.set_human_paddle_y(y);
        sim.advance(dt);

        let events = sim.events();
        if events.ball_hit_paddle {
            paddle_hits += 1;
        }
        if events.any_goal() {
            pointer.y = field.y / 2.0;
        }
    }

    log::info!(
        "final score {} - {} after {} ticks, {} paddle hits",
        sim.score(Side::Left),
        sim.score(Side::Right),
        sim.tick(),
        paddle_hits
    );
    println!("{}", serde_json::to_string_pretty(&sim.snapshot())?);
    Ok(())
}
