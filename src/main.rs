//! Block Breaker headless runner
//!
//! Drives the simulation at 60 Hz virtual time with the autopilot on the
//! paddle and reports how the run went. Rendering is left to a real frontend.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use block_breaker::Tuning;
use block_breaker::consts::FRAME_DT;
use block_breaker::sim::{GameEvent, GameState, TickInput, tick};

#[derive(Parser, Debug)]
#[command(name = "block-breaker", about = "Run the brick-breaker simulation headless")]
struct Args {
    /// Run seed
    #[arg(long, default_value_t = 1)]
    seed: u64,
    /// Stop after this many frames even if the run is still going
    #[arg(long, default_value_t = 60 * 60 * 10)]
    frames: u64,
    /// JSON tuning file (missing fields use defaults, a bad file falls back entirely)
    #[arg(long)]
    tuning: Option<PathBuf>,
    /// Print the final render snapshot as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let tuning = match &args.tuning {
        Some(path) => {
            let (tuning, err) = Tuning::load_or_default(path);
            if let Some(err) = err {
                eprintln!("Ignoring tuning file: {err}");
            }
            tuning
        }
        None => Tuning::default(),
    };
    log::info!(
        "Block Breaker starting: seed {}, effect policy {}",
        args.seed,
        tuning.effect_policy.as_str()
    );

    let mut state = GameState::with_tuning(tuning, args.seed);
    let input = TickInput {
        idle_mode: true,
        ..Default::default()
    };

    let mut bricks = 0u64;
    let mut pickups = 0u64;
    let mut final_score = None;
    for _ in 0..args.frames {
        for event in tick(&mut state, &input, FRAME_DT) {
            match event {
                GameEvent::BrickDestroyed { .. } => bricks += 1,
                GameEvent::ItemCollected { kind } => {
                    pickups += 1;
                    log::debug!("Frame {}: picked up {:?}", state.frame, kind);
                }
                GameEvent::LevelCleared { level } => {
                    log::info!("Frame {}: reached level {}", state.frame, level);
                }
                GameEvent::RunOver { final_score: score } => final_score = Some(score),
                _ => {}
            }
        }
        if final_score.is_some() {
            break;
        }
    }

    match final_score {
        Some(score) => println!(
            "GAME OVER - final score {} (level {}, {} frames)",
            score,
            state.level(),
            state.frame
        ),
        None => println!(
            "Stopped after {} frames - score {}, level {}, lives {}",
            state.frame,
            state.score(),
            state.level(),
            state.lives()
        ),
    }
    println!("Bricks destroyed: {}, items collected: {}", bricks, pickups);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&state.snapshot())?);
    }

    Ok(())
}
