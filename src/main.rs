//! Robo Runner headless driver
//!
//! Runs the simulation without a window: an autopilot holds right, jumps on a
//! fixed schedule and restarts after every game over. Prints the final
//! snapshot as JSON.
//!
//! Usage: `robo-runner [seed] [ticks]`. Set `RUNNER_CONFIG` to a JSON file to
//! override the default tuning.

use std::error::Error;

use robo_runner::RunnerConfig;
use robo_runner::sim::{Command, GameEvent, GameSession, SessionPhase};

/// Ticks between autopilot jump attempts
const JUMP_EVERY: u64 = 45;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = match args.next() {
        Some(arg) => arg.parse()?,
        None => rand::random(),
    };
    let ticks: u64 = match args.next() {
        Some(arg) => arg.parse()?,
        None => 3600,
    };

    let config = match std::env::var("RUNNER_CONFIG") {
        Ok(path) => RunnerConfig::from_json(&std::fs::read_to_string(&path)?)?,
        Err(_) => RunnerConfig::default(),
    };

    log::info!("Robo Runner (headless) starting with seed {seed} for {ticks} ticks");
    let mut session = GameSession::new(config, seed)?;

    let mut runs = 1u32;
    let mut best = 0u64;
    let mut commands = vec![Command::MoveRight];

    for t in 0..ticks {
        session.advance(&commands);
        commands.clear();

        for event in &session.events {
            match event {
                GameEvent::GameOver { cause } => {
                    log::info!("Run {runs} ended ({cause:?}), score {}", session.score)
                }
                GameEvent::Restarted => runs += 1,
                GameEvent::CollectibleTaken { .. } => log::debug!("Coin! score {}", session.score),
                _ => {}
            }
        }
        best = best.max(session.score);

        match session.phase {
            SessionPhase::GameOver => commands.extend([Command::Restart, Command::MoveRight]),
            SessionPhase::Playing if t % JUMP_EVERY == 0 => commands.push(Command::Jump),
            SessionPhase::Playing => {}
        }
    }

    log::info!("Finished {ticks} ticks over {runs} runs, best score {best}");
    println!("{}", serde_json::to_string_pretty(&session.snapshot())?);
    Ok(())
}
