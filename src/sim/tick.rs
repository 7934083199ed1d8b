//! Fixed timestep simulation tick
//!
//! Core game loop that advances a session by one step.

use super::collision::any_overlap;
use super::random::RandomSource;
use super::state::{GameEvent, GameOverCause, GameSession, SessionPhase};

/// Discrete, edge-triggered input commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Left key pressed
    MoveLeft,
    /// Left key released
    StopLeft,
    /// Right key pressed
    MoveRight,
    /// Right key released
    StopRight,
    Jump,
    /// Start over after a game over
    Restart,
}

/// Advance the session by one tick
///
/// Commands are applied in arrival order before anything moves. Commands that
/// don't apply to the current phase are dropped. A session that starts the
/// tick in `GameOver` only handles commands; nothing is simulated.
pub fn tick<R: RandomSource>(session: &mut GameSession<R>, commands: &[Command]) {
    session.events.clear();
    let was_playing = session.phase == SessionPhase::Playing;

    for &command in commands {
        apply_command(session, command);
    }

    if was_playing && session.phase == SessionPhase::Playing {
        simulate(session);
    }
}

fn apply_command<R: RandomSource>(session: &mut GameSession<R>, command: Command) {
    match (session.phase, command) {
        (SessionPhase::Playing, Command::MoveLeft) => session.agent.go_left(),
        (SessionPhase::Playing, Command::StopLeft) => session.agent.release_left(),
        (SessionPhase::Playing, Command::MoveRight) => session.agent.go_right(),
        (SessionPhase::Playing, Command::StopRight) => session.agent.release_right(),
        (SessionPhase::Playing, Command::Jump) => {
            let floor_y = session.config().viewport.height;
            if session.agent.jump(&session.world.platforms, floor_y) {
                session.events.push(GameEvent::Jumped);
            }
        }
        (SessionPhase::GameOver, Command::Restart) => session.reset(),
        (phase, command) => log::trace!("Ignoring {command:?} while {phase:?}"),
    }
}

fn simulate<R: RandomSource>(session: &mut GameSession<R>) {
    let config = *session.config();
    session.time_ticks += 1;

    // Runner physics against the current platform set
    session.agent.step(&session.world.platforms);

    // Level: hazards patrol, scroll, extend, retire
    let step = session.world.update(&mut session.agent, &mut session.rng);
    if let Some(chunk) = step.new_chunk {
        session.events.push(GameEvent::ChunkGenerated {
            start_x: chunk.start_x,
        });
    }

    session.particles.update();

    // Coin pickup
    let body = session.agent.rect;
    let mut taken = Vec::new();
    session.world.collectibles.retain(|coin| {
        if coin.rect.overlaps(&body) {
            taken.push(coin.rect.center());
            false
        } else {
            true
        }
    });
    for center in taken {
        session.score += config.pickup_score;
        session
            .particles
            .burst(center, &config.particles, &mut session.rng);
        session.events.push(GameEvent::CollectibleTaken { center });
    }

    // Terminal conditions
    if any_overlap(&body, &session.world.hazards) {
        game_over(session, GameOverCause::HazardContact);
    } else if body.top() >= config.viewport.height {
        game_over(session, GameOverCause::FellOut);
    }
}

fn game_over<R: RandomSource>(session: &mut GameSession<R>, cause: GameOverCause) {
    session.phase = SessionPhase::GameOver;
    session.events.push(GameEvent::GameOver { cause });
    log::info!(
        "Game over ({:?}) with score {} after {} ticks",
        cause,
        session.score,
        session.time_ticks
    );
}
