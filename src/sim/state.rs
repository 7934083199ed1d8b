//! Session state and read-only snapshots
//!
//! A [`GameSession`] owns everything that changes during play. Presentation
//! never touches it directly; it reads a [`Snapshot`] between ticks.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::agent::Agent;
use super::particles::ParticleSystem;
use super::random::{RandomSource, SeededRandom};
use super::rect::{Bounded, Rect};
use super::tick::{Command, tick};
use super::world::World;
use crate::config::RunnerConfig;
use crate::error::ConfigError;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Active gameplay
    Playing,
    /// Run ended; frozen until restart
    GameOver,
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverCause {
    /// Touched a patrolling hazard
    HazardContact,
    /// Fell below the bottom of the viewport
    FellOut,
}

/// Things that happened during the last tick, for audio and effects
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Jumped,
    CollectibleTaken { center: Vec2 },
    ChunkGenerated { start_x: f32 },
    GameOver { cause: GameOverCause },
    Restarted,
}

/// One run of the game: runner, level, effects and score
#[derive(Debug, Clone)]
pub struct GameSession<R = SeededRandom> {
    config: RunnerConfig,
    pub(crate) rng: R,
    pub agent: Agent,
    pub world: World,
    /// Visual effects (not gameplay-affecting)
    pub particles: ParticleSystem,
    pub score: u64,
    pub phase: SessionPhase,
    /// Simulated ticks since the last (re)start
    pub time_ticks: u64,
    /// Events raised by the most recent tick
    pub events: Vec<GameEvent>,
}

impl GameSession<SeededRandom> {
    /// Create a new session whose generation is driven by `seed`
    pub fn new(config: RunnerConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_random(config, SeededRandom::new(seed))
    }

    /// Seed the session was created with
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

impl<R: RandomSource> GameSession<R> {
    /// Create a new session drawing from the given random source
    pub fn with_random(config: RunnerConfig, mut rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let world = World::new(&config, &mut rng);
        log::info!(
            "Session started ({}x{} viewport)",
            config.viewport.width,
            config.viewport.height
        );
        Ok(Self {
            agent: Agent::new(config.agent),
            world,
            particles: ParticleSystem::new(),
            score: 0,
            phase: SessionPhase::Playing,
            time_ticks: 0,
            events: Vec::new(),
            config,
            rng,
        })
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Throw away the current run and start a fresh one
    pub fn reset(&mut self) {
        self.agent = Agent::new(self.config.agent);
        self.world = World::new(&self.config, &mut self.rng);
        self.particles.clear();
        self.score = 0;
        self.time_ticks = 0;
        self.phase = SessionPhase::Playing;
        self.events.push(GameEvent::Restarted);
        log::info!("Session restarted");
    }

    /// Advance one tick, draining `commands` in order first
    pub fn advance(&mut self, commands: &[Command]) {
        tick(self, commands);
    }

    /// Consistent read-only view for presentation
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            score: self.score,
            ticks: self.time_ticks,
            distance: self.world.distance(),
            agent: self.agent.bounds(),
            platforms: bounds_of(&self.world.platforms),
            hazards: bounds_of(&self.world.hazards),
            collectibles: bounds_of(&self.world.collectibles),
            particles: self.particles.iter().map(Bounded::bounds).collect(),
        }
    }
}

fn bounds_of<T: Bounded>(items: &[T]) -> Vec<Rect> {
    items.iter().map(Bounded::bounds).collect()
}

/// Everything presentation needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: SessionPhase,
    pub score: u64,
    pub ticks: u64,
    /// Total distance scrolled this run
    pub distance: f32,
    pub agent: Rect,
    pub platforms: Vec<Rect>,
    pub hazards: Vec<Rect>,
    pub collectibles: Vec<Rect>,
    pub particles: Vec<Rect>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_starts_playing() {
        let session = GameSession::new(RunnerConfig::default(), 12345).unwrap();
        assert_eq!(session.phase, SessionPhase::Playing);
        assert_eq!(session.score, 0);
        assert_eq!(session.seed(), 12345);
        assert_eq!(session.world.chunks_generated(), 2);
        assert_eq!(session.agent.rect.pos, Vec2::new(50.0, 300.0));
        assert!(session.particles.is_empty());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = RunnerConfig::default();
        config.viewport.width = 0.0;
        assert!(matches!(
            GameSession::new(config, 1),
            Err(ConfigError::NonPositive { .. })
        ));
    }

    #[test]
    fn test_negative_particle_speed_rejected_at_construction() {
        let mut config = RunnerConfig::default();
        config.particles.max_speed = -1.0;
        assert!(matches!(
            GameSession::new(config, 1),
            Err(ConfigError::Negative { .. })
        ));
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let session = GameSession::new(RunnerConfig::default(), 77).unwrap();
        let snap = session.snapshot();
        assert_eq!(snap.agent, session.agent.rect);
        assert_eq!(snap.platforms.len(), session.world.platforms.len());
        assert_eq!(snap.hazards.len(), session.world.hazards.len());
        assert_eq!(snap.collectibles.len(), session.world.collectibles.len());
        assert!(snap.particles.is_empty());
        assert_eq!(snap.phase, SessionPhase::Playing);
    }

    #[test]
    fn test_snapshot_serializes() {
        let session = GameSession::new(RunnerConfig::default(), 3).unwrap();
        let json = serde_json::to_string(&session.snapshot()).unwrap();
        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.score, 0);
        assert_eq!(back.phase, SessionPhase::Playing);
    }
}
