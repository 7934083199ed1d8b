//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed tick only (all tuning is per tick)
//! - Randomness only through an injected `RandomSource`
//! - Stable iteration order (generation order)
//! - No rendering, audio or input-device dependencies

pub mod agent;
pub mod collision;
pub mod entities;
pub mod particles;
pub mod random;
pub mod rect;
pub mod state;
pub mod tick;
pub mod world;

pub use agent::{Agent, StepOutcome};
pub use collision::{
    VerticalContact, any_overlap, overlapping, resolve_horizontal, resolve_vertical,
};
pub use entities::{Collectible, Hazard, Platform};
pub use particles::{Particle, ParticleSystem};
pub use random::{RandomSource, SeededRandom};
pub use rect::{Bounded, Rect, Tick};
pub use state::{GameEvent, GameOverCause, GameSession, SessionPhase, Snapshot};
pub use tick::{Command, tick};
pub use world::{ChunkSummary, World, WorldStep};
