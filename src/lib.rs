//! Robo Runner - simulation core for an endless side-scrolling runner
//!
//! Core modules:
//! - `sim`: Fixed-step simulation (agent physics, world streaming, session state)
//! - `config`: Construction-time tuning, loadable from JSON
//! - `error`: Configuration errors

pub mod config;
pub mod error;
pub mod sim;

pub use config::RunnerConfig;
pub use error::ConfigError;

/// Default tuning constants (one tick = one frame at 60 Hz)
pub mod consts {
    /// Viewport dimensions
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 400.0;

    /// Agent body
    pub const AGENT_WIDTH: f32 = 30.0;
    pub const AGENT_HEIGHT: f32 = 40.0;
    pub const AGENT_START_X: f32 = 50.0;
    /// Distance of the agent's spawn point above the viewport bottom
    pub const AGENT_START_LIFT: f32 = 100.0;

    /// Vertical speed added each airborne tick
    pub const GRAVITY: f32 = 0.35;
    /// Speed given to an agent that starts falling from rest
    pub const INITIAL_FALL_SPEED: f32 = 1.0;
    pub const JUMP_IMPULSE: f32 = -10.0;
    pub const RUN_SPEED: f32 = 5.0;
    /// How far below the agent the jump probe looks for ground
    pub const JUMP_PROBE: f32 = 2.0;

    /// Agent right edge at which the world starts scrolling instead
    pub const SCROLL_THRESHOLD: f32 = 500.0;
    /// Extra generated extent kept beyond the viewport's right edge
    pub const LOOKAHEAD_MARGIN: f32 = 200.0;

    /// Chunk geometry
    pub const FLOOR_HEIGHT: f32 = 40.0;
    pub const PLATFORM_COUNT: (u32, u32) = (2, 4);
    pub const PLATFORM_WIDTH: (u32, u32) = (70, 150);
    pub const PLATFORM_HEIGHT: f32 = 20.0;
    pub const PLATFORM_Y: (u32, u32) = (150, 300);
    pub const CHUNK_GAP: (u32, u32) = (50, 150);

    /// Spawn odds per generated platform
    pub const COLLECTIBLE_CHANCE: f32 = 0.7;
    pub const HAZARD_CHANCE: f32 = 0.3;

    pub const COLLECTIBLE_SIZE: f32 = 20.0;
    /// Gap between a collectible's top and its platform's top
    pub const COLLECTIBLE_LIFT: f32 = 25.0;
    pub const PICKUP_SCORE: u64 = 100;

    pub const HAZARD_SIZE: f32 = 30.0;
    pub const HAZARD_SPEED: f32 = 2.0;
    /// Hazard anchor offset from its platform's left edge
    pub const HAZARD_INSET: f32 = 10.0;
    /// Patrol half-distance is the platform width minus this
    pub const HAZARD_PATROL_TRIM: f32 = 40.0;

    /// Pickup burst
    pub const PARTICLES_PER_PICKUP: u32 = 10;
    pub const PARTICLE_LIFETIME: u32 = 20;
    pub const PARTICLE_SIZE: (u32, u32) = (3, 6);
    pub const PARTICLE_MAX_SPEED: f32 = 3.0;
}
