//! Runner configuration
//!
//! Fixed at session construction. Defaults reproduce the stock game tuning;
//! any subset of fields can be overridden from JSON.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Visible play area; also the width of one generated chunk
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
        }
    }
}

/// Agent body and movement tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    pub size: Vec2,
    /// Top-left corner at spawn
    pub start: Vec2,
    pub gravity: f32,
    pub initial_fall_speed: f32,
    pub jump_impulse: f32,
    pub run_speed: f32,
    pub jump_probe: f32,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            size: Vec2::new(AGENT_WIDTH, AGENT_HEIGHT),
            start: Vec2::new(AGENT_START_X, SCREEN_HEIGHT - AGENT_START_LIFT),
            gravity: GRAVITY,
            initial_fall_speed: INITIAL_FALL_SPEED,
            jump_impulse: JUMP_IMPULSE,
            run_speed: RUN_SPEED,
            jump_probe: JUMP_PROBE,
        }
    }
}

/// Chunk generation and scrolling
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub floor_height: f32,
    /// Extra platforms per chunk, inclusive
    pub platform_count: (u32, u32),
    pub platform_width: (u32, u32),
    pub platform_height: f32,
    /// Band for a platform's top edge, inclusive
    pub platform_y: (u32, u32),
    /// Space between the rightmost platform and the next chunk, inclusive
    pub chunk_gap: (u32, u32),
    pub lookahead_margin: f32,
    pub scroll_threshold: f32,
    pub collectible_chance: f32,
    pub hazard_chance: f32,
    pub collectible_size: f32,
    pub collectible_lift: f32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            floor_height: FLOOR_HEIGHT,
            platform_count: PLATFORM_COUNT,
            platform_width: PLATFORM_WIDTH,
            platform_height: PLATFORM_HEIGHT,
            platform_y: PLATFORM_Y,
            chunk_gap: CHUNK_GAP,
            lookahead_margin: LOOKAHEAD_MARGIN,
            scroll_threshold: SCROLL_THRESHOLD,
            collectible_chance: COLLECTIBLE_CHANCE,
            hazard_chance: HAZARD_CHANCE,
            collectible_size: COLLECTIBLE_SIZE,
            collectible_lift: COLLECTIBLE_LIFT,
        }
    }
}

/// Patrolling hazard tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HazardConfig {
    pub size: f32,
    pub speed: f32,
    pub inset: f32,
    pub patrol_trim: f32,
}

impl Default for HazardConfig {
    fn default() -> Self {
        Self {
            size: HAZARD_SIZE,
            speed: HAZARD_SPEED,
            inset: HAZARD_INSET,
            patrol_trim: HAZARD_PATROL_TRIM,
        }
    }
}

/// Pickup burst tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    pub per_pickup: u32,
    pub lifetime: u32,
    pub size: (u32, u32),
    /// Each velocity component is drawn from `[-max_speed, max_speed]`
    pub max_speed: f32,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            per_pickup: PARTICLES_PER_PICKUP,
            lifetime: PARTICLE_LIFETIME,
            size: PARTICLE_SIZE,
            max_speed: PARTICLE_MAX_SPEED,
        }
    }
}

/// Complete runner configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    pub viewport: ViewportConfig,
    pub agent: AgentConfig,
    pub generator: GeneratorConfig,
    pub hazard: HazardConfig,
    pub particles: ParticleConfig,
    pub pickup_score: u64,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            viewport: ViewportConfig::default(),
            agent: AgentConfig::default(),
            generator: GeneratorConfig::default(),
            hazard: HazardConfig::default(),
            particles: ParticleConfig::default(),
            pickup_score: PICKUP_SCORE,
        }
    }
}

impl RunnerConfig {
    /// Parse a (possibly partial) JSON config and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        log::info!("Loaded runner config from JSON");
        Ok(config)
    }

    /// Check that generation parameters are internally consistent
    pub fn validate(&self) -> Result<(), ConfigError> {
        let view = &self.viewport;
        let generator = &self.generator;

        positive("viewport.width", view.width)?;
        positive("viewport.height", view.height)?;
        positive("agent.size.x", self.agent.size.x)?;
        positive("agent.size.y", self.agent.size.y)?;
        positive("generator.platform_height", generator.platform_height)?;
        positive("generator.collectible_size", generator.collectible_size)?;
        positive("hazard.size", self.hazard.size)?;
        positive("particles.lifetime", self.particles.lifetime as f32)?;
        non_negative("particles.max_speed", self.particles.max_speed)?;

        ordered("generator.platform_count", generator.platform_count)?;
        ordered("generator.platform_width", generator.platform_width)?;
        ordered("generator.platform_y", generator.platform_y)?;
        ordered("generator.chunk_gap", generator.chunk_gap)?;
        ordered("particles.size", self.particles.size)?;

        probability("generator.collectible_chance", generator.collectible_chance)?;
        probability("generator.hazard_chance", generator.hazard_chance)?;

        let max_width = generator.platform_width.1 as f32;
        if max_width > view.width {
            return Err(ConfigError::PlatformTooWide {
                max_width,
                chunk_width: view.width,
            });
        }

        let threshold = generator.scroll_threshold;
        if threshold <= 0.0 || threshold > view.width {
            return Err(ConfigError::ScrollThreshold {
                threshold,
                width: view.width,
            });
        }

        let min_width = generator.platform_width.0 as f32;
        if self.hazard.patrol_trim >= min_width {
            return Err(ConfigError::PatrolTrim {
                trim: self.hazard.patrol_trim,
                min_width,
            });
        }

        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}

fn ordered(field: &'static str, (min, max): (u32, u32)) -> Result<(), ConfigError> {
    if min <= max {
        Ok(())
    } else {
        Err(ConfigError::InvertedRange {
            field,
            min: min as f32,
            max: max as f32,
        })
    }
}

fn probability(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::Probability { field, value })
    }
}
