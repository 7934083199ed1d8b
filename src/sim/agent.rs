//! The player-controlled runner body
//!
//! Gravity and speed changes are per tick, not per second: the tuning assumes
//! a fixed tick rate and changing it changes how heavy the runner feels.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{VerticalContact, any_overlap, resolve_horizontal, resolve_vertical};
use super::entities::Platform;
use super::rect::{Bounded, Rect};
use crate::config::AgentConfig;

/// Result of one physics step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepOutcome {
    /// Horizontal motion was stopped by a wall
    pub blocked: bool,
    pub vertical: VerticalContact,
}

/// Player body: a rectangle with velocity
///
/// The body does not own or point at the world; the platform set is passed in
/// for each step that needs it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub rect: Rect,
    pub vel: Vec2,
    /// Landed on geometry during the last step
    pub grounded: bool,
    tuning: AgentConfig,
}

impl Agent {
    /// Fresh agent at the configured spawn point, at rest
    pub fn new(tuning: AgentConfig) -> Self {
        Self {
            rect: Rect {
                pos: tuning.start,
                size: tuning.size,
            },
            vel: Vec2::ZERO,
            grounded: false,
            tuning,
        }
    }

    pub fn go_left(&mut self) {
        self.vel.x = -self.tuning.run_speed;
    }

    pub fn go_right(&mut self) {
        self.vel.x = self.tuning.run_speed;
    }

    pub fn stop(&mut self) {
        self.vel.x = 0.0;
    }

    /// Release of the left key: only stops if still moving left
    pub fn release_left(&mut self) {
        if self.vel.x < 0.0 {
            self.stop();
        }
    }

    /// Release of the right key: only stops if still moving right
    pub fn release_right(&mut self) {
        if self.vel.x > 0.0 {
            self.stop();
        }
    }

    /// Apply one tick of gravity
    ///
    /// A body at rest vertically starts falling at the initial fall speed;
    /// an airborne body accelerates without a terminal velocity.
    pub fn apply_gravity(&mut self) {
        if self.vel.y == 0.0 {
            self.vel.y = self.tuning.initial_fall_speed;
        } else {
            self.vel.y += self.tuning.gravity;
        }
    }

    /// Whether the body stands on something a jump can push off
    ///
    /// Probes a few units below the body; the viewport bottom also counts as
    /// ground so a body resting on the screen edge can still jump.
    pub fn can_jump(&self, platforms: &[Platform], floor_y: f32) -> bool {
        let probe = self.rect.translated(Vec2::new(0.0, self.tuning.jump_probe));
        any_overlap(&probe, platforms) || self.rect.bottom() >= floor_y
    }

    /// Start a jump if standing on something. Returns whether it happened.
    pub fn jump(&mut self, platforms: &[Platform], floor_y: f32) -> bool {
        if self.can_jump(platforms, floor_y) {
            self.vel.y = self.tuning.jump_impulse;
            true
        } else {
            false
        }
    }

    /// Full physics step: gravity, then move and resolve x, then move and resolve y
    ///
    /// Resolving x before y keeps the body from catching platform corners.
    pub fn step(&mut self, platforms: &[Platform]) -> StepOutcome {
        self.apply_gravity();

        self.rect.pos.x += self.vel.x;
        let blocked = resolve_horizontal(&mut self.rect, self.vel.x, platforms);

        self.rect.pos.y += self.vel.y;
        let vertical = resolve_vertical(&mut self.rect, self.vel.y, platforms);
        if vertical.touched() {
            self.vel.y = 0.0;
        }
        self.grounded = vertical == VerticalContact::Landed;

        StepOutcome { blocked, vertical }
    }
}

impl Bounded for Agent {
    fn bounds(&self) -> Rect {
        self.rect
    }
}
