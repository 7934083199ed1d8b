//! World entities owned by the level: platforms, collectibles and hazards

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::{Bounded, Rect, Tick};

/// Static solid geometry. Only ever moved by world scroll.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub rect: Rect,
}

impl Platform {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
        }
    }
}

impl Bounded for Platform {
    fn bounds(&self) -> Rect {
        self.rect
    }
}

/// A coin: worth points on contact, gone for good once taken
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Collectible {
    pub rect: Rect,
}

impl Bounded for Collectible {
    fn bounds(&self) -> Rect {
        self.rect
    }
}

/// A patrolling enemy: touching it ends the run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hazard {
    pub rect: Rect,
    /// Patrol anchor (x of the spawn position)
    pub start_x: f32,
    /// Maximum distance from the anchor before turning around
    pub patrol: f32,
    /// +1.0 moving right, -1.0 moving left
    pub direction: f32,
    pub speed: f32,
}

impl Hazard {
    pub fn new(pos: Vec2, size: f32, patrol: f32, speed: f32) -> Self {
        Self {
            rect: Rect {
                pos,
                size: Vec2::splat(size),
            },
            start_x: pos.x,
            patrol,
            direction: 1.0,
            speed,
        }
    }

    /// Current distance from the patrol anchor
    pub fn displacement(&self) -> f32 {
        (self.rect.pos.x - self.start_x).abs()
    }

    /// Move rectangle and anchor together
    pub fn shift(&mut self, dx: f32) {
        self.rect.pos.x += dx;
        self.start_x += dx;
    }
}

impl Tick for Hazard {
    /// Step along the patrol; turn around once past the half-distance.
    /// The step that crosses the bound is kept, so overshoot is at most one step.
    fn tick(&mut self) {
        self.rect.pos.x += self.speed * self.direction;
        if self.displacement() > self.patrol {
            self.direction = -self.direction;
        }
    }
}

impl Bounded for Hazard {
    fn bounds(&self) -> Rect {
        self.rect
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_hazard_turns_after_overshoot() {
        let mut hazard = Hazard::new(Vec2::new(100.0, 200.0), 30.0, 5.0, 2.0);
        hazard.tick(); // 102
        hazard.tick(); // 104
        assert_eq!(hazard.direction, 1.0);
        hazard.tick(); // 106, past 5
        assert_eq!(hazard.rect.pos.x, 106.0);
        assert_eq!(hazard.direction, -1.0);
        hazard.tick();
        assert_eq!(hazard.rect.pos.x, 104.0);
        assert_eq!(hazard.direction, -1.0);
    }

    #[test]
    fn test_hazard_shift_moves_anchor() {
        let mut hazard = Hazard::new(Vec2::new(100.0, 200.0), 30.0, 50.0, 2.0);
        hazard.tick();
        hazard.shift(-40.0);
        assert_eq!(hazard.rect.pos.x, 62.0);
        assert_eq!(hazard.start_x, 60.0);
        assert_eq!(hazard.displacement(), 2.0);
    }

    proptest! {
        #[test]
        fn prop_patrol_stays_within_one_step(
            start in 0i32..800,
            patrol in 30i32..110,
            speed in 1i32..4,
            ticks in 1usize..600,
        ) {
            let mut hazard = Hazard::new(
                Vec2::new(start as f32, 100.0),
                30.0,
                patrol as f32,
                speed as f32,
            );
            for _ in 0..ticks {
                hazard.tick();
                prop_assert!(hazard.displacement() <= hazard.patrol + hazard.speed);
            }
        }
    }
}
