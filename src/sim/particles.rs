//! Short-lived visual effects
//!
//! Particles never affect gameplay. They are owned by the session, not the
//! world, so they keep drifting in screen space while the level scrolls.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::random::RandomSource;
use super::rect::{Bounded, Rect, Tick};
use crate::config::ParticleConfig;

/// A single spark with a tick countdown
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub rect: Rect,
    pub vel: Vec2,
    /// Ticks left; removed once this reaches zero
    pub life: u32,
}

impl Particle {
    pub fn is_alive(&self) -> bool {
        self.life > 0
    }
}

impl Tick for Particle {
    fn tick(&mut self) {
        self.rect.pos += self.vel;
        self.life = self.life.saturating_sub(1);
    }
}

impl Bounded for Particle {
    fn bounds(&self) -> Rect {
        self.rect
    }
}

/// Live particle set
#[derive(Debug, Clone, Default)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
}

impl ParticleSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn a burst of `config.per_pickup` particles centered on `center`
    pub fn burst(&mut self, center: Vec2, config: &ParticleConfig, rng: &mut impl RandomSource) {
        let (min_size, max_size) = config.size;
        let speed = config.max_speed;
        self.particles.reserve(config.per_pickup as usize);
        for _ in 0..config.per_pickup {
            let size = rng.int_in(min_size, max_size) as f32;
            let vel = Vec2::new(rng.float_in(-speed, speed), rng.float_in(-speed, speed));
            self.particles.push(Particle {
                rect: Rect::centered(center, Vec2::splat(size)),
                vel,
                life: config.lifetime,
            });
        }
    }

    /// Advance every particle one tick and drop the expired ones
    pub fn update(&mut self) {
        for particle in &mut self.particles {
            particle.tick();
        }
        self.particles.retain(Particle::is_alive);
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::random::SeededRandom;

    #[test]
    fn test_burst_spawns_configured_count_at_center() {
        let config = ParticleConfig::default();
        let mut rng = SeededRandom::new(3);
        let mut system = ParticleSystem::new();
        let center = Vec2::new(210.0, 180.0);

        system.burst(center, &config, &mut rng);

        assert_eq!(system.len(), 10);
        for p in system.iter() {
            assert_eq!(p.rect.center(), center);
            assert!((3.0..=6.0).contains(&p.rect.size.x));
            assert_eq!(p.rect.size.x, p.rect.size.y);
            assert!(p.vel.x.abs() <= 3.0 && p.vel.y.abs() <= 3.0);
            assert_eq!(p.life, 20);
        }
    }

    #[test]
    fn test_particle_lives_exactly_its_lifetime() {
        // The spawn tick counts as the first tick the particle is visible
        let config = ParticleConfig::default();
        let mut rng = SeededRandom::new(9);
        let mut system = ParticleSystem::new();
        system.burst(Vec2::ZERO, &config, &mut rng);

        for tick in 2..=20 {
            system.update();
            assert_eq!(system.len(), 10, "particles gone early at tick {tick}");
        }
        system.update();
        assert!(system.is_empty());
    }

    #[test]
    fn test_particle_drifts_by_velocity() {
        let mut p = Particle {
            rect: Rect::new(0.0, 0.0, 4.0, 4.0),
            vel: Vec2::new(1.5, -2.0),
            life: 20,
        };
        p.tick();
        p.tick();
        assert_eq!(p.rect.pos, Vec2::new(3.0, -4.0));
        assert_eq!(p.life, 18);
    }
}
