//! Streaming level: chunk generation, scrolling and retirement
//!
//! Geometry is generated one viewport-wide chunk at a time, just ahead of the
//! right edge of the screen. Once the runner passes the scroll threshold the
//! runner stays put and every entity shifts left instead; anything that scrolls
//! completely off the left edge is dropped for good. All positions held here are
//! screen coordinates. The absolute distance is tracked separately.

use glam::Vec2;

use super::agent::Agent;
use super::entities::{Collectible, Hazard, Platform};
use super::random::RandomSource;
use super::rect::{Rect, Tick};
use crate::config::{GeneratorConfig, HazardConfig, RunnerConfig, ViewportConfig};

/// What one call to [`World::generate_chunk`] placed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChunkSummary {
    /// Screen x of the chunk's left edge
    pub start_x: f32,
    /// Floating platforms, not counting the floor
    pub platforms: usize,
    pub collectibles: usize,
    pub hazards: usize,
}

/// What [`World::update`] did this tick
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WorldStep {
    /// Distance everything was shifted left
    pub scrolled: f32,
    pub new_chunk: Option<ChunkSummary>,
    pub retired: usize,
}

/// Live level geometry
#[derive(Debug, Clone)]
pub struct World {
    pub platforms: Vec<Platform>,
    pub hazards: Vec<Hazard>,
    pub collectibles: Vec<Collectible>,
    /// Absolute x of the right end of the newest chunk; never decreases
    frontier: f32,
    /// Total distance scrolled since creation
    scrolled: f32,
    chunks_generated: u32,
    viewport: ViewportConfig,
    generator: GeneratorConfig,
    hazard: HazardConfig,
}

impl World {
    /// World with no geometry at all
    pub fn empty(config: &RunnerConfig) -> Self {
        Self {
            platforms: Vec::new(),
            hazards: Vec::new(),
            collectibles: Vec::new(),
            frontier: 0.0,
            scrolled: 0.0,
            chunks_generated: 0,
            viewport: config.viewport,
            generator: config.generator,
            hazard: config.hazard,
        }
    }

    /// Starting world: the visible chunk plus the one right after it
    pub fn new(config: &RunnerConfig, rng: &mut impl RandomSource) -> Self {
        let mut world = Self::empty(config);
        world.generate_chunk(0.0, rng);
        world.generate_chunk(config.viewport.width, rng);
        world
    }

    /// Total distance the level has scrolled past the runner
    pub fn distance(&self) -> f32 {
        self.scrolled
    }

    /// Absolute right end of generated geometry
    pub fn frontier(&self) -> f32 {
        self.frontier
    }

    pub fn chunks_generated(&self) -> u32 {
        self.chunks_generated
    }

    /// Place one chunk of geometry whose left edge is at screen x `start_x`
    pub fn generate_chunk(&mut self, start_x: f32, rng: &mut impl RandomSource) -> ChunkSummary {
        let chunk_width = self.viewport.width;
        let generator = self.generator;
        let floor_height = generator.floor_height;

        self.platforms.push(Platform::new(
            start_x,
            self.viewport.height - floor_height,
            chunk_width,
            floor_height,
        ));

        let mut summary = ChunkSummary {
            start_x,
            platforms: 0,
            collectibles: 0,
            hazards: 0,
        };

        let (min_count, max_count) = generator.platform_count;
        let count = rng.int_in(min_count, max_count);
        for _ in 0..count {
            let (min_w, max_w) = generator.platform_width;
            let width = rng.int_in(min_w, max_w);
            let x = start_x + rng.int_in(0, chunk_width as u32 - width) as f32;
            let (min_y, max_y) = generator.platform_y;
            let y = rng.int_in(min_y, max_y) as f32;
            let width = width as f32;

            let platform = Platform::new(x, y, width, generator.platform_height);
            self.platforms.push(platform);
            summary.platforms += 1;

            if rng.chance(generator.collectible_chance) {
                let coin = self.collectible_above(&platform.rect);
                self.collectibles.push(coin);
                summary.collectibles += 1;
            }

            if rng.chance(generator.hazard_chance) {
                let hazard = self.hazard_on(&platform.rect);
                self.hazards.push(hazard);
                summary.hazards += 1;
            }
        }

        self.frontier = self.frontier.max(start_x + self.scrolled + chunk_width);
        self.chunks_generated += 1;
        log::debug!(
            "Chunk {} at x={}: {} platforms, {} coins, {} hazards",
            self.chunks_generated,
            start_x,
            summary.platforms,
            summary.collectibles,
            summary.hazards
        );
        summary
    }

    /// Coin centered horizontally, floating above the platform
    fn collectible_above(&self, platform: &Rect) -> Collectible {
        let size = self.generator.collectible_size;
        let center = Vec2::new(
            platform.center().x,
            platform.top() - self.generator.collectible_lift + size * 0.5,
        );
        Collectible {
            rect: Rect::centered(center, Vec2::splat(size)),
        }
    }

    /// Hazard standing on the platform near its left edge
    fn hazard_on(&self, platform: &Rect) -> Hazard {
        let tuning = &self.hazard;
        Hazard::new(
            Vec2::new(platform.left() + tuning.inset, platform.top() - tuning.size),
            tuning.size,
            platform.size.x - tuning.patrol_trim,
            tuning.speed,
        )
    }

    /// One tick: patrol hazards, scroll past the runner, extend, retire
    pub fn update(&mut self, agent: &mut Agent, rng: &mut impl RandomSource) -> WorldStep {
        for hazard in &mut self.hazards {
            hazard.tick();
        }

        let scrolled = self.scroll(&mut agent.rect);
        let new_chunk = self.extend(rng);
        let retired = self.retire();

        WorldStep {
            scrolled,
            new_chunk,
            retired,
        }
    }

    /// Keep the runner at the scroll threshold by shifting the level instead
    ///
    /// Returns the distance shifted (zero if the runner is short of the
    /// threshold).
    pub fn scroll(&mut self, body: &mut Rect) -> f32 {
        let threshold = self.generator.scroll_threshold;
        if body.right() < threshold {
            return 0.0;
        }
        let overflow = body.right() - threshold;
        body.set_right(threshold);
        if overflow > 0.0 {
            self.shift(-overflow);
            self.scrolled += overflow;
            log::trace!("Scrolled {overflow} (total {})", self.scrolled);
        }
        overflow
    }

    /// Move every platform, hazard (with its patrol anchor) and collectible by `dx`
    pub fn shift(&mut self, dx: f32) {
        for platform in &mut self.platforms {
            platform.rect.pos.x += dx;
        }
        for hazard in &mut self.hazards {
            hazard.shift(dx);
        }
        for collectible in &mut self.collectibles {
            collectible.rect.pos.x += dx;
        }
    }

    /// Right edge of the rightmost live platform
    pub fn rightmost_edge(&self) -> Option<f32> {
        self.platforms
            .iter()
            .map(|p| p.rect.right())
            .reduce(f32::max)
    }

    /// Generate the next chunk if generated geometry ends too close to the screen
    pub fn extend(&mut self, rng: &mut impl RandomSource) -> Option<ChunkSummary> {
        let lookahead = self.viewport.width + self.generator.lookahead_margin;
        let rightmost = self.rightmost_edge().unwrap_or(0.0);
        if rightmost >= lookahead {
            return None;
        }
        let (min_gap, max_gap) = self.generator.chunk_gap;
        let gap = rng.int_in(min_gap, max_gap) as f32;
        Some(self.generate_chunk(rightmost + gap, rng))
    }

    /// Drop everything that has scrolled fully past the left edge
    pub fn retire(&mut self) -> usize {
        let before = self.platforms.len() + self.hazards.len() + self.collectibles.len();
        self.platforms.retain(|p| p.rect.right() >= 0.0);
        self.hazards.retain(|h| h.rect.right() >= 0.0);
        self.collectibles.retain(|c| c.rect.right() >= 0.0);
        let after = self.platforms.len() + self.hazards.len() + self.collectibles.len();
        let retired = before - after;
        if retired > 0 {
            log::debug!("Retired {retired} entities");
        }
        retired
    }
}
