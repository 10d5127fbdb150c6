//! Obstacle generator - the scrolling stream of gap obstacles.
//!
//! Obstacles live in a fixed-capacity vec in spawn order; the tick path never
//! allocates. Gap offsets come from the stream's own seeded RNG so a seed
//! replays the exact course.

use arrayvec::ArrayVec;

use crate::core::rng::SimpleRng;
use crate::types::{Config, MAX_OBSTACLES};

/// A paired top/bottom barrier with a vertical gap the avatar must pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    /// Unique, monotonically increasing per session.
    pub id: u32,
    /// Left edge.
    pub x: f32,
    /// Top of the passable gap.
    pub gap_top: f32,
    /// Whether this obstacle has already scored.
    pub passed: bool,
}

impl Obstacle {
    pub fn right_edge(&self, config: &Config) -> f32 {
        self.x + config.obstacle_width
    }
}

/// Spawn-ordered obstacle stream with threshold-based spawning.
#[derive(Debug, Clone)]
pub struct ObstacleStream {
    obstacles: ArrayVec<Obstacle, MAX_OBSTACLES>,
    next_id: u32,
    rng: SimpleRng,
}

impl ObstacleStream {
    pub fn new(seed: u32) -> Self {
        Self {
            obstacles: ArrayVec::new(),
            next_id: 0,
            rng: SimpleRng::new(seed),
        }
    }

    /// Clear the stream and spawn the single initial obstacle at the right
    /// screen edge. Ids keep increasing across resets.
    pub fn reset(&mut self, config: &Config) {
        self.obstacles.clear();
        self.spawn(config.screen_width, config);
    }

    pub fn as_slice(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    /// Gap offset honoring `gap_top ∈ [min, screen_height - gap - min]`.
    fn sample_gap_top(&mut self, config: &Config) -> f32 {
        let lo = config.min_gap_offset;
        let hi = config.screen_height - config.gap_size - config.min_gap_offset;
        self.rng.next_f32_range(lo, hi)
    }

    fn spawn(&mut self, x: f32, config: &Config) {
        let gap_top = self.sample_gap_top(config);
        let id = self.next_id;
        self.next_id += 1;
        // Capacity bounds live obstacles; a full stream means the config is
        // out of spec (spacing smaller than despawn churn), so drop the spawn
        // rather than grow.
        let _ = self.obstacles.try_push(Obstacle {
            id,
            x,
            gap_top,
            passed: false,
        });
    }

    /// Scroll every obstacle left by the per-tick speed.
    pub fn scroll(&mut self, config: &Config) {
        for ob in &mut self.obstacles {
            ob.x -= config.scroll_speed;
        }
    }

    /// Mark obstacles whose right edge has passed the avatar's horizontal
    /// center and return how many newly scored this tick.
    pub fn mark_passed(&mut self, config: &Config) -> u32 {
        let threshold = config.avatar_center_x();
        let mut scored = 0;
        for ob in &mut self.obstacles {
            if !ob.passed && ob.right_edge(config) < threshold {
                ob.passed = true;
                scored += 1;
            }
        }
        scored
    }

    /// Drop obstacles that have fully left the screen.
    pub fn retire_offscreen(&mut self, config: &Config) {
        self.obstacles.retain(|ob| ob.right_edge(config) >= 0.0);
    }

    /// Spawn a fresh obstacle at the right edge once the rightmost one has
    /// scrolled past the spacing threshold.
    pub fn spawn_if_due(&mut self, config: &Config) {
        let due = match self.obstacles.last() {
            Some(rightmost) => rightmost.x < config.screen_width - config.spawn_spacing,
            None => true,
        };
        if due {
            self.spawn(config.screen_width, config);
        }
    }
}
