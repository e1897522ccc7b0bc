//! Player and enemy squares, bounds clamping and collision.

use crate::config::Geometry;
use crate::difficulty::enemy_speed;

/// Axis-aligned box in playfield pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Half-open overlap test: boxes that only share an edge do not collide.
    pub const fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    pub x: i32,
    pub y: i32,
}

impl Player {
    /// Player centered on the playfield.
    pub const fn centered(geometry: &Geometry) -> Self {
        Self {
            x: geometry.screen_w / 2 - geometry.player_size / 2,
            y: geometry.screen_h / 2 - geometry.player_size / 2,
        }
    }

    /// Displace by `(dx, dy)` and clamp to the playfield.
    pub fn shift(&mut self, dx: i32, dy: i32, geometry: &Geometry) {
        self.x = self.x.saturating_add(dx);
        self.y = self.y.saturating_add(dy);
        self.clamp(geometry);
    }

    pub fn clamp(&mut self, geometry: &Geometry) {
        self.x = self.x.clamp(0, geometry.screen_w - geometry.player_size);
        self.y = self.y.clamp(0, geometry.screen_h - geometry.player_size);
    }

    pub const fn rect(&self, geometry: &Geometry) -> Rect {
        Rect::new(self.x, self.y, geometry.player_size, geometry.player_size)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Enemy {
    pub x: i32,
    pub y: i32,
    pub speed: i32,
}

impl Enemy {
    /// Fresh enemy at the top edge. Its speed is fixed for the whole descent.
    pub fn spawn(rng: &mut Rng, score: u32, max_speed: i32, geometry: &Geometry) -> Self {
        Self {
            x: rng.range(geometry.screen_w - geometry.enemy_size),
            y: 0,
            speed: enemy_speed(score, max_speed),
        }
    }

    pub fn descend(&mut self) {
        self.y += self.speed;
    }

    /// The enemy has fallen past the bottom edge.
    pub const fn passed_bottom(&self, geometry: &Geometry) -> bool {
        self.y > geometry.screen_h
    }

    pub const fn rect(&self, geometry: &Geometry) -> Rect {
        Rect::new(self.x, self.y, geometry.enemy_size, geometry.enemy_size)
    }
}

/// xorshift32 PRNG.
#[derive(Debug, Clone)]
pub struct Rng {
    state: u32,
}

impl Rng {
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Uniform-ish value in `0..max`; `0` when `max <= 0`.
    pub fn range(&mut self, max: i32) -> i32 {
        if max <= 0 {
            return 0;
        }
        (self.next_u32() % max as u32) as i32
    }
}
