//! Border bounce
//!
//! Positions outside the play area are folded back in with a triangle wave,
//! like a ball bouncing between both walls as many times as it takes.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle positions are kept inside
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayArea {
    pub min: Vec2,
    pub max: Vec2,
}

impl PlayArea {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Fold `p` into the area, each axis independently
    pub fn reflect(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            fold(p.x, self.min.x, self.max.x),
            fold(p.y, self.min.y, self.max.y),
        )
    }
}

/// Triangle-wave fold of `v` into [lo, hi]
#[inline]
pub fn fold(v: f32, lo: f32, hi: f32) -> f32 {
    let span = hi - lo;
    if !(span > 0.0) || !v.is_finite() {
        return lo;
    }
    if v >= lo && v <= hi {
        return v;
    }
    // Odd multiples of the span run backwards
    let offset = (v - lo).rem_euclid(2.0 * span);
    let folded = if offset > span { 2.0 * span - offset } else { offset };
    (lo + folded).clamp(lo, hi)
}
