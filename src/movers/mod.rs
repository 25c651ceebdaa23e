//! Segment movers
//!
//! A mover owns the curve for one segment (the gap between two objects).
//! `set_objects` builds it from a small window of upcoming objects and
//! `update` samples it. Continuity between segments lives in `MoverState`,
//! which the synthesizer threads through every call in object order.

pub mod aggressive;
pub mod bezier;
pub mod flower;
pub mod half_circle;
pub mod linear;
pub mod momentum;
pub mod stream;

pub use aggressive::AggressiveMover;
pub use bezier::Bezier;
pub use flower::FlowerMover;
pub use half_circle::HalfCircleMover;
pub use linear::LinearMover;
pub use momentum::MomentumMover;

use glam::Vec2;

use crate::beatmap::HitObject;
use crate::settings::{MoverKind, Settings};

/// Continuity carried from one segment to the next
#[derive(Debug, Clone, PartialEq)]
pub struct MoverState {
    /// Handle angle the previous segment ended with
    pub last_angle: f32,
    /// Control point the previous segment ended on
    pub last_point: Vec2,
    /// Alternating side, always ±1
    pub invert: f32,
    /// No segment has been built yet
    pub first: bool,
}

impl Default for MoverState {
    fn default() -> Self {
        Self::new()
    }
}

impl MoverState {
    pub fn new() -> Self {
        Self::starting_at(Vec2::ZERO)
    }

    /// Fresh state whose previous exit point is where the cursor is parked
    pub fn starting_at(park: Vec2) -> Self {
        Self {
            last_angle: 0.0,
            last_point: park,
            invert: 1.0,
            first: true,
        }
    }

    pub fn flip(&mut self) {
        self.invert = -self.invert;
    }
}

/// Time span covered by a segment
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SegmentTime {
    pub start: f64,
    pub end: f64,
}

impl SegmentTime {
    /// From the end of `from` to the start of `to`
    pub fn between(from: &HitObject, to: &HitObject) -> Self {
        Self {
            start: from.end_time,
            end: to.start_time,
        }
    }

    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Local progress in [0, 1]; empty segments are always complete
    pub fn progress(&self, time: f64) -> f64 {
        let duration = self.duration();
        if duration <= 0.0 {
            return 1.0;
        }
        ((time - self.start) / duration).clamp(0.0, 1.0)
    }
}

/// A segment path strategy
pub trait Mover {
    /// Objects this mover wants in its window (2, or 3 with look-ahead)
    fn window_size(&self) -> usize;

    /// Build the curve from `window[0]` to `window[1]`.
    ///
    /// Returns how many objects of the window were read. Windows shorter
    /// than two objects leave the mover untouched and return 0.
    fn set_objects(&mut self, window: &[&HitObject], state: &mut MoverState) -> usize;

    /// Cursor position at `time` inside the current segment
    fn update(&self, time: f64) -> Vec2;
}

impl MoverKind {
    /// Fresh mover instance for one synthesis run
    pub fn build(&self, settings: &Settings) -> Box<dyn Mover + Send> {
        match self {
            MoverKind::Linear => Box::new(LinearMover::new(settings)),
            MoverKind::Momentum => Box::new(MomentumMover::new(settings)),
            MoverKind::Flower => Box::new(FlowerMover::new(settings)),
            MoverKind::Aggressive => Box::new(AggressiveMover::new(settings)),
            MoverKind::HalfCircle => Box::new(HalfCircleMover::new()),
        }
    }
}

/// Handle length for a jump, never zero
#[inline]
pub(crate) fn scaled_distance(distance: f32, multiplier: f32) -> f32 {
    let scaled = distance * multiplier;
    if scaled.abs() <= f32::EPSILON { 1.0 } else { scaled }
}
