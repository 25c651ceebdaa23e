//! Autodance - synthetic cursor trajectories for rhythm game autoplay
//!
//! Core modules:
//! - `beatmap`: Read-only hit object timeline (points, paths, spinners)
//! - `movers`: Pluggable per-segment path strategies
//! - `sim`: Deterministic frame synthesis (samplers, border bounce, orchestrator)
//! - `settings`: Numeric configuration bundle

pub mod beatmap;
pub mod error;
pub mod movers;
pub mod settings;
pub mod sim;

pub use beatmap::{HitObject, ObjectKind, SliderPath, Timeline};
pub use error::{ConfigError, SynthError, TimelineError};
pub use movers::{Mover, MoverState};
pub use settings::{MoverKind, RateModifier, Settings};
pub use sim::{Button, ReplayFrame, Synthesizer};

use glam::Vec2;
use std::f32::consts::{PI, TAU};

/// Playfield and timing constants
pub mod consts {
    /// Playfield dimensions (osu!pixels)
    pub const PLAYFIELD_WIDTH: f32 = 512.0;
    pub const PLAYFIELD_HEIGHT: f32 = 384.0;

    /// Time of the first settle frame, long before anything is visible
    pub const SETTLE_TIME: f64 = -100_000.0;
    /// Second settle frame sits this long before the first object
    pub const SETTLE_LEAD_IN: f64 = 1500.0;

    /// Gaps at or above this never count as a stream (ms)
    pub const STREAM_TIME_THRESHOLD: f64 = 200.0;

    /// Squared distance below which two positions are the same spot
    pub const SAME_POSITION_EPSILON_SQ: f32 = 1e-6;
}

/// Angle of the vector pointing from `from` to `to`.
///
/// Coincident points give `0.0`; `atan2(0, 0)` is defined, never NaN.
#[inline]
pub fn angle_to(from: Vec2, to: Vec2) -> f32 {
    let d = to - from;
    d.y.atan2(d.x)
}

/// Point at `radius` along `angle`, relative to the origin
#[inline]
pub fn from_angle(angle: f32, radius: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin()) * radius
}

/// Normalize angle to [0, 2π)
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    let a = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if a >= TAU { 0.0 } else { a }
}

/// Normalize angle to (-π, π]
#[inline]
pub fn normalize_angle_signed(angle: f32) -> f32 {
    let a = normalize_angle(angle);
    if a > PI { a - TAU } else { a }
}

/// Shortest signed rotation taking `from` onto `to`, in (-π, π]
#[inline]
pub fn angle_difference(from: f32, to: f32) -> f32 {
    normalize_angle_signed(to - from)
}

/// Interpolate between two angles along the shorter arc
#[inline]
pub fn lerp_angle(from: f32, to: f32, t: f32) -> f32 {
    from + angle_difference(from, to) * t
}

/// Easing curves on [0, 1]
pub mod easing {
    use std::f64::consts::PI;

    /// Quadratic ease-out
    pub fn ease_out_quad(t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        1.0 - (1.0 - t) * (1.0 - t)
    }

    /// Cubic ease-out
    pub fn ease_out_cubic(t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        1.0 - (1.0 - t).powi(3)
    }

    /// Sine ease-in-out
    pub fn ease_in_out_sine(t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        -((PI * t).cos() - 1.0) / 2.0
    }
}
