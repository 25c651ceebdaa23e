//! Spinner spiral
//!
//! The radius starts wide (narrower for short spinners) and eases down to the
//! end radius over the first 60% of the spinner, then holds. The angle
//! advances at a constant real-time speed, so rate modifiers slow it down in
//! map time.

use glam::Vec2;

use super::sample_times;
use crate::beatmap::HitObject;
use crate::easing::ease_in_out_sine;
use crate::settings::Settings;
use crate::{angle_to, from_angle};

/// Fraction of the spinner spent shrinking the radius
const SETTLE_FRACTION: f64 = 0.6;

/// Spinners with more spins than this start at the full radius
const LONG_SPIN_COUNT: u32 = 3;

pub struct SpinnerSampler<'a> {
    object: &'a HitObject,
    settings: &'a Settings,
    start_radius: f32,
    end_radius: f32,
    /// Angle at `start_time`
    start_angle: f32,
}

impl<'a> SpinnerSampler<'a> {
    pub fn new(object: &'a HitObject, settings: &'a Settings) -> Self {
        let end_radius = settings.spinner_end_radius.max(0.0);
        let full = settings.spinner_start_radius.max(end_radius);
        let start_radius = if object.spin_count() > LONG_SPIN_COUNT {
            full
        } else {
            (full + end_radius) * 0.5
        };
        Self {
            object,
            settings,
            start_radius,
            end_radius,
            start_angle: 0.0,
        }
    }

    /// Start the spiral on the side the cursor comes from
    pub fn entering_from(mut self, cursor: Vec2) -> Self {
        self.start_angle = angle_to(self.object.start_position(), cursor);
        self
    }

    pub fn radius_at(&self, time: f64) -> f32 {
        let settle = self.object.duration() * SETTLE_FRACTION;
        if settle <= 0.0 {
            return self.end_radius;
        }
        let t = ease_in_out_sine((time - self.object.start_time) / settle) as f32;
        self.start_radius + (self.end_radius - self.start_radius) * t
    }

    pub fn angle_at(&self, time: f64) -> f32 {
        let elapsed = (time - self.object.start_time).max(0.0);
        let real = self.settings.apply_rate_to_elapsed(elapsed);
        let direction = if self.settings.spinner_clockwise { 1.0 } else { -1.0 };
        self.start_angle + (direction * self.settings.spinner_speed * real) as f32
    }

    pub fn position_at(&self, time: f64) -> Vec2 {
        self.object.start_position() + from_angle(self.angle_at(time), self.radius_at(time))
    }

    /// (time, position) samples covering the whole spinner
    pub fn samples(&self, interval: f64) -> Vec<(f64, Vec2)> {
        sample_times(self.object.start_time, self.object.end_time, interval)
            .into_iter()
            .map(|t| (t, self.position_at(t)))
            .collect()
    }
}
