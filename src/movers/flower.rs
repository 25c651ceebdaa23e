//! Flower mover
//!
//! Cubic curves whose end handle is rotated off the chord by a fixed offset,
//! with the side alternating so consecutive jumps orbit like petals.

use std::f32::consts::PI;

use glam::Vec2;

use super::{Bezier, Mover, MoverState, SegmentTime, scaled_distance};
use crate::beatmap::HitObject;
use crate::settings::Settings;
use crate::{angle_difference, angle_to, from_angle};

#[derive(Debug, Clone, Default)]
pub struct FlowerMover {
    jump_multiplier: f32,
    /// Rotation of the end handle off the chord (radians)
    offset: f32,
    frame_interval: f64,
    curve: Bezier,
    time: SegmentTime,
}

impl FlowerMover {
    pub fn new(settings: &Settings) -> Self {
        Self {
            jump_multiplier: settings.jump_multiplier,
            offset: settings.angle_offset * PI,
            frame_interval: settings.frame_interval(),
            ..Self::default()
        }
    }

    pub fn control_points(&self) -> &[Vec2] {
        self.curve.points()
    }
}

impl Mover for FlowerMover {
    fn window_size(&self) -> usize {
        2
    }

    fn set_objects(&mut self, window: &[&HitObject], state: &mut MoverState) -> usize {
        let [start, end, ..] = window else {
            return 0;
        };

        let start_pos = start.end_position();
        let end_pos = end.start_position();
        let distance = start_pos.distance(end_pos);
        let scaled = scaled_distance(distance, self.jump_multiplier);
        self.time = SegmentTime::between(start, end);

        if state.first {
            state.last_angle = angle_to(end_pos, start_pos);
            state.last_point = start_pos;
        }

        let fi = self.frame_interval;
        let (out_angle, in_angle) = match (start.is_path(), end.is_path()) {
            (true, true) => {
                state.flip();
                (start.exit_angle(fi), end.entry_angle(fi) + PI)
            }
            (true, false) => {
                state.flip();
                state.last_angle = angle_to(end_pos, start_pos) - self.offset * state.invert;
                (start.exit_angle(fi), state.last_angle)
            }
            (false, true) => {
                let out = state.last_angle + PI;
                state.last_angle = end.entry_angle(fi) + PI;
                (out, state.last_angle)
            }
            (false, false) => {
                // Wide turns at the start flip the petal side
                let spread =
                    angle_difference(angle_to(start_pos, state.last_point), angle_to(start_pos, end_pos));
                if !state.first && spread.abs() >= self.offset {
                    state.flip();
                }

                let mut angle = angle_to(end_pos, start_pos) - self.offset * state.invert;
                if distance <= f32::EPSILON {
                    angle = state.last_angle;
                }
                let out = state.last_angle + PI;
                state.last_angle = angle;
                state.last_point = start_pos;
                (out, angle)
            }
        };

        self.curve = Bezier::cubic(
            start_pos,
            start_pos + from_angle(out_angle, scaled),
            end_pos + from_angle(in_angle, scaled),
            end_pos,
        );
        state.first = false;
        2
    }

    fn update(&self, time: f64) -> Vec2 {
        self.curve.point_at(self.time.progress(time) as f32)
    }
}
