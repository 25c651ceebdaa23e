//! Straight-line mover with ease-out timing

use glam::Vec2;

use super::{Mover, MoverState, SegmentTime};
use crate::beatmap::HitObject;
use crate::easing::ease_out_quad;
use crate::settings::Settings;

/// Moves in a straight line, optionally waiting for a reaction delay first
#[derive(Debug, Clone, Default)]
pub struct LinearMover {
    wait: bool,
    approach_time: f64,
    reaction_time: f64,
    start_pos: Vec2,
    end_pos: Vec2,
    time: SegmentTime,
    /// The cursor holds at `start_pos` until this time
    hold_until: f64,
}

impl LinearMover {
    pub fn new(settings: &Settings) -> Self {
        Self {
            wait: settings.linear_wait,
            approach_time: settings.approach_time,
            reaction_time: settings.reaction_time,
            ..Self::default()
        }
    }
}

impl Mover for LinearMover {
    fn window_size(&self) -> usize {
        2
    }

    fn set_objects(&mut self, window: &[&HitObject], state: &mut MoverState) -> usize {
        let [start, end, ..] = window else {
            return 0;
        };

        self.start_pos = start.end_position();
        self.end_pos = end.start_position();
        self.time = SegmentTime::between(start, end);

        self.hold_until = self.time.start;
        if self.wait {
            // Can't react before the target has been visible for a while
            let visible_at = end.start_time - self.approach_time;
            self.hold_until = (visible_at + self.reaction_time).clamp(self.time.start, self.time.end);
        }

        state.last_angle = crate::angle_to(self.end_pos, self.start_pos);
        state.last_point = self.start_pos;
        state.first = false;
        2
    }

    fn update(&self, time: f64) -> Vec2 {
        if time >= self.time.end {
            return self.end_pos;
        }
        if time <= self.hold_until {
            return self.start_pos;
        }
        let moving = SegmentTime {
            start: self.hold_until,
            end: self.time.end,
        };
        let t = ease_out_quad(moving.progress(time)) as f32;
        self.start_pos.lerp(self.end_pos, t)
    }
}
