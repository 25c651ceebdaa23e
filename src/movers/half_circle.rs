//! Half-circle mover: arcs around the chord midpoint, alternating sides

use std::f32::consts::PI;

use glam::Vec2;

use super::{Mover, MoverState, SegmentTime};
use crate::beatmap::HitObject;
use crate::{angle_to, from_angle};

#[derive(Debug, Clone, Default)]
pub struct HalfCircleMover {
    center: Vec2,
    radius: f32,
    start_angle: f32,
    /// +1 or -1, which way round the arc goes
    direction: f32,
    end_pos: Vec2,
    time: SegmentTime,
}

impl HalfCircleMover {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Mover for HalfCircleMover {
    fn window_size(&self) -> usize {
        2
    }

    fn set_objects(&mut self, window: &[&HitObject], state: &mut MoverState) -> usize {
        let [start, end, ..] = window else {
            return 0;
        };

        let start_pos = start.end_position();
        self.end_pos = end.start_position();
        self.center = (start_pos + self.end_pos) * 0.5;
        self.radius = start_pos.distance(self.end_pos) * 0.5;
        self.start_angle = angle_to(self.center, start_pos);
        self.time = SegmentTime::between(start, end);

        state.flip();
        self.direction = state.invert;
        state.last_angle = self.start_angle;
        state.last_point = start_pos;
        state.first = false;
        2
    }

    fn update(&self, time: f64) -> Vec2 {
        let t = self.time.progress(time) as f32;
        if t >= 1.0 {
            return self.end_pos;
        }
        self.center + from_angle(self.start_angle + PI * t * self.direction, self.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arc_radius_and_alternation() {
        let a = HitObject::point(0.0, Vec2::new(100.0, 100.0));
        let b = HitObject::point(400.0, Vec2::new(300.0, 100.0));
        let mut mover = HalfCircleMover::new();
        let mut state = MoverState::new();

        mover.set_objects(&[&a, &b], &mut state);
        let top = mover.update(200.0);
        assert!((top.distance(Vec2::new(200.0, 100.0)) - 100.0).abs() < 1e-3);

        mover.set_objects(&[&a, &b], &mut state);
        let other = mover.update(200.0);
        assert!((top.y - 100.0).signum() != (other.y - 100.0).signum());
    }

    #[test]
    fn test_coincident_holds_position() {
        let a = HitObject::point(0.0, Vec2::new(64.0, 64.0));
        let b = HitObject::point(100.0, Vec2::new(64.0, 64.0));
        let mut mover = HalfCircleMover::new();
        mover.set_objects(&[&a, &b], &mut MoverState::new());
        assert_eq!(mover.update(50.0), Vec2::new(64.0, 64.0));
    }
}
