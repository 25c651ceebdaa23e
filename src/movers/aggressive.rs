//! Aggressive mover
//!
//! Always overshoots: the start handle continues the previous arrival
//! direction with a length proportional to the gap time, so even short jumps
//! swing out wide. Sliders contribute their tangents as extra control points.

use std::f32::consts::PI;

use glam::Vec2;

use super::{Bezier, Mover, MoverState, SegmentTime, scaled_distance};
use crate::beatmap::HitObject;
use crate::consts::SAME_POSITION_EPSILON_SQ;
use crate::settings::Settings;
use crate::{angle_to, from_angle};

#[derive(Debug, Clone, Default)]
pub struct AggressiveMover {
    /// Handle length per millisecond of gap
    multiplier: f32,
    frame_interval: f64,
    curve: Bezier,
    time: SegmentTime,
}

impl AggressiveMover {
    pub fn new(settings: &Settings) -> Self {
        Self {
            multiplier: settings.jump_multiplier,
            frame_interval: settings.frame_interval(),
            ..Self::default()
        }
    }

    pub fn control_points(&self) -> &[Vec2] {
        self.curve.points()
    }
}

impl Mover for AggressiveMover {
    fn window_size(&self) -> usize {
        2
    }

    fn set_objects(&mut self, window: &[&HitObject], state: &mut MoverState) -> usize {
        let [start, end, ..] = window else {
            return 0;
        };

        let start_pos = start.end_position();
        let end_pos = end.start_position();
        self.time = SegmentTime::between(start, end);
        let scaled = scaled_distance(self.time.duration() as f32, self.multiplier);

        let out_angle = if start.is_path() {
            start.exit_angle(self.frame_interval)
        } else if state.first {
            angle_to(start_pos, end_pos)
        } else {
            state.last_angle + PI
        };

        let mut points = vec![start_pos, start_pos + from_angle(out_angle, scaled)];
        state.last_angle = if scaled > 1.0 {
            angle_to(end_pos, points[1])
        } else if start_pos.distance_squared(end_pos) > SAME_POSITION_EPSILON_SQ {
            // Collapsed handle: arrive along the chord
            angle_to(end_pos, start_pos)
        } else {
            out_angle + PI
        };
        if end.is_path() {
            points.push(end_pos + from_angle(end.entry_angle(self.frame_interval) + PI, scaled));
        }
        points.push(end_pos);

        self.curve = Bezier::new(points);
        state.first = false;
        2
    }

    fn update(&self, time: f64) -> Vec2 {
        self.curve.point_at(self.time.progress(time) as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::beatmap::SliderPath;

    fn pt(t: f64, x: f32, y: f32) -> HitObject {
        HitObject::point(t, Vec2::new(x, y))
    }

    #[test]
    fn test_degree_follows_target_kind() {
        let a = pt(0.0, 100.0, 100.0);
        let b = pt(200.0, 200.0, 100.0);
        let slider = HitObject::path(200.0, 500.0, Vec2::new(200.0, 100.0), SliderPath::linear(Vec2::new(0.0, 50.0), 1));

        let mut mover = AggressiveMover::new(&Settings::default());
        mover.set_objects(&[&a, &b], &mut MoverState::new());
        assert_eq!(mover.control_points().len(), 3);

        mover.set_objects(&[&a, &slider], &mut MoverState::new());
        assert_eq!(mover.control_points().len(), 4);
    }

    #[test]
    fn test_continues_previous_arrival() {
        let objs = [pt(0.0, 100.0, 100.0), pt(200.0, 200.0, 100.0), pt(400.0, 200.0, 300.0)];
        let mut mover = AggressiveMover::new(&Settings::default());
        let mut state = MoverState::new();

        mover.set_objects(&[&objs[0], &objs[1]], &mut state);
        let first = mover.control_points().to_vec();
        mover.set_objects(&[&objs[1], &objs[2]], &mut state);
        let second = mover.control_points();

        // Quadratic arrival tangent (p1 → p2) matches the next departure
        let arrive = (first[2] - first[1]).normalize();
        let leave = (second[1] - second[0]).normalize();
        assert!(arrive.dot(leave) > 0.999);
    }

    #[test]
    fn test_zero_gap_is_finite() {
        let (a, b) = (pt(100.0, 50.0, 50.0), pt(100.0, 80.0, 50.0));
        let mut mover = AggressiveMover::new(&Settings::default());
        mover.set_objects(&[&a, &b], &mut MoverState::new());
        assert!(mover.update(100.0).is_finite());
        assert_eq!(mover.update(100.0), Vec2::new(80.0, 50.0));
    }

    #[test]
    fn test_zero_gap_still_sets_direction() {
        let (a, b) = (pt(100.0, 50.0, 50.0), pt(100.0, 80.0, 50.0));
        let mut mover = AggressiveMover::new(&Settings::default());
        let mut state = MoverState::new();
        state.first = false;
        state.last_angle = 1.0;
        mover.set_objects(&[&a, &b], &mut state);

        // Arrived heading +x, so the next segment leaves along +x
        assert!(crate::angle_difference(PI, state.last_angle).abs() < 1e-5);

        let c = pt(400.0, 80.0, 200.0);
        mover.set_objects(&[&b, &c], &mut state);
        let leave = mover.control_points()[1] - mover.control_points()[0];
        assert!(leave.x > 0.0 && leave.y.abs() < 1e-3, "leave {leave}");
    }
}
