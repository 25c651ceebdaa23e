//! Momentum mover
//!
//! Builds a cubic Bezier per segment whose handles follow the direction the
//! cursor was already travelling (`a1`) and the direction it should leave the
//! target in (`a2`). `a2` comes from scanning ahead for the next distinct
//! position or slider, then a chain of heuristics reshapes it:
//!
//! 1. streams that double back get a perpendicular exit
//! 2. other jumps that double back get nudged sideways
//! 3. otherwise the angle is blended towards the straight line, weighted by
//!    how close the following object is
//! 4. coincident objects bounce straight back out
//! 5. long gaps curve harder
//!
//! Handle angles point away from their anchor: a perfectly straight path has
//! `a2 = a1 + π`.

use std::f32::consts::{FRAC_PI_2, PI};

use glam::Vec2;

use super::stream::{is_stream, same_position};
use super::{Bezier, Mover, MoverState, SegmentTime};
use crate::beatmap::HitObject;
use crate::consts::SAME_POSITION_EPSILON_SQ;
use crate::settings::Settings;
use crate::{angle_difference, angle_to, from_angle, lerp_angle};

/// Where the exit angle came from
#[derive(Debug, Clone, Copy, PartialEq)]
enum LookAhead {
    /// A slider's entry tangent, reversed
    Path(f32),
    /// The jump from the target to the next distinct position
    Direct { angle: f32, next: Vec2 },
    /// Nothing useful before the window ran out
    None,
}

/// Curved mover that carries momentum between segments
#[derive(Debug, Clone)]
pub struct MomentumMover {
    settings: Settings,
    frame_interval: f64,
    curve: Bezier,
    time: SegmentTime,
}

impl MomentumMover {
    pub fn new(settings: &Settings) -> Self {
        Self {
            settings: settings.clone(),
            frame_interval: settings.frame_interval(),
            curve: Bezier::default(),
            time: SegmentTime::default(),
        }
    }

    /// Control points of the current segment
    pub fn control_points(&self) -> &[Vec2] {
        self.curve.points()
    }

    /// Scan forward from the target for the angle the cursor should leave it at
    fn look_ahead(&self, window: &[&HitObject]) -> LookAhead {
        for i in 1..window.len() {
            let obj = window[i];
            if obj.is_path() {
                return LookAhead::Path(obj.entry_angle(self.frame_interval) + PI);
            }
            let Some(next) = window.get(i + 1) else {
                break;
            };
            if !same_position(obj, next, self.settings.skip_stacking) {
                let next = next.start_position();
                return LookAhead::Direct {
                    angle: angle_to(next, obj.start_position()),
                    next,
                };
            }
        }
        LookAhead::None
    }

    /// Exit angle aimed at the mirror image of the slider body
    fn predict_slider(&self, end: &HitObject, distance: f32) -> Option<f32> {
        let path = end.slider_path()?;
        let end_pos = end.start_position();
        let ahead = end_pos + path.point_at_distance(distance.min(path.length()));
        let mirrored = end_pos * 2.0 - ahead;
        (mirrored.distance_squared(end_pos) > SAME_POSITION_EPSILON_SQ)
            .then(|| angle_to(end_pos, mirrored))
    }
}

impl Mover for MomentumMover {
    fn window_size(&self) -> usize {
        3
    }

    fn set_objects(&mut self, window: &[&HitObject], state: &mut MoverState) -> usize {
        let [start, end, ..] = window else {
            return 0;
        };
        let s = &self.settings;

        let start_pos = start.end_position();
        let end_pos = end.start_position();
        let mut distance = start_pos.distance(end_pos);
        self.time = SegmentTime::between(start, end);

        let same = same_position(start, end, s.skip_stacking);
        let look = self.look_ahead(window);
        // Handle direction at the target for a straight path, and travel direction
        let straight = angle_to(end_pos, start_pos);
        let travel = angle_to(start_pos, end_pos);

        let look_angle = match look {
            LookAhead::Path(angle) | LookAhead::Direct { angle, .. } => Some(angle),
            LookAhead::None => None,
        };

        let a1 = if start.is_path() {
            start.exit_angle(self.frame_interval)
        } else if state.first {
            look_angle.unwrap_or(straight) + PI
        } else {
            angle_to(state.last_point, start_pos)
        };

        let mut a2 = look_angle.unwrap_or(if state.first { straight } else { a1 + PI });
        let mut mult_out = s.jump_multiplier;
        let mut mult_in = s.next_jump_multiplier;
        let mut branch = "plain";

        if !matches!(look, LookAhead::Path(_)) {
            // Small deviation from the travel direction means the path doubles back
            let deviation = angle_difference(travel, a2);

            if is_stream(window, s) && deviation.abs() < s.stream_restrict_arc_rad() {
                let left = travel + FRAC_PI_2;
                let right = travel - FRAC_PI_2;
                a2 = if angle_difference(a1, left).abs() <= angle_difference(a1, right).abs() {
                    left
                } else {
                    right
                };
                mult_out = s.stream_multiplier;
                mult_in = s.stream_multiplier;
                branch = "stream";
            } else if !start.is_path() && deviation.abs() < s.restrict_arc_rad() {
                if (deviation >= 0.0) != s.restrict_invert {
                    a2 += s.restrict_add.to_radians();
                } else {
                    a2 -= s.restrict_sub.to_radians();
                }
                branch = "restricted";
            } else if let LookAhead::Direct { next, .. } = look {
                if s.interpolate_angles {
                    let sq1 = distance * distance;
                    let sq2 = end_pos.distance_squared(next);
                    let mut weight = if sq1 + sq2 > 0.0 { sq1 / (sq1 + sq2) } else { 0.5 };
                    if s.invert_interpolation {
                        weight = 1.0 - weight;
                    }
                    a2 = lerp_angle(straight, a2, weight);
                    branch = "interpolated";
                }
            }
        }

        if same {
            a2 = a1 + PI;
            distance = start_pos.distance(state.last_point);
            if distance <= f32::EPSILON {
                distance = 1.0;
            }
            mult_out = s.bounce_multiplier;
            mult_in = s.bounce_multiplier;
            branch = "bounce";
        } else if end.is_path() && s.slider_predict {
            if let Some(predicted) = self.predict_slider(end, distance) {
                a2 = predicted;
                branch = "slider";
            }
        }

        let gap = self.time.duration();
        if s.duration_trigger > 0.0 && gap > s.duration_trigger {
            let factor = 1.0 + s.duration_multiplier * ((gap - s.duration_trigger) / s.duration_trigger) as f32;
            mult_out *= factor;
            mult_in *= factor;
        }

        let p1 = start_pos + from_angle(a1, distance * mult_out);
        let p2 = end_pos + from_angle(a2, distance * mult_in);
        self.curve = Bezier::cubic(start_pos, p1, p2, end_pos);

        log::trace!(
            "momentum {:.0}->{:.0}: {branch}, a1={a1:.3} a2={a2:.3}",
            self.time.start,
            self.time.end
        );

        state.last_angle = a2;
        if !same {
            state.last_point = p2;
        }
        state.first = false;

        window.len().min(3)
    }

    fn update(&self, time: f64) -> Vec2 {
        self.curve.point_at(self.time.progress(time) as f32)
    }
}
