//! Stream and same-position detection

use crate::beatmap::HitObject;
use crate::consts::{SAME_POSITION_EPSILON_SQ, STREAM_TIME_THRESHOLD};
use crate::settings::Settings;

/// True when the cursor would leave `from` and arrive at `to` on the same spot.
///
/// With `skip_stacking` the stack offsets are ignored, so a stack still counts
/// as one position.
pub fn same_position(from: &HitObject, to: &HitObject, skip_stacking: bool) -> bool {
    let (a, b) = if skip_stacking {
        (from.raw_end_position(), to.raw_start_position())
    } else {
        (from.end_position(), to.start_position())
    };
    a.distance_squared(b) < SAME_POSITION_EPSILON_SQ
}

/// Two points close in both space and time
pub fn is_stream_pair(a: &HitObject, b: &HitObject, settings: &Settings) -> bool {
    if !a.is_point() || !b.is_point() {
        return false;
    }
    if (b.start_time - a.end_time).abs() >= STREAM_TIME_THRESHOLD {
        return false;
    }
    let dsq = a.start_position().distance_squared(b.start_position());
    dsq >= settings.stream_area_min && dsq <= settings.stream_area_max
}

/// Three consecutive points forming a stream
pub fn is_stream(window: &[&HitObject], settings: &Settings) -> bool {
    match window {
        [a, b, c, ..] => is_stream_pair(a, b, settings) && is_stream_pair(b, c, settings),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use proptest::prelude::*;

    fn pt(t: f64, x: f32, y: f32) -> HitObject {
        HitObject::point(t, Vec2::new(x, y))
    }

    #[test]
    fn test_stream_detected() {
        let s = Settings::default();
        let (a, b, c) = (pt(0.0, 100.0, 100.0), pt(100.0, 130.0, 100.0), pt(200.0, 160.0, 110.0));
        assert!(is_stream(&[&a, &b, &c], &s));
    }

    #[test]
    fn test_slow_or_far_is_not_stream() {
        let s = Settings::default();
        let (a, b) = (pt(0.0, 100.0, 100.0), pt(100.0, 130.0, 100.0));
        let slow = pt(400.0, 160.0, 100.0);
        let far = pt(200.0, 400.0, 100.0);
        assert!(!is_stream(&[&a, &b, &slow], &s));
        assert!(!is_stream(&[&a, &b, &far], &s));
        assert!(!is_stream(&[&a, &b], &s));
    }

    #[test]
    fn test_non_points_never_stream() {
        let s = Settings::default();
        let a = pt(0.0, 100.0, 100.0);
        let spin = HitObject::spinner(50.0, 60.0, Vec2::new(120.0, 100.0), 1);
        assert!(!is_stream_pair(&a, &spin, &s));
    }

    #[test]
    fn test_same_position_and_stacking() {
        let a = pt(0.0, 50.0, 50.0);
        let b = pt(100.0, 50.0, 50.0).with_stack_offset(Vec2::splat(-6.4));
        assert!(!same_position(&a, &b, false));
        assert!(same_position(&a, &b, true));
        assert!(same_position(&a, &pt(10.0, 50.0, 50.0), false));
    }

    proptest! {
        #[test]
        fn stream_pair_is_symmetric(
            ax in 0.0f32..512.0, ay in 0.0f32..384.0,
            bx in 0.0f32..512.0, by in 0.0f32..384.0,
            dt in 0.0f64..400.0,
        ) {
            let s = Settings::default();
            let a = pt(1000.0, ax, ay);
            let b = pt(1000.0 + dt, bx, by);
            prop_assert_eq!(is_stream_pair(&a, &b, &s), is_stream_pair(&b, &a, &s));
        }
    }
}
