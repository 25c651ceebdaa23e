//! End-to-end synthesis over whole timelines

use autodance::sim::PlayArea;
use autodance::{HitObject, MoverKind, ReplayFrame, Settings, SliderPath, Synthesizer, Timeline};
use glam::Vec2;
use proptest::prelude::*;

fn mixed_timeline() -> Timeline {
    Timeline::new(vec![
        HitObject::point(500.0, Vec2::new(64.0, 64.0)),
        // Stream
        HitObject::point(620.0, Vec2::new(90.0, 70.0)),
        HitObject::point(740.0, Vec2::new(116.0, 76.0)),
        HitObject::point(860.0, Vec2::new(142.0, 82.0)),
        // Jump back and forth
        HitObject::point(1200.0, Vec2::new(460.0, 340.0)),
        HitObject::point(1500.0, Vec2::new(142.0, 82.0)),
        HitObject::path(
            1900.0,
            2400.0,
            Vec2::new(200.0, 200.0),
            SliderPath::new(
                vec![Vec2::ZERO, Vec2::new(80.0, -60.0), Vec2::new(160.0, 0.0)],
                1,
            ),
        ),
        HitObject::spinner(2800.0, 4800.0, Vec2::new(256.0, 192.0), 6),
        HitObject::point(5200.0, Vec2::new(30.0, 350.0)).with_stack_offset(Vec2::new(-4.0, -4.0)),
        HitObject::point(5200.0, Vec2::new(480.0, 30.0)),
        HitObject::point(7000.0, Vec2::new(480.0, 30.0)),
    ])
    .unwrap()
}

fn assert_well_formed(frames: &[ReplayFrame], area: PlayArea) {
    for pair in frames.windows(2) {
        assert!(pair[0].time < pair[1].time, "{} !< {}", pair[0].time, pair[1].time);
    }
    for f in frames {
        assert!(f.position.is_finite(), "non-finite at {}", f.time);
        assert!(area.contains(f.position), "{} outside at {}", f.position, f.time);
    }
}

#[test]
fn every_mover_produces_well_formed_frames() {
    let timeline = mixed_timeline();
    for kind in MoverKind::ALL {
        let settings = Settings::with_mover(kind);
        let area = settings.play_area;
        let frames = Synthesizer::new(settings).generate(&timeline);
        assert!(!frames.is_empty(), "{}", kind.as_str());
        assert_well_formed(&frames, area);
    }
}

#[test]
fn objects_are_hit_on_time() {
    let timeline = mixed_timeline();
    for kind in MoverKind::ALL {
        let frames = Synthesizer::new(Settings::with_mover(kind)).generate(&timeline);
        for (i, obj) in timeline.iter().enumerate() {
            // Second of two simultaneous objects never gets its own frame
            if i == 9 {
                continue;
            }
            let frame = frames
                .iter()
                .find(|f| f.time == obj.start_time)
                .unwrap_or_else(|| panic!("{}: no frame for object {i}", kind.as_str()));
            if !obj.is_spin() {
                assert!(
                    (frame.position - obj.start_position()).length() < 1e-2,
                    "{}: object {i} at {}, cursor at {}",
                    kind.as_str(),
                    obj.start_position(),
                    frame.position
                );
            }
            assert!(frame.action.is_some(), "object {i} not pressed");
        }
    }
}

#[test]
fn settings_round_trip_through_json() {
    let settings = Settings {
        mover: MoverKind::Flower,
        frame_rate: 120.0,
        ..Settings::default()
    };
    let json = serde_json::to_string(&settings).unwrap();
    let parsed = Settings::from_json(&json).unwrap();
    assert_eq!(parsed, settings);

    let timeline = mixed_timeline();
    assert_eq!(
        Synthesizer::new(parsed).generate(&timeline),
        Synthesizer::new(settings).generate(&timeline)
    );
}

#[test]
fn timeline_from_json() {
    let json = r#"[
        {"kind": "Point", "start_time": 0, "end_time": 0, "position": [100, 100]},
        {"kind": {"Spin": {"spin_count": 4}}, "start_time": 400, "end_time": 1400, "position": [256, 192]},
        {"kind": {"Path": {"points": [[0, 0], [100, 0]], "spans": 2}},
         "start_time": 1800, "end_time": 2200, "position": [50, 300]}
    ]"#;
    let timeline = Timeline::from_json(json).unwrap();
    assert_eq!(timeline.len(), 3);
    assert!(timeline.objects()[2].is_path());

    let frames = Synthesizer::default().generate(&timeline);
    assert_well_formed(&frames, Settings::default().play_area);
}

#[test]
fn rejects_unsorted_json() {
    let json = r#"[
        {"kind": "Point", "start_time": 500, "end_time": 500, "position": [1, 1]},
        {"kind": "Point", "start_time": 100, "end_time": 100, "position": [1, 1]}
    ]"#;
    assert!(Timeline::from_json(json).is_err());
}

#[test]
fn coincident_points_stay_finite() {
    let timeline = Timeline::new(vec![
        HitObject::point(1000.0, Vec2::new(50.0, 50.0)),
        HitObject::point(1300.0, Vec2::new(50.0, 50.0)),
        HitObject::point(1600.0, Vec2::new(50.0, 50.0)),
    ])
    .unwrap();
    for kind in MoverKind::ALL {
        let settings = Settings::with_mover(kind);
        let area = settings.play_area;
        let frames = Synthesizer::new(settings).generate(&timeline);
        assert_well_formed(&frames, area);
    }
}

#[test]
fn spinner_settles_before_the_next_object() {
    let centre = Vec2::new(256.0, 192.0);
    let timeline = Timeline::new(vec![
        HitObject::point(0.0, Vec2::new(100.0, 100.0)),
        HitObject::spinner(500.0, 2500.0, centre, 5),
        HitObject::point(3000.0, Vec2::new(300.0, 300.0)),
    ])
    .unwrap();
    let settings = Settings::default();
    let end_radius = settings.spinner_end_radius;
    let frames = Synthesizer::new(settings).generate(&timeline);

    let spin: Vec<&ReplayFrame> = frames
        .iter()
        .filter(|f| f.time >= 500.0 && f.time <= 2500.0)
        .collect();
    let radii: Vec<f32> = spin.iter().map(|f| (f.position - centre).length()).collect();
    for pair in radii.windows(2) {
        assert!(pair[1] <= pair[0] + 1e-2);
    }
    let last = radii.last().copied().unwrap_or_default();
    assert!((last - end_radius).abs() < 1e-2);

    // Held for the whole spin
    assert!(spin.iter().all(|f| f.action.is_some()));
}

#[test]
fn border_bounce_can_be_disabled() {
    let timeline = Timeline::new(vec![
        HitObject::point(0.0, Vec2::new(2.0, 2.0)),
        HitObject::point(3000.0, Vec2::new(2.0, 380.0)),
        HitObject::point(3100.0, Vec2::new(2.0, 2.0)),
    ])
    .unwrap();
    let bounced = Settings {
        jump_multiplier: 3.0,
        next_jump_multiplier: 3.0,
        ..Settings::default()
    };
    let free = Settings {
        border_bounce: false,
        ..bounced.clone()
    };
    let area = bounced.play_area;

    let inside = Synthesizer::new(bounced).generate(&timeline);
    assert_well_formed(&inside, area);

    let raw = Synthesizer::new(free).generate(&timeline);
    assert_eq!(raw.len(), inside.len());
    assert!(raw.iter().all(|f| f.position.is_finite()));
}

fn arb_point()-> impl Strategy<Value = (f64, f32, f32)> {
    (1.0f64..600.0, 0.0f32..512.0, 0.0f32..384.0)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn random_point_timelines_stay_well_formed(
        points in prop::collection::vec(arb_point(), 0..24),
        mover in 0usize..MoverKind::ALL.len(),
    ) {
        let mut t = 0.0;
        let objects: Vec<HitObject> = points
            .into_iter()
            .map(|(gap, x, y)| {
                t += gap;
                HitObject::point(t, Vec2::new(x, y))
            })
            .collect();
        let timeline = Timeline::new(objects).unwrap();
        let settings = Settings::with_mover(MoverKind::ALL[mover]);
        let area = settings.play_area;
        let frames = Synthesizer::new(settings).generate(&timeline);

        for pair in frames.windows(2) {
            prop_assert!(pair[0].time < pair[1].time);
        }
        for f in &frames {
            prop_assert!(area.contains(f.position));
        }
        for obj in timeline.iter() {
            let hit = frames.iter().find(|f| f.time == obj.start_time);
            prop_assert!(hit.is_some_and(|f| (f.position - obj.start_position()).length() < 1e-2));
        }
    }
}
