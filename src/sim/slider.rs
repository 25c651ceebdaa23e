//! Cursor samples while following a path object

use glam::Vec2;

use super::sample_times;
use crate::beatmap::HitObject;

/// Follows a path object's body from start to end time
#[derive(Debug, Clone, Copy)]
pub struct SliderSampler<'a> {
    object: &'a HitObject,
}

impl<'a> SliderSampler<'a> {
    pub fn new(object: &'a HitObject) -> Self {
        Self { object }
    }

    /// Position on the body at `time`
    pub fn position_at(&self, time: f64) -> Vec2 {
        let duration = self.object.duration();
        let progress = if duration > 0.0 {
            (time - self.object.start_time) / duration
        } else {
            1.0
        };
        self.object.position_at(progress)
    }

    /// (time, position) samples covering the whole active duration
    pub fn samples(&self, interval: f64) -> Vec<(f64, Vec2)> {
        sample_times(self.object.start_time, self.object.end_time, interval)
            .into_iter()
            .map(|t| (t, self.position_at(t)))
            .collect()
    }

    pub fn entry_angle(&self, frame_interval: f64) -> f32 {
        self.object.entry_angle(frame_interval)
    }

    pub fn exit_angle(&self, frame_interval: f64) -> f32 {
        self.object.exit_angle(frame_interval)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::beatmap::SliderPath;

    fn slider() -> HitObject {
        HitObject::path(
            1000.0,
            1100.0,
            Vec2::new(100.0, 100.0),
            SliderPath::linear(Vec2::new(100.0, 0.0), 1),
        )
    }

    #[test]
    fn test_samples_cover_duration() {
        let obj = slider();
        let samples = SliderSampler::new(&obj).samples(25.0);
        let times: Vec<f64> = samples.iter().map(|(t, _)| *t).collect();
        assert_eq!(times, vec![1000.0, 1025.0, 1050.0, 1075.0, 1100.0]);

        assert_eq!(samples[0].1, obj.start_position());
        assert!((samples[2].1 - Vec2::new(150.0, 100.0)).length() < 1e-3);
        assert!((samples[4].1 - obj.end_position()).length() < 1e-3);
    }

    #[test]
    fn test_tangents() {
        let obj = slider();
        let sampler = SliderSampler::new(&obj);
        assert!(sampler.entry_angle(16.0).abs() < 1e-4);
        assert!(sampler.exit_angle(16.0).abs() < 1e-4);
    }

    #[test]
    fn test_zero_duration_lands_on_end() {
        let obj = HitObject::path(0.0, 0.0, Vec2::ZERO, SliderPath::linear(Vec2::new(40.0, 0.0), 1));
        let samples = SliderSampler::new(&obj).samples(16.0);
        assert_eq!(samples.len(), 1);
        assert!(samples[0].1.is_finite());
    }
}
