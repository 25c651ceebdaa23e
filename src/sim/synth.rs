//! Frame synthesis
//!
//! Walks the timeline in order, sampling each object's active duration with
//! the slider and spinner samplers and every gap in between with the mover.
//! One pass is a pure function of the timeline and settings.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::JoinHandle;

use glam::Vec2;

use super::bounce::PlayArea;
use super::frame::ReplayFrame;
use super::keys::ButtonSchedule;
use super::slider::SliderSampler;
use super::spinner::SpinnerSampler;
use crate::beatmap::{HitObject, ObjectKind, Timeline};
use crate::consts::{SETTLE_LEAD_IN, SETTLE_TIME};
use crate::error::SynthError;
use crate::movers::MoverState;
use crate::movers::stream::same_position;
use crate::settings::Settings;

/// Collects frames, keeping times strictly increasing
struct FrameSink {
    frames: Vec<ReplayFrame>,
    area: Option<PlayArea>,
    buttons: ButtonSchedule,
    dropped: usize,
}

impl FrameSink {
    fn new(settings: &Settings, buttons: ButtonSchedule) -> Self {
        Self {
            frames: Vec::new(),
            area: settings.border_bounce.then_some(settings.play_area),
            buttons,
            dropped: 0,
        }
    }

    fn push(&mut self, time: f64, position: Vec2) {
        let behind = self.frames.last().is_some_and(|last| time <= last.time);
        if behind || !time.is_finite() {
            self.dropped += 1;
            log::trace!("dropping frame at {time}");
            return;
        }
        let position = match self.area {
            Some(area) => area.reflect(position),
            None => position,
        };
        let action = self.buttons.held_at(time);
        self.frames.push(ReplayFrame::new(time, position, action));
    }

    fn last_position(&self) -> Option<Vec2> {
        self.frames.last().map(|f| f.position)
    }
}

/// Turns a timeline into replay frames
#[derive(Debug, Clone, Default)]
pub struct Synthesizer {
    settings: Settings,
}

impl Synthesizer {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Run one full pass
    pub fn generate(&self, timeline: &Timeline) -> Vec<ReplayFrame> {
        self.run(timeline, || false).unwrap_or_default()
    }

    /// Run one full pass, checking `cancel` before each object
    pub fn generate_cancellable(
        &self,
        timeline: &Timeline,
        cancel: &AtomicBool,
    ) -> Result<Vec<ReplayFrame>, SynthError> {
        self.run(timeline, || cancel.load(Ordering::Relaxed))
    }

    /// Run one pass on a background thread
    pub fn spawn(
        timeline: Timeline,
        settings: Settings,
        cancel: Arc<AtomicBool>,
    ) -> JoinHandle<Result<Vec<ReplayFrame>, SynthError>> {
        std::thread::spawn(move || Synthesizer::new(settings).generate_cancellable(&timeline, &cancel))
    }

    fn run(
        &self,
        timeline: &Timeline,
        should_stop: impl Fn() -> bool,
    ) -> Result<Vec<ReplayFrame>, SynthError> {
        let objects = timeline.objects();
        let Some(first) = objects.first() else {
            log::debug!("empty timeline, nothing to synthesize");
            return Ok(Vec::new());
        };

        let settings = &self.settings;
        if !settings.frame_rate_in_range() {
            log::warn!("frame_rate {} out of range, clamping to 1", settings.frame_rate);
        }
        let interval = settings.frame_interval();
        let park = settings.park_position;
        let mut mover = settings.mover.build(settings);
        let window_size = mover.window_size().max(2);
        let mut state = MoverState::starting_at(park);
        let mut sink = FrameSink::new(settings, ButtonSchedule::new(objects, settings));

        sink.push(SETTLE_TIME, park);
        let lead_in = first.start_time - SETTLE_LEAD_IN;
        if lead_in > SETTLE_TIME {
            sink.push(lead_in, park);
        }

        for (i, obj) in objects.iter().enumerate() {
            if should_stop() {
                log::debug!("synthesis cancelled at object {i}");
                return Err(SynthError::Cancelled { at_object: i });
            }

            let spin_exit = self.emit_object(obj, &mut sink, interval);

            let Some(next) = objects.get(i + 1) else {
                break;
            };

            let stand_in;
            let from = match spin_exit {
                Some(exit) => {
                    stand_in = obj.spinner_exit(exit);
                    &stand_in
                }
                None => obj,
            };
            let end = self.window_end(objects, i, window_size);
            let window: Vec<&HitObject> = std::iter::once(from).chain(&objects[i + 1..end]).collect();
            let consumed = mover.set_objects(&window, &mut state);
            log::trace!(
                "segment {i}: {:.1}..{:.1} ms, read {consumed} objects",
                obj.end_time,
                next.start_time
            );

            let mut k = 1.0;
            loop {
                let t = obj.end_time + k * interval;
                if t >= next.start_time {
                    break;
                }
                sink.push(t, mover.update(t));
                k += 1.0;
            }
        }

        if sink.dropped > 0 {
            log::warn!("dropped {} frames that went back in time", sink.dropped);
        }
        log::debug!(
            "synthesized {} frames for {} objects with {} mover",
            sink.frames.len(),
            objects.len(),
            settings.mover.as_str()
        );
        Ok(sink.frames)
    }

    /// Exclusive end of the window starting at `objects[i]`.
    ///
    /// Look-ahead movers (window of three or more) keep receiving objects
    /// while the window ends in a run of coincident points, so their scan for
    /// the next distinct position can reach past stacks.
    fn window_end(&self, objects: &[HitObject], i: usize, size: usize) -> usize {
        let mut end = (i + size).min(objects.len());
        if size < 3 {
            return end;
        }
        while end < objects.len() {
            let (a, b) = (&objects[end - 2], &objects[end - 1]);
            if a.is_path() || b.is_path() || !same_position(a, b, self.settings.skip_stacking) {
                break;
            }
            end += 1;
        }
        end
    }

    /// Frames for the object's own active duration. Spinners return where
    /// the spiral ended so the next segment starts there.
    fn emit_object(&self, obj: &HitObject, sink: &mut FrameSink, interval: f64) -> Option<Vec2> {
        match &obj.kind {
            ObjectKind::Point => {
                sink.push(obj.start_time, obj.start_position());
                None
            }
            ObjectKind::Path(_) => {
                for (t, p) in SliderSampler::new(obj).samples(interval) {
                    sink.push(t, p);
                }
                None
            }
            ObjectKind::Spin { .. } => {
                let mut sampler = SpinnerSampler::new(obj, &self.settings);
                if let Some(cursor) = sink.last_position() {
                    sampler = sampler.entering_from(cursor);
                }
                for (t, p) in sampler.samples(interval) {
                    sink.push(t, p);
                }
                Some(sampler.position_at(obj.end_time))
            }
        }
    }
}
