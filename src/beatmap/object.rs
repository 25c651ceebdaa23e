//! Hit objects as the synthesizer sees them
//!
//! Positions are already resolved by the beatmap loader; the only thing kept
//! separate is the stack offset, so coincidence checks can ignore stacking.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::path::SliderPath;
use crate::angle_to;

/// What kind of object this is
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ObjectKind {
    /// A single tap target
    Point,
    /// A curved body followed from start to end
    Path(SliderPath),
    /// A rotational object, spun around its position
    Spin { spin_count: u32 },
}

/// A timed, positioned gameplay target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HitObject {
    pub kind: ObjectKind,
    /// Start time (ms)
    pub start_time: f64,
    /// End time (ms), equal to `start_time` for points
    pub end_time: f64,
    /// Unstacked head position
    pub position: Vec2,
    /// Offset applied by stacking
    #[serde(default)]
    pub stack_offset: Vec2,
}

impl HitObject {
    pub fn point(time: f64, position: Vec2) -> Self {
        Self {
            kind: ObjectKind::Point,
            start_time: time,
            end_time: time,
            position,
            stack_offset: Vec2::ZERO,
        }
    }

    pub fn path(start_time: f64, end_time: f64, position: Vec2, path: SliderPath) -> Self {
        Self {
            kind: ObjectKind::Path(path),
            start_time,
            end_time,
            position,
            stack_offset: Vec2::ZERO,
        }
    }

    pub fn spinner(start_time: f64, end_time: f64, center: Vec2, spin_count: u32) -> Self {
        Self {
            kind: ObjectKind::Spin { spin_count },
            start_time,
            end_time,
            position: center,
            stack_offset: Vec2::ZERO,
        }
    }

    pub fn with_stack_offset(mut self, offset: Vec2) -> Self {
        self.stack_offset = offset;
        self
    }

    /// Stand-in for a finished spinner whose cursor ended at `exit`
    pub(crate) fn spinner_exit(&self, exit: Vec2) -> Self {
        Self {
            kind: self.kind.clone(),
            start_time: self.end_time,
            end_time: self.end_time,
            position: exit,
            stack_offset: Vec2::ZERO,
        }
    }

    #[inline]
    pub fn is_point(&self) -> bool {
        matches!(self.kind, ObjectKind::Point)
    }

    #[inline]
    pub fn is_path(&self) -> bool {
        matches!(self.kind, ObjectKind::Path(_))
    }

    #[inline]
    pub fn is_spin(&self) -> bool {
        matches!(self.kind, ObjectKind::Spin { .. })
    }

    pub fn slider_path(&self) -> Option<&SliderPath> {
        match &self.kind {
            ObjectKind::Path(path) => Some(path),
            _ => None,
        }
    }

    pub fn spin_count(&self) -> u32 {
        match self.kind {
            ObjectKind::Spin { spin_count } => spin_count,
            _ => 0,
        }
    }

    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }

    /// Head position, stacked
    pub fn start_position(&self) -> Vec2 {
        self.position + self.stack_offset
    }

    /// Head position ignoring stacking
    pub fn raw_start_position(&self) -> Vec2 {
        self.position
    }

    /// Where the object is left, stacked
    pub fn end_position(&self) -> Vec2 {
        self.raw_end_position() + self.stack_offset
    }

    /// Where the object is left, ignoring stacking
    pub fn raw_end_position(&self) -> Vec2 {
        match &self.kind {
            ObjectKind::Path(path) => self.position + path.position_at(1.0),
            _ => self.position,
        }
    }

    /// Stacked position at `progress` through the object
    pub fn position_at(&self, progress: f64) -> Vec2 {
        match &self.kind {
            ObjectKind::Path(path) => self.start_position() + path.position_at(progress),
            _ => self.start_position(),
        }
    }

    /// Progress step worth one frame, kept away from 0 and from covering the whole object
    fn tangent_epsilon(&self, frame_interval: f64) -> f64 {
        let duration = self.duration();
        if duration <= 0.0 {
            return 0.5;
        }
        (frame_interval / duration).clamp(1e-3, 0.5)
    }

    /// Direction the cursor travels when entering the object
    pub fn entry_angle(&self, frame_interval: f64) -> f32 {
        let eps = self.tangent_epsilon(frame_interval);
        angle_to(self.position_at(0.0), self.position_at(eps))
    }

    /// Direction the cursor travels when leaving the object
    pub fn exit_angle(&self, frame_interval: f64) -> f32 {
        let eps = self.tangent_epsilon(frame_interval);
        angle_to(self.position_at(1.0 - eps), self.position_at(1.0))
    }
}
