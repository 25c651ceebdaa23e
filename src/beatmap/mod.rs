//! Hit object timeline
//!
//! The synthesizer only reads this. Loading, stacking and curve flattening
//! happen upstream; `Timeline::new` is where malformed input gets rejected.

pub mod object;
pub mod path;

pub use object::{HitObject, ObjectKind};
pub use path::SliderPath;

use crate::error::TimelineError;

/// An ordered, validated list of hit objects
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timeline {
    objects: Vec<HitObject>,
}

impl Timeline {
    /// Validate and wrap an object list
    pub fn new(objects: Vec<HitObject>) -> Result<Self, TimelineError> {
        let mut previous: Option<f64> = None;

        for (index, obj) in objects.iter().enumerate() {
            let finite = obj.start_time.is_finite()
                && obj.end_time.is_finite()
                && obj.position.is_finite()
                && obj.stack_offset.is_finite();
            if !finite {
                return Err(TimelineError::NonFinite { index });
            }

            if obj.end_time < obj.start_time {
                return Err(TimelineError::EndsBeforeStart {
                    index,
                    start_time: obj.start_time,
                    end_time: obj.end_time,
                });
            }

            if let Some(prev) = previous {
                if obj.start_time < prev {
                    return Err(TimelineError::OutOfOrder {
                        index,
                        start_time: obj.start_time,
                        previous: prev,
                    });
                }
            }
            previous = Some(obj.start_time);

            match &obj.kind {
                ObjectKind::Point if obj.end_time != obj.start_time => {
                    return Err(TimelineError::PointWithDuration { index });
                }
                ObjectKind::Path(path) => {
                    if path.points().is_empty() || path.spans() == 0 {
                        return Err(TimelineError::EmptyPath { index });
                    }
                    if path.points().iter().any(|p| !p.is_finite()) {
                        return Err(TimelineError::NonFinite { index });
                    }
                }
                _ => {}
            }
        }

        Ok(Self { objects })
    }

    pub fn objects(&self) -> &[HitObject] {
        &self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HitObject> {
        self.objects.iter()
    }

    /// Parse a JSON array of hit objects and validate it
    pub fn from_json(json: &str) -> Result<Self, crate::error::ConfigError> {
        let objects: Vec<HitObject> = serde_json::from_str(json)?;
        Ok(Self::new(objects)?)
    }
}
