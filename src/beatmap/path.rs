//! Sampleable slider curve
//!
//! The curve arrives already flattened into a polyline (offsets from the
//! slider head). Sampling is by arc length, so equal progress steps move the
//! cursor at constant speed along the body.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Serialized form: points and span count only, lengths are derived
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SliderPathData {
    points: Vec<Vec2>,
    #[serde(default = "default_spans")]
    spans: u32,
}

fn default_spans() -> u32 {
    1
}

/// A flattened slider body traversed `spans` times
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "SliderPathData", into = "SliderPathData")]
pub struct SliderPath {
    points: Vec<Vec2>,
    spans: u32,
    /// Arc length at each point, `cumulative[0] == 0`
    cumulative: Vec<f32>,
}

impl From<SliderPathData> for SliderPath {
    fn from(data: SliderPathData) -> Self {
        Self::new(data.points, data.spans)
    }
}

impl From<SliderPath> for SliderPathData {
    fn from(path: SliderPath) -> Self {
        Self {
            points: path.points,
            spans: path.spans,
        }
    }
}

impl SliderPath {
    pub fn new(points: Vec<Vec2>, spans: u32) -> Self {
        let mut cumulative = Vec::with_capacity(points.len());
        let mut total = 0.0;
        for (i, p) in points.iter().enumerate() {
            if i > 0 {
                total += p.distance(points[i - 1]);
            }
            cumulative.push(total);
        }
        Self {
            points,
            spans,
            cumulative,
        }
    }

    /// Straight slider from the head to `end` (offset)
    pub fn linear(end: Vec2, spans: u32) -> Self {
        Self::new(vec![Vec2::ZERO, end], spans)
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn spans(&self) -> u32 {
        self.spans
    }

    /// Length of one span
    pub fn length(&self) -> f32 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    /// Offset at `distance` along one span, clamped to the ends
    pub fn point_at_distance(&self, distance: f32) -> Vec2 {
        let Some(&first) = self.points.first() else {
            return Vec2::ZERO;
        };
        if distance <= 0.0 || self.points.len() == 1 {
            return first;
        }

        // First point whose cumulative length reaches the distance
        let i = self.cumulative.partition_point(|&d| d < distance);
        if i >= self.points.len() {
            return self.points[self.points.len() - 1];
        }

        let (d0, d1) = (self.cumulative[i - 1], self.cumulative[i]);
        let seg = d1 - d0;
        if seg <= f32::EPSILON {
            return self.points[i];
        }
        self.points[i - 1].lerp(self.points[i], (distance - d0) / seg)
    }

    /// Offset at `progress` through the whole object (every span).
    ///
    /// Odd spans run from the tail back to the head.
    pub fn position_at(&self, progress: f64) -> Vec2 {
        let spans = self.spans.max(1);
        let span_pos = progress.clamp(0.0, 1.0) * spans as f64;

        let mut span = span_pos.floor() as u32;
        let mut local = span_pos - span as f64;
        if span >= spans {
            span = spans - 1;
            local = 1.0;
        }
        if span % 2 == 1 {
            local = 1.0 - local;
        }

        self.point_at_distance(local as f32 * self.length())
    }
}
