//! Bezier curves for segment paths

use glam::Vec2;

/// A Bezier curve of any degree, evaluated on t ∈ [0, 1]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bezier {
    points: Vec<Vec2>,
}

impl Bezier {
    pub fn new(points: Vec<Vec2>) -> Self {
        Self { points }
    }

    pub fn cubic(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2) -> Self {
        Self::new(vec![p0, p1, p2, p3])
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn point_at(&self, t: f32) -> Vec2 {
        let t = t.clamp(0.0, 1.0);
        let mt = 1.0 - t;
        match self.points.as_slice() {
            [] => Vec2::ZERO,
            [p0] => *p0,
            [p0, p1] => *p0 * mt + *p1 * t,
            [p0, p1, p2] => *p0 * (mt * mt) + *p1 * (2.0 * mt * t) + *p2 * (t * t),
            // B(t) = (1-t)³P₀ + 3(1-t)²tP₁ + 3(1-t)t²P₂ + t³P₃
            [p0, p1, p2, p3] => {
                *p0 * (mt * mt * mt)
                    + *p1 * (3.0 * mt * mt * t)
                    + *p2 * (3.0 * mt * t * t)
                    + *p3 * (t * t * t)
            }
            points => {
                // de Casteljau for higher degrees
                let mut work = points.to_vec();
                for level in 1..work.len() {
                    for i in 0..work.len() - level {
                        work[i] = work[i] * mt + work[i + 1] * t;
                    }
                }
                work[0]
            }
        }
    }
}
