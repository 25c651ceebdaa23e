//! Synthesis settings
//!
//! One read-only bundle per run. Deserialized from JSON with every field
//! optional, falling back to `Settings::default()`.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};
use crate::error::ConfigError;
use crate::sim::bounce::PlayArea;

/// Which mover drives the inter-object segments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MoverKind {
    Linear,
    #[default]
    Momentum,
    Flower,
    Aggressive,
    HalfCircle,
}

impl MoverKind {
    pub const ALL: [MoverKind; 5] = [
        MoverKind::Linear,
        MoverKind::Momentum,
        MoverKind::Flower,
        MoverKind::Aggressive,
        MoverKind::HalfCircle,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MoverKind::Linear => "Linear",
            MoverKind::Momentum => "Momentum",
            MoverKind::Flower => "Flower",
            MoverKind::Aggressive => "Aggressive",
            MoverKind::HalfCircle => "HalfCircle",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "linear" => Some(MoverKind::Linear),
            "momentum" => Some(MoverKind::Momentum),
            "flower" | "bezier" => Some(MoverKind::Flower),
            "aggressive" => Some(MoverKind::Aggressive),
            "halfcircle" | "half_circle" | "circular" => Some(MoverKind::HalfCircle),
            _ => None,
        }
    }
}

/// A rate-changing gameplay modifier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RateModifier {
    DoubleTime,
    HalfTime,
    Custom { rate: f64 },
}

impl RateModifier {
    /// Playback rate this modifier applies
    pub fn rate(&self) -> f64 {
        match self {
            RateModifier::DoubleTime => 1.5,
            RateModifier::HalfTime => 0.75,
            RateModifier::Custom { rate } if *rate > 0.0 && rate.is_finite() => *rate,
            RateModifier::Custom { .. } => 1.0,
        }
    }

    /// Convert elapsed map time into elapsed real time
    pub fn apply_to_elapsed(&self, elapsed: f64) -> f64 {
        elapsed / self.rate()
    }
}

/// Synthesis settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Active mover
    pub mover: MoverKind,
    /// Output sampling rate (frames per second)
    pub frame_rate: f64,

    // === Curvature ===
    /// Start handle length as a fraction of the jump distance
    pub jump_multiplier: f32,
    /// End handle length as a fraction of the jump distance
    pub next_jump_multiplier: f32,
    /// Flower offset angle, in multiples of π
    pub angle_offset: f32,
    /// Compare positions without stack offsets when looking for bounces
    pub skip_stacking: bool,

    // === Streams ===
    /// Squared distance band [min, max] for stream pairs
    pub stream_area_min: f32,
    pub stream_area_max: f32,
    /// Deviation (degrees) under which a stream gets a perpendicular exit
    pub stream_restrict_arc: f32,
    pub stream_multiplier: f32,

    // === Jumps ===
    /// Deviation (degrees) under which a jump angle gets nudged
    pub restrict_arc: f32,
    /// Nudge amounts (degrees)
    pub restrict_add: f32,
    pub restrict_sub: f32,
    /// Flip the nudge side
    pub restrict_invert: bool,

    // === Long gaps and bounces ===
    /// Gap length (ms) above which curvature grows
    pub duration_trigger: f64,
    pub duration_multiplier: f32,
    pub bounce_multiplier: f32,

    // === Look-ahead ===
    pub slider_predict: bool,
    pub interpolate_angles: bool,
    pub invert_interpolation: bool,

    // === Border ===
    pub border_bounce: bool,
    pub play_area: PlayArea,

    // === Spinners ===
    pub spinner_start_radius: f32,
    pub spinner_end_radius: f32,
    /// Angular speed in radians per real-time millisecond
    pub spinner_speed: f64,
    pub spinner_clockwise: bool,
    pub rate_modifiers: Vec<RateModifier>,

    // === Linear mover ===
    /// How long objects are visible before their start time (ms)
    pub approach_time: f64,
    pub linear_wait: bool,
    pub reaction_time: f64,

    // === Buttons ===
    pub key_up_delay: f64,
    pub alternate_threshold: f64,

    /// Where the cursor rests before the first object
    pub park_position: Vec2,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mover: MoverKind::Momentum,
            frame_rate: 60.0,

            jump_multiplier: 0.6,
            next_jump_multiplier: 0.6,
            angle_offset: 0.45,
            skip_stacking: false,

            stream_area_min: 1.0,
            stream_area_max: 10_000.0,
            stream_restrict_arc: 45.0,
            stream_multiplier: 0.7,

            restrict_arc: 90.0,
            restrict_add: 25.0,
            restrict_sub: 25.0,
            restrict_invert: false,

            duration_trigger: 500.0,
            duration_multiplier: 0.3,
            bounce_multiplier: 1.0,

            slider_predict: false,
            interpolate_angles: true,
            invert_interpolation: false,

            border_bounce: true,
            play_area: PlayArea::new(Vec2::ZERO, Vec2::new(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT)),

            spinner_start_radius: 100.0,
            spinner_end_radius: 40.0,
            spinner_speed: 0.05,
            spinner_clockwise: false,
            rate_modifiers: Vec::new(),

            approach_time: 600.0,
            linear_wait: false,
            reaction_time: 100.0,

            key_up_delay: 50.0,
            alternate_threshold: 225.0,

            park_position: Vec2::new(PLAYFIELD_WIDTH / 2.0, PLAYFIELD_HEIGHT),
        }
    }
}

impl Settings {
    /// Settings for a given mover, everything else default
    pub fn with_mover(mover: MoverKind) -> Self {
        Self {
            mover,
            ..Self::default()
        }
    }

    /// At least one frame per second
    pub fn frame_rate_in_range(&self) -> bool {
        self.frame_rate >= 1.0
    }

    /// Time between sampled frames (ms). Out-of-range rates clamp to 1 fps.
    pub fn frame_interval(&self) -> f64 {
        if !self.frame_rate_in_range() {
            return 1000.0;
        }
        1000.0 / self.frame_rate
    }

    /// Combined rate of every active modifier
    pub fn playback_rate(&self) -> f64 {
        self.rate_modifiers.iter().map(RateModifier::rate).product()
    }

    /// Run elapsed map time through every active modifier
    pub fn apply_rate_to_elapsed(&self, elapsed: f64) -> f64 {
        self.rate_modifiers
            .iter()
            .fold(elapsed, |acc, m| m.apply_to_elapsed(acc))
    }

    pub fn stream_restrict_arc_rad(&self) -> f32 {
        self.stream_restrict_arc.to_radians()
    }

    pub fn restrict_arc_rad(&self) -> f32 {
        self.restrict_arc.to_radians()
    }

    /// Parse settings from JSON; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }
}
