//! Error types
//!
//! The synthesizer absorbs geometric degeneracies itself, so these only cover
//! malformed input, configuration loading and cancellation.

use thiserror::Error;

/// Rejected hit object timeline
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TimelineError {
    /// A time or coordinate is NaN or infinite
    #[error("object {index} has a non-finite time or position")]
    NonFinite { index: usize },

    /// Object ends before it starts
    #[error("object {index} ends at {end_time} before it starts at {start_time}")]
    EndsBeforeStart {
        index: usize,
        start_time: f64,
        end_time: f64,
    },

    /// Start times go backwards
    #[error("object {index} starts at {start_time}, before the previous object at {previous}")]
    OutOfOrder {
        index: usize,
        start_time: f64,
        previous: f64,
    },

    /// A point object was given a duration
    #[error("point object {index} has a duration")]
    PointWithDuration { index: usize },

    /// Path object without a usable curve
    #[error("path object {index} has no points or zero spans")]
    EmptyPath { index: usize },
}

/// Settings or timeline input could not be loaded
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid timeline: {0}")]
    Timeline(#[from] TimelineError),
}

/// Synthesis did not run to completion
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SynthError {
    /// The caller raised the cancel flag
    #[error("synthesis cancelled at object {at_object}")]
    Cancelled { at_object: usize },
}
