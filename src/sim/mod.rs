//! Deterministic frame synthesis
//!
//! Everything that turns a timeline into frames lives here:
//! - Fixed frame interval only
//! - Objects processed strictly in timeline order
//! - No randomness, no I/O

pub mod bounce;
pub mod frame;
pub mod keys;
pub mod slider;
pub mod spinner;
pub mod synth;

pub use bounce::PlayArea;
pub use frame::{Button, ReplayFrame};
pub use keys::ButtonSchedule;
pub use slider::SliderSampler;
pub use spinner::SpinnerSampler;
pub use synth::Synthesizer;

/// Sample times over [start, end]: the start, every `interval` after it
/// strictly before the end, then the end itself.
pub fn sample_times(start: f64, end: f64, interval: f64) -> Vec<f64> {
    let mut times = vec![start];
    if end > start && interval > 0.0 {
        let mut k = 1.0;
        loop {
            let t = start + k * interval;
            if t >= end {
                break;
            }
            times.push(t);
            k += 1.0;
        }
        times.push(end);
    }
    times
}
