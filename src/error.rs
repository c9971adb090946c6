//! Error type for control operations on the physics LFO.

use std::fmt;

/// Errors reported by control operations.
///
/// None of these are fatal: the oscillator is left exactly as it was
/// before the rejected call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LfoError {
    /// Phase positioning was requested while in envelope mode
    PhaseSetInEnvelopeMode,
    /// The sample rate was zero, negative or not finite
    InvalidSampleRate(f64),
    /// An inlet index outside 0..=3 was addressed
    UnknownInlet(usize),
}

impl fmt::Display for LfoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LfoError::PhaseSetInEnvelopeMode => write!(
                f,
                "phase can only be set in looping mode (enable looping first)"
            ),
            LfoError::InvalidSampleRate(rate) => write!(f, "invalid sample rate: {}", rate),
            LfoError::UnknownInlet(index) => write!(f, "unknown inlet: {}", index),
        }
    }
}

impl std::error::Error for LfoError {}
