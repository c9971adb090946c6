//! Oscillator traits.

mod traits;

pub use traits::Oscillator;
