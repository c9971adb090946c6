//! Core signal processing traits.
//!
//! This module provides the fundamental `Signal` trait that represents
//! anything that can generate samples one at a time, together with the
//! `Pitched` trait for signals with a controllable rate.

/// Common interface for all signal sources.
///
/// The trait provides two fundamental operations:
/// - Single sample generation via `next_sample()`
/// - Batch processing via `process()`
pub trait Signal {
    /// Generates the next sample from the signal.
    ///
    /// # Returns
    ///
    /// A sample value. Physics LFO curves are unipolar, nominally in [0.0, 1.0].
    fn next_sample(&mut self) -> f64;

    /// Generates multiple samples into a buffer.
    ///
    /// Default implementation calls `next_sample()` for each element.
    /// Implementors may override this for more efficient batch processing.
    ///
    /// # Arguments
    ///
    /// * `buffer` - Mutable slice to fill with samples
    fn process(&mut self, buffer: &mut [f64]) {
        for sample in buffer.iter_mut() {
            *sample = self.next_sample();
        }
    }
}

/// Minimal trait for anything with a controllable rate.
///
/// # Examples
///
/// ```
/// use physlfo::{PhysicsLfo, Pitched};
///
/// let mut lfo = PhysicsLfo::new(48000.0).unwrap();
/// lfo.set_frequency(2.5);
/// assert_eq!(lfo.frequency(), 2.5);
/// ```
pub trait Pitched {
    /// Sets the frequency of the signal.
    ///
    /// # Arguments
    ///
    /// * `freq` - New frequency in Hz
    fn set_frequency(&mut self, freq: f64);

    /// Gets the current frequency of the signal in Hz.
    fn frequency(&self) -> f64;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Ramp {
        value: f64,
    }

    impl Signal for Ramp {
        fn next_sample(&mut self) -> f64 {
            self.value += 1.0;
            self.value
        }
    }

    #[test]
    fn test_default_process_calls_next_sample() {
        let mut ramp = Ramp { value: 0.0 };
        let mut buffer = [0.0; 4];
        ramp.process(&mut buffer);
        assert_eq!(buffer, [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_process_empty_buffer() {
        let mut ramp = Ramp { value: 0.0 };
        ramp.process(&mut []);
        assert_eq!(ramp.value, 0.0);
    }
}
