//! Core trait definitions for oscillators.

use crate::core::Pitched;

/// Oscillators are pitched signals with additional state control.
///
/// This trait extends `Pitched` to add oscillator-specific functionality
/// like state reset. All oscillators have controllable frequency (via `Pitched`)
/// and can reset their internal state to initial conditions.
pub trait Oscillator: Pitched {
    /// Resets the oscillator to the start of its cycle.
    ///
    /// For the physics LFO this rewinds the phase and restores the
    /// simulation to full energy. In envelope mode it also starts a new
    /// one-shot cycle.
    fn reset(&mut self);
}
