//! Bouncing-ball curves.

use super::PhysicsState;
use std::f64::consts::{PI, TAU};

/// Simple bounce: a parabolic fall whose sharpness follows `param`.
///
/// `param = 0.0` gives a droopy curve that sags early, `param = 1.0` a
/// sharp one that holds its height and drops late. Damping lowers the
/// height linearly across the cycle (never below 10% of the current
/// energy) and sets how much energy a ground contact costs.
///
/// Output is clamped to [0.0, 1.0].
///
/// # Examples
///
/// ```
/// use physlfo::physics::{bounce, PhysicsState};
///
/// let mut state = PhysicsState::new();
/// // Starts at full height
/// assert_eq!(bounce(0.0, 0.5, 0.1, &mut state), 1.0);
/// ```
pub fn bounce(t: f64, param: f64, damping: f64, state: &mut PhysicsState) -> f64 {
    let curve_power = 0.5 + param * 3.0;

    let decay_factor = (1.0 - damping * t * 1.5).max(0.1);
    let bounce_height = state.energy * decay_factor;

    let mut height = bounce_height * (1.0 - t.powf(curve_power));

    if height <= 0.0 {
        height = 0.0;
        state.ground_contact(1.0 - damping * 0.8);
    }

    height.clamp(0.0, 1.0)
}

/// Bounce with spin: a gentler bounce carrying two spin harmonics and a
/// slow wobble.
///
/// `param` scales curve sharpness, spin rate and spin intensity together.
/// The spin rides on top of the base bounce, so it fades as the ball
/// loses height. Ground contact costs less energy than [`bounce`].
///
/// Floored at 0.0; there is no upper clamp.
pub fn bounce_spin(t: f64, param: f64, damping: f64, state: &mut PhysicsState) -> f64 {
    let curve_power = 0.3 + param * 2.5;

    let decay_factor = (1.0 - damping * t).max(0.15);
    let bounce_height = state.energy * decay_factor;
    let base_bounce = bounce_height * (1.0 - t.powf(curve_power));

    let primary_freq = 3.0 + param * 12.0;
    let secondary_freq = 1.5 + param * 6.0;
    let primary_spin = (TAU * primary_freq * t).sin();
    let secondary_spin = (TAU * secondary_freq * t + PI / 3.0).sin();
    let complex_spin = primary_spin * 0.7 + secondary_spin * 0.3;

    let energy_boost = 1.0 + state.energy * 0.5;
    let spin_influence = (0.3 + param * 0.4) * base_bounce * energy_boost;

    let wobble_freq = 0.5 + param * 1.5;
    let wobble = (TAU * wobble_freq * t).sin() * 0.15 * param;

    let mut final_height = base_bounce + complex_spin * spin_influence + wobble * base_bounce;

    if final_height <= 0.0 {
        final_height = 0.0;
        state.ground_contact(1.0 - damping * 0.5);
    }

    final_height.max(0.0)
}

/// Multi-bounce: several bounces per cycle decaying geometrically to rest.
///
/// `param` sets the number of bounces per cycle (2 to 8); each bounce keeps
/// between 50% and 90% of the previous amplitude depending on `damping`.
/// Once the amplitude drops under 2% the output is exactly 0.0 from then on.
///
/// The decay is keyed off elapsed time alone: this curve never reads or
/// updates the shared energy and bounce counters.
pub fn multi_bounce(t: f64, param: f64, damping: f64) -> f64 {
    const STOP_THRESHOLD: f64 = 0.02;

    let bounces_per_cycle = 2.0 + param * 6.0;
    let position = t * bounces_per_cycle;

    let segment_phase = position % 1.0;
    let current_bounce = position.floor();

    let height = 4.0 * segment_phase * (1.0 - segment_phase);

    let retained = 0.5 + damping * 0.4;
    let amplitude = retained.powf(current_bounce);

    if amplitude < STOP_THRESHOLD {
        return 0.0;
    }

    height * amplitude
}
