//! Spring and elastic curves.

use std::f64::consts::TAU;

/// Decay terms below this are treated as settled.
const SETTLE_THRESHOLD: f64 = 0.01;

/// Damped decay: a vibration inside an exponential decay envelope, like a
/// struck bell or a plucked string.
///
/// `tension` sets the vibration rate (3 to 15 cycles per phase unit) and
/// `damping` the decay rate. The vibration frequency drifts down slightly
/// as time passes (by at most 20%). The result is remapped to [0.0, 1.0]
/// and enveloped a second time so it decays fully to 0.0 rather than to
/// the midpoint.
///
/// # Examples
///
/// ```
/// use physlfo::physics::damped_decay;
///
/// assert_eq!(damped_decay(0.0, 0.5, 0.5), 0.5);
/// assert!(damped_decay(20.0, 0.5, 0.5) < 1e-9);
/// ```
pub fn damped_decay(t: f64, tension: f64, damping: f64) -> f64 {
    let osc_frequency = 3.0 + tension * 12.0;

    let decay_rate = 1.0 + damping * 4.0;
    let envelope = (-decay_rate * t).exp();

    let drift = (1.0 - t * 0.1 * tension).max(0.8);
    let oscillation = (TAU * osc_frequency * drift * t).sin();

    let result = envelope * oscillation;
    (result + 1.0) * 0.5 * envelope
}

/// Elastic overshoot: a step response that overshoots and settles at 0.6.
///
/// `tension` raises both the ringing frequency and the overshoot depth,
/// `damping` speeds up the approach and the settling. Once the ringing has
/// decayed below 1% it is cut to exactly zero.
///
/// The output is not clamped and may briefly exceed 1.0 while overshooting.
pub fn elastic_overshoot(t: f64, tension: f64, damping: f64) -> f64 {
    const EQUILIBRIUM: f64 = 0.6;

    let freq = 1.0 + tension * 4.0;
    let overshoot_amount = 0.3 + tension * 0.4;

    let approach_rate = 2.0 + damping * 3.0;
    let base_approach = EQUILIBRIUM * (1.0 - (-approach_rate * t).exp());

    let overshoot_decay = (-damping * t * 2.5).exp();
    let overshoot = if overshoot_decay < SETTLE_THRESHOLD {
        0.0
    } else {
        (TAU * freq * t).sin() * overshoot_amount * overshoot_decay
    };

    base_approach + overshoot
}

/// Wobble: two close frequencies beating against each other while the level
/// settles at 0.5.
///
/// `tension` raises the base frequency and widens the spread between the
/// two partials. The wobble is cut to exactly zero once its decay falls
/// below 1%.
pub fn wobble(t: f64, tension: f64, damping: f64) -> f64 {
    const EQUILIBRIUM: f64 = 0.5;

    let freq1 = 1.5 + tension * 2.5;
    let freq2 = freq1 + tension * 0.8;

    let approach_rate = 1.5 + damping * 2.0;
    let base_level = EQUILIBRIUM * (1.0 - (-approach_rate * t).exp());

    let wobble_decay = (-damping * t * 1.2).exp();

    let osc1 = (TAU * freq1 * t).sin();
    let osc2 = (TAU * freq2 * t).sin();
    let beating = (osc1 + osc2 * 0.8) / 1.8;

    let amplitude = if wobble_decay < SETTLE_THRESHOLD {
        0.0
    } else {
        0.3 * wobble_decay
    };

    base_level + beating * amplitude
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_damped_decay_starts_at_midpoint() {
        for &(tension, damping) in &[(0.0, 0.0), (0.5, 0.5), (1.0, 1.0)] {
            assert_eq!(damped_decay(0.0, tension, damping), 0.5);
        }
    }

    #[test]
    fn test_damped_decay_stays_in_range() {
        for i in 0..5000 {
            let t = i as f64 * 0.001;
            let value = damped_decay(t, 0.8, 0.2);
            assert!((0.0..=1.0).contains(&value), "t={} value={}", t, value);
        }
    }

    #[test]
    fn test_damped_decay_envelope_bounds_output() {
        // Output never exceeds the envelope itself
        for i in 0..1000 {
            let t = i as f64 * 0.003;
            let envelope = (-(1.0 + 0.3 * 4.0) * t).exp();
            assert!(damped_decay(t, 0.6, 0.3) <= envelope + EPSILON);
        }
    }

    #[test]
    fn test_damped_decay_frequency_drift_floor() {
        // Past t = 2 at full tension the drift sits at its 0.8 floor
        let t: f64 = 3.1;
        let envelope = (-t).exp();
        let expected = (envelope * (TAU * 15.0 * 0.8 * t).sin() + 1.0) * 0.5 * envelope;
        assert!(approx_eq(damped_decay(t, 1.0, 0.0), expected));
    }

    #[test]
    fn test_elastic_overshoot_starts_at_zero() {
        assert_eq!(elastic_overshoot(0.0, 0.5, 0.5), 0.0);
    }

    #[test]
    fn test_elastic_overshoot_overshoots() {
        let peak = (0..1000)
            .map(|i| elastic_overshoot(i as f64 * 0.001, 1.0, 0.1))
            .fold(f64::MIN, f64::max);
        assert!(peak > 0.6);
    }

    #[test]
    fn test_elastic_overshoot_settles() {
        // exp(-2.5 * 0.5 * t) < 0.01 for t > 3.69
        for i in 0..100 {
            let t = 4.0 + i as f64 * 0.37;
            assert!(approx_eq(elastic_overshoot(t, 0.7, 0.5), 0.6 * (1.0 - (-3.5 * t).exp())));
        }
        assert!(approx_eq(elastic_overshoot(50.0, 0.7, 0.5), 0.6));
    }

    #[test]
    fn test_elastic_overshoot_without_damping_keeps_ringing() {
        // Zero damping never settles: the decay stays at 1.0
        let t: f64 = 100.25;
        let expected = 0.6 * (1.0 - (-2.0 * t).exp()) + (TAU * t).sin() * 0.3;
        assert!(approx_eq(elastic_overshoot(t, 0.0, 0.0), expected));
    }

    #[test]
    fn test_wobble_starts_at_zero() {
        assert_eq!(wobble(0.0, 0.3, 0.3), 0.0);
    }

    #[test]
    fn test_wobble_settles_at_half() {
        // exp(-1.2 * t) < 0.01 for t > 3.84
        for i in 0..100 {
            let t = 4.0 + i as f64 * 0.5;
            assert!(approx_eq(wobble(t, 0.9, 1.0), 0.5 * (1.0 - (-3.5 * t).exp())));
        }
        assert!(approx_eq(wobble(40.0, 0.9, 1.0), 0.5));
    }

    #[test]
    fn test_wobble_bounded_while_active() {
        for i in 0..3000 {
            let t = i as f64 * 0.001;
            let value = wobble(t, 1.0, 0.2);
            assert!(value > -0.3 && value < 0.8 + EPSILON);
        }
    }
}
