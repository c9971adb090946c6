//! Physics curve bank.
//!
//! Six deterministic curve generators, each mapping a phase position and two
//! normalized controls (a per-type shape parameter and damping) to a single
//! unipolar output sample. Bouncing curves share a small piece of mutable
//! simulation state ([`PhysicsState`]) that tracks energy lost on ground
//! contact.
//!
//! The phase `t` is not clamped here: in envelope mode it grows past 1.0 and
//! every curve settles to a resting value.

mod bounce;
mod spring;

pub use bounce::{bounce, bounce_spin, multi_bounce};
pub use spring::{damped_decay, elastic_overshoot, wobble};

/// Mutable simulation state shared by the bouncing curves.
///
/// `velocity`, `acceleration` and `spin_phase` are reserved accumulators:
/// they take part in every reset but no curve advances them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsState {
    pub(crate) velocity: f64,
    pub(crate) acceleration: f64,
    pub(crate) energy: f64,
    pub(crate) bounce_count: f64,
    pub(crate) spin_phase: f64,
}

impl PhysicsState {
    /// Creates a state at rest with full energy.
    pub fn new() -> Self {
        Self {
            velocity: 0.0,
            acceleration: 0.0,
            energy: 1.0,
            bounce_count: 0.0,
            spin_phase: 0.0,
        }
    }

    /// Restores full energy and clears every counter and accumulator.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Remaining energy, nominally in [0.0, 1.0].
    pub fn energy(&self) -> f64 {
        self.energy
    }

    /// Ground contacts since the last reset.
    pub fn bounce_count(&self) -> f64 {
        self.bounce_count
    }

    pub fn spin_phase(&self) -> f64 {
        self.spin_phase
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn acceleration(&self) -> f64 {
        self.acceleration
    }

    /// Applies a ground contact: multiplicative energy loss and one more bounce.
    pub(crate) fn ground_contact(&mut self, retained: f64) {
        self.energy *= retained;
        self.bounce_count += 1.0;
    }
}

impl Default for PhysicsState {
    fn default() -> Self {
        Self::new()
    }
}

/// The six physics simulations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PhysicsType {
    /// Parabolic fall with energy loss on ground contact
    #[default]
    Bounce,
    /// Oscillation inside an exponential decay envelope, like a struck bell
    DampedDecay,
    /// Gentler bounce with two spin harmonics and a slow wobble
    BounceSpin,
    /// Step response that overshoots and settles at 0.6
    ElasticOvershoot,
    /// Several bounces per cycle that come to complete rest
    MultiBounce,
    /// Beating wobble that settles at 0.5
    Wobble,
}

impl PhysicsType {
    /// All types in selector order.
    pub const ALL: [PhysicsType; 6] = [
        PhysicsType::Bounce,
        PhysicsType::DampedDecay,
        PhysicsType::BounceSpin,
        PhysicsType::ElasticOvershoot,
        PhysicsType::MultiBounce,
        PhysicsType::Wobble,
    ];

    /// Selects a type from an integer, clamping to 0..=5.
    ///
    /// # Examples
    ///
    /// ```
    /// use physlfo::PhysicsType;
    ///
    /// assert_eq!(PhysicsType::from_index(3), PhysicsType::ElasticOvershoot);
    /// assert_eq!(PhysicsType::from_index(-2), PhysicsType::Bounce);
    /// assert_eq!(PhysicsType::from_index(42), PhysicsType::Wobble);
    /// ```
    pub fn from_index(index: i64) -> Self {
        Self::ALL[index.clamp(0, 5) as usize]
    }

    /// Selects a type from a continuous selector value.
    ///
    /// The value is clamped to [0, 5] and truncated toward zero, so `2.9`
    /// selects type 2. NaN selects type 0.
    pub fn from_value(value: f64) -> Self {
        if value.is_nan() {
            return PhysicsType::Bounce;
        }
        Self::from_index(value.clamp(0.0, 5.0) as i64)
    }

    /// Selector index of this type.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            PhysicsType::Bounce => "bounce",
            PhysicsType::DampedDecay => "damped decay",
            PhysicsType::BounceSpin => "bounce + spin",
            PhysicsType::ElasticOvershoot => "elastic overshoot",
            PhysicsType::MultiBounce => "multi-bounce",
            PhysicsType::Wobble => "wobble",
        }
    }

    /// What the physics parameter and damping control for this type.
    pub fn description(self) -> &'static str {
        match self {
            PhysicsType::Bounce => {
                "param: bounce curve (0=droopy/slow, 1=sharp/fast) | damping: energy loss rate"
            }
            PhysicsType::DampedDecay => {
                "param: vibration frequency (0=slow, 1=fast) | damping: decay rate (0=long ring, 1=quick stop)"
            }
            PhysicsType::BounceSpin => {
                "param: spin rate and intensity (0=simple, 1=complex) | damping: energy loss rate"
            }
            PhysicsType::ElasticOvershoot => {
                "param: overshoot intensity (0=gentle, 1=dramatic) | damping: settling speed"
            }
            PhysicsType::MultiBounce => {
                "param: bounces per cycle (0=few, 1=many) | damping: how quickly it stops"
            }
            PhysicsType::Wobble => {
                "param: frequency spread (0=simple, 1=complex) | damping: settling speed"
            }
        }
    }

    /// Evaluates this type's curve at phase `t`.
    ///
    /// `param` and `damping` are expected in [0.0, 1.0]. Bouncing types may
    /// update `state` on ground contact.
    #[inline]
    pub fn sample(self, t: f64, param: f64, damping: f64, state: &mut PhysicsState) -> f64 {
        match self {
            PhysicsType::Bounce => bounce(t, param, damping, state),
            PhysicsType::DampedDecay => damped_decay(t, param, damping),
            PhysicsType::BounceSpin => bounce_spin(t, param, damping, state),
            PhysicsType::ElasticOvershoot => elastic_overshoot(t, param, damping),
            PhysicsType::MultiBounce => multi_bounce(t, param, damping),
            PhysicsType::Wobble => wobble(t, param, damping),
        }
    }
}
