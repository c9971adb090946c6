//! Construction-time configuration.

use crate::control::{Inlet, MAX_FREQUENCY, sanitize};
use crate::physics::PhysicsType;

/// Initial settings for a [`PhysicsLfo`](crate::PhysicsLfo).
///
/// Every setter clamps into the valid domain; out-of-range values are never
/// rejected.
///
/// # Examples
///
/// ```
/// use physlfo::{PhysicsLfo, PhysicsLfoConfig, PhysicsType};
///
/// let config = PhysicsLfoConfig::new()
///     .with_physics_type(PhysicsType::Wobble)
///     .with_physics_param(0.8)
///     .with_damping(1.4); // clamped to 1.0
///
/// assert_eq!(config.damping, 1.0);
/// let lfo = PhysicsLfo::with_config(48000.0, config).unwrap();
/// assert_eq!(lfo.physics_type(), PhysicsType::Wobble);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PhysicsLfoConfig {
    pub physics_type: PhysicsType,
    pub physics_param: f64,
    pub damping: f64,
    /// LFO rate in Hz
    pub frequency: f64,
    /// Start in looping mode (true) or envelope mode (false)
    pub looping: bool,
}

impl PhysicsLfoConfig {
    /// Bounce, param 0.5, damping 0.1, 1 Hz, looping.
    pub fn new() -> Self {
        Self {
            physics_type: PhysicsType::Bounce,
            physics_param: 0.5,
            damping: 0.1,
            frequency: 1.0,
            looping: true,
        }
    }

    /// Builds a config from the three optional ordered creation values:
    /// physics type, physics parameter, damping.
    ///
    /// Missing values keep their defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// use physlfo::{PhysicsLfoConfig, PhysicsType};
    ///
    /// let config = PhysicsLfoConfig::from_args(Some(9), Some(0.2), None);
    /// assert_eq!(config.physics_type, PhysicsType::Wobble);
    /// assert_eq!(config.physics_param, 0.2);
    /// assert_eq!(config.damping, 0.1);
    /// ```
    pub fn from_args(
        physics_type: Option<i64>,
        physics_param: Option<f64>,
        damping: Option<f64>,
    ) -> Self {
        let mut config = Self::new();
        if let Some(index) = physics_type {
            config = config.with_physics_type(PhysicsType::from_index(index));
        }
        if let Some(param) = physics_param {
            config = config.with_physics_param(param);
        }
        if let Some(damping) = damping {
            config = config.with_damping(damping);
        }
        config
    }

    pub fn with_physics_type(mut self, physics_type: PhysicsType) -> Self {
        self.physics_type = physics_type;
        self
    }

    /// Sets the physics parameter, clamped to [0.0, 1.0].
    pub fn with_physics_param(mut self, param: f64) -> Self {
        self.physics_param = Inlet::PhysicsParam.clamp(param);
        self
    }

    /// Sets damping, clamped to [0.0, 1.0].
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = Inlet::Damping.clamp(damping);
        self
    }

    /// Sets the rate in Hz, clamped to [0, 1000].
    pub fn with_frequency(mut self, frequency: f64) -> Self {
        self.frequency = sanitize(frequency, 0.0, MAX_FREQUENCY);
        self
    }

    pub fn with_looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }
}

impl Default for PhysicsLfoConfig {
    fn default() -> Self {
        Self::new()
    }
}
