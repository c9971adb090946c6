//! Control inputs: the four inlets and their signal-or-scalar sources.
//!
//! Each inlet is fed either by a per-sample slice for the current block or,
//! when nothing is connected, by a fallback scalar stored on the oscillator.
//! Every value is clamped to the inlet's domain before it reaches the
//! physics curves.

use crate::error::LfoError;
use crate::physics::PhysicsType;

/// Highest accepted LFO frequency in Hz.
pub const MAX_FREQUENCY: f64 = 1000.0;

/// Clamps `value` into `[min, max]`, mapping NaN to `min`.
#[inline]
pub(crate) fn sanitize(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    }
}

/// The four control inlets, in host order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Inlet {
    /// LFO rate in Hz, [0, 1000]
    Frequency,
    /// Physics type selector, [0, 5] truncated to an integer
    PhysicsType,
    /// Per-type shape parameter, [0, 1]
    PhysicsParam,
    /// Energy loss rate, [0, 1]
    Damping,
}

impl Inlet {
    pub const ALL: [Inlet; 4] = [
        Inlet::Frequency,
        Inlet::PhysicsType,
        Inlet::PhysicsParam,
        Inlet::Damping,
    ];

    /// Clamps a raw value into this inlet's domain.
    ///
    /// The type selector is also truncated, so the result is always one of
    /// 0.0 through 5.0.
    ///
    /// # Examples
    ///
    /// ```
    /// use physlfo::Inlet;
    ///
    /// assert_eq!(Inlet::Frequency.clamp(2500.0), 1000.0);
    /// assert_eq!(Inlet::PhysicsType.clamp(3.7), 3.0);
    /// assert_eq!(Inlet::Damping.clamp(-0.2), 0.0);
    /// ```
    pub fn clamp(self, value: f64) -> f64 {
        match self {
            Inlet::Frequency => sanitize(value, 0.0, MAX_FREQUENCY),
            Inlet::PhysicsType => PhysicsType::from_value(value).index() as f64,
            Inlet::PhysicsParam | Inlet::Damping => sanitize(value, 0.0, 1.0),
        }
    }

    /// Clamps an integer value into this inlet's domain.
    ///
    /// Integers are clamped before conversion so huge values never lose
    /// precision on the way to `f64`.
    pub fn clamp_int(self, value: i64) -> f64 {
        match self {
            Inlet::Frequency => value.clamp(0, MAX_FREQUENCY as i64) as f64,
            Inlet::PhysicsType => value.clamp(0, 5) as f64,
            Inlet::PhysicsParam | Inlet::Damping => value.clamp(0, 1) as f64,
        }
    }
}

impl TryFrom<usize> for Inlet {
    type Error = LfoError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Inlet::ALL
            .get(index)
            .copied()
            .ok_or(LfoError::UnknownInlet(index))
    }
}

/// Where one inlet's values come from for the current block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlSource<'a> {
    /// Per-sample values for this block
    Signal(&'a [f64]),
    /// No signal connected: use the stored scalar
    Scalar,
}

impl ControlSource<'_> {
    /// Value at sample `index`, or `fallback` if there is no signal or the
    /// signal is shorter than the block.
    #[inline]
    pub fn value_at(&self, index: usize, fallback: f64) -> f64 {
        match self {
            ControlSource::Signal(values) => values.get(index).copied().unwrap_or(fallback),
            ControlSource::Scalar => fallback,
        }
    }

    /// Returns true if a per-sample signal is connected.
    pub fn has_signal(&self) -> bool {
        matches!(self, ControlSource::Signal(_))
    }
}

impl<'a> From<&'a [f64]> for ControlSource<'a> {
    fn from(values: &'a [f64]) -> Self {
        ControlSource::Signal(values)
    }
}

impl<'a> From<Option<&'a [f64]>> for ControlSource<'a> {
    fn from(values: Option<&'a [f64]>) -> Self {
        values.map_or(ControlSource::Scalar, ControlSource::Signal)
    }
}

/// The control sources for one render block.
///
/// # Examples
///
/// ```
/// use physlfo::{ControlBlock, ControlSource};
///
/// let rates = [0.5; 64];
/// let block = ControlBlock::scalars().with_frequency(&rates);
/// assert!(block.frequency.has_signal());
/// assert_eq!(block.damping, ControlSource::Scalar);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlBlock<'a> {
    pub frequency: ControlSource<'a>,
    pub physics_type: ControlSource<'a>,
    pub physics_param: ControlSource<'a>,
    pub damping: ControlSource<'a>,
}

impl<'a> ControlBlock<'a> {
    /// A block where every inlet uses its stored scalar.
    pub fn scalars() -> Self {
        Self {
            frequency: ControlSource::Scalar,
            physics_type: ControlSource::Scalar,
            physics_param: ControlSource::Scalar,
            damping: ControlSource::Scalar,
        }
    }

    pub fn with_frequency(mut self, values: &'a [f64]) -> Self {
        self.frequency = ControlSource::Signal(values);
        self
    }

    pub fn with_physics_type(mut self, values: &'a [f64]) -> Self {
        self.physics_type = ControlSource::Signal(values);
        self
    }

    pub fn with_physics_param(mut self, values: &'a [f64]) -> Self {
        self.physics_param = ControlSource::Signal(values);
        self
    }

    pub fn with_damping(mut self, values: &'a [f64]) -> Self {
        self.damping = ControlSource::Signal(values);
        self
    }

    /// Source feeding `inlet`.
    pub fn source(&self, inlet: Inlet) -> ControlSource<'a> {
        match inlet {
            Inlet::Frequency => self.frequency,
            Inlet::PhysicsType => self.physics_type,
            Inlet::PhysicsParam => self.physics_param,
            Inlet::Damping => self.damping,
        }
    }
}

impl Default for ControlBlock<'_> {
    fn default() -> Self {
        Self::scalars()
    }
}

/// Clamped control values for a single sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlFrame {
    pub frequency: f64,
    pub physics_type: PhysicsType,
    pub physics_param: f64,
    pub damping: f64,
}

impl ControlFrame {
    /// Clamps raw inlet values into their domains.
    #[inline]
    pub fn new(frequency: f64, physics_type: f64, physics_param: f64, damping: f64) -> Self {
        Self {
            frequency: sanitize(frequency, 0.0, MAX_FREQUENCY),
            physics_type: PhysicsType::from_value(physics_type),
            physics_param: sanitize(physics_param, 0.0, 1.0),
            damping: sanitize(damping, 0.0, 1.0),
        }
    }
}

/// Fallback scalars for the four inlets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scalars {
    values: [f64; 4],
}

impl Scalars {
    pub fn new(frequency: f64, physics_type: PhysicsType, physics_param: f64, damping: f64) -> Self {
        Self {
            values: [
                Inlet::Frequency.clamp(frequency),
                physics_type.index() as f64,
                Inlet::PhysicsParam.clamp(physics_param),
                Inlet::Damping.clamp(damping),
            ],
        }
    }

    #[inline]
    pub fn get(&self, inlet: Inlet) -> f64 {
        self.values[inlet as usize]
    }

    /// Stores a clamped value and returns what was stored.
    pub fn set(&mut self, inlet: Inlet, value: f64) -> f64 {
        let clamped = inlet.clamp(value);
        self.values[inlet as usize] = clamped;
        clamped
    }

    /// Stores a clamped integer value and returns what was stored.
    pub fn set_int(&mut self, inlet: Inlet, value: i64) -> f64 {
        let clamped = inlet.clamp_int(value);
        self.values[inlet as usize] = clamped;
        clamped
    }

    /// Resolves the clamped controls for sample `index` of `block`.
    #[inline]
    pub fn resolve(&self, block: &ControlBlock<'_>, index: usize) -> ControlFrame {
        ControlFrame::new(
            block.frequency.value_at(index, self.get(Inlet::Frequency)),
            block.physics_type.value_at(index, self.get(Inlet::PhysicsType)),
            block.physics_param.value_at(index, self.get(Inlet::PhysicsParam)),
            block.damping.value_at(index, self.get(Inlet::Damping)),
        )
    }
}

impl Default for Scalars {
    fn default() -> Self {
        Self::new(1.0, PhysicsType::Bounce, 0.5, 0.1)
    }
}
