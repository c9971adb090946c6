//! Phase accumulator and looping/envelope mode state machine.

/// How the phase behaves once it reaches the end of a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LfoMode {
    /// Continuous oscillation: the phase wraps and the simulation restarts
    /// every cycle.
    #[default]
    Looping,
    /// One-shot: a trigger starts a cycle and the phase then keeps growing
    /// past 1.0 so the curves can settle.
    ///
    /// `active` is true from the trigger until the first cycle completes.
    Envelope { active: bool },
}

/// What happened during one phase advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseEvent {
    /// Nothing notable
    None,
    /// Looping mode crossed 1.0 and wrapped; the simulation must restart
    Wrapped,
    /// Envelope mode completed its first cycle
    EnvelopeCompleted,
}

/// Advances a normalized phase at `frequency / sample_rate` per sample.
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseController {
    phase: f64,
    sample_rate: f64,
    sample_rate_inv: f64,
    mode: LfoMode,
}

impl PhaseController {
    /// Creates a controller at phase 0 in looping mode.
    ///
    /// `sample_rate` must be positive and finite; callers validate it.
    pub fn new(sample_rate: f64) -> Self {
        Self {
            phase: 0.0,
            sample_rate,
            sample_rate_inv: 1.0 / sample_rate,
            mode: LfoMode::Looping,
        }
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    pub fn sample_rate_inv(&self) -> f64 {
        self.sample_rate_inv
    }

    pub fn mode(&self) -> LfoMode {
        self.mode
    }

    pub fn is_looping(&self) -> bool {
        matches!(self.mode, LfoMode::Looping)
    }

    pub fn is_envelope_active(&self) -> bool {
        matches!(self.mode, LfoMode::Envelope { active: true })
    }

    pub(crate) fn set_sample_rate(&mut self, sample_rate: f64) {
        self.sample_rate = sample_rate;
        self.sample_rate_inv = 1.0 / sample_rate;
    }

    /// Switches mode. Entering envelope mode never starts an envelope; a
    /// trigger is required for that.
    pub fn set_looping(&mut self, looping: bool) {
        self.mode = if looping {
            LfoMode::Looping
        } else {
            LfoMode::Envelope { active: false }
        };
    }

    /// Rewinds to phase 0; in envelope mode this also starts a new cycle.
    pub fn trigger(&mut self) {
        self.phase = 0.0;
        if let LfoMode::Envelope { active } = &mut self.mode {
            *active = true;
        }
    }

    /// Jumps to `phase`, clamped to [0.0, 1.0].
    ///
    /// Returns false and leaves the phase alone in envelope mode.
    pub fn set_phase(&mut self, phase: f64) -> bool {
        if !self.is_looping() {
            return false;
        }
        self.phase = if phase.is_nan() {
            0.0
        } else {
            phase.clamp(0.0, 1.0)
        };
        true
    }

    /// Advances by one sample at `frequency` Hz.
    #[inline]
    pub fn advance(&mut self, frequency: f64) -> PhaseEvent {
        self.phase += frequency * self.sample_rate_inv;

        match &mut self.mode {
            LfoMode::Looping => {
                let mut event = PhaseEvent::None;
                if self.phase >= 1.0 {
                    self.phase -= 1.0;
                    event = PhaseEvent::Wrapped;
                }
                while self.phase < 0.0 {
                    self.phase += 1.0;
                }
                event
            }
            LfoMode::Envelope { active } => {
                if *active && self.phase >= 1.0 {
                    *active = false;
                    PhaseEvent::EnvelopeCompleted
                } else {
                    PhaseEvent::None
                }
            }
        }
    }
}
