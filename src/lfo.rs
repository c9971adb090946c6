//! The physics LFO: phase controller, curve bank and control scalars.

use crate::config::PhysicsLfoConfig;
use crate::control::{ControlBlock, ControlFrame, Inlet, Scalars};
use crate::core::{Pitched, Signal};
use crate::error::LfoError;
use crate::oscillators::Oscillator;
use crate::phase::{LfoMode, PhaseController, PhaseEvent};
use crate::physics::{PhysicsState, PhysicsType};

/// A low-frequency oscillator whose curves come from simple physics
/// simulations instead of trigonometric waveforms.
///
/// Output is unipolar, nominally in [0.0, 1.0]. Elastic overshoot briefly
/// exceeds 1.0 while it rings.
///
/// Two modes are available:
/// - **Looping** (default): the phase wraps every cycle and the simulation
///   restarts at full energy.
/// - **Envelope**: [`trigger`](Self::trigger) starts a one-shot cycle; the
///   phase then keeps growing past 1.0 and the curves settle to rest.
///
/// All operations are allocation-free and O(1) per sample.
///
/// # Examples
///
/// ```
/// use physlfo::{PhysicsLfo, PhysicsType, Signal};
///
/// let mut lfo = PhysicsLfo::new(48000.0).unwrap();
/// lfo.set_physics_type(PhysicsType::MultiBounce);
///
/// let mut buffer = [0.0; 256];
/// lfo.process(&mut buffer);
/// assert!(buffer.iter().all(|v| (0.0..=1.0).contains(v)));
/// ```
#[derive(Debug, Clone)]
pub struct PhysicsLfo {
    controller: PhaseController,
    physics: PhysicsState,
    scalars: Scalars,
    last_value: f64,
}

impl PhysicsLfo {
    /// Creates an LFO with default settings: bounce, param 0.5, damping 0.1,
    /// 1 Hz, looping.
    ///
    /// # Errors
    ///
    /// Returns [`LfoError::InvalidSampleRate`] if `sample_rate` is not a
    /// positive finite number.
    pub fn new(sample_rate: f64) -> Result<Self, LfoError> {
        Self::with_config(sample_rate, PhysicsLfoConfig::default())
    }

    /// Creates an LFO from a configuration.
    ///
    /// Config values are clamped again here, so configs deserialized from
    /// untrusted sources are safe to pass in.
    pub fn with_config(sample_rate: f64, config: PhysicsLfoConfig) -> Result<Self, LfoError> {
        validate_sample_rate(sample_rate)?;

        let mut controller = PhaseController::new(sample_rate);
        controller.set_looping(config.looping);

        tracing::debug!(
            physics_type = config.physics_type.name(),
            "{}",
            config.physics_type.description()
        );

        Ok(Self {
            controller,
            physics: PhysicsState::new(),
            scalars: Scalars::new(
                config.frequency,
                config.physics_type,
                config.physics_param,
                config.damping,
            ),
            last_value: 0.0,
        })
    }

    /// Changes the sample rate, keeping phase and simulation state.
    pub fn set_sample_rate(&mut self, sample_rate: f64) -> Result<(), LfoError> {
        validate_sample_rate(sample_rate)?;
        self.controller.set_sample_rate(sample_rate);
        tracing::debug!(sample_rate, "sample rate changed");
        Ok(())
    }

    pub fn sample_rate(&self) -> f64 {
        self.controller.sample_rate()
    }

    /// Current phase. In envelope mode this grows past 1.0.
    pub fn phase(&self) -> f64 {
        self.controller.phase()
    }

    pub fn mode(&self) -> LfoMode {
        self.controller.mode()
    }

    pub fn is_looping(&self) -> bool {
        self.controller.is_looping()
    }

    /// Returns true while an envelope's first cycle is running.
    pub fn is_envelope_active(&self) -> bool {
        self.controller.is_envelope_active()
    }

    pub fn physics_state(&self) -> &PhysicsState {
        &self.physics
    }

    /// The most recently rendered sample.
    pub fn last_value(&self) -> f64 {
        self.last_value
    }

    /// Stored fallback value for `inlet`.
    pub fn scalar(&self, inlet: Inlet) -> f64 {
        self.scalars.get(inlet)
    }

    pub fn physics_type(&self) -> PhysicsType {
        PhysicsType::from_value(self.scalars.get(Inlet::PhysicsType))
    }

    /// Stores the fallback value for `inlet`, clamped to its domain.
    ///
    /// Returns the value actually stored.
    pub fn set_scalar(&mut self, inlet: Inlet, value: f64) -> f64 {
        let stored = self.scalars.set(inlet, value);
        self.log_scalar_change(inlet);
        stored
    }

    /// Integer flavour of [`set_scalar`](Self::set_scalar).
    pub fn set_scalar_int(&mut self, inlet: Inlet, value: i64) -> f64 {
        let stored = self.scalars.set_int(inlet, value);
        self.log_scalar_change(inlet);
        stored
    }

    /// Stores a fallback value addressed by raw inlet index (0 to 3).
    pub fn set_scalar_at(&mut self, index: usize, value: f64) -> Result<f64, LfoError> {
        let inlet = Inlet::try_from(index)?;
        Ok(self.set_scalar(inlet, value))
    }

    /// Integer flavour of [`set_scalar_at`](Self::set_scalar_at).
    pub fn set_scalar_int_at(&mut self, index: usize, value: i64) -> Result<f64, LfoError> {
        let inlet = Inlet::try_from(index)?;
        Ok(self.set_scalar_int(inlet, value))
    }

    pub fn set_physics_type(&mut self, physics_type: PhysicsType) {
        self.set_scalar(Inlet::PhysicsType, physics_type.index() as f64);
    }

    pub fn set_physics_param(&mut self, param: f64) -> f64 {
        self.set_scalar(Inlet::PhysicsParam, param)
    }

    pub fn set_damping(&mut self, damping: f64) -> f64 {
        self.set_scalar(Inlet::Damping, damping)
    }

    /// Restarts the cycle: phase to 0 and the simulation to full energy.
    ///
    /// In envelope mode this starts a new one-shot envelope.
    pub fn trigger(&mut self) {
        self.controller.trigger();
        self.physics.reset();
    }

    /// Switches between looping (true) and envelope (false) mode.
    ///
    /// Entering envelope mode stops any running envelope; call
    /// [`trigger`](Self::trigger) to start one.
    pub fn set_looping(&mut self, looping: bool) {
        self.controller.set_looping(looping);
        tracing::debug!(looping, "mode changed");
    }

    /// Jumps to `phase` (clamped to [0.0, 1.0]) and restarts the simulation.
    ///
    /// # Errors
    ///
    /// Returns [`LfoError::PhaseSetInEnvelopeMode`] in envelope mode; nothing
    /// is changed.
    pub fn set_phase(&mut self, phase: f64) -> Result<(), LfoError> {
        if !self.controller.set_phase(phase) {
            tracing::info!("phase can only be set in looping mode (enable looping first)");
            return Err(LfoError::PhaseSetInEnvelopeMode);
        }
        self.physics.reset();
        Ok(())
    }

    /// Renders one sample from already-clamped controls.
    #[inline]
    pub fn tick(&mut self, frame: ControlFrame) -> f64 {
        if self.controller.advance(frame.frequency) == PhaseEvent::Wrapped {
            self.physics.reset();
        }

        let value = frame.physics_type.sample(
            self.controller.phase(),
            frame.physics_param,
            frame.damping,
            &mut self.physics,
        );

        self.last_value = value;
        value
    }

    /// Renders one block.
    ///
    /// Each inlet reads from its slice in `controls` when one is connected
    /// and from its stored scalar otherwise (also past the end of a slice
    /// shorter than `output`).
    ///
    /// # Examples
    ///
    /// ```
    /// use physlfo::{ControlBlock, PhysicsLfo};
    ///
    /// let mut lfo = PhysicsLfo::new(1000.0).unwrap();
    /// let damping = [0.9; 64];
    /// let mut out = [0.0; 64];
    /// lfo.process_block(&ControlBlock::scalars().with_damping(&damping), &mut out);
    /// assert_eq!(lfo.last_value(), out[63]);
    /// ```
    pub fn process_block(&mut self, controls: &ControlBlock<'_>, output: &mut [f64]) {
        for (i, sample) in output.iter_mut().enumerate() {
            let frame = self.scalars.resolve(controls, i);
            *sample = self.tick(frame);
        }
    }

    fn log_scalar_change(&self, inlet: Inlet) {
        if inlet == Inlet::PhysicsType {
            let physics_type = self.physics_type();
            tracing::debug!(
                physics_type = physics_type.name(),
                "{}",
                physics_type.description()
            );
        }
    }
}

// Subnormal rates pass the positivity check but overflow the increment
fn validate_sample_rate(sample_rate: f64) -> Result<(), LfoError> {
    if sample_rate.is_finite() && sample_rate > 0.0 && (1.0 / sample_rate).is_finite() {
        Ok(())
    } else {
        Err(LfoError::InvalidSampleRate(sample_rate))
    }
}

impl Signal for PhysicsLfo {
    /// Renders one sample from the stored scalars.
    fn next_sample(&mut self) -> f64 {
        let frame = self.scalars.resolve(&ControlBlock::scalars(), 0);
        self.tick(frame)
    }

    fn process(&mut self, buffer: &mut [f64]) {
        self.process_block(&ControlBlock::scalars(), buffer);
    }
}

impl Pitched for PhysicsLfo {
    fn set_frequency(&mut self, freq: f64) {
        self.set_scalar(Inlet::Frequency, freq);
    }

    fn frequency(&self) -> f64 {
        self.scalars.get(Inlet::Frequency)
    }
}

impl Oscillator for PhysicsLfo {
    fn reset(&mut self) {
        self.trigger();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_creation_defaults() {
        let lfo = PhysicsLfo::new(44100.0).unwrap();
        assert_eq!(lfo.sample_rate(), 44100.0);
        assert_eq!(lfo.phase(), 0.0);
        assert!(lfo.is_looping());
        assert!(!lfo.is_envelope_active());
        assert_eq!(lfo.frequency(), 1.0);
        assert_eq!(lfo.physics_type(), PhysicsType::Bounce);
        assert_eq!(lfo.scalar(Inlet::PhysicsParam), 0.5);
        assert_eq!(lfo.scalar(Inlet::Damping), 0.1);
        assert_eq!(*lfo.physics_state(), PhysicsState::new());
    }

    #[test]
    fn test_invalid_sample_rates() {
        for rate in [0.0, -44100.0, f64::NAN, f64::INFINITY, 1e-310] {
            assert!(matches!(
                PhysicsLfo::new(rate),
                Err(LfoError::InvalidSampleRate(_))
            ));
        }
    }

    #[test]
    fn test_set_sample_rate_rejects_invalid() {
        let mut lfo = PhysicsLfo::new(44100.0).unwrap();
        assert_eq!(
            lfo.set_sample_rate(0.0),
            Err(LfoError::InvalidSampleRate(0.0))
        );
        assert_eq!(lfo.sample_rate(), 44100.0);
        assert_eq!(
            lfo.set_sample_rate(1e-310),
            Err(LfoError::InvalidSampleRate(1e-310))
        );
        assert_eq!(lfo.sample_rate(), 44100.0);
        assert!(lfo.set_sample_rate(96000.0).is_ok());
        assert_eq!(lfo.sample_rate(), 96000.0);
    }

    #[test]
    fn test_sample_rate_change_affects_increment() {
        let mut lfo = PhysicsLfo::new(100.0).unwrap();
        lfo.set_frequency(10.0);
        lfo.next_sample();
        assert!(approx_eq(lfo.phase(), 0.1));
        lfo.set_sample_rate(200.0).unwrap();
        lfo.next_sample();
        assert!(approx_eq(lfo.phase(), 0.15));
    }

    #[test]
    fn test_first_sample_advances_before_evaluating() {
        let mut lfo = PhysicsLfo::new(100.0).unwrap();
        lfo.set_physics_type(PhysicsType::MultiBounce);
        lfo.set_physics_param(0.0);
        lfo.set_frequency(25.0);
        // phase 0.25 is the top of the first bounce
        assert!(approx_eq(lfo.next_sample(), 1.0));
    }

    #[test]
    fn test_wrap_resets_physics() {
        let mut lfo = PhysicsLfo::new(4.0).unwrap();
        lfo.set_physics_type(PhysicsType::Bounce);
        lfo.set_damping(0.5);
        lfo.physics.ground_contact(0.25);
        assert_eq!(lfo.physics_state().bounce_count(), 1.0);

        // 0.25, 0.5, 0.75, then wrap to 0.0
        for _ in 0..3 {
            lfo.next_sample();
        }
        assert_eq!(lfo.physics_state().energy(), 0.25);
        lfo.next_sample();
        assert_eq!(lfo.phase(), 0.0);
        assert_eq!(*lfo.physics_state(), PhysicsState::new());
    }

    #[test]
    fn test_trigger_in_looping_mode() {
        let mut lfo = PhysicsLfo::new(100.0).unwrap();
        lfo.set_frequency(7.0);
        for _ in 0..5 {
            lfo.next_sample();
        }
        lfo.physics.ground_contact(0.5);
        lfo.trigger();
        assert_eq!(lfo.phase(), 0.0);
        assert_eq!(*lfo.physics_state(), PhysicsState::new());
        assert!(!lfo.is_envelope_active());
    }

    #[test]
    fn test_trigger_starts_envelope() {
        let mut lfo = PhysicsLfo::new(100.0).unwrap();
        lfo.set_looping(false);
        assert!(!lfo.is_envelope_active());
        lfo.trigger();
        assert!(lfo.is_envelope_active());
        assert_eq!(lfo.mode(), LfoMode::Envelope { active: true });
    }

    #[test]
    fn test_set_looping_false_stops_envelope() {
        let mut lfo = PhysicsLfo::new(100.0).unwrap();
        lfo.set_looping(false);
        lfo.trigger();
        lfo.set_looping(false);
        assert!(!lfo.is_envelope_active());
    }

    #[test]
    fn test_set_phase_resets_physics() {
        let mut lfo = PhysicsLfo::new(100.0).unwrap();
        lfo.physics.ground_contact(0.3);
        assert_eq!(lfo.set_phase(0.4), Ok(()));
        assert_eq!(lfo.phase(), 0.4);
        assert_eq!(*lfo.physics_state(), PhysicsState::new());
    }

    #[test]
    fn test_set_phase_rejected_in_envelope_mode() {
        let mut lfo = PhysicsLfo::new(100.0).unwrap();
        lfo.set_looping(false);
        lfo.trigger();
        lfo.next_sample();
        lfo.physics.ground_contact(0.3);
        let phase = lfo.phase();
        let physics = *lfo.physics_state();

        assert_eq!(lfo.set_phase(0.9), Err(LfoError::PhaseSetInEnvelopeMode));
        assert_eq!(lfo.phase(), phase);
        assert_eq!(*lfo.physics_state(), physics);
        assert!(lfo.is_envelope_active());
    }

    #[test]
    fn test_set_scalar_at_routes_by_index() {
        let mut lfo = PhysicsLfo::new(100.0).unwrap();
        assert_eq!(lfo.set_scalar_at(0, 1200.0), Ok(1000.0));
        assert_eq!(lfo.set_scalar_at(1, 3.9), Ok(3.0));
        assert_eq!(lfo.set_scalar_at(2, 0.25), Ok(0.25));
        assert_eq!(lfo.set_scalar_at(3, 2.0), Ok(1.0));
        assert_eq!(lfo.set_scalar_at(4, 0.5), Err(LfoError::UnknownInlet(4)));
        assert_eq!(lfo.physics_type(), PhysicsType::ElasticOvershoot);
    }

    #[test]
    fn test_set_scalar_int() {
        let mut lfo = PhysicsLfo::new(100.0).unwrap();
        assert_eq!(lfo.set_scalar_int(Inlet::PhysicsType, 12), 5.0);
        assert_eq!(lfo.physics_type(), PhysicsType::Wobble);
        assert_eq!(lfo.set_scalar_int(Inlet::Frequency, 3), 3.0);
        assert_eq!(lfo.frequency(), 3.0);
    }

    #[test]
    fn test_set_scalar_int_at_routes_by_index() {
        let mut lfo = PhysicsLfo::new(100.0).unwrap();
        assert_eq!(lfo.set_scalar_int_at(1, 9), Ok(5.0));
        assert_eq!(lfo.physics_type(), PhysicsType::Wobble);
        assert_eq!(lfo.set_scalar_int_at(1, -2), Ok(0.0));
        assert_eq!(lfo.physics_type(), PhysicsType::Bounce);
        assert_eq!(lfo.set_scalar_int_at(0, 2000), Ok(1000.0));
        assert_eq!(lfo.set_scalar_int_at(3, 1), Ok(1.0));
        assert_eq!(lfo.set_scalar_int_at(7, 1), Err(LfoError::UnknownInlet(7)));
    }

    #[test]
    fn test_tiny_sample_rate_rejected_keeps_phase_bounded() {
        assert_eq!(
            PhysicsLfo::new(1e-310).unwrap_err(),
            LfoError::InvalidSampleRate(1e-310)
        );
        // Smallest accepted rates still give a finite increment
        let mut lfo = PhysicsLfo::new(1e-300).unwrap();
        lfo.set_frequency(0.0);
        lfo.next_sample();
        assert!(lfo.phase() < 1.0);
    }

    #[test]
    fn test_last_value_tracks_output() {
        let mut lfo = PhysicsLfo::new(100.0).unwrap();
        let value = lfo.next_sample();
        assert_eq!(lfo.last_value(), value);
    }

    #[test]
    fn test_process_block_uses_signals_then_scalars() {
        let mut lfo = PhysicsLfo::new(100.0).unwrap();
        lfo.set_physics_type(PhysicsType::MultiBounce);
        lfo.set_physics_param(0.0);
        lfo.set_damping(0.0);
        lfo.set_frequency(0.0);

        // Only the first two samples get a frequency signal
        let frequency = [25.0, 25.0];
        let mut out = [0.0; 4];
        lfo.process_block(&ControlBlock::scalars().with_frequency(&frequency), &mut out);

        assert!(approx_eq(lfo.phase(), 0.5));
        // Scalar frequency is 0 so the last two samples hold at phase 0.5
        assert_eq!(out[2], out[3]);
        assert!(approx_eq(out[0], 1.0));
    }

    #[test]
    fn test_process_block_clamps_signals() {
        let mut lfo = PhysicsLfo::new(100.0).unwrap();
        let frequency = [-50.0; 8];
        let kinds = [7.0; 8];
        let mut out = [0.0; 8];
        lfo.process_block(
            &ControlBlock::scalars()
                .with_frequency(&frequency)
                .with_physics_type(&kinds),
            &mut out,
        );
        // Negative frequency clamps to 0 and type 7 clamps to wobble at t = 0
        assert_eq!(lfo.phase(), 0.0);
        assert!(out.iter().all(|v| *v == 0.0));
    }

    #[test]
    fn test_process_empty_block() {
        let mut lfo = PhysicsLfo::new(100.0).unwrap();
        lfo.process_block(&ControlBlock::scalars(), &mut []);
        assert_eq!(lfo.phase(), 0.0);
    }

    #[test]
    fn test_signal_process_matches_next_sample() {
        let mut a = PhysicsLfo::new(1000.0).unwrap();
        let mut b = a.clone();
        let mut buffer = [0.0; 32];
        a.process(&mut buffer);
        for expected in buffer {
            assert_eq!(b.next_sample(), expected);
        }
    }

    #[test]
    fn test_oscillator_reset_is_trigger() {
        let mut lfo = PhysicsLfo::new(100.0).unwrap();
        lfo.set_looping(false);
        Oscillator::reset(&mut lfo);
        assert!(lfo.is_envelope_active());
        assert_eq!(lfo.phase(), 0.0);
    }
}
