//! physlfo - Physics-shaped low-frequency oscillators
//!
//! This library generates modulation curves from simplified physics
//! simulations (bouncing balls, springs, spin and wobble) rather than
//! classic waveforms. Curves are unipolar and rendered one sample at a time
//! without allocation, so the oscillator can run inside a real-time audio
//! callback.
//!
//! ```
//! use physlfo::{PhysicsLfo, PhysicsType, Signal};
//!
//! let mut lfo = PhysicsLfo::new(48000.0).unwrap();
//! lfo.set_physics_type(PhysicsType::ElasticOvershoot);
//! let level = lfo.next_sample();
//! assert!(level >= 0.0);
//! ```

pub mod config;
pub mod control;
pub mod core;
pub mod error;
pub mod lfo;
pub mod oscillators;
pub mod phase;
pub mod physics;

// Re-export commonly used types at the crate root
pub use config::PhysicsLfoConfig;
pub use control::{ControlBlock, ControlFrame, ControlSource, Inlet, MAX_FREQUENCY};
pub use crate::core::{Pitched, Signal};
pub use error::LfoError;
pub use lfo::PhysicsLfo;
pub use oscillators::Oscillator;
pub use phase::{LfoMode, PhaseController, PhaseEvent};
pub use physics::{PhysicsState, PhysicsType};
