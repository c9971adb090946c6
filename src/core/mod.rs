//! Core signal processing traits.
//!
//! - `Signal` trait for all sample generators
//! - `Pitched` trait for rate-controllable signals

mod signal;

pub use signal::{Pitched, Signal};
