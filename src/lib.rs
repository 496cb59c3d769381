//! Phasegate - Gating functions for motion-primitive generation
//!
//! This library provides the exponential gating function a motion-generation
//! loop uses to fade forcing terms in or out over a normalized phase.

pub mod config;
pub mod error;
pub mod gate;
pub mod phase;
pub mod signal;
pub mod sweep;

// Re-export commonly used types at the crate root
pub use config::GateConfig;
pub use error::{ConfigError, ConfigResult, GateResult, InvalidParameterError};
pub use gate::{DEFAULT_U0, DEFAULT_U_END, Direction, ExponentialGate, Gate};
pub use phase::Phase;
pub use signal::Signal;
pub use sweep::{GateSample, PhaseSweep};
