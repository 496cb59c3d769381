//! Error types for gate construction and configuration loading.

use thiserror::Error;

/// Boundary values that cannot parameterize an exponential gate.
///
/// Returned by [`ExponentialGate::new`](crate::ExponentialGate::new),
/// [`ExponentialGate::initialize`](crate::ExponentialGate::initialize) and
/// [`GateConfig::validate`](crate::GateConfig::validate).
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum InvalidParameterError {
    /// The gate would be identically zero and `u_end / u0` undefined.
    #[error("initial value must be non-zero")]
    ZeroInitialValue,

    /// `u_end / u0 <= 0`, so the rate `-ln(u_end / u0)` does not exist.
    #[error("boundary values must share sign (u0 = {u0}, u_end = {u_end})")]
    SignMismatch { u0: f64, u_end: f64 },

    /// A boundary value is NaN or infinite.
    #[error("boundary values must be finite (u0 = {u0}, u_end = {u_end})")]
    NonFinite { u0: f64, u_end: f64 },
}

/// Failure to load a [`GateConfig`](crate::GateConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid gate config: {0}")]
    InvalidParameter(#[from] InvalidParameterError),
}

pub type GateResult<T> = Result<T, InvalidParameterError>;
pub type ConfigResult<T> = Result<T, ConfigError>;
