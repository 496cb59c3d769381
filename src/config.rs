//! Boundary-value configuration for gates.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigResult, GateResult};
use crate::gate::{DEFAULT_U0, DEFAULT_U_END, ExponentialGate};

/// Boundary values an [`ExponentialGate`] is derived from.
///
/// Missing fields fall back to the defaults when deserializing.
///
/// # Examples
///
/// ```
/// use phasegate::{ExponentialGate, GateConfig};
///
/// let config = GateConfig::from_json(r#"{ "u_end": 0.01 }"#)?;
/// assert_eq!(config.u0, 1.0);
///
/// let gate = ExponentialGate::try_from(config)?;
/// assert!((gate.value(1.0) - 0.01).abs() < 1e-12);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    /// Gate value at phase 0.
    /// Default: 1.0.
    pub u0: f64,

    /// Gate value at phase 1.
    /// Default: 0.005.
    pub u_end: f64,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            u0: DEFAULT_U0,
            u_end: DEFAULT_U_END,
        }
    }
}

impl GateConfig {
    pub fn new(u0: f64, u_end: f64) -> Self {
        Self { u0, u_end }
    }

    /// Checks that the boundary values can parameterize a gate.
    pub fn validate(&self) -> GateResult<()> {
        self.build().map(|_| ())
    }

    /// Builds the gate these boundary values describe.
    pub fn build(&self) -> GateResult<ExponentialGate> {
        ExponentialGate::new(self.u0, self.u_end)
    }

    /// Load from JSON string and validate.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        if let Err(e) = config.validate() {
            log::warn!("rejecting gate config {config:?}: {e}");
            return Err(e.into());
        }
        Ok(config)
    }

    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl ExponentialGate {
    /// Creates a gate from a configuration.
    pub fn from_config(config: &GateConfig) -> GateResult<Self> {
        config.build()
    }

    /// Boundary values this gate was derived from.
    pub fn config(&self) -> GateConfig {
        GateConfig::new(self.u0(), self.u_end())
    }
}

impl TryFrom<GateConfig> for ExponentialGate {
    type Error = crate::InvalidParameterError;

    fn try_from(config: GateConfig) -> GateResult<Self> {
        config.build()
    }
}
