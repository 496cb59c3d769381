//! Core trait definitions for gating functions.

/// Common interface for gating functions of a normalized phase.
///
/// Implementors provide closed-form scalar evaluation. The buffer methods let
/// a motion loop evaluate many phases into storage it already owns.
pub trait Gate {
    /// Gate value at phase `x`.
    fn value_at(&self, x: f64) -> f64;

    /// Derivative of the gate with respect to phase at `x`.
    fn derivative_at(&self, x: f64) -> f64;

    /// Writes the gate value at each phase into `out`.
    ///
    /// Only the first `min(phases.len(), out.len())` entries are written.
    ///
    /// # Arguments
    ///
    /// * `phases` - Phase values to evaluate
    /// * `out` - Destination buffer
    fn fill_values(&self, phases: &[f64], out: &mut [f64]) {
        for (slot, &x) in out.iter_mut().zip(phases) {
            *slot = self.value_at(x);
        }
    }

    /// Writes the derivative at each phase into `out`.
    ///
    /// Only the first `min(phases.len(), out.len())` entries are written.
    fn fill_derivatives(&self, phases: &[f64], out: &mut [f64]) {
        for (slot, &x) in out.iter_mut().zip(phases) {
            *slot = self.derivative_at(x);
        }
    }
}

/// Qualitative shape of a gate over increasing phase.
///
/// Purely informational: evaluation uses the same formula in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Magnitude shrinks toward the end value (`a > 0`)
    Decreasing,
    /// Magnitude grows toward the end value (`a < 0`)
    Increasing,
    /// End value equals the initial value (`a == 0`)
    Constant,
}

impl Direction {
    /// Classifies a rate constant.
    pub fn from_rate(rate: f64) -> Self {
        if rate > 0.0 {
            Direction::Decreasing
        } else if rate < 0.0 {
            Direction::Increasing
        } else {
            Direction::Constant
        }
    }
}
