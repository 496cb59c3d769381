//! Exponential gating function.

use super::{Direction, Gate};
use crate::error::{GateResult, InvalidParameterError};
use crate::phase::Phase;
use crate::sweep::PhaseSweep;

/// Initial value used by [`ExponentialGate::default`].
pub const DEFAULT_U0: f64 = 1.0;

/// End value used by [`ExponentialGate::default`].
pub const DEFAULT_U_END: f64 = 0.005;

// Largest exponent magnitude for which `exp` stays a normal float.
const MAX_DIRECT_EXPONENT: f64 = 700.0;

/// Exponential gate `u(x) = u0 * exp(-a * x)` over a normalized phase `x`.
///
/// The rate `a` is derived from two boundary values so that the gate starts at
/// `u0` for `x = 0` and reaches `u_end` at `x = 1`. When `|u_end| < |u0|` the
/// gate decays, otherwise it grows; both cases use the same formula.
///
/// # Examples
///
/// ```
/// use phasegate::ExponentialGate;
///
/// let gate = ExponentialGate::new(1.0, 0.1)?;
/// assert_eq!(gate.value(0.0), 1.0);
/// assert!((gate.value(1.0) - 0.1).abs() < 1e-12);
///
/// // Sequences are evaluated elementwise
/// let u = gate.value([0.0, 0.5, 1.0]);
/// assert!(u[0] > u[1] && u[1] > u[2]);
///
/// // du/dx = -a * u(x)
/// let du = gate.derivative(0.5);
/// assert!((du + gate.rate() * gate.value(0.5)).abs() < 1e-12);
/// # Ok::<(), phasegate::InvalidParameterError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialGate {
    u0: f64,
    u_end: f64,
    rate: f64,
}

impl ExponentialGate {
    /// Creates a gate passing through `u0` at `x = 0` and `u_end` at `x = 1`.
    ///
    /// # Arguments
    ///
    /// * `u0` - Value at phase 0, must be finite and non-zero
    /// * `u_end` - Value at phase 1, must be finite with the same sign as `u0`
    ///
    /// # Errors
    ///
    /// [`InvalidParameterError`] when the boundary values are non-finite, `u0`
    /// is zero, or `u_end / u0 <= 0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use phasegate::{ExponentialGate, InvalidParameterError};
    ///
    /// assert!(ExponentialGate::new(-2.0, -0.5).is_ok());
    /// assert_eq!(
    ///     ExponentialGate::new(0.0, 0.5),
    ///     Err(InvalidParameterError::ZeroInitialValue)
    /// );
    /// assert!(ExponentialGate::new(1.0, -0.5).is_err());
    /// ```
    pub fn new(u0: f64, u_end: f64) -> GateResult<Self> {
        let rate = derive_rate(u0, u_end)?;
        Ok(Self::with_rate(u0, u_end, rate))
    }

    fn with_rate(u0: f64, u_end: f64, rate: f64) -> Self {
        log::debug!("exponential gate: u0={u0}, u_end={u_end}, a={rate}");
        Self { u0, u_end, rate }
    }

    /// Re-derives the gate from new boundary values.
    ///
    /// On error the gate keeps its previous parameters.
    ///
    /// # Examples
    ///
    /// ```
    /// use phasegate::ExponentialGate;
    ///
    /// let mut gate = ExponentialGate::default();
    /// gate.initialize(2.0, 0.2)?;
    /// assert_eq!(gate.value(0.0), 2.0);
    ///
    /// assert!(gate.initialize(2.0, -0.2).is_err());
    /// assert_eq!(gate.u0(), 2.0);
    /// # Ok::<(), phasegate::InvalidParameterError>(())
    /// ```
    pub fn initialize(&mut self, u0: f64, u_end: f64) -> GateResult<()> {
        *self = Self::new(u0, u_end)?;
        Ok(())
    }

    /// Evaluates `u0 * exp(-a * x)` for a phase or a sequence of phases.
    ///
    /// The output has the shape of the input. Phases outside [0, 1] are
    /// evaluated with the same formula. Results beyond the range of `f64`
    /// saturate to zero or infinity as ordinary floating-point arithmetic does.
    pub fn value<P: Phase>(&self, x: P) -> P::Output {
        x.map_phase(|x| self.value_at(x))
    }

    /// Evaluates `-a * u0 * exp(-a * x)` for a phase or a sequence of phases.
    pub fn derivative<P: Phase>(&self, x: P) -> P::Output {
        x.map_phase(|x| self.derivative_at(x))
    }

    /// Value at phase 0.
    pub fn u0(&self) -> f64 {
        self.u0
    }

    /// End value the gate was derived from.
    pub fn u_end(&self) -> f64 {
        self.u_end
    }

    /// Rate constant `a = -ln(u_end / u0)`.
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Whether the gate decays, grows or stays constant over the phase.
    pub fn direction(&self) -> Direction {
        Direction::from_rate(self.rate)
    }

    /// Returns true if the gate decays toward its end value.
    pub fn is_decreasing(&self) -> bool {
        self.direction() == Direction::Decreasing
    }

    /// Samples the gate at `steps + 1` evenly spaced phases from 0 to 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use phasegate::ExponentialGate;
    ///
    /// let gate = ExponentialGate::default();
    /// let phases: Vec<f64> = gate.sweep(4).map(|s| s.phase).collect();
    /// assert_eq!(phases, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    /// ```
    pub fn sweep(&self, steps: usize) -> PhaseSweep<'_, Self> {
        PhaseSweep::new(self, steps)
    }
}

impl Default for ExponentialGate {
    /// Gate from 1.0 down to 0.005.
    fn default() -> Self {
        Self::with_rate(
            DEFAULT_U0,
            DEFAULT_U_END,
            DEFAULT_U0.ln() - DEFAULT_U_END.ln(),
        )
    }
}

impl Gate for ExponentialGate {
    fn value_at(&self, x: f64) -> f64 {
        let exponent = -self.rate * x;
        if exponent.abs() <= MAX_DIRECT_EXPONENT {
            self.u0 * exponent.exp()
        } else {
            // exp alone would under- or overflow; fold u0 into the exponent
            self.u0.signum() * (self.u0.abs().ln() + exponent).exp()
        }
    }

    fn derivative_at(&self, x: f64) -> f64 {
        -self.rate * self.value_at(x)
    }
}

// -ln(u_end / u0) taken as a difference of logs so that extreme ratios do not
// overflow or underflow before the logarithm.
fn derive_rate(u0: f64, u_end: f64) -> GateResult<f64> {
    if !u0.is_finite() || !u_end.is_finite() {
        return Err(InvalidParameterError::NonFinite { u0, u_end });
    }
    if u0 == 0.0 {
        return Err(InvalidParameterError::ZeroInitialValue);
    }
    if u_end == 0.0 || u0.is_sign_positive() != u_end.is_sign_positive() {
        return Err(InvalidParameterError::SignMismatch { u0, u_end });
    }
    Ok(u0.abs().ln() - u_end.abs().ln())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    fn rel_eq(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * b.abs()
    }

    #[test]
    fn test_boundary_values() {
        let gate = ExponentialGate::new(1.0, 0.1).unwrap();
        assert_eq!(gate.value(0.0), 1.0);
        assert!(rel_eq(gate.value(1.0), 0.1));
    }

    #[test]
    fn test_default() {
        let gate = ExponentialGate::default();
        assert_eq!(gate.u0(), 1.0);
        assert_eq!(gate.u_end(), 0.005);
        assert!(rel_eq(gate.value(1.0), 0.005));
        assert_eq!(gate, ExponentialGate::new(DEFAULT_U0, DEFAULT_U_END).unwrap());
    }

    #[test]
    fn test_rate_sign() {
        let decay = ExponentialGate::new(1.0, 0.1).unwrap();
        assert!(approx_eq(decay.rate(), 10.0_f64.ln()));
        assert_eq!(decay.direction(), Direction::Decreasing);
        assert!(decay.is_decreasing());

        let growth = ExponentialGate::new(0.1, 1.0).unwrap();
        assert!(approx_eq(growth.rate(), -(10.0_f64.ln())));
        assert_eq!(growth.direction(), Direction::Increasing);
        assert!(!growth.is_decreasing());

        let flat = ExponentialGate::new(0.5, 0.5).unwrap();
        assert_eq!(flat.rate(), 0.0);
        assert_eq!(flat.direction(), Direction::Constant);
        assert_eq!(flat.value(0.7), 0.5);
        assert_eq!(flat.derivative(0.7), 0.0);
    }

    #[test]
    fn test_negative_boundaries() {
        let gate = ExponentialGate::new(-2.0, -0.5).unwrap();
        assert!(gate.rate() > 0.0);
        assert_eq!(gate.value(0.0), -2.0);
        assert!(rel_eq(gate.value(1.0), -0.5));
        // Magnitude decays, so the signed value rises toward zero
        assert!(gate.derivative(0.5) > 0.0);
    }

    #[test]
    fn test_zero_initial_value() {
        assert_eq!(
            ExponentialGate::new(0.0, 0.005),
            Err(InvalidParameterError::ZeroInitialValue)
        );
        assert_eq!(
            ExponentialGate::new(-0.0, 0.005),
            Err(InvalidParameterError::ZeroInitialValue)
        );
    }

    #[test]
    fn test_sign_mismatch() {
        assert_eq!(
            ExponentialGate::new(1.0, -0.5),
            Err(InvalidParameterError::SignMismatch { u0: 1.0, u_end: -0.5 })
        );
        assert!(matches!(
            ExponentialGate::new(-1.0, 0.5),
            Err(InvalidParameterError::SignMismatch { .. })
        ));
        assert!(matches!(
            ExponentialGate::new(1.0, 0.0),
            Err(InvalidParameterError::SignMismatch { .. })
        ));
    }

    #[test]
    fn test_non_finite() {
        for (u0, u_end) in [
            (f64::NAN, 0.5),
            (1.0, f64::NAN),
            (f64::INFINITY, 0.5),
            (1.0, f64::NEG_INFINITY),
        ] {
            assert!(matches!(
                ExponentialGate::new(u0, u_end),
                Err(InvalidParameterError::NonFinite { .. })
            ));
        }
    }

    #[test]
    fn test_extreme_ratio_hits_both_boundaries() {
        let expected_rate = 600.0 * 10.0_f64.ln();
        for (u0, u_end, rate) in [
            (1e300, 1e-300, expected_rate),
            (1e-300, 1e300, -expected_rate),
            (-1e300, -1e-300, expected_rate),
        ] {
            let gate = ExponentialGate::new(u0, u_end).unwrap();
            assert!(rel_eq(gate.rate(), rate), "rate for u0={u0}");
            assert_eq!(gate.value(0.0), u0);
            assert!(rel_eq(gate.value(1.0), u_end), "value(1) for u0={u0}");
            assert!(rel_eq(gate.value(0.5), u0.signum()));
        }
    }

    #[test]
    fn test_large_exponent_around_direct_limit() {
        // a ~ 736.8, so x = 0.9 evaluates directly and x >= 0.96 does not
        let gate = ExponentialGate::new(1e300, 1e-20).unwrap();
        for x in [0.9_f64, 0.96, 1.0] {
            let expected = 10.0_f64.powf(300.0 - 320.0 * x);
            assert!(rel_eq(gate.value(x), expected), "x={x}");
        }
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            InvalidParameterError::ZeroInitialValue.to_string(),
            "initial value must be non-zero"
        );
        assert!(
            ExponentialGate::new(1.0, -1.0)
                .unwrap_err()
                .to_string()
                .starts_with("boundary values must share sign")
        );
    }

    #[test]
    fn test_derivative_matches_closed_form() {
        let gate = ExponentialGate::new(3.0, 0.2).unwrap();
        let a = (3.0_f64 / 0.2).ln();
        for x in [-0.5_f64, 0.0, 0.3, 1.0, 2.0] {
            let expected = -a * 3.0 * (-a * x).exp();
            assert!(rel_eq(gate.derivative(x), expected), "x={x}");
        }
    }

    #[test]
    fn test_derivative_matches_finite_difference() {
        let h = 1e-6;
        for (u0, u_end) in [(3.0, 0.2), (0.1, 1.0), (-2.0, -0.5)] {
            let gate = ExponentialGate::new(u0, u_end).unwrap();
            for x in [-0.5_f64, 0.0, 0.3, 1.0, 2.0] {
                let slope = (gate.value(x + h) - gate.value(x - h)) / (2.0 * h);
                let du = gate.derivative(x);
                assert!((du - slope).abs() <= 1e-6 * du.abs(), "u0={u0} x={x}");
            }
        }
    }

    #[test]
    fn test_reinitialize_replaces_parameters() {
        let mut gate = ExponentialGate::new(1.0, 0.005).unwrap();
        gate.initialize(2.0, 0.2).unwrap();
        assert_eq!(gate.value(0.0), 2.0);
        assert!(rel_eq(gate.value(1.0), 0.2));
        assert_eq!(gate.u_end(), 0.2);
    }

    #[test]
    fn test_failed_reinitialize_keeps_parameters() {
        let mut gate = ExponentialGate::new(1.0, 0.005).unwrap();
        let before = gate;
        assert!(gate.initialize(0.0, 0.2).is_err());
        assert!(gate.initialize(2.0, -0.2).is_err());
        assert_eq!(gate, before);
    }

    #[test]
    fn test_elementwise_matches_scalar() {
        let gate = ExponentialGate::new(1.5, 0.01).unwrap();
        let xs: [f64; 3] = [0.13, 0.5, 0.91];
        let values = gate.value(xs);
        let derivatives = gate.derivative(&xs[..]);
        for (i, &x) in xs.iter().enumerate() {
            assert_eq!(values[i], gate.value(x));
            assert_eq!(derivatives[i], gate.derivative(x));
        }
    }

    #[test]
    fn test_outside_unit_interval_not_clamped() {
        let gate = ExponentialGate::new(1.0, 0.1).unwrap();
        assert!(gate.value(-1.0) > 1.0);
        assert!(rel_eq(gate.value(2.0), 0.01));
    }

    #[test]
    fn test_extreme_phase_saturates() {
        let gate = ExponentialGate::new(1.0, 0.1).unwrap();
        assert_eq!(gate.value(1e6), 0.0);
        assert_eq!(gate.value(-1e6), f64::INFINITY);
    }
}
