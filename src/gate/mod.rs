//! Gating functions over a normalized phase variable.
//!
//! A gate is a scalar signal `u(x)` for `x` in [0, 1] that scales other
//! signals (forcing terms, typically) as a motion progresses. This module
//! provides the `Gate` trait and the exponential decay/growth gate.

mod exponential;
mod traits;

pub use exponential::{DEFAULT_U0, DEFAULT_U_END, ExponentialGate};
pub use traits::{Direction, Gate};
