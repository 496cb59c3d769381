//! Phase inputs: a single phase value or an ordered sequence of them.
//!
//! Gates evaluate elementwise, so anything implementing [`Phase`] can be
//! passed to [`ExponentialGate::value`](crate::ExponentialGate::value) and
//! [`ExponentialGate::derivative`](crate::ExponentialGate::derivative). The
//! output keeps the shape of the input: a scalar maps to a scalar, an array to
//! an array of the same length, a slice or vector to a vector.

/// A phase value or a sequence of phase values.
///
/// # Examples
///
/// ```
/// use phasegate::Phase;
///
/// let doubled = [0.25_f64, 0.5].map_phase(|x| 2.0 * x);
/// assert_eq!(doubled, [0.5, 1.0]);
///
/// let shifted = 0.5_f64.map_phase(|x| x + 0.25);
/// assert_eq!(shifted, 0.75);
/// ```
pub trait Phase {
    /// Result of mapping every phase value through a function.
    type Output;

    /// Applies `f` to each phase value, preserving order and shape.
    fn map_phase<F: FnMut(f64) -> f64>(self, f: F) -> Self::Output;
}

impl Phase for f64 {
    type Output = f64;

    fn map_phase<F: FnMut(f64) -> f64>(self, mut f: F) -> f64 {
        f(self)
    }
}

impl Phase for &[f64] {
    type Output = Vec<f64>;

    fn map_phase<F: FnMut(f64) -> f64>(self, f: F) -> Vec<f64> {
        self.iter().copied().map(f).collect()
    }
}

impl Phase for &Vec<f64> {
    type Output = Vec<f64>;

    fn map_phase<F: FnMut(f64) -> f64>(self, f: F) -> Vec<f64> {
        self.as_slice().map_phase(f)
    }
}

// Reuses the vector's allocation.
impl Phase for Vec<f64> {
    type Output = Vec<f64>;

    fn map_phase<F: FnMut(f64) -> f64>(mut self, mut f: F) -> Vec<f64> {
        for x in self.iter_mut() {
            *x = f(*x);
        }
        self
    }
}

impl<const N: usize> Phase for [f64; N] {
    type Output = [f64; N];

    fn map_phase<F: FnMut(f64) -> f64>(self, f: F) -> [f64; N] {
        self.map(f)
    }
}

impl<const N: usize> Phase for &[f64; N] {
    type Output = [f64; N];

    fn map_phase<F: FnMut(f64) -> f64>(self, f: F) -> [f64; N] {
        (*self).map(f)
    }
}
