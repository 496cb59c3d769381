//! Evaluation of a gate at evenly spaced phases.
//!
//! A motion loop advancing through a trajectory in fixed steps sees the phase
//! move from 0 to 1 in equal increments. `PhaseSweep` produces exactly those
//! evaluations, either as an iterator of [`GateSample`]s or as a [`Signal`].

use crate::{Gate, Signal};

/// One evaluation of a gate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GateSample {
    /// Phase in [0, 1]
    pub phase: f64,
    /// Gate value at `phase`
    pub value: f64,
    /// Gate derivative at `phase`
    pub derivative: f64,
}

/// Walks a gate from phase 0 to phase 1 inclusive in `steps` equal intervals.
///
/// Yields `steps + 1` samples. Phases are computed as `i / steps`, so the last
/// sample sits at exactly 1.0. With `steps == 0` the sweep yields the single
/// sample at phase 0.
///
/// As a [`Signal`], the sweep keeps returning its final value once exhausted.
///
/// # Examples
///
/// ```
/// use phasegate::{ExponentialGate, Signal};
///
/// let gate = ExponentialGate::new(1.0, 0.01)?;
/// let mut sweep = gate.sweep(2);
///
/// let mut buffer = [0.0; 4];
/// sweep.process(&mut buffer);
/// assert_eq!(buffer[0], 1.0);
/// assert!((buffer[1] - 0.1).abs() < 1e-12);
/// assert!((buffer[2] - 0.01).abs() < 1e-12);
/// assert_eq!(buffer[3], buffer[2]);
/// # Ok::<(), phasegate::InvalidParameterError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PhaseSweep<'a, G: Gate + ?Sized> {
    gate: &'a G,
    steps: usize,
    index: usize,
}

impl<'a, G: Gate + ?Sized> PhaseSweep<'a, G> {
    /// Creates a sweep over `gate` with `steps` intervals.
    pub fn new(gate: &'a G, steps: usize) -> Self {
        Self {
            gate,
            steps,
            index: 0,
        }
    }

    /// Number of intervals between phase 0 and phase 1.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Returns true once every sample has been produced.
    pub fn is_finished(&self) -> bool {
        self.index > self.steps
    }

    /// Rewinds the sweep to phase 0.
    pub fn reset(&mut self) {
        log::trace!("phase sweep reset after {} of {} samples", self.index, self.len_total());
        self.index = 0;
    }

    fn phase_at(&self, index: usize) -> f64 {
        if self.steps == 0 {
            0.0
        } else {
            index as f64 / self.steps as f64
        }
    }

    fn sample_at(&self, index: usize) -> GateSample {
        let phase = self.phase_at(index);
        GateSample {
            phase,
            value: self.gate.value_at(phase),
            derivative: self.gate.derivative_at(phase),
        }
    }

    fn len_total(&self) -> usize {
        self.steps.saturating_add(1)
    }
}

impl<G: Gate + ?Sized> Iterator for PhaseSweep<'_, G> {
    type Item = GateSample;

    fn next(&mut self) -> Option<GateSample> {
        if self.is_finished() {
            return None;
        }
        let sample = self.sample_at(self.index);
        self.index += 1;
        Some(sample)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len_total().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<G: Gate + ?Sized> ExactSizeIterator for PhaseSweep<'_, G> {}

impl<G: Gate + ?Sized> Signal for PhaseSweep<'_, G> {
    fn next_sample(&mut self) -> f64 {
        match self.next() {
            Some(sample) => sample.value,
            // Hold the end of the sweep
            None => self.gate.value_at(self.phase_at(self.steps)),
        }
    }
}
