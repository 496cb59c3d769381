//! Gated forcing term demo.
//!
//! Sweeps a gate over one motion and prints how it scales a simple forcing
//! term. Boundary values can be given as a JSON config on the command line:
//!
//! ```text
//! cargo run --example forcing_term -- '{"u0": 1.0, "u_end": 0.01}'
//! ```

use anyhow::{Context, Result};
use phasegate::{ExponentialGate, GateConfig};

const STEPS: usize = 10;

fn main() -> Result<()> {
    let config = match std::env::args().nth(1) {
        Some(json) => GateConfig::from_json(&json).context("invalid gate config")?,
        None => GateConfig::default(),
    };
    let gate = ExponentialGate::try_from(config)?;

    println!(
        "u0 = {}, u_end = {}, a = {:.4} ({:?})",
        gate.u0(),
        gate.u_end(),
        gate.rate(),
        gate.direction()
    );
    println!("{:>6} {:>10} {:>10} {:>10}", "x", "u", "du/dx", "f(x)*u");

    for sample in gate.sweep(STEPS) {
        let forcing = (std::f64::consts::TAU * sample.phase).sin();
        println!(
            "{:>6.2} {:>10.5} {:>10.5} {:>10.5}",
            sample.phase,
            sample.value,
            sample.derivative,
            forcing * sample.value
        );
    }

    Ok(())
}
