//! radar — smallest demo for the v2x mesh simulation engine.
//!
//! Spawns the default 4-vehicle fleet from a fixed seed and runs a handful
//! of steps, printing each vehicle's broadcast, the mesh edges, and any
//! collision alerts.  A real presentation layer would poll `step` on its own
//! frame interval and draw the same data on a 2D map.

use anyhow::Result;

use v2x_core::{SimConfig, Tick};
use v2x_sim::{SimObserver, StepOptions, StepOutput, WorldSimulator};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:  u64 = 42;
const STEPS: u64 = 5;

// ── Observer ──────────────────────────────────────────────────────────────────

struct ConsoleRadar;

impl SimObserver for ConsoleRadar {
    fn on_step(&mut self, tick: Tick, output: &StepOutput) {
        println!("\n=== {tick} ===");
        for msg in &output.messages {
            println!("  broadcast {msg}");
        }
        for link in &output.comm_links {
            println!("  link      {link}");
        }
        if output.warnings.is_empty() {
            println!("  no imminent collisions");
        }
        for warning in &output.warnings {
            println!("  ALERT     {warning}");
        }
    }
}

fn main() -> Result<()> {
    let config = SimConfig { seed: Some(SEED), ..SimConfig::default() };
    let mut sim = WorldSimulator::new(config)?;

    println!("v2x radar demo — {} vehicles, seed {}", sim.vehicles().len(), sim.seed());
    sim.run_steps(STEPS, &StepOptions::default(), &mut ConsoleRadar);

    Ok(())
}
