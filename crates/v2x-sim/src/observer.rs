//! Step observer trait for callers driving multi-step runs.

use v2x_core::Tick;

use crate::StepOutput;

/// Callback invoked by [`WorldSimulator::run_steps`][crate::WorldSimulator::run_steps]
/// after every step.
///
/// The default implementation is a no-op so implementors only override what
/// they care about.
///
/// # Example — warning printer
///
/// ```rust,ignore
/// struct AlertPrinter;
///
/// impl SimObserver for AlertPrinter {
///     fn on_step(&mut self, tick: Tick, output: &StepOutput) {
///         for warning in &output.warnings {
///             println!("{tick}: {warning}");
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once per step with the tick reached and the full result triple.
    fn on_step(&mut self, _tick: Tick, _output: &StepOutput) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
