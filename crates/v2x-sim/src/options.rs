//! Step inputs and the per-step result triple.

use v2x_analysis::{CommLink, Warning};
use v2x_fleet::BroadcastMessage;

/// What one call to [`WorldSimulator::step`](crate::WorldSimulator::step)
/// should do.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepOptions {
    /// Advance every vehicle by one second of motion before analyzing.
    /// With `false`, the step re-reports the current state unchanged.
    pub advance: bool,

    /// Perturb each vehicle's observed position with Gaussian noise.
    pub simulate_noise: bool,

    /// Drop passing communication links at random.
    pub simulate_loss: bool,

    /// Probability that a passing link is dropped (used iff `simulate_loss`).
    pub loss_probability: f64,

    /// Standard deviation of the per-axis position noise (used iff
    /// `simulate_noise`).
    pub noise_std_dev: f64,
}

impl Default for StepOptions {
    /// Advance with all degradation off.
    fn default() -> Self {
        Self {
            advance:          true,
            simulate_noise:   false,
            simulate_loss:    false,
            loss_probability: 0.0,
            noise_std_dev:    0.0,
        }
    }
}

impl StepOptions {
    /// Re-analyze the current state without moving anyone.
    pub fn hold() -> Self {
        Self { advance: false, ..Self::default() }
    }

    pub fn with_noise(mut self, std_dev: f64) -> Self {
        self.simulate_noise = true;
        self.noise_std_dev = std_dev;
        self
    }

    pub fn with_loss(mut self, probability: f64) -> Self {
        self.simulate_loss = true;
        self.loss_probability = probability;
        self
    }
}

/// The consistent result triple of one simulation step.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepOutput {
    /// One broadcast per vehicle, in spawn order, from observed positions.
    pub messages: Vec<BroadcastMessage>,

    /// Flagged collision risks, one per pair at most, in pair-scan order.
    pub warnings: Vec<Warning>,

    /// Communication-mesh edges, one per pair at most, in pair-scan order.
    pub comm_links: Vec<CommLink>,
}
