//! The `WorldSimulator` struct and its step loop.

use v2x_analysis::{comm_link, perturb_position, predict_collision};
use v2x_core::{SimConfig, SimRng, Tick, Vec2};
use v2x_fleet::{Vehicle, spawn_fleet};

use crate::{SimObserver, SimResult, StepOptions, StepOutput};

/// The simulation engine: a fleet of constant-velocity vehicles, advanced
/// and analyzed one synchronous step at a time.
///
/// The simulator owns all mutable state — the fleet, the tick counter, and
/// the single RNG feeding spawn, noise, and loss draws.  Callers own the
/// instance (no process-wide singleton) and must serialize `step` calls;
/// there is no internal locking.
///
/// Per-step work is `O(n²)` over the fleet, which is fine for the fleet
/// sizes this engine targets (a few dozen at most).  Spatial indexing is a
/// documented extension point, not part of the base contract.
pub struct WorldSimulator {
    pub(crate) config: SimConfig,
    pub(crate) vehicles: Vec<Vehicle>,
    pub(crate) rng: SimRng,
    pub(crate) seed: u64,
    pub(crate) tick: Tick,
}

impl WorldSimulator {
    /// Validate `config`, resolve the seed, and spawn the initial fleet.
    pub fn new(config: SimConfig) -> SimResult<Self> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(SimRng::entropy_seed);
        let mut rng = SimRng::new(seed);
        let vehicles = spawn_fleet(&config, &mut rng);

        Ok(Self {
            config,
            vehicles,
            rng,
            seed,
            tick: Tick::ZERO,
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// The resolved RNG seed — either the configured one or the entropy
    /// draw made at construction.  Reusing it replays the run exactly.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn tick(&self) -> Tick {
        self.tick
    }

    /// The fleet in spawn order (the order is never changed).
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Perform one simulation step and return a consistent snapshot.
    ///
    /// When all degradation is off, a non-advancing step consumes no
    /// randomness, so repeating it yields bit-identical output.
    pub fn step(&mut self, options: &StepOptions) -> StepOutput {
        // ── Phase 1: advance kinematics ───────────────────────────────────
        if options.advance {
            for vehicle in &mut self.vehicles {
                vehicle.advance(1.0);
            }
            self.tick = self.tick + 1;
        }

        // ── Phase 2: observe ──────────────────────────────────────────────
        //
        // One observed position per vehicle per tick, shared by its
        // broadcast and every mesh test involving it, so a vehicle's
        // reported state is internally consistent.
        let observed: Vec<Vec2> = self
            .vehicles
            .iter()
            .map(|v| {
                if options.simulate_noise {
                    perturb_position(v.position, options.noise_std_dev, &mut self.rng)
                } else {
                    v.position
                }
            })
            .collect();

        // ── Phase 3: broadcasts ───────────────────────────────────────────
        let messages = self
            .vehicles
            .iter()
            .zip(&observed)
            .map(|(v, &pos)| v.broadcast_from(pos))
            .collect();

        // ── Phase 4: pairwise scan ────────────────────────────────────────
        //
        // Each unordered pair visited exactly once, i before j in spawn
        // order.  Hazard prediction runs on true kinematic state; the mesh
        // test runs on the (possibly degraded) observed positions.
        let mut warnings = Vec::new();
        let mut comm_links = Vec::new();

        for i in 0..self.vehicles.len() {
            for j in (i + 1)..self.vehicles.len() {
                let a = &self.vehicles[i];
                let b = &self.vehicles[j];

                if let Some(warning) = predict_collision(a, b, self.config.collision_radius) {
                    warnings.push(warning);
                }

                if let Some(link) =
                    comm_link(a.id, observed[i], b.id, observed[j], self.config.comm_radius)
                {
                    let dropped =
                        options.simulate_loss && self.rng.gen_bool(options.loss_probability);
                    if !dropped {
                        comm_links.push(link);
                    }
                }
            }
        }

        StepOutput { messages, warnings, comm_links }
    }

    /// Run `n` steps with the same options, handing each result to
    /// `observer`.  Scheduling (frame pacing, sleeps) stays with the caller.
    pub fn run_steps<O: SimObserver>(&mut self, n: u64, options: &StepOptions, observer: &mut O) {
        for _ in 0..n {
            let output = self.step(options);
            observer.on_step(self.tick, &output);
        }
    }

    /// Replace the configuration and rebuild the fleet from scratch.
    ///
    /// All vehicles and trails are discarded wholesale and the tick resets —
    /// the engine never merges old fleet state into a new configuration.
    /// On a validation error the simulator is left untouched.
    pub fn reconfigure(&mut self, config: SimConfig) -> SimResult<()> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(SimRng::entropy_seed);
        self.rng = SimRng::new(seed);
        self.seed = seed;
        self.vehicles = spawn_fleet(&config, &mut self.rng);
        self.config = config;
        self.tick = Tick::ZERO;
        Ok(())
    }
}
