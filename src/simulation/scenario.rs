//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! consumed by the runner:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - system state (`System` with particles placed at t = 0)
//! - the selected neighbor finder
//! - the run's random generator, owned here so nothing draws from ambient
//!   state

use log::warn;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::TAU;

use crate::configuration::config::{ConfigError, FinderConfig, ScenarioConfig};
use crate::simulation::cell_index::CellIndexFinder;
use crate::simulation::engine::Engine;
use crate::simulation::neighbors::{BruteForceFinder, NeighborFinder};
use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec2, Particle, System};

/// A fully-initialized simulation scenario.
///
/// This is the main runtime bundle constructed from a [`ScenarioConfig`]:
/// engine settings, parameters, the particle system at t = 0, the active
/// neighbor-search strategy, and the generator every random draw of the run
/// comes from.
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: System,
    pub finder: Box<dyn NeighborFinder + Send>,
    pub rng: StdRng,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, ConfigError> {
        // Fail fast, before any particle exists
        cfg.parameters.validate()?;

        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            n: p_cfg.n,
            l: p_cfg.l,
            v: p_cfg.v,
            eta: p_cfg.eta,
            r: p_cfg.r,
            steps: p_cfg.steps,
            save_every: p_cfg.save_every,
            m: p_cfg.m,
            seed: p_cfg.seed,
        };

        let engine = Engine {
            finder: cfg.engine.finder,
        };

        let mut rng = match parameters.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        // Particles: uniform positions in [0, l)^2, uniform headings in
        // [0, 2*pi). Draw order is x, y, theta per particle, ascending id.
        let particles: Vec<Particle> = (0..parameters.n)
            .map(|id| {
                let x = rng.gen::<f64>() * parameters.l;
                let y = rng.gen::<f64>() * parameters.l;
                let theta = rng.gen::<f64>() * TAU;
                Particle::new(id, NVec2::new(x, y), theta)
            })
            .collect();

        let system = System::new(particles);

        // Finder: construct the strategy the engine settings select
        let finder: Box<dyn NeighborFinder + Send> = match engine.finder {
            FinderConfig::BruteForce => Box::new(BruteForceFinder),
            FinderConfig::CellIndex => {
                if parameters.cell_size() < parameters.r {
                    warn!(
                        "cell side {} is smaller than interaction radius {}; \
                         cell-index search will miss neighbors (choose m <= l/r)",
                        parameters.cell_size(),
                        parameters.r
                    );
                }
                Box::new(CellIndexFinder::new(&parameters))
            }
        };

        Ok(Self {
            engine,
            parameters,
            system,
            finder,
            rng,
        })
    }
}
