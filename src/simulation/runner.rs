//! Simulation driver
//!
//! Owns the stepping loop: accumulate phase (self-registration + neighbor
//! finder), apply phase (update rule), and snapshot emission to the injected
//! sink. A run goes `Initialized -> Running -> Completed`; construction of
//! the [`Scenario`] is the initialization, [`Runner::run`] drives it to
//! completion, and nothing mutates the system afterward.

use log::{debug, info};
use thiserror::Error;

use crate::output::sink::{SinkError, SnapshotRow, SnapshotSink};
use crate::simulation::scenario::Scenario;
use crate::simulation::update::{apply_update, register_self_neighbors, StepError};

#[derive(Debug, Error)]
pub enum RunError {
    #[error("step {t} failed: {source}")]
    Step {
        t: u64,
        #[source]
        source: StepError,
    },
    #[error("snapshot write for step {t} failed: {source}")]
    Sink {
        t: u64,
        #[source]
        source: SinkError,
    },
}

pub struct Runner {
    pub scenario: Scenario,
}

impl Runner {
    pub fn new(scenario: Scenario) -> Self {
        Self { scenario }
    }

    /// Rows for the current state, ascending id, velocities derived from
    /// the headings at the configured speed.
    pub fn snapshot(&self) -> Vec<SnapshotRow> {
        let v = self.scenario.parameters.v;
        self.scenario
            .system
            .particles
            .iter()
            .map(|p| {
                let vel = p.velocity(v);
                SnapshotRow {
                    id: p.id,
                    x: p.x.x,
                    y: p.x.y,
                    vx: vel.x,
                    vy: vel.y,
                }
            })
            .collect()
    }

    /// Advance the system by one step: accumulate over frozen state, then
    /// apply. No snapshot is emitted here.
    pub fn step(&mut self) -> Result<(), StepError> {
        // Split &mut Scenario into &mut fields in one destructuring step
        let Scenario {
            system,
            parameters,
            finder,
            rng,
            ..
        } = &mut self.scenario;

        register_self_neighbors(system);
        finder.accumulate(system, parameters);
        apply_update(system, parameters, rng)
    }

    /// Drive the scenario through all configured steps, emitting snapshots
    /// to `sink`. A step-0 snapshot always goes out before the loop; after
    /// that every `save_every`-th step is saved, exactly once each. Sink
    /// failures abort the run.
    pub fn run(&mut self, sink: &mut dyn SnapshotSink) -> Result<(), RunError> {
        let steps = self.scenario.parameters.steps;
        let save_every = self.scenario.parameters.save_every;
        info!(
            "starting run: {} particles, {} steps, finder {:?}",
            self.scenario.parameters.n, steps, self.scenario.engine.finder
        );

        sink.write_step(0, &self.snapshot())
            .map_err(|source| RunError::Sink { t: 0, source })?;

        for t in 1..=steps {
            self.step().map_err(|source| RunError::Step { t, source })?;

            if t % save_every == 0 {
                debug!("saving step {t}");
                sink.write_step(t, &self.snapshot())
                    .map_err(|source| RunError::Sink { t, source })?;
            }
        }

        info!(
            "run complete: polarization {:.4}",
            self.scenario.system.polarization()
        );
        Ok(())
    }
}
