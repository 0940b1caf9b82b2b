//! Per-step update rule for the Vicsek system
//!
//! Advances headings and positions in place, driven by the accumulators the
//! neighbor finders filled in. The step is strictly two-phase:
//! - accumulate: self-registration plus a finder pass over frozen state,
//! - apply: every particle's new heading/position computed from the
//!   accumulators, then accumulators reset.
//!
//! No particle ever observes another's mid-step update.

use rand::Rng;
use thiserror::Error;

use crate::simulation::geometry::{wrap_angle, wrap_position};
use crate::simulation::params::Parameters;
use crate::simulation::states::System;

#[derive(Debug, Error)]
pub enum StepError {
    /// A particle reached the apply phase with an empty accumulator. The
    /// driver registers every particle as its own neighbor before the finder
    /// runs, so this can only mean the accumulate phase was skipped or
    /// corrupted.
    #[error("particle {id} has no registered neighbors; accumulate phase missing its self-pair")]
    NoSelfNeighbor { id: usize },
}

/// Accumulate-phase opener: every particle registers itself as its own
/// neighbor (`count = 1`). A particle always sees itself, which keeps the
/// mean-heading denominator nonzero for the whole run.
pub fn register_self_neighbors(sys: &mut System) {
    for p in &mut sys.particles {
        let heading = p.heading();
        p.register_neighbor(heading);
    }
}

/// Apply phase: consume the accumulators and advance every particle.
///
/// For each particle, in ascending id order:
/// - mean heading `atan2(sum_sin / count, sum_cos / count)`,
/// - one noise draw `uniform(0,1) * eta - eta/2` from the run's generator
///   (id order makes the draw sequence independent of the finder strategy),
/// - new heading wrapped into `[0, 2*pi)`, position advanced by `v` along it
///   and wrapped into `[0, l)`,
/// - accumulator and count reset for the next step.
pub fn apply_update(
    sys: &mut System,
    params: &Parameters,
    rng: &mut impl Rng,
) -> Result<(), StepError> {
    for p in &mut sys.particles {
        let count = p.neighbor_count;
        if count == 0 {
            return Err(StepError::NoSelfNeighbor { id: p.id });
        }
        let count = count as f64;

        let mean = (p.heading_sum.y / count).atan2(p.heading_sum.x / count);
        let noise = rng.gen::<f64>() * params.eta - params.eta / 2.0;

        p.theta = wrap_angle(mean + noise);
        p.x.x = wrap_position(p.x.x + params.v * p.theta.cos(), params.l);
        p.x.y = wrap_position(p.x.y + params.v * p.theta.sin(), params.l);

        p.reset_accumulator();
    }

    sys.t += 1;
    Ok(())
}
