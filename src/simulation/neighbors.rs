//! Neighbor-accumulation strategies for the Vicsek engine
//!
//! Defines the `NeighborFinder` trait and the direct O(N²) reference
//! implementation. The cell-index variant lives in [`crate::simulation::cell_index`].
//!
//! A finder only ever mutates particle accumulators and neighbor counts,
//! never positions or headings. Self-pairs are registered by the driver
//! before the finder runs, identically for every strategy.

use crate::simulation::geometry::periodic_distance_sq;
use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec2, System};

/// Strategy for one accumulate pass: add every within-radius neighbor's
/// heading into each particle's accumulator, reading frozen pre-step state.
pub trait NeighborFinder {
    fn accumulate(&mut self, sys: &mut System, params: &Parameters);
}

/// Direct all-pairs scan. O(N²) per step; the correctness oracle the
/// cell-index finder is tested against, and fine for small systems.
pub struct BruteForceFinder;

impl NeighborFinder for BruteForceFinder {
    fn accumulate(&mut self, sys: &mut System, params: &Parameters) {
        let n = sys.particles.len();
        let r2 = params.r * params.r;

        for i in 0..n {
            let xi = sys.particles[i].x;

            // Sum contributions from every other particle within r,
            // distances taken through the minimum-image convention.
            let mut sum = NVec2::zeros();
            let mut count = 0u32;
            for j in 0..n {
                if j == i {
                    continue;
                }
                let pj = &sys.particles[j];
                if periodic_distance_sq(xi.x, xi.y, pj.x.x, pj.x.y, params.l) <= r2 {
                    sum += pj.heading();
                    count += 1;
                }
            }

            let pi = &mut sys.particles[i];
            pi.heading_sum += sum;
            pi.neighbor_count += count;
        }
    }
}
