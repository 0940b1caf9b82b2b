//! # Cell-Index Neighbor Search
//!
//! This module implements the **cell-index method** (a uniform spatial grid)
//! for accumulating Vicsek neighbors. The goal is to replace the naive
//! `O(N²)` all-pairs scan with an expected `O(N)` method that is numerically
//! identical to it.
//!
//! ## Core Concepts
//!
//! The domain of side `l` is partitioned into `m × m` square cells of side
//! `l / m`. As long as the cell side is at least the interaction radius `r`,
//! every neighbor of a particle lies in its own cell or in one of the eight
//! surrounding cells, so each particle only needs to scan a handful of
//! buckets instead of the whole system.
//!
//! - The grid is rebuilt from scratch every step (particles move
//!   continuously, so membership changes every step).
//! - Each cell's candidate cells come from a **half-stencil**: the forward
//!   offsets `{(0,0), (1,-1), (1,0), (1,1), (0,1)}` out of the 9 Moore
//!   neighbors, wrapped periodically. Walking the half-stencil over all
//!   cells visits every unordered pair of cells exactly once, which is what
//!   lets matches be registered symmetrically without double counting.
//! - Within a particle's own cell, only candidates with a larger id are
//!   considered, for the same reason.
//!
//! The caller chooses `m`; the invariant `l / m >= r` is the caller's
//! responsibility and is not enforced here (a smaller cell side misses
//! neighbors, it does not error).

use std::collections::HashSet;

use crate::simulation::geometry::periodic_distance_sq;
use crate::simulation::neighbors::NeighborFinder;
use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec2, System};

/// Forward half of the Moore neighborhood, self included.
const HALF_STENCIL: [(isize, isize); 5] = [(0, 0), (1, -1), (1, 0), (1, 1), (0, 1)];

/// Static map from each cell to the cells of its half-stencil.
///
/// Built once per run from `m` alone; read-only afterward and independent of
/// particle positions.
///
/// For `m >= 3` every cell's stencil is exactly the five wrapped offsets.
/// For the degenerate grids `m ∈ {1, 2}` the wrapped offsets collide (two
/// offsets can land on the same cell, or an offset can land back on a cell
/// that already reaches this one), so construction keeps an entry only the
/// first time its unordered cell pair is seen. The exactly-once pair
/// property therefore holds for every `m >= 1`.
pub struct CellNeighborTable {
    m: usize,
    stencils: Vec<Vec<usize>>, // cell index -> candidate cell indices
}

impl CellNeighborTable {
    /// Build the table for an `m × m` periodic grid.
    ///
    /// # Parameters
    /// - `m`: grid cells per side, `>= 1`.
    ///
    /// # Returns
    /// A table in which iterating all cells and all their entries visits
    /// every unordered pair of cells (a cell paired with itself included)
    /// exactly once.
    pub fn new(m: usize) -> Self {
        let mut stencils = Vec::with_capacity(m * m);
        let mut seen: HashSet<(usize, usize)> = HashSet::new();

        for cell_y in 0..m {
            for cell_x in 0..m {
                let cell = cell_x + cell_y * m;
                let mut entries = Vec::with_capacity(HALF_STENCIL.len());

                for (dx, dy) in HALF_STENCIL {
                    let nx = (cell_x as isize + dx).rem_euclid(m as isize) as usize;
                    let ny = (cell_y as isize + dy).rem_euclid(m as isize) as usize;
                    let neighbor = nx + ny * m;

                    // Key the unordered pair; skip entries whose pair is
                    // already covered elsewhere in the table.
                    let pair = (cell.min(neighbor), cell.max(neighbor));
                    if seen.insert(pair) {
                        entries.push(neighbor);
                    }
                }

                stencils.push(entries);
            }
        }

        Self { m, stencils }
    }

    pub fn m(&self) -> usize {
        self.m
    }

    /// Candidate cells for `cell`, own cell first when present.
    pub fn stencil(&self, cell: usize) -> &[usize] {
        &self.stencils[cell]
    }
}

/// Per-step particle buckets, one per grid cell.
///
/// Bucket storage is reused between rebuilds (cleared, not reallocated).
pub struct CellGrid {
    m: usize,
    cell_size: f64,
    buckets: Vec<Vec<usize>>, // cell index -> particle ids
}

impl CellGrid {
    pub fn new(m: usize, cell_size: f64) -> Self {
        Self {
            m,
            cell_size,
            buckets: vec![Vec::new(); m * m],
        }
    }

    /// Cell index of a position: `floor(x / cell_size) + floor(y / cell_size) * m`,
    /// clamped so positions that wrap to exactly `l` stay in the last cell.
    pub fn cell_index_of(&self, x: &NVec2) -> usize {
        let cx = ((x.x / self.cell_size) as usize).min(self.m - 1);
        let cy = ((x.y / self.cell_size) as usize).min(self.m - 1);
        cx + cy * self.m
    }

    /// Re-bucket every particle from the current system state.
    pub fn rebuild(&mut self, sys: &System) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        for p in &sys.particles {
            let cell = self.cell_index_of(&p.x);
            self.buckets[cell].push(p.id);
        }
    }

    pub fn bucket(&self, cell: usize) -> &[usize] {
        &self.buckets[cell]
    }
}

/// Cell-index neighbor finder: grid rebuild + half-stencil walk.
///
/// Numerically interchangeable with [`crate::simulation::neighbors::BruteForceFinder`]:
/// both route every distance through the same minimum-image primitives and
/// end each pass with identical accumulator contents.
pub struct CellIndexFinder {
    table: CellNeighborTable,
    grid: CellGrid,
}

impl CellIndexFinder {
    pub fn new(params: &Parameters) -> Self {
        Self {
            table: CellNeighborTable::new(params.m),
            grid: CellGrid::new(params.m, params.cell_size()),
        }
    }
}

impl NeighborFinder for CellIndexFinder {
    fn accumulate(&mut self, sys: &mut System, params: &Parameters) {
        let r2 = params.r * params.r;
        self.grid.rebuild(sys);

        for i in 0..sys.particles.len() {
            let xi = sys.particles[i].x;
            let cell = self.grid.cell_index_of(&xi);

            for &candidate_cell in self.table.stencil(cell) {
                for &j in self.grid.bucket(candidate_cell) {
                    // Own cell: larger ids only, so each unordered particle
                    // pair is visited exactly once across the whole walk.
                    if candidate_cell == cell && j <= i {
                        continue;
                    }

                    let xj = sys.particles[j].x;
                    if periodic_distance_sq(xi.x, xi.y, xj.x, xj.y, params.l) <= r2 {
                        // Register the match symmetrically: each side
                        // accumulates the other's heading.
                        let hi = sys.particles[i].heading();
                        let hj = sys.particles[j].heading();
                        sys.particles[i].register_neighbor(hj);
                        sys.particles[j].register_neighbor(hi);
                    }
                }
            }
        }
    }
}
