//! Core state types for the Vicsek simulation.
//!
//! Defines the particle/system structs:
//! - `Particle` holds position, heading, and per-step neighbor accumulators
//! - `System` is the ordered particle store plus the current step counter
//!
//! Particle index in `System::particles` always equals `Particle::id`.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone)]
pub struct Particle {
    pub id: usize, // stable index, 0..n
    pub x: NVec2, // position, both components in [0, l)
    pub theta: f64, // heading in [0, 2*pi)
    pub heading_sum: NVec2, // accumulated (cos, sin) of neighbor headings
    pub neighbor_count: u32, // neighbors registered this step, self included
}

impl Particle {
    pub fn new(id: usize, x: NVec2, theta: f64) -> Self {
        Self {
            id,
            x,
            theta,
            heading_sum: NVec2::zeros(),
            neighbor_count: 0,
        }
    }

    /// Unit heading vector `(cos theta, sin theta)`.
    pub fn heading(&self) -> NVec2 {
        NVec2::new(self.theta.cos(), self.theta.sin())
    }

    /// Velocity at speed `v`, derived from the current heading.
    pub fn velocity(&self, v: f64) -> NVec2 {
        self.heading() * v
    }

    /// Add one neighbor's heading to the accumulator.
    pub fn register_neighbor(&mut self, heading: NVec2) {
        self.heading_sum += heading;
        self.neighbor_count += 1;
    }

    /// Zero the accumulator and count. Called once per step, after the
    /// update rule has consumed them.
    pub fn reset_accumulator(&mut self) {
        self.heading_sum = NVec2::zeros();
        self.neighbor_count = 0;
    }
}

#[derive(Debug, Clone)]
pub struct System {
    pub particles: Vec<Particle>, // ordered by id; count fixed for the run
    pub t: u64, // current step
}

impl System {
    pub fn new(particles: Vec<Particle>) -> Self {
        Self { particles, t: 0 }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Vicsek order parameter `v_a = |sum of unit headings| / n`.
    /// 1.0 when all particles point the same way, near 0 when disordered.
    pub fn polarization(&self) -> f64 {
        if self.particles.is_empty() {
            return 0.0;
        }
        let sum: NVec2 = self.particles.iter().map(|p| p.heading()).sum();
        sum.norm() / self.particles.len() as f64
    }
}
