use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::simulation::cell_index::CellIndexFinder;
use crate::simulation::geometry::{wrap_angle, wrap_position};
use crate::simulation::neighbors::{BruteForceFinder, NeighborFinder};
use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec2, Particle, System};
use crate::simulation::update::{apply_update, register_self_neighbors};

/// Helper to build a deterministic system of size `n`
/// (sin/cos placement, no rand needed)
fn make_system(n: usize, l: f64) -> System {
    let mut particles = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        let x = wrap_position((i_f * 0.37).sin() * l, l);
        let y = wrap_position((i_f * 0.13).cos() * l, l);
        let theta = wrap_angle(i_f * 0.7);
        particles.push(Particle::new(i, NVec2::new(x, y), theta));
    }

    System::new(particles)
}

/// Helper to build parameters matching `make_system`
fn make_params(n: usize, l: f64, m: usize) -> Parameters {
    Parameters {
        n,
        l,
        v: 0.03,
        eta: 0.1,
        r: 1.0,
        steps: 0,
        save_every: 1,
        m,
        seed: Some(42),
    }
}

/// Time one accumulate pass of each finder for a range of system sizes
pub fn bench_finders() {
    // Different system sizes to test
    let ns = [200, 400, 800, 1600, 3200, 6400];

    for n in ns {
        // Domain scaled so density stays constant; m chosen so the cell
        // side equals the interaction radius
        let l = (n as f64 / 4.0).sqrt();
        let m = (l / 1.0).floor().max(1.0) as usize;
        let params = make_params(n, l, m);
        let sys_template = make_system(n, l);

        // Set up the two strategies
        let mut brute = BruteForceFinder;
        let mut cim = CellIndexFinder::new(&params);

        // Warm up
        let mut sys_warm = sys_template.clone();
        brute.accumulate(&mut sys_warm, &params);
        let mut sys_warm = sys_template.clone();
        cim.accumulate(&mut sys_warm, &params);

        // Time brute force
        let mut sys_brute = sys_template.clone();
        let t0 = Instant::now();
        brute.accumulate(&mut sys_brute, &params);
        let dt_brute = t0.elapsed().as_secs_f64();

        // Time cell-index
        let mut sys_cim = sys_template.clone();
        let t1 = Instant::now();
        cim.accumulate(&mut sys_cim, &params);
        let dt_cim = t1.elapsed().as_secs_f64();

        println!("N = {n:5}, brute = {:8.6} s, CIM = {:8.6} s", dt_brute, dt_cim);
    }
}

/// Benchmark full steps (accumulate + apply) for a range of n
/// Paste output directly into a spreadsheet to graph
pub fn bench_step_curve() {
    println!("N,brute_ms,cim_ms");

    for n in (200..=6400).step_by(200) {
        // Small n: average over a few steps to smooth noise
        // Large n: fewer steps to keep the brute-force side tolerable
        let steps = if n <= 1600 { 5 } else { 1 };

        let l = (n as f64 / 4.0).sqrt();
        let m = (l / 1.0).floor().max(1.0) as usize;
        let params = make_params(n, l, m);
        let sys_template = make_system(n, l);

        // Brute force
        let mut sys_brute = sys_template.clone();
        let mut brute = BruteForceFinder;
        let mut rng_brute = StdRng::seed_from_u64(42);

        let t0 = Instant::now();
        for _ in 0..steps {
            register_self_neighbors(&mut sys_brute);
            brute.accumulate(&mut sys_brute, &params);
            apply_update(&mut sys_brute, &params, &mut rng_brute).expect("brute step failed");
        }
        let ms_brute = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        // Cell-index
        let mut sys_cim = sys_template.clone();
        let mut cim = CellIndexFinder::new(&params);
        let mut rng_cim = StdRng::seed_from_u64(42);

        let t1 = Instant::now();
        for _ in 0..steps {
            register_self_neighbors(&mut sys_cim);
            cim.accumulate(&mut sys_cim, &params);
            apply_update(&mut sys_cim, &params, &mut rng_cim).expect("cim step failed");
        }
        let ms_cim = t1.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{:.6},{:.6}", n, ms_brute, ms_cim);
    }
}
