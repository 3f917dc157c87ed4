use std::time::Instant;

use crate::simulation::forces::NewtonianGravity;
use crate::simulation::integrator::euler_integrator;
use crate::simulation::states::{BodyStore, NVec2};

/// Helper to build a store of size `n` spread over a 1000x800 screen
pub fn make_store(n: usize) -> BodyStore {
    let mut store = BodyStore::new();

    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed
        let x = NVec2::new(
            500.0 + (i_f * 0.37).sin() * 400.0,
            400.0 + (i_f * 0.13).cos() * 300.0,
        );
        store.add(x, NVec2::zeros(), 1.0, 1_000_000_000);
    }

    store
}

/// Time the all-pairs Euler step for a range of n.
/// Prints csv so the curve can be pasted into a spreadsheet.
pub fn bench_euler() {
    let ns = [200, 400, 800, 1600, 3200];
    let gravity = NewtonianGravity::default();

    println!("N,step_ms");

    for n in ns {
        // Small n: average over a few steps to smooth noise
        let steps = if n <= 800 { 5 } else { 1 };
        let mut store = make_store(n);

        // Warm up
        euler_integrator(&mut store, &gravity);

        let t0 = Instant::now();
        for _ in 0..steps {
            euler_integrator(&mut store, &gravity);
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{:.6}", n, ms);
    }
}
