//! Fixed-step explicit Euler integrator for the n-body sandbox
//!
//! One call is one frame: the timestep is implicitly 1.

use super::forces::Acceleration;
use super::states::BodyStore;

/// Advance every body by one frame, in place and in store order.
///
/// Each body sums the pull of all the others as they are *right now*, then
/// immediately updates its own acceleration, velocity and position. Bodies
/// later in the sweep therefore see the already-moved positions of earlier
/// ones (Gauss-Seidel style), not a snapshot of the frame start.
pub fn euler_integrator<F: Acceleration + ?Sized>(store: &mut BodyStore, forces: &F) {
    let bodies = store.bodies_mut();
    let n = bodies.len();
    if n == 0 { // no bodies, return
        return;
    }

    // A lone body feels nothing but still drifts with its own velocity
    for i in 0..n {
        let a = forces.accumulate(i, bodies);

        let b = &mut bodies[i];
        b.a = a;
        // v_n+1 = v_n + a_n
        b.v += a;
        // x_n+1 = x_n + v_n+1
        b.x += b.v;
    }
}
