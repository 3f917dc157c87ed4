//! Pairwise acceleration sources for the n-body sandbox
//!
//! The integrator asks an [`Acceleration`] for the pull of one body on
//! another and sums those itself, so a source only ever sees two bodies.

use crate::simulation::states::{Body, NVec2};

/// Gravitational constant in sandbox units (1 pixel = 1 meter, 1 step = 1 second)
pub const G: f64 = 6.67e-11;

/// Trait for acceleration sources acting between two bodies
pub trait Acceleration {
    /// Acceleration felt by `body` because of `other`
    fn acceleration(&self, body: &Body, other: &Body) -> NVec2;

    /// Sum of contributions on `bodies[i]` from every other entry.
    /// Entries are told apart by index, never by value, so identical
    /// bodies still act on each other.
    ///
    /// # Panics
    /// If `i` is not a valid index into `bodies`.
    fn accumulate(&self, i: usize, bodies: &[Body]) -> NVec2 {
        let body = &bodies[i];
        bodies
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != i)
            .fold(NVec2::zeros(), |acc, (_, other)| {
                self.acceleration(body, other) + acc
            })
    }
}

/// Newtonian gravity with a hard closeness cutoff and no softening
///
/// Bodies closer than either radius do not pull on each other at all.
/// Otherwise the scalar `G * m / d^2` scales the raw separation vector
/// (not its unit direction), so the result has length `G * m / d`.
#[allow(non_snake_case)]
#[derive(Debug, Clone, Copy)]
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
}

impl Default for NewtonianGravity {
    fn default() -> Self {
        Self { G }
    }
}

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, body: &Body, other: &Body) -> NVec2 {
        // r points from body to other
        let r = other.x - body.x;
        let dist = r.norm();

        if dist < body.radius || dist < other.radius {
            return NVec2::zeros();
        }

        let a = self.G * (other.m as f64 / dist.powi(2));
        r * a
    }
}
