//! Core state types for the n-body sandbox.
//!
//! - `Body`      one simulated mass, in screen units (1 pixel = 1 meter)
//! - `BodyStore` ordered collection of bodies, the only owner of body records
//!
//! Positions use screen convention: origin at the top-left, y grows downward.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub a: NVec2, // acceleration from the most recent step (display only)
    pub m: u64, // mass, may be zero
    pub radius: f64, // outline size and closeness cutoff
}

impl Body {
    pub fn new(x: NVec2, v: NVec2, radius: f64, m: u64) -> Self {
        Self {
            x,
            v,
            a: NVec2::zeros(),
            m,
            radius,
        }
    }
}

/// Bodies in insertion order.
///
/// Order only matters for rendering and for the order of the in-place
/// integrator sweep; it carries no identity of its own beyond the index.
#[derive(Debug, Clone, Default)]
pub struct BodyStore {
    bodies: Vec<Body>,
}

impl BodyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a body. No validation: zero mass, zero or negative radius and
    /// coincident positions are all accepted.
    pub fn add(&mut self, x: NVec2, v: NVec2, radius: f64, m: u64) {
        self.bodies.push(Body::new(x, v, radius, m));
    }

    /// Remove every body.
    pub fn clear(&mut self) {
        self.bodies.clear();
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Body> {
        self.bodies.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Body> {
        self.bodies.iter_mut()
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }
}

impl FromIterator<Body> for BodyStore {
    fn from_iter<I: IntoIterator<Item = Body>>(iter: I) -> Self {
        Self {
            bodies: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a BodyStore {
    type Item = &'a Body;
    type IntoIter = std::slice::Iter<'a, Body>;

    fn into_iter(self) -> Self::IntoIter {
        self.bodies.iter()
    }
}
