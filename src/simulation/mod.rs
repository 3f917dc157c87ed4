pub mod states;
pub mod vector;
pub mod engine;
pub mod forces;
pub mod integrator;
pub mod scenario;
