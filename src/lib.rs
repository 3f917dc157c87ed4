pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;
pub mod shutdown;

pub use simulation::states::{Body, BodyStore, NVec2};
pub use simulation::engine::{Engine, PendingBody};
pub use simulation::forces::{Acceleration, NewtonianGravity, G};
pub use simulation::integrator::euler_integrator;
pub use simulation::scenario::Scenario;

pub use configuration::config::{ConfigError, ParametersConfig, PendingConfig, ViewConfig, BodyConfig, ScenarioConfig};

pub use shutdown::QuitFlag;

pub use visualization::viewer2d::run_2d;

pub use benchmark::benchmark::bench_euler;
