//! Build the runtime sandbox from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a `Scenario`:
//! - runtime controls (`Engine`)
//! - body state (`BodyStore`, seeded with any preset bodies)
//! - the active force law (`NewtonianGravity`)
//!
//! The scenario is inserted into Bevy as a `Resource`; input systems call
//! `place_body`/`reset`, the fixed-step system calls `step`.

use bevy::prelude::Resource;
use tracing::{debug, info};

use crate::configuration::config::{to_nvec2, ConfigError, ScenarioConfig};
use crate::simulation::engine::{Engine, PendingBody};
use crate::simulation::forces::NewtonianGravity;
use crate::simulation::integrator::euler_integrator;
use crate::simulation::states::{Body, BodyStore, NVec2};

#[derive(Resource, Debug, Clone, Default)]
pub struct Scenario {
    pub engine: Engine,
    pub system: BodyStore,
    pub gravity: NewtonianGravity,
}

impl Scenario {
    pub fn build_scenario(cfg: &ScenarioConfig) -> Result<Self, ConfigError> {
        // Bodies: map `BodyConfig` -> runtime `Body`
        let system = cfg
            .bodies
            .iter()
            .map(|bc| {
                Ok(Body::new(
                    to_nvec2("bodies[].x", &bc.x)?,
                    to_nvec2("bodies[].v", &bc.v)?,
                    bc.radius,
                    bc.m,
                ))
            })
            .collect::<Result<BodyStore, ConfigError>>()?;

        let p_cfg = &cfg.pending;
        let engine = Engine {
            pending: PendingBody {
                m: p_cfg.mass,
                radius: p_cfg.radius,
                v: to_nvec2("pending.velocity", &p_cfg.velocity)?,
            },
            running: p_cfg.running,
            delay_ms: p_cfg.delay_ms.max(1),
            mass_step: cfg.parameters.mass_step,
            velocity_step: cfg.parameters.velocity_step,
        };

        let gravity = NewtonianGravity {
            G: cfg.parameters.G,
        };

        Ok(Self {
            engine,
            system,
            gravity,
        })
    }

    /// Add a body at `x` using the current pending template.
    /// Returns the new body count.
    pub fn place_body(&mut self, x: NVec2) -> usize {
        let PendingBody { m, radius, v } = self.engine.pending.clone();
        self.system.add(x, v, radius, m);
        let count = self.system.len();
        info!("Body {count} with mass {m} kg and radius {radius} m added.");
        count
    }

    /// Remove all bodies
    pub fn reset(&mut self) {
        let removed = self.system.len();
        self.system.clear();
        info!("All {removed} bodies removed.");
    }

    /// Advance one frame if running. Returns whether anything moved.
    pub fn step(&mut self) -> bool {
        if !self.engine.running {
            return false;
        }
        euler_integrator(&mut self.system, &self.gravity);
        debug!(bodies = self.system.len(), "step");
        true
    }
}
