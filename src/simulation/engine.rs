//! Runtime simulation controls
//!
//! Holds the pending template applied to newly placed bodies, the run/pause
//! flag and the frame delay. None of these touch bodies that already exist.

use tracing::info;

use super::states::NVec2;

pub const DEFAULT_MASS: u64 = 1_000_000_000;
pub const DEFAULT_RADIUS: f64 = 10.0;
pub const DEFAULT_DELAY_MS: u64 = 16;
pub const DEFAULT_MASS_STEP: u64 = 1_000_000_000;
pub const DEFAULT_VELOCITY_STEP: f64 = 0.1;

/// Template for the next body placed
#[derive(Debug, Clone, PartialEq)]
pub struct PendingBody {
    pub m: u64,
    pub radius: f64,
    pub v: NVec2,
}

impl Default for PendingBody {
    fn default() -> Self {
        Self {
            m: DEFAULT_MASS,
            radius: DEFAULT_RADIUS,
            v: NVec2::zeros(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Engine {
    pub pending: PendingBody,
    pub running: bool, // false = paused
    pub delay_ms: u64, // pacing delay between frames, never below 1
    pub mass_step: u64, // mass change per heavier/lighter
    pub velocity_step: f64, // velocity change per nudge
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            pending: PendingBody::default(),
            running: false,
            delay_ms: DEFAULT_DELAY_MS,
            mass_step: DEFAULT_MASS_STEP,
            velocity_step: DEFAULT_VELOCITY_STEP,
        }
    }
}

impl Engine {
    /// More mass, twice the radius
    pub fn heavier(&mut self) {
        self.pending.m = self.pending.m.saturating_add(self.mass_step);
        self.pending.radius *= 2.0;
        info!("Mass: {}, radius: {}", self.pending.m, self.pending.radius);
    }

    /// Less mass (never below zero), half the radius rounded toward zero
    /// (10, 5, 2, 1, 0). The radius halves even when the mass is already zero,
    /// and once it reaches zero `heavier` cannot grow it back.
    pub fn lighter(&mut self) {
        if self.pending.m > 0 {
            self.pending.m = self.pending.m.saturating_sub(self.mass_step);
        }
        self.pending.radius = (self.pending.radius / 2.0).trunc();
        info!("Mass: {}, radius: {}", self.pending.m, self.pending.radius);
    }

    /// Add one velocity step per unit of `(dx, dy)`; y grows downward on screen
    pub fn nudge_velocity(&mut self, dx: f64, dy: f64) {
        self.pending.v += NVec2::new(dx, dy) * self.velocity_step;
        info!("v0: ({:.3}, {:.3})", self.pending.v.x, self.pending.v.y);
    }

    pub fn slower(&mut self) {
        self.delay_ms += 1;
        info!("Delay: {}", self.delay_ms);
    }

    pub fn faster(&mut self) {
        if self.delay_ms > 1 {
            self.delay_ms -= 1;
        }
        info!("Delay: {}", self.delay_ms);
    }

    /// Flip run/pause, returns the new state
    pub fn toggle_running(&mut self) -> bool {
        self.running = !self.running;
        info!("{}", if self.running { "Start." } else { "Pause." });
        self.running
    }
}
