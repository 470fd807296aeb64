use glam::DVec3;
use serde::{Deserialize, Serialize};

/// One bubble slot in the pool.
///
/// Liveness is derived, not flagged: a particle is dead once `age >=
/// lifespan`, and dead slots are what the emitter recycles. Slots start dead
/// (`age == lifespan`) so the first update may legally spawn them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub position: DVec3,
    pub velocity: DVec3,
    /// Visual scale, 1 at spawn shrinking to 0 at end of life
    pub scale: f64,
    /// Seconds since spawn
    pub age: f64,
    /// Seconds this particle lives after spawning
    pub lifespan: f64,
}

impl Particle {
    /// A dead slot, eligible for respawn on the next emission
    pub fn dead(lifespan: f64) -> Self {
        Self {
            position: DVec3::ZERO,
            velocity: DVec3::ZERO,
            scale: 0.0,
            age: lifespan,
            lifespan,
        }
    }

    pub fn is_dead(&self) -> bool {
        self.age >= self.lifespan
    }

    /// Fractional progress through the lifespan, clamped to [0, 1]
    pub fn life_pct(&self) -> f64 {
        (self.age / self.lifespan).min(1.0)
    }
}
