use glam::DVec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::constants::bubbles;
use crate::error::{WavefieldError, WavefieldResult};
use crate::particles::particle::Particle;

/// Spawn parameters for a bubble pool
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PoolConfig {
    /// Number of particle slots, fixed for the pool's lifetime
    pub capacity: u32,
    /// Spawn events per second, converted to discrete spawns by the
    /// fractional emission accumulator
    pub emission_rate: f64,
    /// Half-range of the horizontal spawn band: x is uniform in
    /// [-spawn_width, spawn_width]
    pub spawn_width: f64,
    /// Fixed y at spawn
    pub spawn_height: f64,
    /// Fixed upward velocity at spawn
    pub rise_speed: f64,
    /// Half-range of the random horizontal velocity
    pub drift_speed: f64,
    /// Mean lifespan, seconds
    pub base_lifespan: f64,
    /// Uniform lifespan jitter: lifespan is base ± jitter
    pub lifespan_jitter: f64,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self::for_capacity(bubbles::DEFAULT_CAPACITY)
    }
}

impl PoolConfig {
    /// Reference configuration for `capacity` slots, emitting
    /// capacity / 7 particles per second
    pub fn for_capacity(capacity: u32) -> Self {
        Self {
            capacity,
            emission_rate: capacity as f64 / bubbles::EMISSION_DIVISOR,
            spawn_width: bubbles::SPAWN_WIDTH,
            spawn_height: bubbles::SPAWN_HEIGHT,
            rise_speed: bubbles::RISE_SPEED,
            drift_speed: bubbles::DRIFT_SPEED,
            base_lifespan: bubbles::BASE_LIFESPAN,
            lifespan_jitter: bubbles::LIFESPAN_JITTER,
        }
    }

    /// Check the invariants the update loop relies on
    pub fn validate(&self) -> WavefieldResult<()> {
        let invalid = |field: &str| WavefieldError::InvalidPoolConfig {
            field: field.to_string(),
        };
        if self.capacity == 0 {
            return Err(invalid("capacity must be positive"));
        }
        if !(self.emission_rate.is_finite() && self.emission_rate >= 0.0) {
            return Err(invalid("emission_rate must be finite and non-negative"));
        }
        if !(self.base_lifespan > 0.0) {
            return Err(invalid("base_lifespan must be positive"));
        }
        if self.lifespan_jitter < 0.0 || self.lifespan_jitter >= self.base_lifespan {
            return Err(invalid("lifespan_jitter must be in [0, base_lifespan)"));
        }
        Ok(())
    }
}

/// Fixed-capacity bubble pool with spawn/advance/recycle semantics.
///
/// Slot storage is allocated once at construction; spawning recycles the
/// first dead slot in index order. When every slot is alive, spawn requests
/// are dropped for that tick and the fractional accumulator keeps its value,
/// so dropped spawns are not replayed later. That is deliberate backpressure
/// under saturation, not an error.
pub struct ParticlePool {
    particles: Vec<Particle>,
    config: PoolConfig,
    accumulator: f64,
    rng: StdRng,
}

impl ParticlePool {
    /// Pool with reference spawn parameters and an OS-seeded RNG
    pub fn new(capacity: u32, emission_rate: f64) -> Self {
        let config = PoolConfig {
            capacity,
            emission_rate,
            ..PoolConfig::for_capacity(capacity)
        };
        Self::from_parts(config, StdRng::from_entropy())
    }

    /// Fully configured pool with a deterministic RNG seed
    pub fn with_config(config: PoolConfig, seed: u64) -> WavefieldResult<Self> {
        config.validate()?;
        Ok(Self::from_parts(config, StdRng::seed_from_u64(seed)))
    }

    fn from_parts(config: PoolConfig, rng: StdRng) -> Self {
        let particles = vec![Particle::dead(config.base_lifespan); config.capacity as usize];
        Self {
            particles,
            config,
            accumulator: 0.0,
            rng,
        }
    }

    /// Advance the pool by `dt` seconds: emit owed spawns, then integrate
    /// every slot.
    pub fn update(&mut self, dt: f64) {
        self.accumulator += self.config.emission_rate * dt;
        while self.accumulator >= 1.0 {
            match self.particles.iter().position(Particle::is_dead) {
                Some(slot) => {
                    self.spawn(slot);
                    self.accumulator -= 1.0;
                }
                None => {
                    log::trace!(
                        "pool saturated, dropping spawn (accumulator {:.2})",
                        self.accumulator
                    );
                    break;
                }
            }
        }

        // Dead slots advance too; their life_pct stays pinned at 1 and their
        // scale at 0, which renders them invisibly.
        for p in &mut self.particles {
            let life_pct = p.life_pct();
            p.age += dt;
            p.scale = 1.0 - life_pct;
            p.position += p.velocity * dt;
        }
    }

    fn spawn(&mut self, slot: usize) {
        let cfg = self.config;
        let x = self.rng.gen_range(-cfg.spawn_width..=cfg.spawn_width);
        let vx = self.rng.gen_range(-cfg.drift_speed..=cfg.drift_speed);
        let jitter = cfg.lifespan_jitter * self.rng.gen_range(-1.0..=1.0);

        let p = &mut self.particles[slot];
        p.position = DVec3::new(x, cfg.spawn_height, 0.0);
        p.velocity = DVec3::new(vx, cfg.rise_speed, 0.0);
        p.scale = 1.0;
        p.age = 0.0;
        p.lifespan = cfg.base_lifespan + jitter;
    }

    /// All slots, in index order, dead ones included
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn capacity(&self) -> usize {
        self.particles.len()
    }

    /// Number of slots currently alive
    pub fn alive_count(&self) -> usize {
        self.particles.iter().filter(|p| !p.is_dead()).count()
    }

    /// Fractional spawns owed but not yet emitted
    pub fn pending_emission(&self) -> f64 {
        self.accumulator
    }

    pub fn config(&self) -> &PoolConfig {
        &self.config
    }
}
