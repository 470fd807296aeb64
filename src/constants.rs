// Wavefield constants - single source of truth.
//
// Do NOT define these defaults anywhere else in the crate; callers that want
// different values go through the config structs.

/// Surface generation and wave animation constants
pub mod surface {
    /// Minimum segment count per axis after clamping
    pub const MIN_SEGMENTS: u32 = 1;

    /// Amplitude applied to raw noise samples when displacing vertex height
    pub const HEIGHT_AMPLITUDE: f64 = 0.2;

    /// Amplitude of the per-vertex wave offset applied each animation tick
    pub const WAVE_AMPLITUDE: f64 = 0.2;

    /// Base per-vertex wave speed before the random spread is applied
    pub const PHASE_SPEED_BASE: f64 = 1.0;

    /// Half-width of the uniform spread around the base wave speed
    pub const PHASE_SPEED_SPREAD: f64 = 0.5;
}

/// Bubble pool defaults
pub mod bubbles {
    /// Default number of particle slots
    pub const DEFAULT_CAPACITY: u32 = 100;

    /// Default emission rate is capacity divided by this (particles/second)
    pub const EMISSION_DIVISOR: f64 = 7.0;

    /// Half-range of the horizontal spawn band, in world units
    pub const SPAWN_WIDTH: f64 = 10.0;

    /// Vertical spawn offset, below the surface
    pub const SPAWN_HEIGHT: f64 = -5.0;

    /// Fixed upward velocity at spawn
    pub const RISE_SPEED: f64 = 2.0;

    /// Half-range of the random horizontal drift velocity
    pub const DRIFT_SPEED: f64 = 0.6;

    /// Mean particle lifespan, seconds
    pub const BASE_LIFESPAN: f64 = 5.0;

    /// Uniform jitter applied to the base lifespan, seconds
    pub const LIFESPAN_JITTER: f64 = 2.0;
}
