//! Crate error handling
//!
//! The numeric core never fails: segment counts are clamped, degenerate
//! normals fall back to +Y, and saturated emission drops spawns silently.
//! Errors exist only at the validation boundary where callers hand in
//! dimensions or pool configuration.

/// Errors raised when validating caller-supplied parameters
#[derive(Debug, thiserror::Error)]
pub enum WavefieldError {
    #[error("invalid grid dimensions {width} x {height}: both must be positive and finite")]
    InvalidDimensions { width: f64, height: f64 },

    #[error("invalid pool configuration: {field}")]
    InvalidPoolConfig { field: String },
}

/// Type alias for wavefield operation results
pub type WavefieldResult<T> = Result<T, WavefieldError>;
