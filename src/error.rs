//! Error types for boids.
//!
//! The simulation itself has no failure surface; numeric edge cases are
//! absorbed by the steering rules. What can fail is loading and validating a
//! [`SwarmConfig`](crate::SwarmConfig).

use thiserror::Error;

/// Errors raised while reading or validating a swarm configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the config file from disk.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    /// The file is not valid config JSON.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("canvas width and height must be positive and finite (got {width} x {height})")]
    InvalidCanvas { width: f32, height: f32 },
    #[error("sight_radius must be non-negative and finite (got {0})")]
    InvalidSightRadius(f32),
    #[error("comfort_radius must be non-negative, finite and no larger than sight_radius (got {0})")]
    InvalidComfortRadius(f32),
    #[error("speed must be non-negative and finite (got {0})")]
    InvalidSpeed(f32),
    #[error("friction must be within [0, 1] (got {0})")]
    InvalidFriction(f32),
    #[error("cooperation must be non-negative and finite (got {0})")]
    InvalidCooperation(f32),
    #[error("min_separation_distance must be positive and finite (got {0})")]
    InvalidSeparationClamp(f32),
    #[error("palette must contain at least one color")]
    EmptyPalette,
    #[error("removal_batch must be at least 1")]
    InvalidRemovalBatch,
    #[error("removal_floor ({floor}) must be at least removal_batch ({batch})")]
    InvalidRemovalFloor { floor: usize, batch: usize },
}
