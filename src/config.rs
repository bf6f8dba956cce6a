//! Swarm configuration.
//!
//! Every tunable of the simulation lives in [`SwarmConfig`]. Defaults are the
//! classic flocking values; override them with the `with_*` builder methods or load a
//! partial JSON file where missing keys fall back to defaults.
//!
//! ```
//! use boids::{NeighborPolicy, SwarmConfig};
//!
//! let config = SwarmConfig::default()
//!     .with_canvas(1024.0, 768.0)
//!     .with_sight_radius(60.0)
//!     .with_neighbor_policy(NeighborPolicy::Snapshot);
//! assert!(config.validate().is_ok());
//! ```

use crate::error::ConfigError;
use crate::neighborhood::Perception;
use crate::visuals::Palette;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// What an agent sees of agents updated earlier in the same tick.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NeighborPolicy {
    /// Agents are updated in insertion order against the live collection, so
    /// later agents perceive earlier agents' post-update state.
    #[default]
    Live,
    /// Every agent perceives the pre-tick state of the whole flock.
    Snapshot,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwarmConfig {
    /// Seed for spawn positions and color draws.
    pub seed: u64,
    /// Canvas width in world units; agents bounce off `x = 0` and `x = width`.
    pub width: f32,
    /// Canvas height in world units.
    pub height: f32,
    /// Maximum distance (inclusive) at which an agent perceives another.
    pub sight_radius: f32,
    /// Distance (exclusive) under which separation kicks in.
    pub comfort_radius: f32,
    /// Magnitude of every seek force (cohesion and target).
    pub speed: f32,
    /// Per-tick velocity damping factor.
    pub friction: f32,
    /// Fraction of the velocity gap to the neighbors' mean closed each tick.
    pub cooperation: f32,
    /// Floor applied to neighbor distance in the separation term.
    pub min_separation_distance: f32,
    /// Agents spawned at random positions when the swarm is built.
    pub initial_population: usize,
    /// Color slots available to agents.
    pub palette: Palette,
    /// Agents removed by one [`Swarm::remove_batch`](crate::Swarm::remove_batch).
    pub removal_batch: usize,
    /// Removal only happens when at least this many agents are alive.
    pub removal_floor: usize,
    /// Read policy used by [`Swarm::tick`](crate::Swarm::tick).
    pub neighbor_policy: NeighborPolicy,
}

impl Default for SwarmConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            width: 800.0,
            height: 600.0,
            sight_radius: 80.0,
            comfort_radius: 20.0,
            speed: 0.1,
            friction: 0.97,
            cooperation: 0.1,
            min_separation_distance: 1.0,
            initial_population: 7,
            palette: Palette::default(),
            removal_batch: 3,
            removal_floor: 3,
            neighbor_policy: NeighborPolicy::Live,
        }
    }
}

impl SwarmConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the canvas size.
    pub fn with_canvas(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_sight_radius(mut self, radius: f32) -> Self {
        self.sight_radius = radius;
        self
    }

    pub fn with_comfort_radius(mut self, radius: f32) -> Self {
        self.comfort_radius = radius;
        self
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_friction(mut self, friction: f32) -> Self {
        self.friction = friction;
        self
    }

    pub fn with_cooperation(mut self, cooperation: f32) -> Self {
        self.cooperation = cooperation;
        self
    }

    pub fn with_min_separation_distance(mut self, distance: f32) -> Self {
        self.min_separation_distance = distance;
        self
    }

    pub fn with_initial_population(mut self, count: usize) -> Self {
        self.initial_population = count;
        self
    }

    pub fn with_palette(mut self, palette: impl Into<Palette>) -> Self {
        self.palette = palette.into();
        self
    }

    /// Set how many agents one batch removal takes and the population
    /// required before it is allowed.
    pub fn with_removal(mut self, batch: usize, floor: usize) -> Self {
        self.removal_batch = batch;
        self.removal_floor = floor;
        self
    }

    pub fn with_neighbor_policy(mut self, policy: NeighborPolicy) -> Self {
        self.neighbor_policy = policy;
        self
    }

    /// Parse a JSON config and validate it.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = |v: f32| v.is_finite() && v > 0.0;
        let non_negative = |v: f32| v.is_finite() && v >= 0.0;

        if !(positive(self.width) && positive(self.height)) {
            return Err(ConfigError::InvalidCanvas {
                width: self.width,
                height: self.height,
            });
        }
        if !non_negative(self.sight_radius) {
            return Err(ConfigError::InvalidSightRadius(self.sight_radius));
        }
        if !(non_negative(self.comfort_radius) && self.comfort_radius <= self.sight_radius) {
            return Err(ConfigError::InvalidComfortRadius(self.comfort_radius));
        }
        if !non_negative(self.speed) {
            return Err(ConfigError::InvalidSpeed(self.speed));
        }
        if !(self.friction.is_finite() && (0.0..=1.0).contains(&self.friction)) {
            return Err(ConfigError::InvalidFriction(self.friction));
        }
        if !non_negative(self.cooperation) {
            return Err(ConfigError::InvalidCooperation(self.cooperation));
        }
        if !positive(self.min_separation_distance) {
            return Err(ConfigError::InvalidSeparationClamp(self.min_separation_distance));
        }
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        if self.removal_batch == 0 {
            return Err(ConfigError::InvalidRemovalBatch);
        }
        if self.removal_floor < self.removal_batch {
            return Err(ConfigError::InvalidRemovalFloor {
                floor: self.removal_floor,
                batch: self.removal_batch,
            });
        }
        Ok(())
    }

    pub(crate) fn perception(&self) -> Perception {
        Perception {
            sight_radius: self.sight_radius,
            comfort_radius: self.comfort_radius,
            min_separation_distance: self.min_separation_distance,
            palette_size: self.palette.len(),
        }
    }
}
