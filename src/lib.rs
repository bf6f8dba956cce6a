//! # boids - 2D flocking simulation
//!
//! A population of agents moving on a bounded plane, each steering only from
//! what it sees within its sight radius.
//!
//! ## Quick Start
//!
//! ```
//! use boids::prelude::*;
//!
//! let mut swarm = Swarm::new(SwarmConfig::default()).unwrap();
//! swarm.add_agent(120.0, 80.0);
//! swarm.set_target(400.0, 300.0);
//!
//! for _ in 0..60 {
//!     swarm.tick();
//! }
//! assert_eq!(swarm.len(), 8);
//! ```
//!
//! ## Core Concepts
//!
//! ### Agents
//!
//! An [`Agent`] has a position, a velocity and a palette color index. Each
//! tick it, in order:
//!
//! 1. scans the flock for neighbors within `sight_radius` (self included)
//! 2. adopts the majority color of that neighborhood
//! 3. sums cohesion, separation, alignment and target seek into its velocity
//! 4. integrates its position
//! 5. bounces off the canvas walls, per axis
//! 6. applies friction
//!
//! ### Swarm
//!
//! A [`Swarm`] owns the agents in insertion order plus an optional target.
//! [`Swarm::tick`] updates every agent once. Whether later agents see the
//! already-updated state of earlier ones is the [`NeighborPolicy`].
//!
//! ## Rules
//!
//! | Rule | Force |
//! |------|-------|
//! | Cohesion | seek toward the centroid of the other neighbors |
//! | Separation | `-(other - self) / (d² / 4)` for neighbors closer than `comfort_radius` |
//! | Alignment | `(mean neighbor velocity - velocity) * cooperation` |
//! | Target | `normalize(target - position) * speed` |
//!
//! ## Determinism
//!
//! Randomness only enters through the seeded [`Spawner`]. Two swarms built
//! from the same [`SwarmConfig`] and driven by the same calls are identical.

pub mod agent;
pub mod config;
pub mod error;
pub mod input;
pub mod neighborhood;
pub mod rules;
pub mod spawn;
pub mod swarm;
pub mod time;
pub mod visuals;

pub use agent::Agent;
pub use config::{NeighborPolicy, SwarmConfig};
pub use error::ConfigError;
pub use glam::{Vec2, Vec3};
pub use input::{Command, Controls};
pub use neighborhood::Neighborhood;
pub use spawn::Spawner;
pub use swarm::Swarm;
pub use time::Time;
pub use visuals::{AgentInstance, Palette, PalettePreset};

/// Convenient re-exports for common usage.
///
/// ```
/// use boids::prelude::*;
/// ```
pub mod prelude {
    pub use crate::agent::Agent;
    pub use crate::config::{NeighborPolicy, SwarmConfig};
    pub use crate::error::ConfigError;
    pub use crate::input::{Command, Controls};
    pub use crate::swarm::Swarm;
    pub use crate::time::Time;
    pub use crate::visuals::{AgentInstance, Palette, PalettePreset};
    pub use crate::{Vec2, Vec3};
}
