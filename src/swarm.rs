//! Population and target management.
//!
//! A [`Swarm`] owns the ordered agent collection, the optional shared target
//! and the seeded [`Spawner`]. One [`Swarm::tick`] runs every agent's
//! [`Agent::act`] exactly once, in insertion order.

use crate::agent::Agent;
use crate::config::{NeighborPolicy, SwarmConfig};
use crate::error::ConfigError;
use crate::spawn::Spawner;
use crate::visuals::{AgentInstance, Palette};
use glam::Vec2;
use log::{debug, trace, warn};
use rand::rngs::StdRng;

/// Simulation state: agents, target and configuration.
#[derive(Debug, Clone)]
pub struct Swarm {
    config: SwarmConfig,
    agents: Vec<Agent>,
    target: Option<Vec2>,
    spawner: Spawner,
    ticks: u64,
}

impl Swarm {
    /// Build the startup swarm: `initial_population` agents at random
    /// positions, each with a random color, and the target at canvas center.
    pub fn new(config: SwarmConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let spawner = Spawner::new(config.seed, config.width, config.height, config.palette.len());
        Ok(Self::populate(config, spawner))
    }

    /// Like [`Swarm::new`] but drawing from a caller-supplied RNG instead of
    /// `config.seed`.
    pub fn with_rng(config: SwarmConfig, rng: StdRng) -> Result<Self, ConfigError> {
        config.validate()?;
        let spawner = Spawner::from_rng(rng, config.width, config.height, config.palette.len());
        Ok(Self::populate(config, spawner))
    }

    /// A swarm with no agents and no target.
    pub fn empty(config: SwarmConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let spawner = Spawner::new(config.seed, config.width, config.height, config.palette.len());
        Ok(Self {
            config,
            agents: Vec::new(),
            target: None,
            spawner,
            ticks: 0,
        })
    }

    fn populate(config: SwarmConfig, mut spawner: Spawner) -> Self {
        let agents: Vec<Agent> = (0..config.initial_population)
            .map(|_| spawner.random_agent())
            .collect();
        let target = Some(Vec2::new(config.width / 2.0, config.height / 2.0));
        debug!(
            "swarm created: {} agents on {}x{} canvas, seed {}",
            agents.len(),
            config.width,
            config.height,
            config.seed
        );
        Self {
            config,
            agents,
            target,
            spawner,
            ticks: 0,
        }
    }

    // ========== Simulation ==========

    /// Advance one frame using the configured [`NeighborPolicy`].
    pub fn tick(&mut self) {
        self.tick_with(self.config.neighbor_policy);
    }

    /// Advance one frame with an explicit neighbor read policy.
    pub fn tick_with(&mut self, policy: NeighborPolicy) {
        match policy {
            NeighborPolicy::Live => {
                for i in 0..self.agents.len() {
                    let next = self.agents[i].act(i, &self.agents, self.target, &self.config);
                    self.agents[i] = next;
                }
            }
            NeighborPolicy::Snapshot => {
                let snapshot = self.agents.clone();
                for (i, agent) in snapshot.iter().enumerate() {
                    self.agents[i] = agent.act(i, &snapshot, self.target, &self.config);
                }
            }
        }
        self.ticks += 1;
        trace!("tick {} ({} agents, {:?})", self.ticks, self.agents.len(), policy);
    }

    // ========== Population ==========

    /// Append a new motionless agent at `(x, y)` with a random color.
    pub fn add_agent(&mut self, x: f32, y: f32) {
        let agent = self.spawner.agent_at(Vec2::new(x, y));
        debug!(
            "spawned agent at ({x}, {y}) with color {}, population {}",
            agent.color_index(),
            self.agents.len() + 1
        );
        self.agents.push(agent);
    }

    /// Append a prebuilt agent. Out-of-range color indices wrap into the palette.
    pub fn push(&mut self, agent: Agent) {
        let slots = self.config.palette.len();
        let agent = if agent.color_index() < slots {
            agent
        } else {
            Agent::new(agent.position(), agent.color_index() % slots).with_velocity(agent.velocity())
        };
        self.agents.push(agent);
    }

    /// Remove the `n` oldest agents, keeping the order of the survivors.
    ///
    /// Nothing happens when the population is below the configured removal
    /// floor or smaller than `n`. Returns how many agents were removed.
    pub fn remove_oldest(&mut self, n: usize) -> usize {
        let len = self.agents.len();
        if len < self.config.removal_floor || n > len {
            warn!(
                "refusing to remove {n} agents from a population of {len} (floor {})",
                self.config.removal_floor
            );
            return 0;
        }
        self.agents.drain(..n);
        debug!("removed {n} oldest agents, population {}", self.agents.len());
        n
    }

    /// Remove one configured batch of the oldest agents.
    pub fn remove_batch(&mut self) -> usize {
        self.remove_oldest(self.config.removal_batch)
    }

    /// Drop every agent. The target is kept.
    pub fn clear(&mut self) {
        debug!("cleared {} agents", self.agents.len());
        self.agents.clear();
    }

    // ========== Target ==========

    pub fn set_target(&mut self, x: f32, y: f32) {
        trace!("target set to ({x}, {y})");
        self.target = Some(Vec2::new(x, y));
    }

    pub fn clear_target(&mut self) {
        debug!("target cleared");
        self.target = None;
    }

    // ========== Queries ==========

    /// Agents in insertion order, oldest first.
    #[inline]
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    #[inline]
    pub fn target(&self) -> Option<Vec2> {
        self.target
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Ticks run since construction.
    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    #[inline]
    pub fn config(&self) -> &SwarmConfig {
        &self.config
    }

    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.config.palette
    }

    /// Number of agents holding each palette slot.
    pub fn color_counts(&self) -> Vec<usize> {
        let mut counts = vec![0; self.config.palette.len()];
        for agent in &self.agents {
            counts[agent.color_index()] += 1;
        }
        counts
    }

    /// Per-agent render records, in insertion order.
    pub fn instances(&self) -> Vec<AgentInstance> {
        self.agents
            .iter()
            .map(|a| AgentInstance::new(a, &self.config.palette))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty() -> Swarm {
        Swarm::empty(SwarmConfig::default()).unwrap()
    }

    #[test]
    fn test_startup_swarm() {
        let swarm = Swarm::new(SwarmConfig::default()).unwrap();
        assert_eq!(swarm.len(), 7);
        assert_eq!(swarm.target(), Some(Vec2::new(400.0, 300.0)));
        for agent in swarm.agents() {
            assert_eq!(agent.velocity(), Vec2::ZERO);
            assert!(agent.color_index() < swarm.palette().len());
            assert!((0.0..=800.0).contains(&agent.position().x));
            assert!((0.0..=600.0).contains(&agent.position().y));
        }
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = SwarmConfig::default().with_friction(2.0);
        assert!(matches!(Swarm::new(config), Err(ConfigError::InvalidFriction(_))));
    }

    #[test]
    fn test_same_seed_same_swarm() {
        let a = Swarm::new(SwarmConfig::default().with_seed(5)).unwrap();
        let b = Swarm::new(SwarmConfig::default().with_seed(5)).unwrap();
        assert_eq!(a.agents(), b.agents());
    }

    #[test]
    fn test_add_agent_appends() {
        let mut swarm = empty();
        swarm.add_agent(10.0, 20.0);
        swarm.add_agent(30.0, 40.0);
        assert_eq!(swarm.len(), 2);
        assert_eq!(swarm.agents()[1].position(), Vec2::new(30.0, 40.0));
        assert_eq!(swarm.agents()[1].velocity(), Vec2::ZERO);
    }

    #[test]
    fn test_remove_oldest_keeps_order() {
        let mut swarm = empty();
        for i in 0..6 {
            swarm.add_agent(i as f32 * 10.0, 0.0);
        }
        assert_eq!(swarm.remove_oldest(3), 3);
        let xs: Vec<f32> = swarm.agents().iter().map(|a| a.position().x).collect();
        assert_eq!(xs, vec![30.0, 40.0, 50.0]);
    }

    #[test]
    fn test_remove_more_than_present_is_noop() {
        let mut swarm = empty();
        for _ in 0..4 {
            swarm.add_agent(1.0, 1.0);
        }
        assert_eq!(swarm.remove_oldest(5), 0);
        assert_eq!(swarm.len(), 4);
    }

    #[test]
    fn test_configurable_removal() {
        let config = SwarmConfig::default().with_removal(2, 5);
        let mut swarm = Swarm::empty(config).unwrap();
        for _ in 0..4 {
            swarm.add_agent(1.0, 1.0);
        }
        assert_eq!(swarm.remove_batch(), 0);
        swarm.add_agent(1.0, 1.0);
        assert_eq!(swarm.remove_batch(), 2);
        assert_eq!(swarm.len(), 3);
    }

    #[test]
    fn test_target_control() {
        let mut swarm = empty();
        assert_eq!(swarm.target(), None);
        swarm.set_target(5.0, 6.0);
        assert_eq!(swarm.target(), Some(Vec2::new(5.0, 6.0)));
        swarm.clear_target();
        assert_eq!(swarm.target(), None);
    }

    #[test]
    fn test_push_wraps_color() {
        let mut swarm = empty();
        swarm.push(Agent::new(Vec2::ZERO, 7));
        assert_eq!(swarm.agents()[0].color_index(), 2);
    }

    #[test]
    fn test_tick_on_empty_swarm() {
        let mut swarm = empty();
        swarm.tick();
        swarm.tick_with(NeighborPolicy::Snapshot);
        assert!(swarm.is_empty());
        assert_eq!(swarm.ticks(), 2);
    }

    #[test]
    fn test_clear() {
        let mut swarm = Swarm::new(SwarmConfig::default()).unwrap();
        swarm.clear();
        assert!(swarm.is_empty());
        assert!(swarm.target().is_some());
    }

    #[test]
    fn test_color_counts_and_instances() {
        let mut swarm = empty();
        swarm.push(Agent::new(Vec2::ZERO, 1));
        swarm.push(Agent::new(Vec2::ONE, 1));
        swarm.push(Agent::new(Vec2::ONE, 4));
        assert_eq!(swarm.color_counts(), vec![0, 2, 0, 0, 1]);
        let instances = swarm.instances();
        assert_eq!(instances.len(), 3);
        assert_eq!(instances[2].color_index, 4);
    }

    #[test]
    fn test_live_and_snapshot_differ() {
        let build = || {
            let mut swarm = empty();
            swarm.push(Agent::new(Vec2::new(100.0, 100.0), 0));
            swarm.push(Agent::new(Vec2::new(140.0, 100.0), 0));
            swarm
        };
        let mut live = build();
        let mut snap = build();
        live.tick_with(NeighborPolicy::Live);
        snap.tick_with(NeighborPolicy::Snapshot);
        // first agent sees the same flock either way
        assert_eq!(live.agents()[0], snap.agents()[0]);
        assert_ne!(live.agents()[1], snap.agents()[1]);
    }
}
