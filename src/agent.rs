//! Flocking agents.
//!
//! An [`Agent`] only ever changes itself. [`Agent::act`] reads the flock it
//! lives in and returns the agent's state for the next tick; the owning
//! [`Swarm`](crate::Swarm) decides when that state is written back.

use crate::config::SwarmConfig;
use crate::neighborhood::Neighborhood;
use crate::rules;
use glam::Vec2;

/// One flocking entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Agent {
    position: Vec2,
    velocity: Vec2,
    color_index: usize,
}

impl Agent {
    /// A motionless agent at `position` holding palette slot `color_index`.
    pub fn new(position: Vec2, color_index: usize) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            color_index,
        }
    }

    /// Replace the velocity. Mostly useful for seeding scenarios.
    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    #[inline]
    pub fn color_index(&self) -> usize {
        self.color_index
    }

    /// Heading in radians, measured from +x toward +y.
    #[inline]
    pub fn heading(&self) -> f32 {
        self.velocity.y.atan2(self.velocity.x)
    }

    /// Perceive `flock` and integrate one tick.
    ///
    /// `self_index` is this agent's slot in `flock`. The returned agent has
    /// its color voted, its velocity steered, its position integrated and
    /// reflected off the canvas walls, and friction applied, in that order.
    pub fn act(&self, self_index: usize, flock: &[Agent], target: Option<Vec2>, config: &SwarmConfig) -> Agent {
        let hood = Neighborhood::scan(self, self_index, flock, &config.perception());

        let mut next = *self;
        next.color_index = hood.vote(self.color_index);

        let mut steer = rules::cohesion(self.position, hood.centroid(), config.speed)
            + hood.separation
            + rules::alignment(self.velocity, hood.mean_velocity(), config.cooperation);
        if let Some(seek) = rules::target_seek(self.position, target, config.speed) {
            steer += seek;
        }

        next.velocity += steer;
        next.integrate();
        next.reflect(config.width, config.height);
        next.velocity *= config.friction;
        next
    }

    /// Euler step, one unit of time.
    fn integrate(&mut self) {
        self.position += self.velocity;
    }

    /// Per-axis wall bounce against `[0, width] x [0, height]`.
    ///
    /// An axis that left the canvas has that half of the step undone and its
    /// velocity component negated. The position is restored, not clamped.
    fn reflect(&mut self, width: f32, height: f32) {
        if self.position.x < 0.0 || self.position.x > width {
            self.position.x -= self.velocity.x;
            self.velocity.x = -self.velocity.x;
        }
        if self.position.y < 0.0 || self.position.y > height {
            self.position.y -= self.velocity.y;
            self.velocity.y = -self.velocity.y;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn config() -> SwarmConfig {
        SwarmConfig::default()
    }

    #[test]
    fn test_isolated_agent_stays_put() {
        let flock = vec![Agent::new(Vec2::new(400.0, 300.0), 0)];
        let next = flock[0].act(0, &flock, None, &config());
        assert_eq!(next.position(), Vec2::new(400.0, 300.0));
        assert_eq!(next.velocity(), Vec2::ZERO);
    }

    #[test]
    fn test_friction_only_when_alone() {
        let flock = vec![Agent::new(Vec2::new(100.0, 100.0), 0).with_velocity(Vec2::new(2.0, -1.0))];
        let next = flock[0].act(0, &flock, None, &config());
        assert!((next.position().x - 102.0).abs() < EPS);
        assert!((next.position().y - 99.0).abs() < EPS);
        assert!((next.velocity().x - 1.94).abs() < EPS);
        assert!((next.velocity().y + 0.97).abs() < EPS);
    }

    #[test]
    fn test_reflect_restores_position() {
        let cfg = config();
        let flock = vec![Agent::new(Vec2::new(cfg.width - 0.5, 50.0), 0).with_velocity(Vec2::new(5.0, 0.0))];
        let next = flock[0].act(0, &flock, None, &cfg);
        assert!((next.position().x - (cfg.width - 0.5)).abs() < EPS);
        assert!((next.velocity().x + 5.0 * cfg.friction).abs() < EPS);
    }

    #[test]
    fn test_reflect_axes_are_independent() {
        let cfg = config();
        let flock = vec![Agent::new(Vec2::new(10.0, 1.0), 0).with_velocity(Vec2::new(3.0, -2.0))];
        let next = flock[0].act(0, &flock, None, &cfg);
        // x stays inside, y crosses 0
        assert!((next.position().x - 13.0).abs() < EPS);
        assert!((next.position().y - 1.0).abs() < EPS);
        assert!((next.velocity().x - 3.0 * cfg.friction).abs() < EPS);
        assert!((next.velocity().y - 2.0 * cfg.friction).abs() < EPS);
    }

    #[test]
    fn test_target_seek_from_rest() {
        let flock = vec![Agent::new(Vec2::ZERO, 0)];
        let next = flock[0].act(0, &flock, Some(Vec2::new(100.0, 0.0)), &config());
        assert!((next.position().x - 0.1).abs() < EPS);
        assert!(next.position().y.abs() < EPS);
        assert!((next.velocity().x - 0.1 * 0.97).abs() < EPS);
    }

    #[test]
    fn test_act_does_not_touch_input() {
        let flock = vec![
            Agent::new(Vec2::new(100.0, 100.0), 0),
            Agent::new(Vec2::new(130.0, 100.0), 1),
        ];
        let before = flock.clone();
        let _ = flock[0].act(0, &flock, Some(Vec2::new(0.0, 0.0)), &config());
        assert_eq!(flock, before);
    }

    #[test]
    fn test_pair_steers_toward_each_other() {
        let flock = vec![
            Agent::new(Vec2::new(100.0, 100.0), 0),
            Agent::new(Vec2::new(150.0, 100.0), 0),
        ];
        let left = flock[0].act(0, &flock, None, &config());
        let right = flock[1].act(1, &flock, None, &config());
        assert!(left.velocity().x > 0.0);
        assert!(right.velocity().x < 0.0);
    }

    #[test]
    fn test_heading() {
        let a = Agent::new(Vec2::ZERO, 0).with_velocity(Vec2::new(0.0, 2.0));
        assert!((a.heading() - std::f32::consts::FRAC_PI_2).abs() < EPS);
    }
}
