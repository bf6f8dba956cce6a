//! Local swarm perception.
//!
//! A [`Neighborhood`] is what one agent sees during a tick: every agent
//! (itself included) within the sight radius, reduced to the sums the
//! steering rules need plus a per-color tally.

use crate::agent::Agent;
use glam::Vec2;

/// Result of scanning a flock from one agent's point of view.
#[derive(Debug, Clone)]
pub struct Neighborhood {
    /// Number of agents in sight, self included.
    pub visible: usize,
    /// Sum of positions of the other agents in sight.
    position_sum: Vec2,
    /// Sum of velocities of the other agents in sight.
    velocity_sum: Vec2,
    /// Accumulated inverse-square repulsion from agents inside the comfort zone.
    pub separation: Vec2,
    /// Agents in sight per palette slot, self included.
    pub tally: Vec<usize>,
}

/// Radii and limits used while scanning.
#[derive(Debug, Clone, Copy)]
pub struct Perception {
    pub sight_radius: f32,
    pub comfort_radius: f32,
    pub min_separation_distance: f32,
    pub palette_size: usize,
}

impl Neighborhood {
    /// Scan `flock` around `me`.
    ///
    /// `me` is counted through `self_index` rather than by comparing
    /// positions, so an agent that shares its exact position with another is
    /// still treated as a neighbor.
    pub fn scan(me: &Agent, self_index: usize, flock: &[Agent], perception: &Perception) -> Self {
        let mut hood = Self {
            visible: 1,
            position_sum: Vec2::ZERO,
            velocity_sum: Vec2::ZERO,
            separation: Vec2::ZERO,
            tally: vec![0; perception.palette_size],
        };
        hood.count_color(me.color_index());

        for (i, other) in flock.iter().enumerate() {
            if i == self_index {
                continue;
            }
            let distance = me.position().distance(other.position());
            if distance > perception.sight_radius {
                continue;
            }

            hood.visible += 1;
            hood.position_sum += other.position();
            hood.velocity_sum += other.velocity();
            hood.count_color(other.color_index());

            if distance < perception.comfort_radius {
                hood.separation += crate::rules::repulsion(
                    me.position(),
                    other.position(),
                    perception.min_separation_distance,
                );
            }
        }

        hood
    }

    fn count_color(&mut self, index: usize) {
        if let Some(slot) = self.tally.get_mut(index) {
            *slot += 1;
        }
    }

    /// Number of other agents in sight.
    #[inline]
    pub fn others(&self) -> usize {
        self.visible - 1
    }

    /// Mean position of the other agents in sight.
    pub fn centroid(&self) -> Option<Vec2> {
        (self.others() > 0).then(|| self.position_sum / self.others() as f32)
    }

    /// Mean velocity of the other agents in sight.
    pub fn mean_velocity(&self) -> Option<Vec2> {
        (self.others() > 0).then(|| self.velocity_sum / self.others() as f32)
    }

    /// Majority color vote.
    ///
    /// Starts from `current` and walks palette slots in ascending order,
    /// switching only on a strictly greater count. Ties keep whatever is
    /// already held.
    pub fn vote(&self, current: usize) -> usize {
        let mut best = current;
        let mut best_count = self.tally.get(current).copied().unwrap_or(0);
        for (index, &count) in self.tally.iter().enumerate() {
            if count > best_count {
                best = index;
                best_count = count;
            }
        }
        best
    }
}
