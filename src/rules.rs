//! Steering rules for flocking agents.
//!
//! Each rule turns a piece of the local neighborhood into a velocity change.
//! They are summed into the agent's velocity once per tick:
//!
//! - **Cohesion**: seek toward the centroid of the other neighbors
//! - **Separation**: inverse-square push away from neighbors inside the comfort zone
//! - **Alignment**: nudge velocity toward the neighbors' mean velocity
//! - **Target seek**: unit vector toward a point, scaled by speed
//!
//! All vector math here is by value on [`Vec2`]; nothing is mutated in place.

use glam::Vec2;

/// Unit-length direction of `v`, or [`Vec2::ZERO`] if `v` has no length.
#[inline]
pub fn direction(v: Vec2) -> Vec2 {
    v.normalize_or_zero()
}

/// Seek from `position` toward `target` at the given speed.
///
/// Returns the zero vector when the two points coincide.
///
/// ```
/// use boids::rules::seek;
/// use glam::Vec2;
///
/// let force = seek(Vec2::ZERO, Vec2::new(100.0, 0.0), 0.1);
/// assert!((force.x - 0.1).abs() < 1e-6);
/// ```
#[inline]
pub fn seek(position: Vec2, target: Vec2, speed: f32) -> Vec2 {
    direction(target - position) * speed
}

/// Cohesion: seek toward `centroid`, the mean position of the other neighbors.
///
/// `None` means the agent sees nobody but itself and contributes nothing.
pub fn cohesion(position: Vec2, centroid: Option<Vec2>, speed: f32) -> Vec2 {
    match centroid {
        Some(c) => seek(position, c, speed),
        None => Vec2::ZERO,
    }
}

/// Repulsion exerted on `position` by one neighbor at `other`.
///
/// The contribution is `-(other - position) / (d² / 4)`, where `d` is the
/// distance clamped from below to `min_distance`.
pub fn repulsion(position: Vec2, other: Vec2, min_distance: f32) -> Vec2 {
    let offset = other - position;
    let d = offset.length().max(min_distance);
    -offset / (d * d / 4.0)
}

/// Alignment: bring `velocity` part of the way toward the neighbors' mean.
///
/// Returns zero when there are no other neighbors.
pub fn alignment(velocity: Vec2, mean_velocity: Option<Vec2>, cooperation: f32) -> Vec2 {
    match mean_velocity {
        Some(mean) => (mean - velocity) * cooperation,
        None => Vec2::ZERO,
    }
}

/// Target seek. Absent target means the term is left out entirely.
pub fn target_seek(position: Vec2, target: Option<Vec2>, speed: f32) -> Option<Vec2> {
    target.map(|t| seek(position, t, speed))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn test_seek_is_unit_scaled() {
        let force = seek(Vec2::new(10.0, 10.0), Vec2::new(13.0, 14.0), 0.5);
        assert!((force.length() - 0.5).abs() < EPS);
        assert!((force.x - 0.3).abs() < EPS);
        assert!((force.y - 0.4).abs() < EPS);
    }

    #[test]
    fn test_seek_at_target_is_zero() {
        let p = Vec2::new(42.0, 7.0);
        assert_eq!(seek(p, p, 0.1), Vec2::ZERO);
    }

    #[test]
    fn test_cohesion_without_neighbors() {
        assert_eq!(cohesion(Vec2::new(5.0, 5.0), None, 0.1), Vec2::ZERO);
    }

    #[test]
    fn test_repulsion_points_away() {
        let force = repulsion(Vec2::ZERO, Vec2::new(10.0, 0.0), 1.0);
        // -(10, 0) / (100 / 4)
        assert!((force.x + 0.4).abs() < EPS);
        assert!(force.y.abs() < EPS);
    }

    #[test]
    fn test_repulsion_clamps_tiny_distance() {
        let force = repulsion(Vec2::ZERO, Vec2::new(0.001, 0.0), 1.0);
        assert!(force.is_finite());
        // offset 0.001 over clamped d² / 4 = 0.25
        assert!((force.x + 0.004).abs() < EPS);
    }

    #[test]
    fn test_repulsion_coincident_is_zero() {
        let p = Vec2::new(3.0, 3.0);
        assert_eq!(repulsion(p, p, 1.0), Vec2::ZERO);
    }

    #[test]
    fn test_alignment() {
        let force = alignment(Vec2::new(1.0, 0.0), Some(Vec2::new(0.0, 1.0)), 0.1);
        assert!((force.x + 0.1).abs() < EPS);
        assert!((force.y - 0.1).abs() < EPS);
        assert_eq!(alignment(Vec2::new(1.0, 0.0), None, 0.1), Vec2::ZERO);
    }

    #[test]
    fn test_target_seek_absent() {
        assert!(target_seek(Vec2::ZERO, None, 0.1).is_none());
        let f = target_seek(Vec2::ZERO, Some(Vec2::new(0.0, -3.0)), 0.1).unwrap();
        assert!((f.y + 0.1).abs() < EPS);
    }
}
