//! World position value object
//!
//! Coordinates are opaque to the core beyond distance comparison: the engine
//! records positions reported by the presentation layer and never runs
//! spatial queries of its own. The distance helpers exist for the caller's
//! proximity checks against the configured trigger radius.

use serde::{Deserialize, Serialize};

/// A point in world space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Position {
    /// Where the player appears in every dimension at level start / reset
    pub const DEFAULT_SPAWN: Position = Position::new(0.0, 1.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance to another position
    pub fn distance(&self, other: &Position) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// True when `other` lies within `radius` of this position
    pub fn within(&self, other: &Position, radius: f32) -> bool {
        self.distance(other) <= radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        let a = Position::new(0.0, 0.0, 0.0);
        let b = Position::new(3.0, 4.0, 0.0);
        assert!((a.distance(&b) - 5.0).abs() < f32::EPSILON);
    }

    #[test]
    fn within_is_inclusive_at_the_boundary() {
        let a = Position::new(0.0, 0.0, 0.0);
        let b = Position::new(1.5, 0.0, 0.0);
        assert!(a.within(&b, 1.5));
        assert!(!a.within(&b, 1.4));
    }

    #[test]
    fn spawn_point_matches_reference_layout() {
        assert_eq!(Position::DEFAULT_SPAWN, Position::new(0.0, 1.0, 0.0));
    }
}
