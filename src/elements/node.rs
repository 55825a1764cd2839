//! Node element - represents a point in 3D space

use serde::{Deserialize, Serialize};

use crate::math::Vec3;

/// A 3D node of the frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
    /// Z coordinate
    pub z: f64,
}

impl Node {
    /// Create a new node at the given coordinates
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Get the coordinates as an array
    pub fn coords(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Position as a vector
    pub fn position(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Calculate distance to another node
    pub fn distance_to(&self, other: &Node) -> f64 {
        (other.position() - self.position()).norm()
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}
