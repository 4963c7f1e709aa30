//! Cube corner points

use glam::Vec3;

/// A labeled corner of the cube
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    position: Vec3,
}

impl Node {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            position: Vec3::new(x, y, z),
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }
}

impl From<Vec3> for Node {
    fn from(position: Vec3) -> Self {
        Self { position }
    }
}
