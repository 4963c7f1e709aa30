//! Cylinder edges joining two corners
//!
//! An edge is described in the cylinder's own terms: a canonical cylinder
//! stands along +Y centered on the origin, so placing it needs a length, a
//! center (the midpoint of the endpoints) and the rotation taking +Y onto the
//! edge direction.

use glam::{Quat, Vec3};

use crate::color::Rgb;
use crate::node::Node;

/// Cylinder radius shared by every edge
pub const EDGE_RADIUS: f32 = 0.02;

/// Radial segments of the cylinder mesh
pub const EDGE_RESOLUTION: u32 = 16;

/// Edge material metalness
pub const EDGE_METALLIC: f32 = 0.7;

/// Edge material roughness
pub const EDGE_ROUGHNESS: f32 = 0.2;

/// |cos| above which a direction counts as (anti-)parallel to +Y
const PARALLEL_TOLERANCE: f32 = 0.999_999;

/// A renderable cylindrical segment between two nodes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub start: Vec3,
    pub end: Vec3,
    pub color: Rgb,
    /// Distance between the endpoints, used as the cylinder height
    pub length: f32,
    /// Cylinder center
    pub midpoint: Vec3,
    /// Rotation taking +Y onto the edge direction
    pub rotation: Quat,
}

impl Edge {
    /// Derive the cylinder joining `start` and `end`.
    ///
    /// The endpoints must not coincide; a zero-length edge has no direction.
    pub fn between(start: &Node, end: &Node, color: Rgb) -> Self {
        let start = start.position();
        let end = end.position();
        let direction = end - start;
        let length = direction.length();
        debug_assert!(length > 0.0, "edge endpoints coincide at {start}");

        Self {
            start,
            end,
            color,
            length,
            midpoint: (start + end) * 0.5,
            rotation: align_up_to(direction),
        }
    }

    /// Unit vector from `start` to `end`
    #[cfg(test)]
    pub(crate) fn direction(&self) -> Vec3 {
        (self.end - self.start).normalize()
    }
}

/// Shortest-arc rotation taking +Y onto `direction`.
///
/// Directions (anti-)parallel to +Y are resolved explicitly: the cross
/// product with +Y vanishes there, so the anti-parallel case turns half way
/// around +X instead.
pub fn align_up_to(direction: Vec3) -> Quat {
    let direction = direction.normalize();
    let cos = Vec3::Y.dot(direction);

    if cos > PARALLEL_TOLERANCE {
        Quat::IDENTITY
    } else if cos < -PARALLEL_TOLERANCE {
        Quat::from_rotation_x(std::f32::consts::PI)
    } else {
        Quat::from_rotation_arc(Vec3::Y, direction)
    }
}
