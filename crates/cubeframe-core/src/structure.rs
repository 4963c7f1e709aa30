//! The cube wireframe: eight corners joined by twelve edges

use glam::Vec3;
use tracing::debug;

use crate::edge::Edge;
use crate::node::Node;
use crate::settings::Settings;

/// Corner index pairs of a box wireframe: bottom ring, top ring, uprights
pub const EDGE_ADJACENCY: [(usize, usize); 12] = [
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 0),
    (4, 5),
    (5, 6),
    (6, 7),
    (7, 4),
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
];

/// Corners of a box centered on the origin.
///
/// `length` runs along X, `height` along Y and `width` along Z. Corners 0-3
/// are the bottom face and 4-7 the top face, in the same winding.
pub fn corner_positions(length: f32, width: f32, height: f32) -> [Vec3; 8] {
    let (l, w, h) = (length / 2.0, width / 2.0, height / 2.0);
    [
        Vec3::new(-l, -h, -w),
        Vec3::new(l, -h, -w),
        Vec3::new(l, -h, w),
        Vec3::new(-l, -h, w),
        Vec3::new(-l, h, -w),
        Vec3::new(l, h, -w),
        Vec3::new(l, h, w),
        Vec3::new(-l, h, w),
    ]
}

/// Nodes and edges of the current cube
#[derive(Debug, Clone, PartialEq)]
pub struct CubeStructure {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl CubeStructure {
    pub fn new(settings: &Settings) -> Self {
        let mut structure = Self {
            nodes: Vec::with_capacity(8),
            edges: Vec::with_capacity(EDGE_ADJACENCY.len()),
        };
        structure.rebuild(settings);
        structure
    }

    /// Regenerate every node and edge from the current settings
    pub fn rebuild(&mut self, settings: &Settings) {
        self.nodes.clear();
        self.nodes.extend(
            corner_positions(settings.length(), settings.width(), settings.height())
                .into_iter()
                .map(Node::from),
        );

        let color = settings.edge_color();
        self.edges.clear();
        self.edges.extend(
            EDGE_ADJACENCY
                .iter()
                .map(|&(start, end)| Edge::between(&self.nodes[start], &self.nodes[end], color)),
        );

        debug!(
            length = settings.length(),
            width = settings.width(),
            height = settings.height(),
            color = %color,
            "Rebuilt cube structure"
        );
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use crate::settings::{ColorField, ScalarField};

    const EPS: f32 = 1e-5;

    fn settings_with(length: f32, width: f32, height: f32) -> Settings {
        let mut settings = Settings::default();
        settings.set_scalar(ScalarField::Length, length);
        settings.set_scalar(ScalarField::Width, width);
        settings.set_scalar(ScalarField::Height, height);
        settings
    }

    #[test]
    fn test_corners_match_formula() {
        let dims = [(1.0, 1.0, 1.0), (2.0, 0.5, 1.3), (0.5, 2.0, 0.7), (1.9, 1.1, 2.0)];

        for (length, width, height) in dims {
            let structure = CubeStructure::new(&settings_with(length, width, height));
            let nodes = structure.nodes();
            assert_eq!(nodes.len(), 8);

            for node in nodes {
                let p = node.position();
                assert!((p.x.abs() - length / 2.0).abs() < EPS);
                assert!((p.y.abs() - height / 2.0).abs() < EPS);
                assert!((p.z.abs() - width / 2.0).abs() < EPS);
            }

            for i in 0..8 {
                for j in (i + 1)..8 {
                    assert_ne!(nodes[i].position(), nodes[j].position());
                }
            }
        }
    }

    #[test]
    fn test_edges_follow_adjacency() {
        let structure = CubeStructure::new(&settings_with(1.4, 0.8, 1.1));
        let edges = structure.edges();
        assert_eq!(edges.len(), 12);

        for (edge, &(a, b)) in edges.iter().zip(EDGE_ADJACENCY.iter()) {
            assert_eq!(edge.start, structure.nodes()[a].position());
            assert_eq!(edge.end, structure.nodes()[b].position());
            // Every box edge runs along exactly one axis
            let d = edge.direction().abs();
            assert!((d.x + d.y + d.z - 1.0).abs() < EPS);
        }
    }

    #[test]
    fn test_first_edge_geometry() {
        let structure = CubeStructure::new(&settings_with(2.0, 1.0, 1.0));
        let edge = structure.edges()[0];

        assert!(edge.start.abs_diff_eq(Vec3::new(-1.0, -0.5, -0.5), EPS));
        assert!(edge.end.abs_diff_eq(Vec3::new(1.0, -0.5, -0.5), EPS));
        assert!((edge.length - 2.0).abs() < EPS);
        assert!(edge.midpoint.abs_diff_eq(Vec3::new(0.0, -0.5, -0.5), EPS));
    }

    #[test]
    fn test_rebuild_is_idempotent() {
        let settings = settings_with(1.2, 1.6, 0.9);
        let mut structure = CubeStructure::new(&settings);
        let first = structure.clone();

        structure.rebuild(&settings);
        assert_eq!(structure, first);
    }

    #[test]
    fn test_edge_color_change_keeps_geometry() {
        let mut settings = settings_with(1.2, 1.6, 0.9);
        let mut structure = CubeStructure::new(&settings);
        let before = structure.edges().to_vec();

        settings.set_color(ColorField::EdgeColor, Rgb::from_hex(0xff0000));
        structure.rebuild(&settings);

        for (old, new) in before.iter().zip(structure.edges()) {
            assert_eq!(new.color, Rgb::from_hex(0xff0000));
            assert_eq!(old.start, new.start);
            assert_eq!(old.end, new.end);
            assert_eq!(old.midpoint, new.midpoint);
            assert_eq!(old.rotation, new.rotation);
            assert_eq!(old.length, new.length);
        }
    }

    #[test]
    fn test_rebuild_tracks_dimensions() {
        let mut settings = Settings::default();
        let mut structure = CubeStructure::new(&settings);

        settings.set_scalar(ScalarField::Height, 2.0);
        structure.rebuild(&settings);

        // Uprights (edges 8..12) take the new height
        for edge in &structure.edges()[8..] {
            assert!((edge.length - 2.0).abs() < EPS);
        }
        assert_eq!(structure.nodes().len(), 8);
        assert_eq!(structure.edges().len(), 12);
    }
}
