//! Cubeframe Core - Renderer-independent model of the wireframe cube
//!
//! This crate provides the pieces that do not depend on the renderer:
//! - Corner nodes and cylinder edges with their derived placement
//! - The cube structure with its fixed edge topology and rebuild operation
//! - The settings record, its slider ranges and change effects
//! - The settings panel capability and its bindings
//! - Settings loading from TOML documents and URL-style overrides
//! - Spin accumulation math for the animation driver

pub mod color;
pub mod config;
pub mod edge;
pub mod node;
pub mod panel;
pub mod settings;
pub mod spin;
pub mod structure;

pub use color::{ColorError, Rgb};
pub use config::ConfigError;
pub use edge::Edge;
pub use node::Node;
pub use panel::{show_settings, PanelEffects, SettingsPanel};
pub use settings::{
    ChangeEffect, ColorField, ScalarField, Settings, SettingsError, SettingsField, SliderRange,
};
pub use spin::{apply_spin, spin_increment, yaw_of};
pub use structure::{corner_positions, CubeStructure, EDGE_ADJACENCY};
