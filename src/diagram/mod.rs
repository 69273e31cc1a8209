//! Renderer-independent diagram model.
//!
//! [`Scene::layout`] turns a configuration into nodes and edges in viewport
//! coordinates. [`DiagramTracker`] listens to playback and remembers which
//! state and edge to highlight.

pub mod scene;
pub mod tracker;

pub use scene::{Edge, EdgeShape, Node, Point, Scene, Viewport};
pub use tracker::DiagramTracker;
