//! Viewport layout of an automaton.

use crate::config::AutomatonConfig;
use crate::core::{Position, StateId, TransitionRecord};
use serde::{Deserialize, Serialize};

/// Radius of a state circle.
pub const NODE_RADIUS: f64 = 25.0;
/// Radius of the arc drawn above a state for a self loop.
pub const LOOP_RADIUS: f64 = 20.0;
/// Distance above the state centre where a self-loop label sits.
pub const LOOP_LABEL_RISE: f64 = 55.0;
/// Share of the edge length used to bend curved edges.
pub const CURVATURE: f64 = 0.2;

/// Drawing surface size in pixels.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Scale a normalized position to viewport coordinates.
    pub fn project(&self, position: Position) -> Point {
        Point {
            x: position.x * self.width,
            y: position.y * self.height,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct Node {
    pub id: StateId,
    pub center: Point,
    /// Declared label, or the id when none was declared
    pub label: String,
    pub is_start: bool,
    pub is_final: bool,
    pub active: bool,
}

#[derive(Clone, Copy, PartialEq, Debug, Serialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum EdgeShape {
    /// Arc above the state, centred at `center`
    SelfLoop { center: Point, radius: f64 },
    /// Quadratic curve from source to target bent through `control`
    Curve {
        start: Point,
        control: Point,
        end: Point,
    },
}

#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct Edge {
    pub from: StateId,
    pub to: StateId,
    pub label: String,
    pub shape: EdgeShape,
    /// Where the label is drawn
    pub label_at: Point,
    /// Set when this edge carried the most recent transition
    pub recent: bool,
}

/// Everything a renderer needs to draw one frame.
///
/// # Example
///
/// ```rust
/// use statetrace::catalog::Module;
/// use statetrace::diagram::{Scene, Viewport};
///
/// let config = Module::DigitSumMod3.config().unwrap();
/// let scene = Scene::layout(&config, Viewport::new(400.0, 300.0), Some(&config.start_state));
///
/// assert_eq!(scene.nodes.len(), 3);
/// assert_eq!(scene.edges.len(), 9);
/// assert!(scene.node("q0").unwrap().active);
/// ```
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct Scene {
    pub viewport: Viewport,
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl Scene {
    /// Lay out every state and transition of `config`.
    ///
    /// Edges referencing undeclared states are skipped.
    pub fn layout(config: &AutomatonConfig, viewport: Viewport, active: Option<&StateId>) -> Self {
        let nodes = config
            .states
            .iter()
            .map(|(id, spec)| Node {
                id: id.clone(),
                center: viewport.project(spec.position),
                label: config.label_of(id).to_string(),
                is_start: spec.is_start,
                is_final: spec.is_final,
                active: active == Some(id),
            })
            .collect();

        let edges = config
            .transitions
            .iter()
            .flat_map(|(from, table)| table.iter().map(move |(pattern, to)| (from, pattern, to)))
            .filter_map(|(from, pattern, to)| {
                let source = viewport.project(config.state(from)?.position);
                let target = viewport.project(config.state(to)?.position);
                let (shape, label_at) = edge_shape(from, source, to, target);
                Some(Edge {
                    from: from.clone(),
                    to: to.clone(),
                    label: pattern.edge_label(),
                    shape,
                    label_at,
                    recent: false,
                })
            })
            .collect();

        Self {
            viewport,
            nodes,
            edges,
        }
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id.as_str() == id)
    }

    /// Edges leaving `from`, in declaration order.
    pub fn edges_from<'a>(&'a self, from: &'a str) -> impl Iterator<Item = &'a Edge> {
        self.edges.iter().filter(move |e| e.from.as_str() == from)
    }

    /// Flag the edges between the endpoints of `record`.
    pub fn mark_recent(&mut self, record: &TransitionRecord) {
        for edge in &mut self.edges {
            edge.recent = edge.from == record.from && edge.to == record.to;
        }
    }
}

fn edge_shape(from: &StateId, source: Point, to: &StateId, target: Point) -> (EdgeShape, Point) {
    if from == to {
        let center = Point::new(source.x, source.y - NODE_RADIUS);
        let label_at = Point::new(source.x, source.y - LOOP_LABEL_RISE);
        return (
            EdgeShape::SelfLoop {
                center,
                radius: LOOP_RADIUS,
            },
            label_at,
        );
    }

    let mid = Point::new((source.x + target.x) / 2.0, (source.y + target.y) / 2.0);
    let (dx, dy) = (target.x - source.x, target.y - source.y);
    let (mut ox, mut oy) = (-dy * CURVATURE, dx * CURVATURE);
    // Flip when the target id sorts before the source id.
    if to < from {
        ox = -ox;
        oy = -oy;
    }

    let control = Point::new(mid.x + ox, mid.y + oy);
    (
        EdgeShape::Curve {
            start: source,
            control,
            end: target,
        },
        control,
    )
}
