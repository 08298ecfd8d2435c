//! Events forwarded by the render layer.

use crate::geometry::Point;
use crate::model::{EdgeId, NodeId, PortCounts, PortSide};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// What the pointer was over when it was pressed.
///
/// The render layer resolves this before forwarding the press, so a press on
/// a node or an output port is never also a canvas press.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerTarget {
    Canvas,
    Node(NodeId),
    Edge(EdgeId),
    OutputPort { node: NodeId, index: usize },
}

/// A pointer press, in screen coordinates relative to the visible board.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub pos: Point,
    pub button: PointerButton,
    pub target: PointerTarget,
}

impl PointerEvent {
    pub fn primary(pos: Point, target: PointerTarget) -> Self {
        Self {
            pos,
            button: PointerButton::Primary,
            target,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BoardEvent {
    PointerDown(PointerEvent),
    PointerMove(Point),
    PointerUp(Point),
    /// Wheel delta with browser sign: positive scrolls down and zooms out.
    Wheel { delta_y: f32 },
    InputEnter { node: NodeId, index: usize },
    InputLeave { node: NodeId, index: usize },
    AddNode(PortCounts),
    DeleteSelectedNode,
    DeleteEdge(EdgeId),
}

/// Supplies port centers measured by the render layer.
///
/// Centers are in the same screen space as pointer positions.
pub trait PortGeometry {
    fn port_center(&self, node: NodeId, side: PortSide, index: usize) -> Option<Point>;
}
