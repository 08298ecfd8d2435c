//! Transient interaction state.

use crate::geometry::Point;
use crate::model::{EdgeId, NodeId};

/// Pointer gesture in progress. Exactly one per press/release cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Gesture {
    #[default]
    Idle,
    /// Press started on empty canvas. `last` moves with every event.
    PanningCanvas { last: Point },
    /// Press started on a node. `press` stays fixed for the whole drag.
    DraggingNode { node: NodeId, press: Point },
}

/// At most one node or one edge is selected.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Selection {
    #[default]
    None,
    Node(NodeId),
    Edge(EdgeId),
}

impl Selection {
    pub fn node(&self) -> Option<NodeId> {
        match self {
            Selection::Node(id) => Some(*id),
            _ => None,
        }
    }

    pub fn edge(&self) -> Option<EdgeId> {
        match self {
            Selection::Edge(id) => Some(*id),
            _ => None,
        }
    }
}

/// Edge being drawn from an output port. It has no end port until it is
/// committed; its end points track the pointer in canvas space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PendingEdge {
    pub start_node: NodeId,
    pub output_index: usize,
    pub prev_start: Point,
    pub curr_start: Point,
    pub prev_end: Point,
    pub curr_end: Point,
}

impl PendingEdge {
    pub(crate) fn at(start_node: NodeId, output_index: usize, point: Point) -> Self {
        Self {
            start_node,
            output_index,
            prev_start: point,
            curr_start: point,
            prev_end: point,
            curr_end: point,
        }
    }
}

/// Input port currently under the pointer, with its screen-space center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverTarget {
    pub node: NodeId,
    pub input_index: usize,
    pub screen: Point,
}

impl HoverTarget {
    pub fn is(&self, node: NodeId, input_index: usize) -> bool {
        self.node == node && self.input_index == input_index
    }
}
