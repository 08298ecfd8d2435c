use std::fmt;

use super::node::NodeId;
use crate::geometry::Point;

/// Identity of an edge, derived from the two ports it joins.
///
/// Two connections between the same output and the same input always map to
/// the same id, which is how duplicates are detected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EdgeId {
    pub start_node: NodeId,
    pub output_index: usize,
    pub end_node: NodeId,
    pub input_index: usize,
}

impl EdgeId {
    pub fn new(start_node: NodeId, output_index: usize, end_node: NodeId, input_index: usize) -> Self {
        Self {
            start_node,
            output_index,
            end_node,
            input_index,
        }
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "edge_{}_{}_{}_{}",
            self.start_node, self.output_index, self.end_node, self.input_index
        )
    }
}

/// A committed connection from an output port to an input port.
///
/// Endpoints are stored in canvas space and follow the same prev/curr
/// scheme as node positions so they can be dragged along with a node.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
    pub id: EdgeId,
    pub prev_start: Point,
    pub curr_start: Point,
    pub prev_end: Point,
    pub curr_end: Point,
}

impl Edge {
    pub(crate) fn new(id: EdgeId) -> Self {
        Self {
            id,
            prev_start: Point::ZERO,
            curr_start: Point::ZERO,
            prev_end: Point::ZERO,
            curr_end: Point::ZERO,
        }
    }

    pub fn start_node(&self) -> NodeId {
        self.id.start_node
    }

    pub fn end_node(&self) -> NodeId {
        self.id.end_node
    }

    pub fn midpoint(&self) -> Point {
        (self.curr_start + self.curr_end) / 2.0
    }
}
