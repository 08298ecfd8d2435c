use std::fmt;

use uuid::Uuid;

use super::edge::EdgeId;
use super::port::PortCounts;
use crate::geometry::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(Uuid);

impl NodeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node_{}", self.0.simple())
    }
}

/// A node on the board.
///
/// Positions are in canvas space. `prev_position` only carries meaning
/// between a drag start and the matching release; outside a drag it holds
/// whatever the last drag froze into it.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub ports: PortCounts,
    pub prev_position: Point,
    pub curr_position: Point,
    // Adjacency lists are written only by `Graph`.
    pub(crate) input_edges: Vec<EdgeId>,
    pub(crate) output_edges: Vec<EdgeId>,
}

impl Node {
    pub(crate) fn new(ports: PortCounts, position: Point) -> Self {
        Self {
            id: NodeId::new(),
            ports,
            prev_position: position,
            curr_position: position,
            input_edges: Vec::new(),
            output_edges: Vec::new(),
        }
    }

    /// Incoming edge ids, in creation order.
    pub fn input_edges(&self) -> &[EdgeId] {
        &self.input_edges
    }

    /// Outgoing edge ids, in creation order.
    pub fn output_edges(&self) -> &[EdgeId] {
        &self.output_edges
    }

    /// All attached edges, incoming first.
    pub fn incident_edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.input_edges
            .iter()
            .chain(self.output_edges.iter())
            .copied()
    }
}
