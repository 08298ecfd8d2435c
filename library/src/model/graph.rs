//! The graph that owns every node and edge on the board.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::edge::{Edge, EdgeId};
use super::node::{Node, NodeId};
use super::port::PortCounts;
use crate::config::NodeDeletion;
use crate::geometry::{Point, Size};

/// Nodes and edges in creation order, plus the RNG used to place new nodes.
///
/// `Graph` is the only writer of the adjacency lists on [`Node`]. Every
/// committed edge id appears in exactly one outgoing list and exactly one
/// incoming list while both of its nodes exist.
#[derive(Debug)]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    rng: StdRng,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Graph with deterministic node placement.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            rng,
        }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn find_node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn find_node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    pub fn find_edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.iter().find(|e| e.id == id)
    }

    pub fn find_edge_mut(&mut self, id: EdgeId) -> Option<&mut Edge> {
        self.edges.iter_mut().find(|e| e.id == id)
    }

    /// Add a node at a pseudo-random point inside the area that starts at
    /// `origin` and spans `bounds`. Both are in canvas space.
    pub fn add_node(&mut self, ports: PortCounts, origin: Point, bounds: Size) -> &Node {
        let position = origin
            + Point::new(
                random_within(&mut self.rng, bounds.width),
                random_within(&mut self.rng, bounds.height),
            );
        let node = Node::new(ports, position);
        info!(
            "Added node {} ({} in, {} out) at ({:.1}, {:.1})",
            node.id,
            ports.inputs(),
            ports.outputs(),
            position.x,
            position.y
        );
        self.nodes.push(node);
        &self.nodes[self.nodes.len() - 1]
    }

    /// Remove a node. No-op if the id is absent.
    ///
    /// With [`NodeDeletion::KeepEdges`] incident edges stay in the edge
    /// collection and keep referring to the removed id. With
    /// [`NodeDeletion::Cascade`] each of them goes through
    /// [`Graph::remove_edge`] first.
    pub fn remove_node(&mut self, id: NodeId, policy: NodeDeletion) -> Option<Node> {
        let index = self.nodes.iter().position(|n| n.id == id)?;

        if policy == NodeDeletion::Cascade {
            let incident: Vec<EdgeId> = self.nodes[index].incident_edges().collect();
            for edge_id in incident {
                self.remove_edge(edge_id);
            }
        }

        let node = self.nodes.remove(index);
        info!("Removed node {}", id);
        Some(node)
    }

    /// Connect `output_index` of `start` to `input_index` of `end`.
    ///
    /// Returns `None` without mutating anything if the same connection
    /// already exists, if either node is missing, or if a port index is out
    /// of range for its node. The new edge's endpoints start at the origin;
    /// the caller positions them.
    pub fn try_add_edge(
        &mut self,
        start: NodeId,
        output_index: usize,
        end: NodeId,
        input_index: usize,
    ) -> Option<&mut Edge> {
        let id = EdgeId::new(start, output_index, end, input_index);

        let start_node = self.find_node(start)?;
        let end_node = self.find_node(end)?;
        if output_index >= start_node.ports.outputs() || input_index >= end_node.ports.inputs() {
            debug!("Rejected edge {}: port index out of range", id);
            return None;
        }
        if start_node.output_edges.contains(&id) && end_node.input_edges.contains(&id) {
            debug!("Rejected duplicate edge {}", id);
            return None;
        }

        // Single-threaded: these three writes form one logical step.
        if let Some(node) = self.find_node_mut(start) {
            node.output_edges.push(id);
        }
        if let Some(node) = self.find_node_mut(end) {
            node.input_edges.push(id);
        }
        self.edges.push(Edge::new(id));
        info!("Added edge {}", id);

        self.edges.last_mut()
    }

    /// Remove an edge from both endpoint adjacency lists and drop the
    /// record. No-op if the id is absent.
    pub fn remove_edge(&mut self, id: EdgeId) -> Option<Edge> {
        let index = self.edges.iter().position(|e| e.id == id)?;

        if let Some(node) = self.find_node_mut(id.start_node) {
            node.output_edges.retain(|e| *e != id);
        }
        if let Some(node) = self.find_node_mut(id.end_node) {
            node.input_edges.retain(|e| *e != id);
        }

        let edge = self.edges.remove(index);
        info!("Removed edge {}", id);
        Some(edge)
    }

    /// Edges that refer to at least one node that no longer exists.
    ///
    /// Only [`NodeDeletion::KeepEdges`] can produce these.
    pub fn dangling_edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.iter().filter(|e| {
            self.find_node(e.start_node()).is_none() || self.find_node(e.end_node()).is_none()
        })
    }
}

fn random_within(rng: &mut StdRng, extent: f32) -> f32 {
    if extent > 0.0 {
        rng.gen_range(0.0..extent)
    } else {
        0.0
    }
}
