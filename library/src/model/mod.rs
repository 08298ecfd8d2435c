//! Graph data model: nodes with fixed port counts, edges between ports, and
//! the adjacency lists that tie them together.

pub mod edge;
pub mod graph;
pub mod node;
pub mod port;

pub use edge::{Edge, EdgeId};
pub use graph::Graph;
pub use node::{Node, NodeId};
pub use port::{PortCounts, PortSide};
