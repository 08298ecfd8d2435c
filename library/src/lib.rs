//! Core of the node board editor.
//!
//! The [`Graph`] owns nodes, edges and adjacency lists. The
//! [`InteractionEngine`] consumes one pointer/wheel event at a time and
//! mutates the graph and the viewport in response. Rendering is left to the
//! caller, which reads the graph and the engine state between events.

pub mod config;
pub mod error;
pub mod geometry;
pub mod interaction;
pub mod model;

pub use config::{BoardConfig, NodeDeletion};
pub use error::BoardError;
pub use geometry::{Point, ScrollViewport, Size, ViewportState};
pub use interaction::{
    BoardEvent, Gesture, HoverTarget, InteractionEngine, PendingEdge, PointerButton, PointerEvent,
    PointerTarget, PortGeometry, Selection,
};
pub use model::{Edge, EdgeId, Graph, Node, NodeId, PortCounts, PortSide};
