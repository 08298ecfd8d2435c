//! Widget-side state kept between frames.

use std::collections::HashMap;

use egui::{Pos2, Rect, Vec2};
use node_board::{
    BoardConfig, NodeId, Point, PortGeometry, PortSide, ScrollViewport, ViewportState,
};

use crate::toolbar::AddNodeForm;

/// Port centers and node rects measured during the last layout pass.
///
/// Positions are relative to the top-left of the visible board, the same
/// space the engine receives pointer positions in.
#[derive(Default)]
pub struct PortLayout {
    ports: HashMap<(NodeId, PortSide, usize), Pos2>,
    /// Node rects in draw order; later entries are on top.
    nodes: Vec<(NodeId, Rect)>,
}

impl PortLayout {
    pub fn clear(&mut self) {
        self.ports.clear();
        self.nodes.clear();
    }

    pub fn insert_port(&mut self, node: NodeId, side: PortSide, index: usize, center: Pos2) {
        self.ports.insert((node, side, index), center);
    }

    pub fn insert_node(&mut self, node: NodeId, rect: Rect) {
        self.nodes.push((node, rect));
    }

    /// Closest port on `side` within `radius` of `pos`.
    pub fn port_at(&self, pos: Pos2, side: PortSide, radius: f32) -> Option<(NodeId, usize)> {
        let mut best: Option<(f32, NodeId, usize)> = None;
        for (&(node, port_side, index), &center) in &self.ports {
            if port_side != side {
                continue;
            }
            let d = pos.distance(center);
            if d < radius && best.is_none_or(|(best_d, _, _)| d < best_d) {
                best = Some((d, node, index));
            }
        }
        best.map(|(_, node, index)| (node, index))
    }

    /// Topmost node whose rect contains `pos`.
    pub fn node_at(&self, pos: Pos2) -> Option<NodeId> {
        self.nodes
            .iter()
            .rev()
            .find(|(_, rect)| rect.contains(pos))
            .map(|(id, _)| *id)
    }
}

impl PortGeometry for PortLayout {
    fn port_center(&self, node: NodeId, side: PortSide, index: usize) -> Option<Point> {
        self.ports
            .get(&(node, side, index))
            .map(|p| Point::new(p.x, p.y))
    }
}

/// State owned by the host between frames.
pub struct BoardWidgetState {
    pub viewport: ScrollViewport,
    pub layout: PortLayout,
    /// Input port under the pointer on the previous frame.
    pub hovered_input: Option<(NodeId, usize)>,
    pub form: AddNodeForm,
    pub max_ports: usize,
}

impl BoardWidgetState {
    pub fn new(config: &BoardConfig) -> Self {
        Self {
            viewport: ScrollViewport::default(),
            layout: PortLayout::default(),
            hovered_input: None,
            form: AddNodeForm::default(),
            max_ports: config.ports.max_per_side,
        }
    }

    pub fn scroll(&self) -> Vec2 {
        let s = self.viewport.scroll_offset();
        Vec2::new(s.x, s.y)
    }
}

pub(crate) fn to_pos2(p: Point) -> Pos2 {
    Pos2::new(p.x, p.y)
}

pub(crate) fn to_point(p: Pos2) -> Point {
    Point::new(p.x, p.y)
}
