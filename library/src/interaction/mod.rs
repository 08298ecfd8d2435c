//! Pointer interaction state machine.
//!
//! Events are handled one at a time, to completion. Every handler returns
//! `true` when it changed something the render layer draws, which is the
//! caller's cue to repaint.

pub mod event;
pub mod state;

pub use event::{BoardEvent, PointerButton, PointerEvent, PointerTarget, PortGeometry};
pub use state::{Gesture, HoverTarget, PendingEdge, Selection};

use log::{debug, trace};

use crate::config::{BoardConfig, NodeDeletion, ZoomConfig};
use crate::geometry::{self, Point, Size, ViewportState};
use crate::model::{EdgeId, Graph, NodeId, PortCounts, PortSide};

/// Everything a handler may read or write besides the engine itself.
pub struct InteractionContext<'a> {
    pub graph: &'a mut Graph,
    pub viewport: &'a mut dyn ViewportState,
    pub ports: &'a dyn PortGeometry,
}

#[derive(Debug)]
pub struct InteractionEngine {
    zoom: ZoomConfig,
    node_deletion: NodeDeletion,
    scale: f32,
    gesture: Gesture,
    selection: Selection,
    pending_edge: Option<PendingEdge>,
    hover: Option<HoverTarget>,
}

impl Default for InteractionEngine {
    fn default() -> Self {
        Self::new(&BoardConfig::default())
    }
}

impl InteractionEngine {
    pub fn new(config: &BoardConfig) -> Self {
        Self {
            zoom: config.zoom.clone(),
            node_deletion: config.graph.node_deletion,
            scale: config.zoom.min_scale,
            gesture: Gesture::Idle,
            selection: Selection::None,
            pending_edge: None,
            hover: None,
        }
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    pub fn is_panning(&self) -> bool {
        matches!(self.gesture, Gesture::PanningCanvas { .. })
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn pending_edge(&self) -> Option<&PendingEdge> {
        self.pending_edge.as_ref()
    }

    pub fn hover_target(&self) -> Option<&HoverTarget> {
        self.hover.as_ref()
    }

    /// Margin that keeps the zoomed board centred in a viewport of `size`.
    pub fn centering_margin(&self, size: Size) -> Point {
        let percent = self.zoom.centering_margin_percent;
        Point::new(
            geometry::centering_margin(self.scale, percent, size.width),
            geometry::centering_margin(self.scale, percent, size.height),
        )
    }

    pub fn handle(&mut self, event: BoardEvent, ctx: &mut InteractionContext) -> bool {
        match event {
            BoardEvent::PointerDown(ev) => self.pointer_down(ev, ctx),
            BoardEvent::PointerMove(pos) => self.pointer_move(pos, ctx),
            BoardEvent::PointerUp(_) => self.pointer_up(ctx),
            BoardEvent::Wheel { delta_y } => self.wheel(delta_y),
            BoardEvent::InputEnter { node, index } => self.input_enter(node, index, ctx),
            BoardEvent::InputLeave { node, index } => self.input_leave(node, index),
            BoardEvent::AddNode(ports) => self.add_node(ports, ctx),
            BoardEvent::DeleteSelectedNode => self.delete_selected_node(ctx),
            BoardEvent::DeleteEdge(id) => self.delete_edge(id, ctx),
        }
    }

    // -----------------------------------------------------------------------
    // Pointer
    // -----------------------------------------------------------------------

    pub fn pointer_down(&mut self, ev: PointerEvent, ctx: &mut InteractionContext) -> bool {
        if ev.button != PointerButton::Primary {
            return false;
        }

        match ev.target {
            PointerTarget::Canvas => {
                self.selection = Selection::None;
                self.gesture = Gesture::PanningCanvas { last: ev.pos };
                debug!("Pan started at ({:.1}, {:.1})", ev.pos.x, ev.pos.y);
            }
            PointerTarget::Node(node) => {
                self.selection = Selection::Node(node);
                self.gesture = Gesture::DraggingNode {
                    node,
                    press: ev.pos,
                };
                self.freeze_node(node, ctx.graph);
                debug!("Drag started on {}", node);
            }
            PointerTarget::Edge(edge) => {
                self.selection = Selection::Edge(edge);
            }
            PointerTarget::OutputPort { node, index } => {
                if self.selection.node().is_some() {
                    self.selection = Selection::None;
                }
                self.start_pending_edge(node, index, ctx);
            }
        }
        true
    }

    pub fn pointer_move(&mut self, pos: Point, ctx: &mut InteractionContext) -> bool {
        let mut changed = false;

        match self.gesture {
            Gesture::Idle => {}
            Gesture::PanningCanvas { last } => {
                let delta = pos - last;
                ctx.viewport.scroll_by(-delta.x, delta.y);
                self.gesture = Gesture::PanningCanvas { last: pos };
                trace!("Pan by ({:.1}, {:.1})", delta.x, delta.y);
                changed = true;
            }
            Gesture::DraggingNode { node, press } => {
                changed |= self.drag_node(node, pos - press, ctx.graph);
            }
        }

        if let Some(pending) = self.pending_edge.as_mut() {
            pending.curr_end =
                geometry::to_canvas_space(pos, ctx.viewport.scroll_offset(), self.scale);
            changed = true;
        }

        changed
    }

    pub fn pointer_up(&mut self, ctx: &mut InteractionContext) -> bool {
        let mut changed = false;
        match std::mem::take(&mut self.gesture) {
            Gesture::Idle => {}
            Gesture::PanningCanvas { .. } => {
                debug!("Pan finished");
                changed = true;
            }
            Gesture::DraggingNode { node, .. } => {
                debug!("Drag finished on {}", node);
                changed = true;
            }
        }

        if let Some(pending) = self.pending_edge.take() {
            match self.hover {
                Some(hover) => self.commit_pending_edge(pending, hover, ctx),
                None => debug!("Discarded pending edge from {}", pending.start_node),
            }
            changed = true;
        }

        changed
    }

    pub fn wheel(&mut self, delta_y: f32) -> bool {
        if !delta_y.is_finite() {
            return false;
        }
        let raw = self.scale - self.zoom.wheel_sensitivity * delta_y;
        let scale = raw.clamp(self.zoom.min_scale, self.zoom.max_scale);
        if scale == self.scale {
            return false;
        }
        trace!("Zoom {:.3} -> {:.3}", self.scale, scale);
        self.scale = scale;
        true
    }

    // -----------------------------------------------------------------------
    // Ports
    // -----------------------------------------------------------------------

    pub fn input_enter(&mut self, node: NodeId, index: usize, ctx: &InteractionContext) -> bool {
        let Some(center) = ctx.ports.port_center(node, PortSide::Input, index) else {
            return false;
        };
        self.hover = Some(HoverTarget {
            node,
            input_index: index,
            screen: center,
        });
        true
    }

    pub fn input_leave(&mut self, node: NodeId, index: usize) -> bool {
        match self.hover {
            Some(hover) if hover.is(node, index) => {
                self.hover = None;
                true
            }
            _ => false,
        }
    }

    fn start_pending_edge(&mut self, node: NodeId, index: usize, ctx: &InteractionContext) {
        let Some(center) = ctx.ports.port_center(node, PortSide::Output, index) else {
            return;
        };
        let point = geometry::to_canvas_space(center, ctx.viewport.scroll_offset(), self.scale);
        self.pending_edge = Some(PendingEdge::at(node, index, point));
        debug!("Pending edge from {} output {}", node, index);
    }

    fn commit_pending_edge(
        &mut self,
        pending: PendingEdge,
        hover: HoverTarget,
        ctx: &mut InteractionContext,
    ) {
        let end =
            geometry::to_canvas_space(hover.screen, ctx.viewport.scroll_offset(), self.scale);
        match ctx.graph.try_add_edge(
            pending.start_node,
            pending.output_index,
            hover.node,
            hover.input_index,
        ) {
            Some(edge) => {
                edge.prev_start = pending.curr_start;
                edge.curr_start = pending.curr_start;
                edge.prev_end = end;
                edge.curr_end = end;
                debug!("Committed edge {}", edge.id);
            }
            None => debug!(
                "Pending edge from {} not committed to {} input {}",
                pending.start_node, hover.node, hover.input_index
            ),
        }
    }

    // -----------------------------------------------------------------------
    // Node drag
    // -----------------------------------------------------------------------

    /// Freeze the node and its attached edge endpoints at `position * scale`.
    fn freeze_node(&self, id: NodeId, graph: &mut Graph) {
        let scale = self.scale;
        let Some(node) = graph.find_node_mut(id) else {
            return;
        };
        node.prev_position = geometry::rescale(node.curr_position, scale);
        let incoming = node.input_edges().to_vec();
        let outgoing = node.output_edges().to_vec();

        for edge_id in incoming {
            if let Some(edge) = graph.find_edge_mut(edge_id) {
                edge.prev_end = geometry::rescale(edge.curr_end, scale);
            }
        }
        for edge_id in outgoing {
            if let Some(edge) = graph.find_edge_mut(edge_id) {
                edge.prev_start = geometry::rescale(edge.curr_start, scale);
            }
        }
    }

    /// Move a node and its attached edge endpoints by the cumulative screen
    /// delta since the press.
    fn drag_node(&self, id: NodeId, delta: Point, graph: &mut Graph) -> bool {
        let scale = self.scale;
        let Some(node) = graph.find_node_mut(id) else {
            return false;
        };
        node.curr_position = geometry::dragged_position(node.prev_position, delta, scale);
        let incoming = node.input_edges().to_vec();
        let outgoing = node.output_edges().to_vec();

        for edge_id in incoming {
            if let Some(edge) = graph.find_edge_mut(edge_id) {
                edge.curr_end = geometry::dragged_position(edge.prev_end, delta, scale);
            }
        }
        for edge_id in outgoing {
            if let Some(edge) = graph.find_edge_mut(edge_id) {
                edge.curr_start = geometry::dragged_position(edge.prev_start, delta, scale);
            }
        }
        trace!("Drag {} by ({:.1}, {:.1})", id, delta.x, delta.y);
        true
    }

    // -----------------------------------------------------------------------
    // Graph edits
    // -----------------------------------------------------------------------

    /// Add a node somewhere inside the currently visible part of the board.
    pub fn add_node(&mut self, ports: PortCounts, ctx: &mut InteractionContext) -> bool {
        let origin =
            geometry::to_canvas_space(Point::ZERO, ctx.viewport.scroll_offset(), self.scale);
        let size = ctx.viewport.size();
        let bounds = Size::new(size.width / self.scale, size.height / self.scale);
        ctx.graph.add_node(ports, origin, bounds);
        true
    }

    /// Delete the selected node and clear the node selection, whether or not
    /// the node still existed. An edge selection is left alone.
    pub fn delete_selected_node(&mut self, ctx: &mut InteractionContext) -> bool {
        let Some(id) = self.selection.node() else {
            return false;
        };
        if ctx.graph.remove_node(id, self.node_deletion).is_some()
            && matches!(self.gesture, Gesture::DraggingNode { node, .. } if node == id)
        {
            self.gesture = Gesture::Idle;
        }
        self.selection = Selection::None;
        true
    }

    pub fn delete_edge(&mut self, id: EdgeId, ctx: &mut InteractionContext) -> bool {
        let removed = ctx.graph.remove_edge(id).is_some();
        if self.selection.edge() == Some(id) {
            self.selection = Selection::None;
            return true;
        }
        removed
    }
}
