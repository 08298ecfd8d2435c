//! Main board widget.

use egui::{self, CursorIcon, Pos2, Rect, Vec2};
use node_board::interaction::InteractionContext;
use node_board::geometry::to_screen_space;
use node_board::{BoardEvent, Graph, InteractionEngine, Point, PortSide, Size, ViewportState};

use crate::drawing::{draw_bezier_connection, draw_grid};
use crate::interactions::{self, InputContext};
use crate::node_rendering::{self, NodeLayout};
use crate::state::{BoardWidgetState, to_pos2};
use crate::theme::BoardTheme;
use crate::toolbar;

pub struct BoardWidget<'a> {
    state: &'a mut BoardWidgetState,
    theme: &'a BoardTheme,
}

impl<'a> BoardWidget<'a> {
    pub fn new(state: &'a mut BoardWidgetState, theme: &'a BoardTheme) -> Self {
        Self { state, theme }
    }

    /// Show the toolbar and the board, then feed this frame's input to the
    /// engine. Returns `true` if anything changed.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        graph: &mut Graph,
        engine: &mut InteractionEngine,
    ) -> bool {
        let mut events = toolbar::show_toolbar(
            ui,
            &mut self.state.form,
            self.state.max_ports,
            engine.selection().node().is_some(),
            self.theme.delete_color,
        );
        ui.separator();

        let available = ui.available_rect_before_wrap();
        let (canvas_response, painter) =
            ui.allocate_painter(available.size(), egui::Sense::click_and_drag());
        let canvas_rect = canvas_response.rect;
        let origin = canvas_rect.min;

        self.sync_viewport(canvas_rect, engine);
        let scale = engine.scale();
        let scroll = self.state.scroll();

        painter.rect_filled(canvas_rect, 0.0, self.theme.background_color);
        draw_grid(
            &painter,
            canvas_rect,
            scroll,
            self.theme.grid_color,
            self.theme.grid_spacing * scale,
        );

        // ---- Layout: node rects and port centers ----
        self.state.layout.clear();
        let layouts: Vec<NodeLayout> = graph
            .nodes()
            .iter()
            .map(|node| {
                let layout = node_rendering::layout_node(node, origin, scroll, scale, self.theme);
                let local = |p: Pos2| Pos2::ZERO + (p - origin);
                self.state.layout.insert_node(
                    node.id,
                    Rect::from_min_max(local(layout.rect.min), local(layout.rect.max)),
                );
                for (i, &p) in layout.inputs.iter().enumerate() {
                    self.state
                        .layout
                        .insert_port(node.id, PortSide::Input, i, local(p));
                }
                for (i, &p) in layout.outputs.iter().enumerate() {
                    self.state
                        .layout
                        .insert_port(node.id, PortSide::Output, i, local(p));
                }
                layout
            })
            .collect();

        // ---- Draw: edges under nodes, pending edge on top ----
        let scroll_offset = self.state.viewport.scroll_offset();
        let to_screen =
            |p: Point| origin + (to_pos2(to_screen_space(p, scroll_offset, scale)) - Pos2::ZERO);
        let selected_edge = engine.selection().edge();
        for edge in graph.edges() {
            let (color, width) = if selected_edge == Some(edge.id) {
                (self.theme.edge_selected_color, 3.0)
            } else {
                (self.theme.edge_color, 2.0)
            };
            draw_bezier_connection(
                &painter,
                to_screen(edge.curr_start),
                to_screen(edge.curr_end),
                color,
                width * scale,
            );
        }

        let selected_node = engine.selection().node();
        let hovered = self.state.hovered_input;
        for (node, layout) in graph.nodes().iter().zip(&layouts) {
            let title = format!("{} in / {} out", node.ports.inputs(), node.ports.outputs());
            node_rendering::draw_node_chrome(
                &painter,
                layout,
                self.theme,
                &title,
                selected_node == Some(node.id),
                scale,
            );
            let hovered_input = hovered.filter(|(id, _)| *id == node.id).map(|(_, i)| i);
            node_rendering::draw_ports(&painter, layout, self.theme, hovered_input);
        }

        if let Some(pending) = engine.pending_edge() {
            draw_bezier_connection(
                &painter,
                to_screen(pending.curr_start),
                to_screen(pending.curr_end),
                self.theme.pending_edge_color,
                2.0 * scale,
            );
        }

        // ---- Edge delete button ----
        let mut blocked = Vec::new();
        if let Some(edge) = selected_edge.and_then(|id| graph.find_edge(id)) {
            let button_rect =
                Rect::from_center_size(to_screen(edge.midpoint()), Vec2::splat(18.0));
            blocked.push(button_rect);
            let button = egui::Button::new(
                egui::RichText::new("\u{2715}").color(self.theme.delete_color),
            );
            if ui.put(button_rect, button).clicked() {
                events.push(BoardEvent::DeleteEdge(edge.id));
            }
        }

        // ---- Input ----
        let input_ctx = InputContext {
            ui,
            canvas_rect,
            origin,
            graph,
            engine,
            theme: self.theme,
            blocked: &blocked,
        };
        events.extend(interactions::collect_events(self.state, &input_ctx));

        let changed = self.dispatch(events, graph, engine);

        if engine.is_panning() {
            ui.ctx().set_cursor_icon(CursorIcon::Grabbing);
        }
        if changed {
            ui.ctx().request_repaint();
        }
        changed
    }

    /// Keep the scroll container sized to the visible canvas. The centring
    /// margin widens the scrollable area the same way it grows the board's
    /// layout box.
    fn sync_viewport(&mut self, canvas_rect: Rect, engine: &InteractionEngine) {
        let size = Size::new(canvas_rect.width(), canvas_rect.height());
        let margin = engine.centering_margin(size);
        let extent = self.theme.board_extent;
        let content = Size::new(
            size.width * extent + margin.x,
            size.height * extent + margin.y,
        );
        self.state.viewport.resize(size, content);
    }

    fn dispatch(
        &mut self,
        events: Vec<BoardEvent>,
        graph: &mut Graph,
        engine: &mut InteractionEngine,
    ) -> bool {
        let BoardWidgetState {
            viewport, layout, ..
        } = &mut *self.state;
        let mut ctx = InteractionContext {
            graph,
            viewport,
            ports: layout,
        };
        let mut changed = false;
        for event in events {
            changed |= engine.handle(event, &mut ctx);
        }
        changed
    }
}
