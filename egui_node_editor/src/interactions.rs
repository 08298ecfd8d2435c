//! Translation of egui input into board events.

use egui::{self, Pos2, Rect, Vec2};
use node_board::geometry::to_screen_space;
use node_board::{
    BoardEvent, Graph, InteractionEngine, PointerButton, PointerEvent, PointerTarget, PortSide,
    ViewportState,
};

use crate::drawing::distance_to_bezier;
use crate::state::{BoardWidgetState, to_point, to_pos2};
use crate::theme::BoardTheme;

/// Context passed to the input handlers (avoids threading many parameters).
pub(crate) struct InputContext<'a> {
    pub ui: &'a egui::Ui,
    pub canvas_rect: Rect,
    /// Screen position of the board's visible top-left corner.
    pub origin: Pos2,
    pub graph: &'a Graph,
    pub engine: &'a InteractionEngine,
    pub theme: &'a BoardTheme,
    /// Screen areas owned by overlay buttons; presses there are not
    /// forwarded to the board.
    pub blocked: &'a [Rect],
}

/// Collect this frame's events in the order the engine expects them:
/// press, hover changes, move, release, wheel.
pub(crate) fn collect_events(
    state: &mut BoardWidgetState,
    ctx: &InputContext,
) -> Vec<BoardEvent> {
    let mut events = Vec::new();
    let (hover_pos, delta, scroll_y, released) = ctx.ui.input(|i| {
        (
            i.pointer.hover_pos(),
            i.pointer.delta(),
            i.raw_scroll_delta.y,
            i.pointer.primary_released(),
        )
    });
    let inside = hover_pos.is_some_and(|p| ctx.canvas_rect.contains(p));
    let local = hover_pos.map(|p| to_point(Pos2::ZERO + (p - ctx.origin)));

    handle_press(state, ctx, hover_pos, &mut events);
    handle_hover(state, ctx, if inside { hover_pos } else { None }, &mut events);

    if let Some(pos) = local {
        let tracking = ctx.engine.gesture() != node_board::Gesture::Idle
            || ctx.engine.pending_edge().is_some();
        if delta != Vec2::ZERO && (inside || tracking) {
            events.push(BoardEvent::PointerMove(pos));
        }
        if released {
            events.push(BoardEvent::PointerUp(pos));
        }
    } else if released {
        events.push(BoardEvent::PointerUp(node_board::Point::ZERO));
    }

    if inside && scroll_y != 0.0 {
        // egui reports wheel-up as positive; the engine expects browser sign.
        events.push(BoardEvent::Wheel { delta_y: -scroll_y });
    }

    events
}

fn handle_press(
    state: &BoardWidgetState,
    ctx: &InputContext,
    hover_pos: Option<Pos2>,
    events: &mut Vec<BoardEvent>,
) {
    let Some(pos) = hover_pos else { return };
    if !ctx.canvas_rect.contains(pos) || ctx.blocked.iter().any(|r| r.contains(pos)) {
        return;
    }

    for (egui_button, button) in [
        (egui::PointerButton::Primary, PointerButton::Primary),
        (egui::PointerButton::Secondary, PointerButton::Secondary),
        (egui::PointerButton::Middle, PointerButton::Middle),
    ] {
        if ctx.ui.input(|i| i.pointer.button_pressed(egui_button)) {
            let local = Pos2::ZERO + (pos - ctx.origin);
            events.push(BoardEvent::PointerDown(PointerEvent {
                pos: to_point(local),
                button,
                target: hit_test(state, ctx.graph, ctx.engine, ctx.theme, local),
            }));
        }
    }
}

/// Resolve what a press at `local` landed on: an output port, then a node,
/// then an edge, otherwise the canvas.
pub(crate) fn hit_test(
    state: &BoardWidgetState,
    graph: &Graph,
    engine: &InteractionEngine,
    theme: &BoardTheme,
    local: Pos2,
) -> PointerTarget {
    if let Some((node, index)) = state
        .layout
        .port_at(local, PortSide::Output, theme.port_hit_radius)
    {
        return PointerTarget::OutputPort { node, index };
    }
    if let Some(node) = state.layout.node_at(local) {
        return PointerTarget::Node(node);
    }

    let scale = engine.scale();
    let scroll = state.viewport.scroll_offset();
    let edge = graph.edges().iter().rev().find(|edge| {
        let from = to_pos2(to_screen_space(edge.curr_start, scroll, scale));
        let to = to_pos2(to_screen_space(edge.curr_end, scroll, scale));
        distance_to_bezier(local, from, to) < theme.edge_hit_distance
    });
    match edge {
        Some(edge) => PointerTarget::Edge(edge.id),
        None => PointerTarget::Canvas,
    }
}

/// Emit leave/enter pairs when the input port under the pointer changes.
fn handle_hover(
    state: &mut BoardWidgetState,
    ctx: &InputContext,
    hover_pos: Option<Pos2>,
    events: &mut Vec<BoardEvent>,
) {
    let current = hover_pos.and_then(|p| {
        let local = Pos2::ZERO + (p - ctx.origin);
        state
            .layout
            .port_at(local, PortSide::Input, ctx.theme.port_hit_radius)
    });
    if current == state.hovered_input {
        return;
    }
    if let Some((node, index)) = state.hovered_input {
        events.push(BoardEvent::InputLeave { node, index });
    }
    if let Some((node, index)) = current {
        events.push(BoardEvent::InputEnter { node, index });
    }
    state.hovered_input = current;
}
