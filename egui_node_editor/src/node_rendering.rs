//! Node layout computation and drawing primitives.

use egui::{self, Color32, Pos2, Rect, Stroke, StrokeKind, Vec2};
use node_board::Node;

use crate::theme::BoardTheme;

/// Pre-computed screen layout for a node.
pub(crate) struct NodeLayout {
    pub rect: Rect,
    pub header_h: f32,
    pub port_r: f32,
    pub rounding: f32,
    pub inputs: Vec<Pos2>,
    pub outputs: Vec<Pos2>,
}

/// Lay out `node` with its canvas position mapped to
/// `origin + position * scale - scroll`.
pub(crate) fn layout_node(
    node: &Node,
    origin: Pos2,
    scroll: Vec2,
    scale: f32,
    theme: &BoardTheme,
) -> NodeLayout {
    let top_left = origin + Vec2::new(node.curr_position.x, node.curr_position.y) * scale - scroll;
    let header_h = theme.header_height * scale;
    let row_h = theme.port_row_height * scale;
    let rows = node.ports.inputs().max(node.ports.outputs()).max(1);
    let size = Vec2::new(
        theme.node_width * scale,
        header_h + rows as f32 * row_h + 6.0 * scale,
    );
    let rect = Rect::from_min_size(top_left, size);

    let row_center = |i: usize| rect.min.y + header_h + (i as f32 + 0.5) * row_h;
    let inputs = (0..node.ports.inputs())
        .map(|i| Pos2::new(rect.min.x, row_center(i)))
        .collect();
    let outputs = (0..node.ports.outputs())
        .map(|i| Pos2::new(rect.max.x, row_center(i)))
        .collect();

    NodeLayout {
        rect,
        header_h,
        port_r: theme.port_radius * scale,
        rounding: theme.node_rounding * scale,
        inputs,
        outputs,
    }
}

/// Draw the node body, header and selection outline.
pub(crate) fn draw_node_chrome(
    painter: &egui::Painter,
    layout: &NodeLayout,
    theme: &BoardTheme,
    title: &str,
    is_selected: bool,
    scale: f32,
) {
    painter.rect_filled(layout.rect, layout.rounding, theme.node_body_color);

    let header_rect = Rect::from_min_size(
        layout.rect.min,
        Vec2::new(layout.rect.width(), layout.header_h),
    );
    let r = layout.rounding.min(255.0) as u8;
    painter.rect_filled(
        header_rect,
        egui::CornerRadius {
            nw: r,
            ne: r,
            sw: 0,
            se: 0,
        },
        theme.node_header_color,
    );
    painter.text(
        header_rect.center(),
        egui::Align2::CENTER_CENTER,
        title,
        egui::FontId::proportional(11.0 * scale),
        Color32::WHITE,
    );

    if is_selected {
        painter.rect_stroke(
            layout.rect,
            layout.rounding,
            Stroke::new(2.0 * scale, theme.selection_color),
            StrokeKind::Outside,
        );
    }
}

/// Draw input and output ports. `hovered_input` highlights one input.
pub(crate) fn draw_ports(
    painter: &egui::Painter,
    layout: &NodeLayout,
    theme: &BoardTheme,
    hovered_input: Option<usize>,
) {
    for (i, &p) in layout.inputs.iter().enumerate() {
        let color = if hovered_input == Some(i) {
            theme.hovered_port_color
        } else {
            theme.input_port_color
        };
        painter.circle_filled(p, layout.port_r, color);
    }
    for &p in &layout.outputs {
        painter.circle_filled(p, layout.port_r, theme.output_port_color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use node_board::{Graph, PortCounts, Size};

    fn node(inputs: i64, outputs: i64) -> Node {
        let mut graph = Graph::with_seed(0);
        let ports = PortCounts::new(inputs, outputs, 4).unwrap();
        let mut node = graph
            .add_node(ports, node_board::Point::ZERO, Size::default())
            .clone();
        node.curr_position = node_board::Point::new(100.0, 50.0);
        node
    }

    #[test]
    fn layout_maps_canvas_position_through_scale_and_scroll() {
        let theme = BoardTheme::default();
        let layout = layout_node(
            &node(1, 1),
            Pos2::new(10.0, 20.0),
            Vec2::new(30.0, 40.0),
            2.0,
            &theme,
        );
        assert_eq!(layout.rect.min, Pos2::new(10.0 + 200.0 - 30.0, 20.0 + 100.0 - 40.0));
        assert_eq!(layout.rect.width(), theme.node_width * 2.0);
    }

    #[test]
    fn ports_sit_on_node_edges_one_per_row() {
        let theme = BoardTheme::default();
        let layout = layout_node(&node(2, 3), Pos2::ZERO, Vec2::ZERO, 1.0, &theme);
        assert_eq!(layout.inputs.len(), 2);
        assert_eq!(layout.outputs.len(), 3);
        for p in &layout.inputs {
            assert_eq!(p.x, layout.rect.min.x);
        }
        for p in &layout.outputs {
            assert_eq!(p.x, layout.rect.max.x);
        }
        assert!(layout.outputs[1].y - layout.outputs[0].y == theme.port_row_height);
        assert!(layout.rect.contains(layout.inputs[0] + Vec2::new(1.0, 0.0)));
    }
}
