//! Theming for the board.

use egui::Color32;

/// Sizes are in canvas units and are multiplied by the zoom scale.
pub struct BoardTheme {
    /// Node width.
    pub node_width: f32,
    /// Header height.
    pub header_height: f32,
    /// Height of one port row.
    pub port_row_height: f32,
    /// Port circle radius.
    pub port_radius: f32,
    /// Corner rounding for nodes.
    pub node_rounding: f32,
    /// Pointer distance, in screen pixels, within which a port is hit.
    pub port_hit_radius: f32,
    /// Pointer distance, in screen pixels, within which an edge is hit.
    pub edge_hit_distance: f32,
    /// Board size as a multiple of the visible area.
    pub board_extent: f32,
    pub background_color: Color32,
    pub grid_color: Color32,
    pub grid_spacing: f32,
    pub node_body_color: Color32,
    pub node_header_color: Color32,
    pub selection_color: Color32,
    pub input_port_color: Color32,
    pub output_port_color: Color32,
    pub hovered_port_color: Color32,
    pub edge_color: Color32,
    pub edge_selected_color: Color32,
    pub pending_edge_color: Color32,
    pub delete_color: Color32,
}

impl Default for BoardTheme {
    fn default() -> Self {
        Self {
            node_width: 120.0,
            header_height: 22.0,
            port_row_height: 18.0,
            port_radius: 5.0,
            node_rounding: 6.0,
            port_hit_radius: 10.0,
            edge_hit_distance: 6.0,
            board_extent: 3.0,
            background_color: Color32::from_rgb(30, 30, 30),
            grid_color: Color32::from_rgb(40, 40, 40),
            grid_spacing: 40.0,
            node_body_color: Color32::from_rgb(45, 45, 50),
            node_header_color: Color32::from_rgb(60, 100, 160),
            selection_color: Color32::from_rgb(100, 150, 255),
            input_port_color: Color32::from_rgb(109, 238, 150),
            output_port_color: Color32::from_rgb(238, 207, 109),
            hovered_port_color: Color32::WHITE,
            edge_color: Color32::from_rgb(180, 180, 180),
            edge_selected_color: Color32::from_rgb(100, 150, 255),
            pending_edge_color: Color32::from_rgb(200, 200, 200),
            delete_color: Color32::from_rgb(200, 70, 70),
        }
    }
}
