use eframe::egui::{self, Visuals};
use egui_node_editor::{BoardTheme, BoardWidget, BoardWidgetState};
use log::info;
use node_board::{Graph, InteractionEngine};
use std::path::PathBuf;

use crate::config;

pub struct BoardApp {
    config_path: Option<PathBuf>,
    graph: Graph,
    engine: InteractionEngine,
    widget_state: BoardWidgetState,
    theme: BoardTheme,
}

impl BoardApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config_path = config::get_config_path();
        let config = config::load_config(config_path.as_deref());

        cc.egui_ctx.set_visuals(Visuals::dark());

        info!(
            "Starting board: zoom {}..={}, node deletion {:?}",
            config.zoom.min_scale,
            config.zoom.max_scale,
            config.graph.node_deletion
        );

        Self {
            graph: Graph::new(),
            engine: InteractionEngine::new(&config),
            widget_state: BoardWidgetState::new(&config),
            theme: BoardTheme::default(),
            config_path,
        }
    }

    fn status_bar(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(format!("Nodes: {}", self.graph.node_count()));
            ui.separator();
            ui.label(format!("Edges: {}", self.graph.edge_count()));
            let dangling = self.graph.dangling_edges().count();
            if dangling > 0 {
                ui.separator();
                ui.colored_label(self.theme.delete_color, format!("Dangling: {}", dangling));
            }
            ui.separator();
            ui.label(format!("Zoom: {:.0}%", self.engine.scale() * 100.0));
            if let Some(path) = &self.config_path {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.weak(path.display().to_string());
                });
            }
        });
    }
}

impl eframe::App for BoardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            self.status_bar(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let mut widget = BoardWidget::new(&mut self.widget_state, &self.theme);
            widget.show(ui, &mut self.graph, &mut self.engine);
        });
    }
}
