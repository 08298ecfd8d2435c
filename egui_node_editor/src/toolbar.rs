//! Add-node form and delete button shown above the board.

use egui::{Color32, Ui};
use log::debug;
use node_board::{BoardError, BoardEvent, PortCounts, PortSide};

/// Text fields for the input and output counts of the next node.
pub struct AddNodeForm {
    pub inputs: String,
    pub outputs: String,
    pub error: Option<String>,
}

impl Default for AddNodeForm {
    fn default() -> Self {
        Self {
            inputs: "1".to_string(),
            outputs: "1".to_string(),
            error: None,
        }
    }
}

impl AddNodeForm {
    /// Parse and range-check both fields.
    pub fn validate(&self, max_ports: usize) -> Result<PortCounts, BoardError> {
        let inputs = parse_count(PortSide::Input, &self.inputs)?;
        let outputs = parse_count(PortSide::Output, &self.outputs)?;
        PortCounts::new(inputs, outputs, max_ports)
    }

    /// Submit the form: an event on success, an error message otherwise.
    pub fn submit(&mut self, max_ports: usize) -> Option<BoardEvent> {
        match self.validate(max_ports) {
            Ok(counts) => {
                self.error = None;
                Some(BoardEvent::AddNode(counts))
            }
            Err(e) => {
                debug!("Add node rejected: {}", e);
                self.error = Some(e.to_string());
                None
            }
        }
    }
}

fn parse_count(side: PortSide, text: &str) -> Result<i64, BoardError> {
    let text = text.trim();
    text.parse::<i64>()
        .map_err(|_| BoardError::PortCountNotANumber {
            side,
            text: text.to_string(),
        })
}

/// Show the toolbar. Returns the events the user triggered.
pub(crate) fn show_toolbar(
    ui: &mut Ui,
    form: &mut AddNodeForm,
    max_ports: usize,
    node_selected: bool,
    delete_color: Color32,
) -> Vec<BoardEvent> {
    let mut events = Vec::new();
    ui.horizontal(|ui| {
        ui.label("Inputs");
        ui.add(egui::TextEdit::singleline(&mut form.inputs).desired_width(32.0));
        ui.label("Outputs");
        ui.add(egui::TextEdit::singleline(&mut form.outputs).desired_width(32.0));
        if ui.button("Add node").clicked() {
            events.extend(form.submit(max_ports));
        }

        if node_selected {
            ui.separator();
            let delete = egui::Button::new(egui::RichText::new("Delete node").color(delete_color));
            if ui.add(delete).clicked() {
                events.push(BoardEvent::DeleteSelectedNode);
            }
        }

        if let Some(error) = &form.error {
            ui.separator();
            ui.colored_label(delete_color, error);
        }
    });
    events
}
