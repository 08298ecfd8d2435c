//! egui front end for the node board.
//!
//! [`BoardWidget`] draws a [`node_board::Graph`], measures port centers, and
//! forwards pointer and wheel input to a [`node_board::InteractionEngine`].
//! It never mutates the graph itself.

pub mod drawing;
pub mod node_rendering;
pub mod state;
pub mod theme;
pub mod toolbar;
pub mod widget;

mod interactions;

pub use state::{BoardWidgetState, PortLayout};
pub use theme::BoardTheme;
pub use toolbar::AddNodeForm;
pub use widget::BoardWidget;
