//! UI Components
//!
//! Leptos components for the ramen checklist.

mod control_panel;
mod data_panel;
mod ramen_row;

pub use control_panel::ControlPanel;
pub use data_panel::DataPanel;
pub use ramen_row::RamenRow;
