pub mod app;
pub mod state_panel;
pub mod transform_controls;
pub mod viewer;
