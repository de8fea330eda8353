pub mod analysis_panel;
pub mod app;
pub mod formation_panel;
pub mod pitch_view;
pub mod timeline;
pub mod toolbar;
