pub mod app;
pub mod app_header;
pub mod ar_overlay;
pub mod camera_view;
pub mod control_panel;
pub mod photo_import;
