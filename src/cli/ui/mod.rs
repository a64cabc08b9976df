pub mod dashboard_renderer;
pub mod navigation;
pub mod table_renderer;
