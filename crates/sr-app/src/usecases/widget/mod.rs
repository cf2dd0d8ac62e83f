pub mod render_widget_block;
pub mod update_widget_settings;

pub use render_widget_block::RenderWidgetBlock;
pub use update_widget_settings::UpdateWidgetSettings;
