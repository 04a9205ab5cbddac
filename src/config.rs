use std::ops::RangeInclusive;

use crate::settings::ToolSettings;

/// Startup configuration for the sketch window and its sidebar.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub title: String,
    pub inner_size: [f32; 2],
    pub min_inner_size: [f32; 2],
    pub sidebar_width: f32,
    /// Range offered by the brush size slider
    pub brush_size_range: RangeInclusive<u32>,
    /// Tool, color and brush size a new session starts with
    pub initial_settings: ToolSettings,
    /// `env_logger` filter, e.g. "eframe_sketch=debug"; `RUST_LOG` applies when unset
    pub log_filter: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Sketch".to_owned(),
            inner_size: [1280.0, 800.0],
            min_inner_size: [640.0, 480.0],
            sidebar_width: 300.0,
            brush_size_range: 1..=50,
            initial_settings: ToolSettings::default(),
            log_filter: None,
        }
    }
}

impl AppConfig {
    pub fn viewport(&self) -> egui::ViewportBuilder {
        egui::ViewportBuilder::default()
            .with_title(self.title.clone())
            .with_inner_size(self.inner_size)
            .with_min_inner_size(self.min_inner_size)
    }

    /// Clamp a brush size into the slider range
    pub fn clamp_brush_size(&self, size: u32) -> u32 {
        size.clamp(*self.brush_size_range.start(), *self.brush_size_range.end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_brush_size_is_inside_slider_range() {
        let config = AppConfig::default();
        assert!(config.brush_size_range.contains(&config.initial_settings.brush_size()));
    }

    #[test]
    fn test_clamp_brush_size() {
        let config = AppConfig::default();
        assert_eq!(config.clamp_brush_size(0), 1);
        assert_eq!(config.clamp_brush_size(20), 20);
        assert_eq!(config.clamp_brush_size(400), 50);
    }
}
