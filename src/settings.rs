use egui::Color32;

use crate::error::{ConfigError, ConfigResult};
use crate::shape::ToolKind;

/// Default brush diameter for a fresh session
pub const DEFAULT_BRUSH_SIZE: u32 = 5;

/// The tool, color and brush size currently chosen in the sidebar.
///
/// The stroke builder reads these at the moment it commits, so a change made
/// mid-drag only affects shapes committed after the change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToolSettings {
    tool: ToolKind,
    color: Color32,
    brush_size: u32,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            tool: ToolKind::Brush,
            color: Color32::BLACK,
            brush_size: DEFAULT_BRUSH_SIZE,
        }
    }
}

impl ToolSettings {
    /// Build settings from already-validated parts.
    ///
    /// A zero brush size is rejected the same way the setter rejects it.
    pub fn new(tool: ToolKind, color: Color32, brush_size: u32) -> ConfigResult<Self> {
        let mut settings = Self {
            tool,
            color,
            ..Self::default()
        };
        settings.set_brush_size(i64::from(brush_size))?;
        Ok(settings)
    }

    pub fn tool(&self) -> ToolKind {
        self.tool
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn brush_size(&self) -> u32 {
        self.brush_size
    }

    pub fn set_tool(&mut self, tool: ToolKind) {
        self.tool = tool;
    }

    /// Select a tool by its display name, e.g. "Rectangle"
    pub fn set_tool_by_name(&mut self, name: &str) -> ConfigResult<()> {
        self.tool = name.parse()?;
        Ok(())
    }

    pub fn set_color(&mut self, color: Color32) {
        self.color = color;
    }

    /// Set the brush diameter; sizes of zero or below, or too large for a
    /// `u32`, are rejected and the current size is kept.
    pub fn set_brush_size(&mut self, size: i64) -> ConfigResult<()> {
        match u32::try_from(size) {
            Ok(valid) if valid > 0 => {
                self.brush_size = valid;
                Ok(())
            }
            _ => Err(ConfigError::InvalidBrushSize(size)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_fresh_session() {
        let settings = ToolSettings::default();
        assert_eq!(settings.tool(), ToolKind::Brush);
        assert_eq!(settings.color(), Color32::BLACK);
        assert_eq!(settings.brush_size(), DEFAULT_BRUSH_SIZE);
    }

    #[test]
    fn test_non_positive_brush_size_is_rejected() {
        let mut settings = ToolSettings::default();
        settings.set_brush_size(12).unwrap();

        assert_eq!(settings.set_brush_size(0), Err(ConfigError::InvalidBrushSize(0)));
        assert_eq!(settings.set_brush_size(-4), Err(ConfigError::InvalidBrushSize(-4)));
        assert_eq!(settings.brush_size(), 12);
    }

    #[test]
    fn test_oversized_brush_size_is_rejected() {
        let mut settings = ToolSettings::default();
        let too_big = i64::from(u32::MAX) + 1;

        assert_eq!(
            settings.set_brush_size(too_big),
            Err(ConfigError::InvalidBrushSize(too_big))
        );
        assert_eq!(settings.brush_size(), DEFAULT_BRUSH_SIZE);

        settings.set_brush_size(i64::from(u32::MAX)).unwrap();
        assert_eq!(settings.brush_size(), u32::MAX);
    }

    #[test]
    fn test_unknown_tool_name_keeps_current_tool() {
        let mut settings = ToolSettings::default();
        settings.set_tool_by_name("Oval").unwrap();
        assert_eq!(settings.tool(), ToolKind::Oval);

        assert!(settings.set_tool_by_name("Spray").is_err());
        assert_eq!(settings.tool(), ToolKind::Oval);
    }

    #[test]
    fn test_new_rejects_zero_brush_size() {
        assert_eq!(
            ToolSettings::new(ToolKind::Line, Color32::RED, 0),
            Err(ConfigError::InvalidBrushSize(0))
        );
        let settings = ToolSettings::new(ToolKind::Line, Color32::RED, 7).unwrap();
        assert_eq!(settings.brush_size(), 7);
    }
}
