use egui::{Color32, Pos2, Rect};
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Canvas-local coordinate of a pointer sample.
pub type Point = Pos2;

/// The drawing tools offered by the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ToolKind {
    #[default]
    Brush,
    Line,
    Rectangle,
    Oval,
}

impl ToolKind {
    /// All tools in sidebar order
    pub const ALL: [ToolKind; 4] = [Self::Brush, Self::Line, Self::Rectangle, Self::Oval];

    pub fn name(self) -> &'static str {
        match self {
            Self::Brush => "Brush",
            Self::Line => "Line",
            Self::Rectangle => "Rectangle",
            Self::Oval => "Oval",
        }
    }

    /// Brush commits while dragging; the other tools commit once on release.
    pub fn is_freehand(self) -> bool {
        matches!(self, Self::Brush)
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ToolKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|tool| tool.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ConfigError::UnknownTool(s.to_string()))
    }
}

/// A committed drawing record.
///
/// Shapes are immutable: the history only ever appends or removes whole
/// records, so every field is fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shape {
    start: Point,
    end: Point,
    color: Color32,
    tool: ToolKind,
    brush_size: u32,
}

impl Shape {
    pub fn new(start: Point, end: Point, color: Color32, tool: ToolKind, brush_size: u32) -> Self {
        Self {
            start,
            end,
            color,
            tool,
            brush_size,
        }
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn tool(&self) -> ToolKind {
        self.tool
    }

    pub fn brush_size(&self) -> u32 {
        self.brush_size
    }

    /// Stroke width / dab diameter in canvas units
    pub fn width(&self) -> f32 {
        self.brush_size as f32
    }

    /// Box spanned by `start` and `end`, normalized so that the drag
    /// direction does not matter.
    pub fn bounds(&self) -> Rect {
        Rect::from_min_max(
            Pos2::new(self.start.x.min(self.end.x), self.start.y.min(self.end.y)),
            Pos2::new(self.start.x.max(self.end.x), self.start.y.max(self.end.y)),
        )
    }
}
