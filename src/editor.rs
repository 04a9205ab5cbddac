use egui::Color32;

use crate::error::ConfigResult;
use crate::history::HistoryStore;
use crate::input::PointerEvent;
use crate::renderer::{Surface, draw_shape};
use crate::settings::ToolSettings;
use crate::shape::{Point, Shape, ToolKind};
use crate::stroke_builder::StrokeBuilder;

/// The drawing session: tool settings, shape history and the interaction in
/// progress.
///
/// This is the only surface the UI chrome talks to. Setters validate their
/// input and keep the previous value on rejection; pointer events feed the
/// stroke builder; undo/redo/clear forward to the history.
#[derive(Debug, Default, Clone)]
pub struct Editor {
    settings: ToolSettings,
    history: HistoryStore,
    builder: StrokeBuilder,
}

impl Editor {
    pub fn new(settings: ToolSettings) -> Self {
        Self {
            settings,
            history: HistoryStore::new(),
            builder: StrokeBuilder::new(),
        }
    }

    pub fn settings(&self) -> &ToolSettings {
        &self.settings
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn builder(&self) -> &StrokeBuilder {
        &self.builder
    }

    /// True while a press / release interaction is in progress
    pub fn is_drawing(&self) -> bool {
        self.builder.is_active()
    }

    pub fn set_tool(&mut self, tool: ToolKind) {
        if self.settings.tool() != tool {
            log::info!("Tool changed: {} -> {}", self.settings.tool(), tool);
        }
        self.settings.set_tool(tool);
    }

    pub fn set_tool_by_name(&mut self, name: &str) -> ConfigResult<()> {
        self.settings.set_tool_by_name(name).inspect_err(|err| {
            log::warn!("Rejected tool selection: {err}");
        })
    }

    pub fn set_color(&mut self, color: Color32) {
        self.settings.set_color(color);
    }

    pub fn set_brush_size(&mut self, size: i64) -> ConfigResult<()> {
        self.settings.set_brush_size(size).inspect_err(|err| {
            log::warn!("Rejected brush size: {err}");
        })
    }

    pub fn on_pointer_down(&mut self, pos: Point) {
        self.builder.on_pointer_down(pos, &self.settings, &mut self.history);
    }

    pub fn on_pointer_move(&mut self, pos: Point) {
        self.builder.on_pointer_move(pos, &self.settings, &mut self.history);
    }

    pub fn on_pointer_up(&mut self, pos: Point) {
        self.builder.on_pointer_up(pos, &self.settings, &mut self.history);
    }

    /// Drop the interaction in progress after pointer capture was lost
    pub fn cancel_interaction(&mut self) {
        self.builder.cancel();
    }

    /// Dispatch a pointer event from the canvas widget
    pub fn handle_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down(pos) => self.on_pointer_down(pos),
            PointerEvent::Move(pos) => self.on_pointer_move(pos),
            PointerEvent::Up(pos) => self.on_pointer_up(pos),
            PointerEvent::CaptureLost => self.cancel_interaction(),
        }
    }

    pub fn undo(&mut self) -> Option<Shape> {
        let shape = self.history.undo();
        match &shape {
            Some(shape) => log::debug!("Undo {} ({} left)", shape.tool(), self.history.len()),
            None => log::debug!("Nothing to undo"),
        }
        shape
    }

    pub fn redo(&mut self) -> Option<Shape> {
        let shape = self.history.redo();
        match &shape {
            Some(shape) => log::debug!("Redo {} ({} left)", shape.tool(), self.history.redo_len()),
            None => log::debug!("Nothing to redo"),
        }
        shape
    }

    pub fn clear(&mut self) {
        log::info!("Clearing canvas ({} shapes)", self.history.len());
        self.history.clear();
    }

    /// Live preview of the shape being dragged, never part of the history
    pub fn preview(&self) -> Option<Shape> {
        self.builder.preview(&self.settings)
    }

    /// Draw the committed shapes in order, then the live preview on top
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        for shape in self.history.snapshot() {
            draw_shape(surface, shape);
        }
        if let Some(preview) = self.preview() {
            draw_shape(surface, &preview);
        }
    }
}
