use crate::config::AppConfig;
use crate::editor::Editor;
use crate::input::CanvasInput;
use crate::panels::{central_panel, tools_panel};
use crate::renderer::Renderer;

/// The sketch application: sidebar on the left, canvas filling the rest.
///
/// All state lives for the window's lifetime only; closing discards it.
pub struct SketchApp {
    config: AppConfig,
    editor: Editor,
    renderer: Renderer,
    input: CanvasInput,
}

impl Default for SketchApp {
    fn default() -> Self {
        Self::with_config(AppConfig::default())
    }
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        Self::with_config(config)
    }

    pub fn with_config(config: AppConfig) -> Self {
        let editor = Editor::new(config.initial_settings);
        Self {
            config,
            editor,
            renderer: Renderer::new(),
            input: CanvasInput::new(),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut Editor {
        &mut self.editor
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn input_mut(&mut self) -> &mut CanvasInput {
        &mut self.input
    }
}

impl eframe::App for SketchApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        tools_panel(self, ctx);
        central_panel(self, ctx);
    }
}
