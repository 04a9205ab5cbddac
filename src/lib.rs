#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod config;
pub mod editor;
pub mod error;
pub mod history;
pub mod input;
pub mod logging;
pub mod panels;
pub mod renderer;
pub mod settings;
pub mod shape;
pub mod stroke_builder;

pub use app::SketchApp;
pub use config::AppConfig;
pub use editor::Editor;
pub use error::{ConfigError, ConfigResult};
pub use history::HistoryStore;
pub use input::{CanvasInput, PointerEvent};
pub use renderer::{Renderer, Surface};
pub use settings::ToolSettings;
pub use shape::{Point, Shape, ToolKind};
pub use stroke_builder::{InteractionState, StrokeBuilder};
