use eframe::egui::{self, Color32, Painter, Pos2, Rect, Stroke as EguiStroke};

use crate::editor::Editor;
use crate::shape::{Point, Shape, ToolKind};

/// Number of segments used to approximate an oval outline
const ELLIPSE_SEGMENTS: usize = 64;

/// Background color of the drawing area
pub const CANVAS_BACKGROUND: Color32 = Color32::WHITE;

/// Drawing target for shapes, in canvas-local coordinates.
pub trait Surface {
    fn line(&mut self, from: Point, to: Point, width: f32, color: Color32);

    /// Axis-aligned outline
    fn rect(&mut self, rect: Rect, width: f32, color: Color32);

    /// Outline of the ellipse inscribed in `rect`
    fn ellipse(&mut self, rect: Rect, width: f32, color: Color32);

    /// Filled circle
    fn dab(&mut self, center: Point, diameter: f32, color: Color32);
}

/// Paint a single shape onto a surface
pub fn draw_shape<S: Surface + ?Sized>(surface: &mut S, shape: &Shape) {
    let width = shape.width();
    let color = shape.color();
    match shape.tool() {
        ToolKind::Line => surface.line(shape.start(), shape.end(), width, color),
        ToolKind::Rectangle => surface.rect(shape.bounds(), width, color),
        ToolKind::Oval => surface.ellipse(shape.bounds(), width, color),
        ToolKind::Brush => surface.dab(shape.start(), width, color),
    }
}

/// Points on the ellipse inscribed in `rect`
pub fn ellipse_polyline(rect: Rect, segments: usize) -> Vec<Pos2> {
    let center = rect.center();
    let rx = rect.width() * 0.5;
    let ry = rect.height() * 0.5;

    (0..segments)
        .map(|i| {
            let t = (i as f32 / segments as f32) * std::f32::consts::TAU;
            Pos2::new(center.x + rx * t.cos(), center.y + ry * t.sin())
        })
        .collect()
}

/// An egui painter whose coordinates are offset by the canvas origin
pub struct CanvasPainter<'a> {
    painter: &'a Painter,
    origin: Pos2,
}

impl<'a> CanvasPainter<'a> {
    pub fn new(painter: &'a Painter, origin: Pos2) -> Self {
        Self { painter, origin }
    }

    fn to_screen(&self, pos: Point) -> Pos2 {
        self.origin + pos.to_vec2()
    }

    fn rect_to_screen(&self, rect: Rect) -> Rect {
        rect.translate(self.origin.to_vec2())
    }
}

impl Surface for CanvasPainter<'_> {
    fn line(&mut self, from: Point, to: Point, width: f32, color: Color32) {
        self.painter.line_segment(
            [self.to_screen(from), self.to_screen(to)],
            EguiStroke::new(width, color),
        );
    }

    fn rect(&mut self, rect: Rect, width: f32, color: Color32) {
        self.painter
            .rect_stroke(self.rect_to_screen(rect), 0.0, EguiStroke::new(width, color));
    }

    fn ellipse(&mut self, rect: Rect, width: f32, color: Color32) {
        let points = ellipse_polyline(self.rect_to_screen(rect), ELLIPSE_SEGMENTS);
        self.painter
            .add(egui::Shape::closed_line(points, EguiStroke::new(width, color)));
    }

    fn dab(&mut self, center: Point, diameter: f32, color: Color32) {
        self.painter
            .circle_filled(self.to_screen(center), diameter * 0.5, color);
    }
}

/// Draws the canvas background and the editor's shapes into the canvas rect
#[derive(Debug)]
pub struct Renderer {
    background: Color32,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            background: CANVAS_BACKGROUND,
        }
    }

    pub fn background(&self) -> Color32 {
        self.background
    }

    /// Renders the current frame
    ///
    /// Args:
    ///     painter (egui::Painter): The painter to draw with, clipped to the canvas
    ///     rect (egui::Rect): The canvas rectangle; its top-left corner is the canvas origin
    ///     editor (Editor): Source of the committed shapes and the live preview
    pub fn render(&self, painter: &Painter, rect: Rect, editor: &Editor) {
        painter.rect_filled(rect, 0.0, self.background);
        let mut surface = CanvasPainter::new(painter, rect.min);
        editor.render(&mut surface);
    }
}
