use egui::{Event, PointerButton, Pos2, Response};

use crate::shape::Point;

/// Pointer events delivered from the canvas widget to the editor
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primary button pressed on the canvas
    Down(Point),
    /// Pointer moved while the button is held
    Move(Point),
    /// Button released, possibly outside the canvas
    Up(Point),
    /// The drag ended without a usable release position
    CaptureLost,
}

/// What egui reported about the canvas drag during one frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragSample {
    pub started: bool,
    pub dragging: bool,
    pub stopped: bool,
    /// Screen position of the pointer, if egui still knows it
    pub pos: Option<Pos2>,
    /// Press and release positions of a primary click that started and
    /// ended within this frame; egui reports no drag for it
    pub click: Option<(Pos2, Pos2)>,
}

impl DragSample {
    pub fn from_response(response: &Response) -> Self {
        let pos = response
            .interact_pointer_pos()
            .or_else(|| response.ctx.input(|input| input.pointer.latest_pos()));
        let click = response
            .ctx
            .input(|input| same_frame_click(&input.events))
            .filter(|(origin, _)| response.rect.contains(*origin));
        Self {
            started: response.drag_started(),
            dragging: response.dragged(),
            stopped: response.drag_stopped(),
            pos,
            click,
        }
    }
}

/// First primary press in `events` followed by a primary release
fn same_frame_click(events: &[Event]) -> Option<(Pos2, Pos2)> {
    let mut origin = None;
    for event in events {
        if let Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed,
            ..
        } = event
        {
            match origin {
                None if *pressed => origin = Some(*pos),
                Some(origin) if !*pressed => return Some((origin, *pos)),
                _ => {}
            }
        }
    }
    None
}

/// Converts per-frame drag samples into canvas-local pointer events.
///
/// Moves are only emitted when the position actually changes. A drag that
/// disappears without a release, or a release with no known position, is
/// reported as `CaptureLost` so the editor never stays stuck mid-interaction.
#[derive(Debug, Default)]
pub struct CanvasInput {
    origin: Pos2,
    last_pos: Option<Point>,
    pressed: bool,
}

impl CanvasInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the screen position of the canvas' top-left corner
    pub fn set_origin(&mut self, origin: Pos2) {
        self.origin = origin;
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    fn to_canvas(&self, pos: Pos2) -> Point {
        (pos - self.origin).to_pos2()
    }

    /// Process one frame of drag state and generate pointer events
    pub fn process(&mut self, sample: DragSample) -> Vec<PointerEvent> {
        let mut events = Vec::new();
        let pos = sample.pos.map(|pos| self.to_canvas(pos));

        if let (false, Some((origin, release))) = (self.pressed, sample.click) {
            events.push(PointerEvent::Down(self.to_canvas(origin)));
            events.push(PointerEvent::Up(self.to_canvas(release)));
            return events;
        }

        if sample.started {
            if let Some(pos) = pos {
                events.push(PointerEvent::Down(pos));
                self.pressed = true;
                self.last_pos = Some(pos);
            }
        } else if sample.dragging && self.pressed {
            if let Some(pos) = pos {
                if self.last_pos != Some(pos) {
                    events.push(PointerEvent::Move(pos));
                    self.last_pos = Some(pos);
                }
            }
        }

        if self.pressed && sample.stopped {
            events.push(match pos {
                Some(pos) => PointerEvent::Up(pos),
                None => PointerEvent::CaptureLost,
            });
            self.reset();
        } else if self.pressed && !sample.started && !sample.dragging {
            log::debug!("Drag vanished without a release");
            events.push(PointerEvent::CaptureLost);
            self.reset();
        }

        events
    }

    fn reset(&mut self) {
        self.pressed = false;
        self.last_pos = None;
    }
}
