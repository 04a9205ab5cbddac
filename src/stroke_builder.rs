use crate::history::HistoryStore;
use crate::settings::ToolSettings;
use crate::shape::{Point, Shape};

/// Where the builder is within a press / move / release interaction
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    Active {
        /// Press location, or the end of the last brush segment
        anchor: Point,
        /// Latest pointer position
        current: Point,
    },
}

/// Turns raw pointer interactions into history commits.
///
/// Brush commits a dab on press and a segment on every move. Line,
/// Rectangle and Oval only track the pointer while dragging and commit a
/// single shape on release.
#[derive(Debug, Default, Clone)]
pub struct StrokeBuilder {
    state: InteractionState,
}

impl StrokeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, InteractionState::Active { .. })
    }

    /// Name of the current state for status display
    pub fn state_name(&self) -> &'static str {
        match self.state {
            InteractionState::Idle => "Idle",
            InteractionState::Active { .. } => "Drawing",
        }
    }

    /// Start an interaction. A second press while active is ignored.
    pub fn on_pointer_down(&mut self, pos: Point, settings: &ToolSettings, history: &mut HistoryStore) {
        if self.is_active() {
            log::trace!("Ignoring pointer down at {:?}: interaction already active", pos);
            return;
        }

        if settings.tool().is_freehand() {
            history.commit(Self::shape(pos, pos, settings));
        }
        self.state = InteractionState::Active {
            anchor: pos,
            current: pos,
        };
    }

    pub fn on_pointer_move(&mut self, pos: Point, settings: &ToolSettings, history: &mut HistoryStore) {
        let InteractionState::Active { anchor, current } = self.state else {
            log::trace!("Ignoring pointer move at {:?} while idle", pos);
            return;
        };

        if settings.tool().is_freehand() {
            log::trace!("Brush segment {:?} -> {:?}", current, pos);
            history.commit(Self::shape(current, pos, settings));
            self.state = InteractionState::Active {
                anchor: pos,
                current: pos,
            };
        } else {
            self.state = InteractionState::Active { anchor, current: pos };
        }
    }

    /// Finish the interaction, committing the dragged shape for non-brush tools
    pub fn on_pointer_up(&mut self, pos: Point, settings: &ToolSettings, history: &mut HistoryStore) {
        let InteractionState::Active { anchor, .. } = self.state else {
            log::trace!("Ignoring pointer up at {:?} while idle", pos);
            return;
        };

        if !settings.tool().is_freehand() {
            let shape = Self::shape(anchor, pos, settings);
            log::debug!("Committing {} from {:?} to {:?}", shape.tool(), anchor, pos);
            history.commit(shape);
        }
        self.state = InteractionState::Idle;
    }

    /// Force the builder back to idle after losing pointer capture.
    ///
    /// Brush segments are already committed; an uncommitted Line, Rectangle
    /// or Oval preview is discarded.
    pub fn cancel(&mut self) {
        if self.is_active() {
            log::debug!("Pointer capture lost, abandoning interaction");
        }
        self.state = InteractionState::Idle;
    }

    /// Transient shape for the live preview of non-brush tools
    pub fn preview(&self, settings: &ToolSettings) -> Option<Shape> {
        match self.state {
            InteractionState::Active { anchor, current } if !settings.tool().is_freehand() => {
                Some(Self::shape(anchor, current, settings))
            }
            _ => None,
        }
    }

    fn shape(start: Point, end: Point, settings: &ToolSettings) -> Shape {
        Shape::new(start, end, settings.color(), settings.tool(), settings.brush_size())
    }
}
