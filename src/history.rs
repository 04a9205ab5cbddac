use crate::shape::Shape;

/// Ordered log of committed shapes plus the redo buffer for undo/redo.
///
/// Insertion order is drawing order: earlier shapes are painted first.
/// History is linear; committing a new shape discards anything that was
/// undone before it.
#[derive(Debug, Default, Clone)]
pub struct HistoryStore {
    /// Shapes currently on the canvas
    committed: Vec<Shape>,
    /// Undone shapes, most recently undone last
    redo_buffer: Vec<Shape>,
}

impl HistoryStore {
    /// Creates a new empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a shape and invalidate the redo buffer
    pub fn commit(&mut self, shape: Shape) {
        self.committed.push(shape);
        self.redo_buffer.clear();
    }

    /// Move the most recent shape onto the redo buffer.
    ///
    /// Returns `None` and leaves the state untouched when there is nothing
    /// to undo.
    pub fn undo(&mut self) -> Option<Shape> {
        let shape = self.committed.pop()?;
        self.redo_buffer.push(shape);
        Some(shape)
    }

    /// Move the most recently undone shape back onto the canvas
    pub fn redo(&mut self) -> Option<Shape> {
        let shape = self.redo_buffer.pop()?;
        self.committed.push(shape);
        Some(shape)
    }

    /// Drop both the committed shapes and the redo buffer
    pub fn clear(&mut self) {
        self.committed.clear();
        self.redo_buffer.clear();
    }

    /// Committed shapes in drawing order
    pub fn snapshot(&self) -> &[Shape] {
        &self.committed
    }

    /// Undone shapes, most recently undone last
    pub fn redo_buffer(&self) -> &[Shape] {
        &self.redo_buffer
    }

    pub fn len(&self) -> usize {
        self.committed.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.committed.is_empty()
    }

    /// Returns true if there are shapes that can be undone
    pub fn can_undo(&self) -> bool {
        !self.committed.is_empty()
    }

    /// Returns true if there are shapes that can be redone
    pub fn can_redo(&self) -> bool {
        !self.redo_buffer.is_empty()
    }
}
