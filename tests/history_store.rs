use eframe_sketch::{HistoryStore, Shape, ToolKind};
use egui::{Color32, Pos2};

// Helper to create a distinguishable shape
fn create_test_shape(n: u32) -> Shape {
    Shape::new(
        Pos2::new(n as f32, 0.0),
        Pos2::new(n as f32, 10.0),
        Color32::BLUE,
        ToolKind::Line,
        n + 1,
    )
}

fn create_history(count: u32) -> HistoryStore {
    let mut history = HistoryStore::new();
    for n in 0..count {
        history.commit(create_test_shape(n));
    }
    history
}

#[test]
fn test_snapshot_preserves_commit_order() {
    let history = create_history(4);
    let expected: Vec<Shape> = (0..4).map(create_test_shape).collect();
    assert_eq!(history.snapshot(), expected.as_slice());
}

#[test]
fn test_snapshot_length_is_commits_minus_net_undos() {
    let mut history = create_history(5);
    history.undo();
    history.undo();
    history.undo();
    history.redo();

    assert_eq!(history.len(), 5 - 3 + 1);
    assert_eq!(history.redo_len(), 2);
    assert_eq!(
        history.snapshot(),
        &[create_test_shape(0), create_test_shape(1), create_test_shape(2)]
    );
}

#[test]
fn test_undo_then_redo_restores_state() {
    let mut history = create_history(3);
    let before = history.snapshot().to_vec();

    let undone = history.undo().unwrap();
    let redone = history.redo().unwrap();

    assert_eq!(undone, redone);
    assert_eq!(history.snapshot(), before.as_slice());
    assert_eq!(history.redo_len(), 0);
}

#[test]
fn test_commit_after_undo_invalidates_redo() {
    let mut history = create_history(3);
    history.undo();
    history.undo();
    history.commit(create_test_shape(9));

    assert_eq!(history.len(), 2);
    assert_eq!(history.redo_len(), 0);
    assert_eq!(history.redo(), None);
    assert_eq!(history.snapshot(), &[create_test_shape(0), create_test_shape(9)]);
}

#[test]
fn test_redo_buffer_only_fills_through_undo() {
    let mut history = create_history(2);
    assert!(!history.can_redo());

    history.undo();
    assert!(history.can_redo());

    history.commit(create_test_shape(7));
    assert!(!history.can_redo());
}

#[test]
fn test_clear_empties_both_sequences() {
    let mut history = create_history(4);
    history.undo();
    history.clear();

    assert!(history.snapshot().is_empty());
    assert!(history.redo_buffer().is_empty());
    assert_eq!(history.undo(), None);
    assert_eq!(history.redo(), None);

    // Clearing an already empty history is fine
    history.clear();
    assert!(history.is_empty());
}

#[test]
fn test_undo_on_empty_history_does_not_mutate() {
    let mut history = create_history(1);
    history.undo();
    assert_eq!(history.undo(), None);
    assert_eq!(history.redo_len(), 1);
}
