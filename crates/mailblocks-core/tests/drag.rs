use mailblocks_core::{Action, BlockKind, BuilderState, DragSession, DropPosition, Outcome};

fn state_with(kinds: &[BlockKind]) -> BuilderState {
    let mut state = BuilderState::default();
    for kind in kinds {
        state.append(*kind);
    }
    state
}

#[test]
fn hovering_never_records_and_drop_records_once() {
    let mut state = state_with(&[BlockKind::Text, BlockKind::Image, BlockKind::Button]);
    let len = state.history_len();

    let mut drag = DragSession::begin(0, state.blocks().len()).unwrap();
    let midpoints = [10.0, 30.0, 50.0];
    for y in [12.0, 25.0, 35.0, 48.0, 55.0, 41.0] {
        drag.hover_midpoints(y, &midpoints);
    }
    assert_eq!(state.history_len(), len);
    assert_eq!(drag.candidate(), 1);

    let action = drag.drop_action().unwrap();
    assert_eq!(action, Action::Move { from: 0, to: 1 });
    assert_eq!(state.apply(action), Ok(Outcome::Applied));
    assert_eq!(state.history_len(), len + 1);
    assert_eq!(
        state.blocks().iter().map(|b| b.kind).collect::<Vec<_>>(),
        vec![BlockKind::Image, BlockKind::Text, BlockKind::Button]
    );
}

#[test]
fn dropping_back_in_place_yields_no_action() {
    let mut drag = DragSession::begin(1, 3).unwrap();
    drag.hover_row(2, DropPosition::After);
    drag.hover_row(1, DropPosition::Before);
    assert_eq!(drag.candidate(), 1);
    assert_eq!(drag.drop_action(), None);

    let mut drag = DragSession::begin(1, 3).unwrap();
    drag.hover_row(1, DropPosition::After);
    assert_eq!(drag.drop_action(), None);
}

#[test]
fn row_halves_and_trailing_gap_map_to_targets() {
    let mut drag = DragSession::begin(0, 4).unwrap();

    drag.hover_row(2, DropPosition::Before);
    assert_eq!(drag.candidate(), 1);
    drag.hover_row(2, DropPosition::After);
    assert_eq!(drag.candidate(), 2);
    drag.hover_after_last();
    assert_eq!(drag.candidate(), 3);

    let mut drag = DragSession::begin(3, 4).unwrap();
    drag.hover_row(0, DropPosition::Before);
    assert_eq!(drag.candidate(), 0);
    drag.hover_gap(99);
    assert_eq!(drag.candidate(), 3);
}

#[test]
fn begin_rejects_rows_outside_the_list() {
    assert!(DragSession::begin(0, 0).is_none());
    assert!(DragSession::begin(3, 3).is_none());
}

#[test]
fn abandoned_drag_leaves_list_and_history_alone() {
    let mut state = state_with(&[BlockKind::Text, BlockKind::Image]);
    let before = state.blocks().clone();
    let len = state.history_len();

    {
        let mut drag = DragSession::begin(0, state.blocks().len()).unwrap();
        drag.hover_after_last();
        assert_eq!(drag.candidate(), 1);
    }

    assert_eq!(state.blocks(), &before);
    assert_eq!(state.history_len(), len);
    assert_eq!(state.apply(Action::Undo), Ok(Outcome::Undone));
}
