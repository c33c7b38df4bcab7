//! Pointer-drag reordering.
//!
//! While the pointer moves, the UI feeds hover positions into a
//! [`DragSession`]; these only update the candidate drop index. History is
//! touched once, when the session is dropped and turned into a single
//! [`Action::Move`]. Abandoning a drag is just letting the session go out of
//! scope.

use crate::action::Action;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropPosition {
    Before,
    After,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DragSession {
    from: usize,
    item_count: usize,
    /// Gap between rows the pointer is over, in `0..=item_count`.
    gap: usize,
}

impl DragSession {
    /// Starts dragging the row at `from`. Returns `None` if `from` is not a
    /// row of a list with `item_count` rows.
    pub fn begin(from: usize, item_count: usize) -> Option<Self> {
        (from < item_count).then_some(Self {
            from,
            item_count,
            gap: from,
        })
    }

    pub fn source_index(&self) -> usize {
        self.from
    }

    /// Index the dragged row would occupy if dropped now.
    pub fn candidate(&self) -> usize {
        reorder_to_index_from_gap(self.from, self.gap, self.item_count)
    }

    /// Pointer is in the gap before row `gap` (or after the last row when
    /// `gap == item_count`).
    pub fn hover_gap(&mut self, gap: usize) {
        self.gap = gap.min(self.item_count);
    }

    /// Resolves the gap from the pointer's vertical position and the
    /// midpoints of every row, top to bottom.
    pub fn hover_midpoints(&mut self, pointer_y: f32, midpoints: &[f32]) {
        let gap = midpoints.iter().take_while(|mid| pointer_y > **mid).count();
        self.hover_gap(gap);
    }

    pub fn hover_row(&mut self, row: usize, position: DropPosition) {
        let gap = match position {
            DropPosition::Before => row,
            DropPosition::After => row.saturating_add(1),
        };
        self.hover_gap(gap);
    }

    pub fn hover_after_last(&mut self) {
        self.hover_gap(self.item_count);
    }

    /// Ends the drag. Yields a move only if the row would actually change
    /// position.
    pub fn drop_action(self) -> Option<Action> {
        let to = self.candidate();
        (to != self.from).then_some(Action::Move {
            from: self.from,
            to,
        })
    }
}

/// Which half of a row the pointer is over.
pub fn drop_position(pointer_y: f32, row_top: f32, row_height: f32) -> DropPosition {
    if pointer_y < row_top + row_height / 2.0 {
        DropPosition::Before
    } else {
        DropPosition::After
    }
}

fn reorder_to_index_from_gap(from_ix: usize, gap_index: usize, item_count: usize) -> usize {
    let mut to_ix = gap_index;
    if to_ix > from_ix {
        to_ix = to_ix.saturating_sub(1);
    }
    to_ix.min(item_count.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gap_maps_to_destination_index() {
        assert_eq!(reorder_to_index_from_gap(0, 0, 3), 0);
        assert_eq!(reorder_to_index_from_gap(0, 1, 3), 0);
        assert_eq!(reorder_to_index_from_gap(0, 2, 3), 1);
        assert_eq!(reorder_to_index_from_gap(0, 3, 3), 2);
        assert_eq!(reorder_to_index_from_gap(2, 0, 3), 0);
        assert_eq!(reorder_to_index_from_gap(2, 3, 3), 2);
    }

    #[test]
    fn drop_position_splits_row_at_midpoint() {
        assert_eq!(drop_position(104.0, 100.0, 20.0), DropPosition::Before);
        assert_eq!(drop_position(110.0, 100.0, 20.0), DropPosition::After);
    }
}
