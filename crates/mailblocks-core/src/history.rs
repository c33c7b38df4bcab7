use crate::list::BlockList;

/// Linear undo log of whole-list snapshots.
///
/// `snapshots[cursor]` is always the displayed state and `cursor` never
/// leaves `0..snapshots.len()`. Snapshots are owned clones, so later edits to
/// the live list cannot reach back into them.
#[derive(Debug, Clone)]
pub struct History {
    snapshots: Vec<BlockList>,
    cursor: usize,
    max_steps: Option<usize>,
}

impl History {
    /// Seeds the log with `initial` at cursor 0. With `max_steps` set, only
    /// that many undo steps are retained; without it the log only ever
    /// shrinks when an edit discards the redo branch.
    pub fn new(initial: BlockList, max_steps: Option<usize>) -> Self {
        Self {
            snapshots: vec![initial],
            cursor: 0,
            max_steps: max_steps.map(|max| max.max(1)),
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn snapshot_count(&self) -> usize {
        self.snapshots.len()
    }

    pub fn current(&self) -> &BlockList {
        &self.snapshots[self.cursor]
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    /// Drops any redo branch and appends a copy of `list` as the new tail.
    pub fn record(&mut self, list: &BlockList) {
        let discarded = self.snapshots.len() - (self.cursor + 1);
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(list.clone());
        self.cursor = self.snapshots.len() - 1;

        if let Some(max_steps) = self.max_steps
            && self.snapshots.len() > max_steps + 1
        {
            let evict = self.snapshots.len() - (max_steps + 1);
            self.snapshots.drain(..evict);
            self.cursor -= evict;
            tracing::warn!(
                evicted = evict,
                max_steps,
                "history cap reached, dropping oldest snapshots"
            );
        }

        tracing::trace!(
            cursor = self.cursor,
            len = self.snapshots.len(),
            discarded,
            "recorded snapshot"
        );
    }

    /// Steps back one snapshot and returns a copy of it, or `None` at the
    /// start of the log.
    pub fn undo(&mut self) -> Option<BlockList> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        tracing::trace!(cursor = self.cursor, "undo");
        Some(self.snapshots[self.cursor].clone())
    }

    /// Steps forward one snapshot and returns a copy of it, or `None` at the
    /// tail of the log.
    pub fn redo(&mut self) -> Option<BlockList> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        tracing::trace!(cursor = self.cursor, "redo");
        Some(self.snapshots[self.cursor].clone())
    }
}
