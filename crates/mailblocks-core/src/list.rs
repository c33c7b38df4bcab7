use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::block::{Block, BlockId, Props};
use crate::error::BuilderError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftDirection {
    Up,
    Down,
}

/// The ordered document. Index order is the visual order, top to bottom.
///
/// Serialized as a plain array. Deserializing goes through
/// [`BlockList::from_blocks`], so repeated ids are rejected there as well.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(into = "Vec<Block>", try_from = "Vec<Block>")]
pub struct BlockList {
    blocks: Vec<Block>,
}

impl BlockList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list, rejecting repeated ids.
    pub fn from_blocks(blocks: Vec<Block>) -> Result<Self, BuilderError> {
        let mut seen: HashSet<&BlockId> = HashSet::with_capacity(blocks.len());
        for block in &blocks {
            if !seen.insert(&block.id) {
                return Err(BuilderError::DuplicateId(block.id.clone()));
            }
        }
        Ok(Self { blocks })
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    pub fn as_slice(&self) -> &[Block] {
        &self.blocks
    }

    pub fn into_blocks(self) -> Vec<Block> {
        self.blocks
    }

    pub fn ids(&self) -> Vec<BlockId> {
        self.blocks.iter().map(|b| b.id.clone()).collect()
    }

    pub fn contains(&self, id: &BlockId) -> bool {
        self.index_of(id).is_some()
    }

    pub fn index_of(&self, id: &BlockId) -> Option<usize> {
        self.blocks.iter().position(|b| &b.id == id)
    }

    pub fn get(&self, id: &BlockId) -> Option<&Block> {
        self.blocks.iter().find(|b| &b.id == id)
    }

    pub fn at(&self, ix: usize) -> Option<&Block> {
        self.blocks.get(ix)
    }

    fn require(&self, id: &BlockId) -> Result<usize, BuilderError> {
        self.index_of(id).ok_or_else(|| BuilderError::NotFound(id.clone()))
    }

    /// Appends `block`. The caller guarantees its id is fresh.
    pub fn push(&mut self, block: Block) {
        debug_assert!(!self.contains(&block.id), "duplicate id {}", block.id);
        self.blocks.push(block);
    }

    /// Merges the patches into the block's payload. Returns whether anything
    /// changed.
    pub fn update(
        &mut self,
        id: &BlockId,
        content: Option<Props>,
        style: Option<Props>,
    ) -> Result<bool, BuilderError> {
        let ix = self.require(id)?;
        Ok(self.blocks[ix].apply_patch(content, style))
    }

    pub fn remove(&mut self, id: &BlockId) -> Result<Block, BuilderError> {
        let ix = self.require(id)?;
        Ok(self.blocks.remove(ix))
    }

    /// Inserts a copy of `id` right after it, carrying `new_id`. Returns the
    /// index of the copy.
    pub fn duplicate(&mut self, id: &BlockId, new_id: BlockId) -> Result<usize, BuilderError> {
        let ix = self.require(id)?;
        let mut copy = self.blocks[ix].clone();
        copy.id = new_id;
        self.blocks.insert(ix + 1, copy);
        Ok(ix + 1)
    }

    /// Moves the block at `from` so that it ends up at index `to`.
    ///
    /// Returns `false` when `from == to`, leaving the list untouched.
    pub fn move_block(&mut self, from: usize, to: usize) -> Result<bool, BuilderError> {
        let len = self.blocks.len();
        for index in [from, to] {
            if index >= len {
                return Err(BuilderError::IndexOutOfBounds { index, len });
            }
        }
        if from == to {
            return Ok(false);
        }
        let block = self.blocks.remove(from);
        self.blocks.insert(to, block);
        Ok(true)
    }

    /// Swaps the block with its neighbour. Returns `false` at either edge.
    pub fn shift(&mut self, id: &BlockId, direction: ShiftDirection) -> Result<bool, BuilderError> {
        let ix = self.require(id)?;
        let to = match direction {
            ShiftDirection::Up => match ix.checked_sub(1) {
                Some(to) => to,
                None => return Ok(false),
            },
            ShiftDirection::Down => ix + 1,
        };
        if to >= self.blocks.len() {
            return Ok(false);
        }
        self.move_block(ix, to)
    }
}

impl TryFrom<Vec<Block>> for BlockList {
    type Error = BuilderError;

    fn try_from(blocks: Vec<Block>) -> Result<Self, Self::Error> {
        Self::from_blocks(blocks)
    }
}

impl From<BlockList> for Vec<Block> {
    fn from(list: BlockList) -> Self {
        list.blocks
    }
}

impl<'a> IntoIterator for &'a BlockList {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::BlockKind;

    fn list(ids: &[&str]) -> BlockList {
        BlockList::from_blocks(
            ids.iter()
                .map(|id| Block::new(BlockId::from(*id), BlockKind::Text))
                .collect(),
        )
        .unwrap()
    }

    fn order(list: &BlockList) -> Vec<&str> {
        list.iter().map(|b| b.id.as_str()).collect()
    }

    #[test]
    fn move_forward_and_backward_keeps_relative_order() {
        let mut l = list(&["a", "b", "c", "d"]);
        assert!(l.move_block(0, 2).unwrap());
        assert_eq!(order(&l), vec!["b", "c", "a", "d"]);

        assert!(l.move_block(3, 0).unwrap());
        assert_eq!(order(&l), vec!["d", "b", "c", "a"]);
    }

    #[test]
    fn move_out_of_bounds_is_rejected() {
        let mut l = list(&["a", "b"]);
        assert_eq!(
            l.move_block(0, 2),
            Err(BuilderError::IndexOutOfBounds { index: 2, len: 2 })
        );
        assert_eq!(order(&l), vec!["a", "b"]);
    }

    #[test]
    fn shift_stops_at_edges() {
        let mut l = list(&["a", "b"]);
        assert!(!l.shift(&"a".into(), ShiftDirection::Up).unwrap());
        assert!(!l.shift(&"b".into(), ShiftDirection::Down).unwrap());
        assert!(l.shift(&"a".into(), ShiftDirection::Down).unwrap());
        assert_eq!(order(&l), vec!["b", "a"]);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let blocks = vec![
            Block::new("x".into(), BlockKind::Text),
            Block::new("x".into(), BlockKind::Image),
        ];
        assert_eq!(
            BlockList::from_blocks(blocks),
            Err(BuilderError::DuplicateId("x".into()))
        );
    }
}
