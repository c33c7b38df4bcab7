use serde::{Deserialize, Serialize};

use crate::block::{Block, BlockId, BlockKind, Props};
use crate::list::ShiftDirection;
use crate::template::Template;

/// One user edit, as produced by the editor UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    Append {
        kind: BlockKind,
    },
    Update {
        id: BlockId,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        content: Option<Props>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        style: Option<Props>,
    },
    Remove {
        id: BlockId,
    },
    Duplicate {
        id: BlockId,
    },
    Move {
        from: usize,
        to: usize,
    },
    Shift {
        id: BlockId,
        direction: ShiftDirection,
    },
    Select {
        #[serde(default)]
        id: Option<BlockId>,
    },
    LoadTemplate {
        template: Template,
    },
    Replace {
        #[serde(default)]
        blocks: Vec<Block>,
    },
    Undo,
    Redo,
}

impl Action {
    pub fn update_content(id: impl Into<BlockId>, content: Props) -> Self {
        Action::Update {
            id: id.into(),
            content: Some(content),
            style: None,
        }
    }

    pub fn update_style(id: impl Into<BlockId>, style: Props) -> Self {
        Action::Update {
            id: id.into(),
            content: None,
            style: Some(style),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Action::Append { .. } => "append",
            Action::Update { .. } => "update",
            Action::Remove { .. } => "remove",
            Action::Duplicate { .. } => "duplicate",
            Action::Move { .. } => "move",
            Action::Shift { .. } => "shift",
            Action::Select { .. } => "select",
            Action::LoadTemplate { .. } => "load_template",
            Action::Replace { .. } => "replace",
            Action::Undo => "undo",
            Action::Redo => "redo",
        }
    }
}

/// What an accepted action did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The list changed and one snapshot was recorded.
    Applied,
    /// Nothing changed and no snapshot was recorded.
    Unchanged,
    /// Selection moved; history is untouched.
    Selected,
    Undone,
    Redone,
    NothingToUndo,
    NothingToRedo,
}

impl Outcome {
    /// `true` when the action left the list and history as they were.
    pub fn is_noop(self) -> bool {
        matches!(
            self,
            Outcome::Unchanged | Outcome::NothingToUndo | Outcome::NothingToRedo
        )
    }
}
