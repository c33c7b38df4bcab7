use crate::action::{Action, Outcome};
use crate::block::{Block, BlockId, BlockKind, Props};
use crate::config::BuilderConfig;
use crate::error::BuilderError;
use crate::history::History;
use crate::list::{BlockList, ShiftDirection};
use crate::template::Template;

/// Hands out ids that are never reused within a session. Undo does not
/// rewind it.
#[derive(Debug, Clone)]
struct IdAllocator {
    prefix: String,
    next: u64,
}

impl IdAllocator {
    fn new(prefix: String) -> Self {
        Self { prefix, next: 1 }
    }

    fn fresh(&mut self, live: &BlockList) -> BlockId {
        loop {
            let id = BlockId::new(format!("{}-{}", self.prefix, self.next));
            self.next += 1;
            if !live.contains(&id) {
                return id;
            }
        }
    }
}

/// An editing session: the live list, its history, and the active block.
#[derive(Debug, Clone)]
pub struct BuilderState {
    blocks: BlockList,
    history: History,
    selected: Option<BlockId>,
    ids: IdAllocator,
    config: BuilderConfig,
}

impl Default for BuilderState {
    fn default() -> Self {
        Self::new(BuilderConfig::default())
    }
}

impl BuilderState {
    /// Starts with an empty list.
    pub fn new(config: BuilderConfig) -> Self {
        Self::with_blocks(BlockList::new(), config)
    }

    /// Starts from `template`. The template is the initial snapshot, so it
    /// cannot be undone.
    pub fn from_template(template: Template, config: BuilderConfig) -> Self {
        let mut state = Self::new(config);
        state.blocks = state.instantiate(template);
        state.history = History::new(state.blocks.clone(), state.config.max_history);
        state
    }

    /// Starts from an existing list, e.g. one loaded from a saved document.
    pub fn with_blocks(blocks: BlockList, config: BuilderConfig) -> Self {
        let config = config.with_defaults();
        Self {
            history: History::new(blocks.clone(), config.max_history),
            blocks,
            selected: None,
            ids: IdAllocator::new(config.id_prefix.clone()),
            config,
        }
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    pub fn blocks(&self) -> &BlockList {
        &self.blocks
    }

    pub fn selected(&self) -> Option<&BlockId> {
        self.selected.as_ref()
    }

    pub fn selected_block(&self) -> Option<&Block> {
        self.selected.as_ref().and_then(|id| self.blocks.get(id))
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn cursor(&self) -> usize {
        self.history.cursor()
    }

    pub fn history_len(&self) -> usize {
        self.history.snapshot_count()
    }

    /// Applies one action. On error the state is left untouched.
    pub fn apply(&mut self, action: Action) -> Result<Outcome, BuilderError> {
        let name = action.name();
        let result = self.apply_inner(action);
        match &result {
            Ok(outcome) => tracing::debug!(
                action = name,
                ?outcome,
                len = self.blocks.len(),
                cursor = self.history.cursor(),
                "applied"
            ),
            Err(err) => tracing::debug!(action = name, %err, "rejected"),
        }
        result
    }

    fn apply_inner(&mut self, action: Action) -> Result<Outcome, BuilderError> {
        match action {
            Action::Append { kind } => {
                self.append(kind);
                Ok(Outcome::Applied)
            }
            Action::Update { id, content, style } => self.update(&id, content, style),
            Action::Remove { id } => self.remove(&id),
            Action::Duplicate { id } => self.duplicate(&id).map(|_| Outcome::Applied),
            Action::Move { from, to } => self.move_block(from, to),
            Action::Shift { id, direction } => self.shift(&id, direction),
            Action::Select { id } => self.select(id),
            Action::LoadTemplate { template } => {
                self.load_template(template);
                Ok(Outcome::Applied)
            }
            Action::Replace { blocks } => self.replace(blocks),
            Action::Undo => Ok(self.undo()),
            Action::Redo => Ok(self.redo()),
        }
    }

    /// Appends a default block of `kind` and selects it.
    pub fn append(&mut self, kind: BlockKind) -> BlockId {
        let id = self.ids.fresh(&self.blocks);
        self.blocks.push(Block::new(id.clone(), kind));
        self.selected = Some(id.clone());
        self.commit();
        id
    }

    pub fn update(
        &mut self,
        id: &BlockId,
        content: Option<Props>,
        style: Option<Props>,
    ) -> Result<Outcome, BuilderError> {
        if self.blocks.update(id, content, style)? {
            self.commit();
            Ok(Outcome::Applied)
        } else {
            Ok(Outcome::Unchanged)
        }
    }

    pub fn remove(&mut self, id: &BlockId) -> Result<Outcome, BuilderError> {
        self.blocks.remove(id)?;
        if self.selected.as_ref() == Some(id) {
            self.selected = None;
        }
        self.commit();
        Ok(Outcome::Applied)
    }

    /// Copies `id` into a new block placed right after it and returns the
    /// copy's id.
    pub fn duplicate(&mut self, id: &BlockId) -> Result<BlockId, BuilderError> {
        if !self.blocks.contains(id) {
            return Err(BuilderError::NotFound(id.clone()));
        }
        let new_id = self.ids.fresh(&self.blocks);
        self.blocks.duplicate(id, new_id.clone())?;
        self.commit();
        Ok(new_id)
    }

    pub fn move_block(&mut self, from: usize, to: usize) -> Result<Outcome, BuilderError> {
        if self.blocks.move_block(from, to)? {
            self.commit();
            Ok(Outcome::Applied)
        } else {
            Ok(Outcome::Unchanged)
        }
    }

    pub fn shift(
        &mut self,
        id: &BlockId,
        direction: ShiftDirection,
    ) -> Result<Outcome, BuilderError> {
        if self.blocks.shift(id, direction)? {
            self.commit();
            Ok(Outcome::Applied)
        } else {
            Ok(Outcome::Unchanged)
        }
    }

    pub fn select(&mut self, id: Option<BlockId>) -> Result<Outcome, BuilderError> {
        if let Some(id) = &id
            && !self.blocks.contains(id)
        {
            return Err(BuilderError::NotFound(id.clone()));
        }
        self.selected = id;
        Ok(Outcome::Selected)
    }

    /// Replaces the whole list with a fresh copy of `template`.
    pub fn load_template(&mut self, template: Template) {
        self.blocks = self.instantiate(template);
        self.selected = None;
        self.commit();
    }

    /// Replaces the whole list with `blocks`, keeping their ids.
    pub fn replace(&mut self, blocks: Vec<Block>) -> Result<Outcome, BuilderError> {
        self.blocks = BlockList::from_blocks(blocks)?;
        self.selected = None;
        self.commit();
        Ok(Outcome::Applied)
    }

    pub fn undo(&mut self) -> Outcome {
        match self.history.undo() {
            Some(list) => {
                self.restore(list);
                Outcome::Undone
            }
            None => Outcome::NothingToUndo,
        }
    }

    pub fn redo(&mut self) -> Outcome {
        match self.history.redo() {
            Some(list) => {
                self.restore(list);
                Outcome::Redone
            }
            None => Outcome::NothingToRedo,
        }
    }

    fn restore(&mut self, list: BlockList) {
        self.blocks = list;
        if let Some(id) = &self.selected
            && !self.blocks.contains(id)
        {
            self.selected = None;
        }
    }

    fn commit(&mut self) {
        self.history.record(&self.blocks);
    }

    fn instantiate(&mut self, template: Template) -> BlockList {
        let mut list = BlockList::new();
        for spec in template.blocks() {
            let id = self.ids.fresh(&list);
            let block = Block::new(id, spec.kind)
                .with_content(spec.content)
                .with_style(spec.style);
            list.push(block);
        }
        list
    }
}

/// Pure form of [`BuilderState::apply`]: consumes the state and hands back
/// the next one together with the action's result.
pub fn reduce(
    mut state: BuilderState,
    action: Action,
) -> (BuilderState, Result<Outcome, BuilderError>) {
    let result = state.apply(action);
    (state, result)
}
