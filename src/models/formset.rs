//! Formset state
//!
//! Pure state transitions for the question formset: the list of rendered
//! sub-form blocks plus the TOTAL_FORMS counter. The DOM adapter reads the
//! counter, applies a transition, and reconciles the page with the result,
//! so everything here is testable without a browser.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::FormsetError;
use crate::models::management::FormLimits;

/// Stable identity of a block for the lifetime of the page
///
/// Distinct from the form index: indices come from the counter and can
/// repeat once blocks have been deleted.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct BlockId(u32);

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One rendered sub-form block
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubForm {
    pub id: BlockId,
    /// Index embedded in the block's field names; never renumbered
    pub index: u32,
}

/// Outcome of a delete transition
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Removal {
    pub block: SubForm,
    /// The counter was already zero and stayed there
    pub clamped: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FormsetState {
    prefix: String,
    total_forms: u32,
    /// Blocks in container order
    blocks: Vec<SubForm>,
    limits: FormLimits,
    #[serde(skip)]
    next_id: u32,
}

impl FormsetState {
    pub fn new(prefix: impl Into<String>, total_forms: u32, limits: FormLimits) -> Self {
        Self {
            prefix: prefix.into(),
            total_forms,
            blocks: Vec::new(),
            limits,
            next_id: 0,
        }
    }

    /// Register a block already rendered by the server
    pub fn track_existing(&mut self, index: u32) -> BlockId {
        let block = self.allocate(index);
        self.blocks.push(block);
        block.id
    }

    fn allocate(&mut self, index: u32) -> SubForm {
        let id = BlockId(self.next_id);
        self.next_id += 1;
        SubForm { id, index }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn total_forms(&self) -> u32 {
        self.total_forms
    }

    pub fn blocks(&self) -> &[SubForm] {
        &self.blocks
    }

    pub fn limits(&self) -> FormLimits {
        self.limits
    }

    pub fn block(&self, id: BlockId) -> Option<&SubForm> {
        self.blocks.iter().find(|b| b.id == id)
    }

    pub fn indices(&self) -> Vec<u32> {
        self.blocks.iter().map(|b| b.index).collect()
    }

    /// Adopt the counter value currently on the page
    pub fn with_total_forms(&self, total_forms: u32) -> Self {
        Self {
            total_forms,
            ..self.clone()
        }
    }

    /// Append a new block indexed with the pre-increment counter value
    pub fn on_add(&self) -> Result<(Self, SubForm), FormsetError> {
        self.limits.check_add(self.total_forms)?;

        let index = self.total_forms;
        let total_forms = index
            .checked_add(1)
            .ok_or(FormsetError::LimitReached { max: u32::MAX })?;

        let mut next = self.clone();
        let block = next.allocate(index);
        next.blocks.push(block);
        next.total_forms = total_forms;
        Ok((next, block))
    }

    /// Remove one block and decrement the counter, clamping at zero
    pub fn on_delete(&self, id: BlockId) -> Result<(Self, Removal), FormsetError> {
        let position = self
            .blocks
            .iter()
            .position(|b| b.id == id)
            .ok_or(FormsetError::UnknownBlock(id))?;

        self.limits.check_delete(self.total_forms)?;

        let mut next = self.clone();
        let block = next.blocks.remove(position);
        let clamped = next.total_forms == 0;
        next.total_forms = next.total_forms.saturating_sub(1);
        Ok((next, Removal { block, clamped }))
    }
}
