//! Ordered stage instances per pipeline category.

use std::fmt;

use wagerline_foundation::{ControlMessage, Error, ErrorKind, Result};

use crate::category::Category;
use crate::stage::{Stage, StageId};

/// A named stage instance.
pub struct StageEntry {
    id: StageId,
    stage: Box<dyn Stage>,
}

impl StageEntry {
    /// Creates an entry.
    #[must_use]
    pub fn new(id: StageId, stage: Box<dyn Stage>) -> Self {
        Self { id, stage }
    }

    /// Returns the stage identity.
    #[must_use]
    pub fn id(&self) -> &StageId {
        &self.id
    }

    /// Returns the stage for invocation.
    pub fn stage_mut(&mut self) -> &mut dyn Stage {
        self.stage.as_mut()
    }
}

impl fmt::Debug for StageEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StageEntry").field("id", &self.id).finish_non_exhaustive()
    }
}

/// One ordered list of stages per pipeline category.
///
/// Intra-category order is whatever order stages were pushed in; the
/// executor never re-sorts.
#[derive(Debug, Default)]
pub struct StageSequence {
    categories: [Vec<StageEntry>; 4],
}

impl StageSequence {
    /// Creates an empty sequence.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a stage to `category`.
    ///
    /// # Errors
    ///
    /// Returns an error if `category` is not a pipeline category.
    pub fn push(&mut self, category: Category, id: StageId, stage: Box<dyn Stage>) -> Result<()> {
        let index = category.pipeline_index().ok_or_else(|| {
            Error::new(ErrorKind::Internal(format!(
                "{category} stages cannot be part of a pipeline"
            )))
        })?;
        self.categories[index].push(StageEntry::new(id, stage));
        Ok(())
    }

    /// Builder form of [`push`](Self::push).
    ///
    /// # Errors
    ///
    /// Returns an error if `category` is not a pipeline category.
    pub fn with_stage(
        mut self,
        category: Category,
        label: &str,
        stage: impl Stage + 'static,
    ) -> Result<Self> {
        self.push(category, StageId::from_label(label), Box::new(stage))?;
        Ok(self)
    }

    /// Returns the stages of `category` in order. Utilities are always empty.
    #[must_use]
    pub fn stages(&self, category: Category) -> &[StageEntry] {
        match category.pipeline_index() {
            Some(index) => &self.categories[index],
            None => &[],
        }
    }

    /// Mutable access to the stages of `category`.
    pub fn stages_mut(&mut self, category: Category) -> &mut [StageEntry] {
        match category.pipeline_index() {
            Some(index) => self.categories[index].as_mut_slice(),
            None => &mut [],
        }
    }

    /// Total number of stages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.iter().map(Vec::len).sum()
    }

    /// Returns true if no category has a stage.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.iter().all(Vec::is_empty)
    }

    /// Iterates over every stage in pipeline order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &StageEntry)> {
        Category::PIPELINE
            .into_iter()
            .zip(&self.categories)
            .flat_map(|(category, entries)| entries.iter().map(move |e| (category, e)))
    }

    /// Delivers a control message to every stage in pipeline order.
    pub fn broadcast(&mut self, message: ControlMessage) {
        for entries in &mut self.categories {
            for entry in entries {
                entry.stage.on_message(message);
            }
        }
    }
}
