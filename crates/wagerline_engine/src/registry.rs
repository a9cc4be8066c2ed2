//! Module registry: the stages available to a session.
//!
//! The registry does no discovery of its own. Hosts register stage
//! factories per category (and utility instances) up front; a
//! [`StageSelection`] of display labels is then turned into a fresh
//! [`StageSequence`], keeping the selection's order exactly.

use std::collections::HashMap;
use std::fmt;

use wagerline_foundation::{ControlMessage, Error, ErrorContext, ErrorKind, Result};

use crate::category::Category;
use crate::sequence::StageSequence;
use crate::stage::{Stage, StageId};

/// Builds a fresh stage instance.
pub type StageFactory = Box<dyn Fn() -> Box<dyn Stage>>;

// =============================================================================
// StageSelection
// =============================================================================

/// The configured stage order: display labels per pipeline category.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StageSelection {
    labels: [Vec<String>; 4],
}

impl StageSelection {
    /// Creates an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a selection from labels listed in [`Category::PIPELINE`] order.
    #[must_use]
    pub fn from_pipeline(labels: [Vec<String>; 4]) -> Self {
        Self { labels }
    }

    /// Appends a label to `category`.
    ///
    /// # Errors
    ///
    /// Returns an error if `category` is not a pipeline category.
    pub fn push(&mut self, category: Category, label: impl Into<String>) -> Result<()> {
        let index = category
            .pipeline_index()
            .ok_or_else(|| Error::unknown_stage(format!("{category} cannot be selected")))?;
        self.labels[index].push(label.into());
        Ok(())
    }

    /// Builder form of [`push`](Self::push).
    ///
    /// # Errors
    ///
    /// Returns an error if `category` is not a pipeline category.
    pub fn with(mut self, category: Category, label: impl Into<String>) -> Result<Self> {
        self.push(category, label)?;
        Ok(self)
    }

    /// Labels selected for `category`, in order.
    #[must_use]
    pub fn labels(&self, category: Category) -> &[String] {
        match category.pipeline_index() {
            Some(index) => &self.labels[index],
            None => &[],
        }
    }

    /// Returns true if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.iter().all(Vec::is_empty)
    }
}

// =============================================================================
// ModuleRegistry
// =============================================================================

struct Registration {
    id: StageId,
    factory: StageFactory,
}

/// Registry of available stages and utilities.
#[derive(Default)]
pub struct ModuleRegistry {
    /// Factories per pipeline category, in registration order.
    modules: HashMap<Category, Vec<Registration>>,
    /// Live utility instances, in registration order.
    utilities: Vec<(StageId, Box<dyn Stage>)>,
}

impl ModuleRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a pipeline stage factory under a display label.
    ///
    /// # Errors
    ///
    /// Returns an error for the utilities category or a duplicate label.
    pub fn register<F>(&mut self, category: Category, label: &str, factory: F) -> Result<()>
    where
        F: Fn() -> Box<dyn Stage> + 'static,
    {
        if !category.is_pipeline() {
            return Err(Error::new(ErrorKind::Internal(format!(
                "{label:?}: utilities are registered with register_utility"
            ))));
        }
        if self.find(category, label).is_some() {
            return Err(Error::new(ErrorKind::Internal(format!(
                "{category} stage {label:?} is already registered"
            ))));
        }
        let id = StageId::from_label(label);
        tracing::trace!(%category, token = id.token(), "registered stage");
        self.modules.entry(category).or_default().push(Registration {
            id,
            factory: Box::new(factory),
        });
        Ok(())
    }

    /// Registers a utility instance under a display label.
    ///
    /// # Errors
    ///
    /// Returns an error for a duplicate label.
    pub fn register_utility(&mut self, label: &str, utility: impl Stage + 'static) -> Result<()> {
        if self.utilities.iter().any(|(id, _)| id.matches_label(label)) {
            return Err(Error::new(ErrorKind::Internal(format!(
                "utility {label:?} is already registered"
            ))));
        }
        let id = StageId::from_label(label);
        tracing::trace!(token = id.token(), "registered utility");
        self.utilities.push((id, Box::new(utility)));
        Ok(())
    }

    fn find(&self, category: Category, label: &str) -> Option<&Registration> {
        self.modules
            .get(&category)?
            .iter()
            .find(|r| r.id.matches_label(label))
    }

    /// Display labels available in `category`, in registration order.
    #[must_use]
    pub fn available(&self, category: Category) -> Vec<String> {
        if category == Category::Utilities {
            return self.utilities.iter().map(|(id, _)| id.label()).collect();
        }
        self.modules
            .get(&category)
            .map(|regs| regs.iter().map(|r| r.id.label()).collect())
            .unwrap_or_default()
    }

    /// Returns true if `label` is registered in `category`.
    #[must_use]
    pub fn contains(&self, category: Category, label: &str) -> bool {
        if category == Category::Utilities {
            self.utilities.iter().any(|(id, _)| id.matches_label(label))
        } else {
            self.find(category, label).is_some()
        }
    }

    /// Instantiates the selected stages in the selected order.
    ///
    /// # Errors
    ///
    /// Returns `UnknownStage` for the first label with no registration.
    pub fn assemble(&self, selection: &StageSelection) -> Result<StageSequence> {
        let mut sequence = StageSequence::new();
        for category in Category::PIPELINE {
            for label in selection.labels(category) {
                let registration = self.find(category, label).ok_or_else(|| {
                    Error::unknown_stage(label.as_str())
                        .with_context(ErrorContext::new().with_frame(category.name()))
                })?;
                sequence.push(category, registration.id.clone(), (registration.factory)())?;
            }
        }
        Ok(sequence)
    }

    /// Runs a utility with the Show message and an empty bet string.
    ///
    /// # Errors
    ///
    /// Returns `UnknownStage` if no utility has this label, or the
    /// utility's own error.
    pub fn invoke_utility(&mut self, label: &str) -> Result<String> {
        let (_, utility) = self
            .utilities
            .iter_mut()
            .find(|(id, _)| id.matches_label(label))
            .ok_or_else(|| Error::unknown_stage(label))?;
        utility.transform(ControlMessage::Show.token(), "")
    }

    /// Delivers a control message to every utility in registration order.
    pub fn broadcast(&mut self, message: ControlMessage) {
        for (_, utility) in &mut self.utilities {
            utility.on_message(message);
        }
    }
}

impl fmt::Debug for ModuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for category in Category::PIPELINE {
            map.entry(&category, &self.available(category));
        }
        map.entry(&Category::Utilities, &self.available(Category::Utilities));
        map.finish()
    }
}
