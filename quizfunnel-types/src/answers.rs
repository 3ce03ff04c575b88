use std::collections::HashMap;

use crate::{AnswerValue, StepId};

/// Error type for answer access operations.
#[derive(Debug, thiserror::Error)]
pub enum AnswerError {
    #[error("Missing answer for step: {0}")]
    MissingStep(StepId),

    #[error("Kind mismatch at step '{step}': expected {expected}, got {actual}")]
    KindMismatch {
        step: StepId,
        expected: &'static str,
        actual: &'static str,
    },
}

/// The partial answer set assembled while a quiz runs.
///
/// Keyed by `StepId`. A key is present if and only if the user has produced
/// at least one mutation for that step; absence means "unanswered".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Answers {
    values: HashMap<StepId, AnswerValue>,
}

impl Answers {
    /// Create a new empty answer set.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Record an answer for a step, replacing any previous value.
    pub fn set(&mut self, step: impl Into<StepId>, value: AnswerValue) {
        self.values.insert(step.into(), value);
    }

    /// Toggle a label in the multi-select answer for a step.
    ///
    /// If the label is present in the current list it is removed; otherwise
    /// it is appended. The current list is read (defaulting to empty, and
    /// discarding any non-list value) and a fresh list is stored, so readers
    /// holding the previous value never observe a partial mutation.
    pub fn toggle(&mut self, step: impl Into<StepId>, label: &str) {
        let step = step.into();
        let mut labels = match self.values.get(&step) {
            Some(AnswerValue::Choices(labels)) => labels.clone(),
            _ => Vec::new(),
        };
        if let Some(position) = labels.iter().position(|l| l == label) {
            labels.remove(position);
        } else {
            labels.push(label.to_string());
        }
        self.values.insert(step, AnswerValue::Choices(labels));
    }

    /// Get the answer recorded for a step.
    pub fn get(&self, step: &StepId) -> Option<&AnswerValue> {
        self.values.get(step)
    }

    /// Check if an answer exists for a step.
    pub fn contains(&self, step: &StepId) -> bool {
        self.values.contains_key(step)
    }

    /// Get an iterator over all step-answer pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&StepId, &AnswerValue)> {
        self.values.iter()
    }

    /// Get the number of answered steps.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if no step has been answered.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    // === Convenience accessors ===

    /// Get the selected label at the given step.
    pub fn get_choice(&self, step: &StepId) -> Result<&str, AnswerError> {
        match self.get(step) {
            Some(AnswerValue::Choice(label)) => Ok(label),
            Some(other) => Err(AnswerError::KindMismatch {
                step: step.clone(),
                expected: "Choice",
                actual: other.type_name(),
            }),
            None => Err(AnswerError::MissingStep(step.clone())),
        }
    }

    /// Get the toggled labels at the given step.
    pub fn get_choices(&self, step: &StepId) -> Result<&[String], AnswerError> {
        match self.get(step) {
            Some(AnswerValue::Choices(labels)) => Ok(labels),
            Some(other) => Err(AnswerError::KindMismatch {
                step: step.clone(),
                expected: "Choices",
                actual: other.type_name(),
            }),
            None => Err(AnswerError::MissingStep(step.clone())),
        }
    }

    /// Get the entered text at the given step.
    pub fn get_text(&self, step: &StepId) -> Result<&str, AnswerError> {
        match self.get(step) {
            Some(AnswerValue::Text(text)) => Ok(text),
            Some(other) => Err(AnswerError::KindMismatch {
                step: step.clone(),
                expected: "Text",
                actual: other.type_name(),
            }),
            None => Err(AnswerError::MissingStep(step.clone())),
        }
    }

    /// Check if a step has a usable recorded value.
    ///
    /// This is the gating primitive for required free-entry steps: a missing
    /// answer or an empty text entry (the user typed and then cleared the
    /// field) both count as "no value".
    pub fn has_value(&self, step: &StepId) -> bool {
        match self.get(step) {
            Some(AnswerValue::Text(text)) => !text.is_empty(),
            Some(_) => true,
            None => false,
        }
    }
}

impl IntoIterator for Answers {
    type Item = (StepId, AnswerValue);
    type IntoIter = std::collections::hash_map::IntoIter<StepId, AnswerValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a Answers {
    type Item = (&'a StepId, &'a AnswerValue);
    type IntoIter = std::collections::hash_map::Iter<'a, StepId, AnswerValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
