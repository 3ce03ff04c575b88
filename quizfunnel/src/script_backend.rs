//! Scripted backend for running quizzes without user interaction.
//!
//! `ScriptBackend` drives a [`QuizSession`] from pre-scripted intents keyed
//! by step identifier. This is useful for testing quiz definitions and for
//! replaying recorded traversals.
//!
//! # Example
//!
//! ```rust,ignore
//! use quizfunnel::{QuizBackend, ScriptBackend};
//!
//! let answers = ScriptBackend::new()
//!     .with_choice("goal", "Lose weight")
//!     .with_text("current_weight", "70")
//!     .with_text("height", "1.75")
//!     .with_toggles("focus_areas", ["Glutes", "Arms"])
//!     .run(&quiz)?;
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use quizfunnel_types::{Answers, QuizBackend, QuizDefinition, StepId};

use crate::{Advance, QuizSession};

/// A pre-scripted user intent for one step.
#[derive(Debug, Clone)]
enum ScriptedIntent {
    /// Select this option label (single-choice steps).
    Choice(String),

    /// Toggle each of these labels on (multi-select steps).
    Toggles(Vec<String>),

    /// Enter this text (free-entry steps).
    Text(String),

    /// Leave the step untouched and advance.
    Skip,
}

/// Error type for `ScriptBackend`.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("No scripted intent for gated step: {0}")]
    MissingScript(StepId),

    #[error("Advance blocked at step: {0}")]
    Blocked(StepId),
}

/// A backend that replays pre-configured intents.
#[derive(Debug, Clone, Default)]
pub struct ScriptBackend {
    intents: HashMap<StepId, ScriptedIntent>,
}

impl ScriptBackend {
    /// Create a new empty script backend.
    pub fn new() -> Self {
        Self {
            intents: HashMap::new(),
        }
    }

    /// Script a single-choice selection for a step.
    pub fn with_choice(mut self, step: impl Into<StepId>, label: impl Into<String>) -> Self {
        self.intents
            .insert(step.into(), ScriptedIntent::Choice(label.into()));
        self
    }

    /// Script multi-select toggles for a step.
    pub fn with_toggles<I, S>(mut self, step: impl Into<StepId>, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.intents.insert(
            step.into(),
            ScriptedIntent::Toggles(labels.into_iter().map(Into::into).collect()),
        );
        self
    }

    /// Script a text entry for a step.
    pub fn with_text(mut self, step: impl Into<StepId>, raw: impl Into<String>) -> Self {
        self.intents
            .insert(step.into(), ScriptedIntent::Text(raw.into()));
        self
    }

    /// Script leaving a step untouched.
    pub fn with_skip(mut self, step: impl Into<StepId>) -> Self {
        self.intents.insert(step.into(), ScriptedIntent::Skip);
        self
    }
}

impl QuizBackend for ScriptBackend {
    type Error = ScriptError;

    fn run(&self, definition: &QuizDefinition) -> Result<Answers, ScriptError> {
        let collected = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&collected);
        let mut session = QuizSession::new(definition.clone())
            .on_complete(move |answers| *sink.borrow_mut() = Some(answers));

        while let Some(step) = session.current_step() {
            let id = step.id().clone();
            let gated = step.is_gated();

            match self.intents.get(&id) {
                Some(ScriptedIntent::Choice(label)) => {
                    // Selection advances on its own.
                    session.select_single(label.clone());
                    continue;
                }
                Some(ScriptedIntent::Toggles(labels)) => {
                    for label in labels {
                        session.toggle_multi(label);
                    }
                }
                Some(ScriptedIntent::Text(raw)) => {
                    session.set_text(raw.clone());
                }
                Some(ScriptedIntent::Skip) => {}
                None if gated => {
                    return Err(ScriptError::MissingScript(id));
                }
                // Unscripted, ungated steps are skipped over.
                None => {}
            }

            if session.request_advance() == Advance::Blocked {
                return Err(ScriptError::Blocked(id));
            }
        }

        Ok(collected.borrow_mut().take().unwrap_or_default())
    }
}
