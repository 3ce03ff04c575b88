//! # quizfunnel
//!
//! Linear multi-step quiz funnels for Rust. Backend-agnostic.
//!
//! A quiz is a fixed, ordered sequence of steps (single choice, multi-select,
//! free entry, informational). A [`QuizSession`] owns one traversal of that
//! sequence: it tracks the cursor, aggregates answers, gates the advance on
//! required entries, computes the derived body-mass metric, and hands the
//! assembled [`Answers`] to a completion receiver exactly once when the last
//! step is passed.
//!
//! ## Usage
//!
//! ```rust
//! use quizfunnel::{
//!     ChoiceOption, QuizDefinition, QuizSession, SingleChoiceStep, Step, StepKind,
//! };
//!
//! let quiz = QuizDefinition::new(vec![Step::new(
//!     "goal",
//!     "What is your main goal?",
//!     StepKind::SingleChoice(SingleChoiceStep::new(vec![
//!         ChoiceOption::new("Lose weight"),
//!         ChoiceOption::new("Build muscle"),
//!     ])),
//! )]);
//!
//! let mut session = QuizSession::new(quiz)
//!     .on_complete(|answers| assert_eq!(answers.len(), 1));
//!
//! // Selecting an option on a single-choice step advances immediately.
//! session.select_single("Lose weight");
//! assert!(session.is_completed());
//! ```
//!
//! ## Backends
//!
//! Backends are separate crates that implement `QuizBackend`:
//! - `quizfunnel-wizard-dialoguer` - CLI prompts via dialoguer
//!
//! The [`ScriptBackend`] in this crate drives a quiz from pre-scripted
//! intents, for testing without user interaction.

// Re-export all types from quizfunnel-types
pub use quizfunnel_types::*;

// The session state machine: sequencing, aggregation, gating, completion
mod session;
pub use session::{Advance, QuizSession, QuizView};

// Scripted backend for driving quizzes without user interaction
mod script_backend;
pub use script_backend::{ScriptBackend, ScriptError};
