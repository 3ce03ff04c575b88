//! # quizfunnel-wizard-dialoguer
//!
//! CLI wizard backend for quizfunnel, built on `dialoguer`.
//!
//! Presents each quiz step as a terminal prompt: single-choice steps become
//! selection lists, multi-select steps become checkbox lists, entry steps
//! become text inputs that re-prompt until gating passes, and informational
//! steps print their body and wait for confirmation.

mod backend;
pub use backend::{DialoguerWizard, WizardError};
