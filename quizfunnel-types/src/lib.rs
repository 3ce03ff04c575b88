//! Core types for the quizfunnel crate.
//!
//! This crate provides the foundational types for defining quiz funnels:
//! - `QuizDefinition` - The ordered step sequence
//! - `Step` and `StepKind` - Individual steps and their input shapes
//! - `Answers` and `StepId` - Collected data and step keys
//! - `body_mass_index` - The derived metric computed from two entries
//! - `QuizBackend` trait - For implementing presentation backends

mod step_id;
pub use step_id::StepId;

mod answer_value;
pub use answer_value::AnswerValue;

mod answers;
pub use answers::{AnswerError, Answers};

mod step;
pub use step::{
    ChoiceOption, InfoStep, MultiChoiceStep, SingleChoiceStep, Step, StepKind, TextEntryStep,
};

mod definition;
pub use definition::{BodyMetricFields, QuizDefinition};

mod metric;
pub use metric::{BodyMassIndex, body_mass_index};

mod error;
pub use error::QuizError;

mod traits;
pub use traits::QuizBackend;
