use crate::{Answers, QuizDefinition};

/// Trait for backend implementations that run a quiz to completion.
///
/// Backends receive a `QuizDefinition` and return the assembled `Answers`.
/// They decide how steps are presented (CLI wizard, GUI form, scripted) and
/// translate user input into session intents internally; the session owns
/// all sequencing and aggregation state.
pub trait QuizBackend {
    /// The error type for this backend.
    type Error: Into<anyhow::Error>;

    /// Run a quiz through this backend.
    ///
    /// # Returns
    /// * `Ok(answers)` with the completed answer set
    /// * `Err` on cancellation or backend failure
    fn run(&self, definition: &QuizDefinition) -> Result<Answers, Self::Error>;
}
