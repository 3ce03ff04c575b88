use std::fmt;

/// Identifier of a single step in a quiz, e.g., `"height"`.
///
/// Used as keys in `Answers` to identify which step an answer belongs to.
/// The step sequence is flat, so identifiers carry no hierarchy.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StepId {
    id: String,
}

impl StepId {
    /// Create a new step identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// Get the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl From<&str> for StepId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for StepId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&StepId> for StepId {
    fn from(id: &StepId) -> Self {
        id.clone()
    }
}
