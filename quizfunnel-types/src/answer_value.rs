/// A single captured answer for one quiz step.
///
/// This is the value stored in `Answers` for each step the user has touched.
/// The union is closed: every answer is either one chosen label, a set of
/// toggled labels, or raw typed text.
#[derive(Debug, Clone, PartialEq)]
pub enum AnswerValue {
    /// The label of the selected option (single-choice steps).
    Choice(String),

    /// The labels currently toggled on for a multi-select step.
    /// Semantically a set; order is irrelevant and duplicates cannot occur.
    Choices(Vec<String>),

    /// Raw text typed into a free-entry step.
    Text(String),
}

impl AnswerValue {
    /// Try to get this value as a selected label.
    pub fn as_choice(&self) -> Option<&str> {
        match self {
            Self::Choice(label) => Some(label),
            _ => None,
        }
    }

    /// Try to get this value as the toggled labels of a multi-select step.
    pub fn as_choices(&self) -> Option<&[String]> {
        match self {
            Self::Choices(labels) => Some(labels),
            _ => None,
        }
    }

    /// Try to get this value as raw entered text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Get the type name of this value for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Choice(_) => "Choice",
            Self::Choices(_) => "Choices",
            Self::Text(_) => "Text",
        }
    }
}

impl From<Vec<String>> for AnswerValue {
    fn from(labels: Vec<String>) -> Self {
        Self::Choices(labels)
    }
}
