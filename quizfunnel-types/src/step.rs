use crate::StepId;

/// A single step in a quiz sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    /// The identifier under which this step's answer is recorded.
    id: StepId,

    /// The prompt text shown to the user.
    prompt: String,

    /// The kind of step (determines input shape and advance behavior).
    kind: StepKind,
}

impl Step {
    /// Create a new step.
    pub fn new(id: impl Into<StepId>, prompt: impl Into<String>, kind: StepKind) -> Self {
        Self {
            id: id.into(),
            prompt: prompt.into(),
            kind,
        }
    }

    /// Get the step identifier.
    pub fn id(&self) -> &StepId {
        &self.id
    }

    /// Get the prompt text.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Get the step kind.
    pub fn kind(&self) -> &StepKind {
        &self.kind
    }

    /// Check if advancing past this step requires a recorded value.
    pub fn is_gated(&self) -> bool {
        self.kind.is_gated()
    }
}

/// The kind of step, determining input shape and advance behavior.
#[derive(Debug, Clone, PartialEq)]
pub enum StepKind {
    /// Pick exactly one option; selecting it advances immediately.
    SingleChoice(SingleChoiceStep),

    /// Toggle any number of options; zero selections is a valid state.
    MultiChoice(MultiChoiceStep),

    /// Free text or numeric entry; advance requires a non-empty value.
    TextEntry(TextEntryStep),

    /// Informational interstitial with nothing to answer.
    Info(InfoStep),
}

impl StepKind {
    /// Check if this kind gates the advance on a recorded value.
    pub fn is_gated(&self) -> bool {
        matches!(self, Self::TextEntry(_))
    }

    /// Check if selecting an option advances without an explicit "next".
    pub fn advances_on_select(&self) -> bool {
        matches!(self, Self::SingleChoice(_))
    }
}

/// One selectable option in a single- or multi-choice step.
#[derive(Debug, Clone, PartialEq)]
pub struct ChoiceOption {
    /// The label recorded as the answer when selected.
    pub label: String,

    /// Optional descriptive line shown beneath the label.
    pub description: Option<String>,
}

impl ChoiceOption {
    /// Create a new option with the given label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            description: None,
        }
    }

    /// Create an option with a descriptive line.
    pub fn with_description(label: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            description: Some(description.into()),
        }
    }
}

/// Configuration for a single-choice step.
#[derive(Debug, Clone, PartialEq)]
pub struct SingleChoiceStep {
    /// The options to choose from.
    pub options: Vec<ChoiceOption>,
}

impl SingleChoiceStep {
    /// Create a new single-choice step with the given options.
    pub fn new(options: Vec<ChoiceOption>) -> Self {
        Self { options }
    }
}

/// Configuration for a multi-select step.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiChoiceStep {
    /// The options available for toggling.
    pub options: Vec<ChoiceOption>,
}

impl MultiChoiceStep {
    /// Create a new multi-select step with the given options.
    pub fn new(options: Vec<ChoiceOption>) -> Self {
        Self { options }
    }
}

/// Configuration for a free text or numeric entry step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextEntryStep {
    /// Placeholder text shown in an empty field, e.g., `"e.g. 70.5"`.
    pub placeholder: Option<String>,

    /// Unit suffix shown next to the field, e.g., `"kg"`.
    pub unit: Option<String>,
}

impl TextEntryStep {
    /// Create a new text entry step.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the placeholder text.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Set the unit suffix.
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }
}

/// Configuration for an informational step.
#[derive(Debug, Clone, PartialEq)]
pub struct InfoStep {
    /// The body text shown to the user.
    pub body: String,
}

impl InfoStep {
    /// Create a new informational step with the given body text.
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_text_entry_gates() {
        assert!(StepKind::TextEntry(TextEntryStep::new()).is_gated());
        assert!(!StepKind::SingleChoice(SingleChoiceStep::new(Vec::new())).is_gated());
        assert!(!StepKind::MultiChoice(MultiChoiceStep::new(Vec::new())).is_gated());
        assert!(!StepKind::Info(InfoStep::new("hello")).is_gated());
    }

    #[test]
    fn only_single_choice_advances_on_select() {
        assert!(StepKind::SingleChoice(SingleChoiceStep::new(Vec::new())).advances_on_select());
        assert!(!StepKind::MultiChoice(MultiChoiceStep::new(Vec::new())).advances_on_select());
    }
}
