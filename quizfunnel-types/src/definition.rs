use crate::{Step, StepId};

/// The two entry steps feeding the derived body-mass metric.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyMetricFields {
    /// The step whose text entry is read as the weight in kilograms.
    pub weight: StepId,

    /// The step whose text entry is read as the height in meters (or
    /// centimeters, normalized heuristically).
    pub height: StepId,
}

/// The top-level structure describing one quiz: a fixed, ordered sequence
/// of steps.
///
/// A definition is presentation-agnostic — it can be driven by a CLI wizard,
/// a GUI, or a scripted backend. Order is significant and fixed at
/// construction; no step repeats and the sequence never branches.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizDefinition {
    /// All steps, in traversal order.
    steps: Vec<Step>,

    /// Which steps feed the derived body-mass metric, if any.
    body_metric: Option<BodyMetricFields>,
}

impl QuizDefinition {
    /// Create a new quiz definition with the given steps.
    pub fn new(steps: Vec<Step>) -> Self {
        debug_assert!(
            {
                let mut ids: Vec<_> = steps.iter().map(Step::id).collect();
                ids.sort_unstable_by(|a, b| a.as_str().cmp(b.as_str()));
                ids.windows(2).all(|pair| pair[0] != pair[1])
            },
            "step identifiers must be unique"
        );
        Self {
            steps,
            body_metric: None,
        }
    }

    /// Create an empty quiz definition.
    pub fn empty() -> Self {
        Self {
            steps: Vec::new(),
            body_metric: None,
        }
    }

    /// Name the weight and height entry steps feeding the derived metric.
    pub fn with_body_metric(
        mut self,
        weight: impl Into<StepId>,
        height: impl Into<StepId>,
    ) -> Self {
        self.body_metric = Some(BodyMetricFields {
            weight: weight.into(),
            height: height.into(),
        });
        self
    }

    /// Get the steps in traversal order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Get the step at the given cursor position.
    pub fn step_at(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    /// Get the cursor position of the step with the given identifier.
    pub fn position_of(&self, id: &StepId) -> Option<usize> {
        self.steps.iter().position(|step| step.id() == id)
    }

    /// Get the body metric field configuration, if any.
    pub fn body_metric(&self) -> Option<&BodyMetricFields> {
        self.body_metric.as_ref()
    }

    /// Check if the quiz has any steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Get the number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }
}

impl Default for QuizDefinition {
    fn default() -> Self {
        Self::empty()
    }
}
