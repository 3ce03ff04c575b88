//! The quiz session state machine.
//!
//! A session fuses the two authorities of a running quiz: the step sequencer
//! (which step is shown now, is it the last one) and the answer store (what
//! has the user answered so far). Presentation layers translate user input
//! into the intent methods here and render from [`QuizSession::view`]; they
//! own no quiz state of their own.

use quizfunnel_types::{
    Answers, AnswerValue, BodyMassIndex, QuizDefinition, Step, StepId, body_mass_index,
};

/// Outcome of an advance request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// The cursor moved forward by one step.
    Moved,

    /// Gating rejected the advance; the cursor did not move.
    Blocked,

    /// The last step was passed and the session is terminal. The completion
    /// receiver has fired (on the transition, not on later calls).
    Completed,
}

/// Sequencer state: an active cursor into the step sequence, or terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionState {
    Active(usize),
    Completed,
}

/// Read-only projection of a session for presentation layers.
#[derive(Debug)]
pub struct QuizView<'a> {
    /// The step at the cursor.
    pub step: &'a Step,

    /// Fraction of the sequence reached, `(cursor + 1) / len`.
    pub progress: f64,

    /// Whether gating currently permits leaving this step.
    pub can_advance: bool,

    /// The derived body-mass metric, when computed and valid.
    pub metric: Option<BodyMassIndex>,
}

/// One traversal of a quiz: cursor, partial answers, derived metric, and the
/// one-shot completion hand-off.
///
/// A session is constructed fresh (cursor at the first step, no answers) and
/// discarded after completion or abandonment; nothing is shared between
/// sessions. There is no backward navigation: the cursor only ever moves
/// forward, and completion is a one-shot terminal transition.
///
/// After completion every intent is a silent no-op; the answer set handed to
/// the completion receiver is the final one.
pub struct QuizSession {
    definition: QuizDefinition,
    state: SessionState,
    answers: Answers,
    metric: Option<BodyMassIndex>,
    on_complete: Option<Box<dyn FnOnce(Answers)>>,
}

impl QuizSession {
    /// Create a fresh session for the given quiz.
    pub fn new(definition: QuizDefinition) -> Self {
        Self {
            definition,
            state: SessionState::Active(0),
            answers: Answers::new(),
            metric: None,
            on_complete: None,
        }
    }

    /// Install the completion receiver.
    ///
    /// The receiver is invoked exactly once, with an owned snapshot of the
    /// full answer set, on the transition past the last step. It is never
    /// invoked again, even if advance requests keep arriving.
    pub fn on_complete(mut self, receiver: impl FnOnce(Answers) + 'static) -> Self {
        self.on_complete = Some(Box::new(receiver));
        self
    }

    /// Get the quiz this session traverses.
    pub fn definition(&self) -> &QuizDefinition {
        &self.definition
    }

    /// Get the answers recorded so far.
    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    /// Get the derived body-mass metric, when computed and valid.
    pub fn metric(&self) -> Option<BodyMassIndex> {
        self.metric
    }

    /// Get the step at the cursor, or `None` once the session is terminal.
    pub fn current_step(&self) -> Option<&Step> {
        match self.state {
            SessionState::Active(cursor) => self.definition.step_at(cursor),
            SessionState::Completed => None,
        }
    }

    /// Check if the cursor is on the last step.
    pub fn is_last(&self) -> bool {
        matches!(self.state, SessionState::Active(cursor) if cursor + 1 == self.definition.len())
    }

    /// Check if the session has passed the last step.
    pub fn is_completed(&self) -> bool {
        self.state == SessionState::Completed
    }

    /// Whether gating currently permits leaving the current step.
    ///
    /// Pure over the current answers: gated steps require a usable recorded
    /// value, every other kind always permits. Re-evaluate after every
    /// mutation; a blocked advance becomes permitted as soon as the entry is
    /// filled, and blocked again if it is cleared.
    pub fn can_advance(&self) -> bool {
        match self.state {
            SessionState::Completed => false,
            SessionState::Active(cursor) => match self.definition.step_at(cursor) {
                Some(step) if step.is_gated() => self.answers.has_value(step.id()),
                _ => true,
            },
        }
    }

    /// Read-only projection for presentation, or `None` once terminal.
    pub fn view(&self) -> Option<QuizView<'_>> {
        let SessionState::Active(cursor) = self.state else {
            return None;
        };
        let step = self.definition.step_at(cursor)?;
        Some(QuizView {
            step,
            progress: (cursor + 1) as f64 / self.definition.len() as f64,
            can_advance: self.can_advance(),
            metric: self.metric,
        })
    }

    /// Record the selected option label for the current step and advance.
    ///
    /// Single-choice steps have no explicit "next": the selection itself is
    /// the advance. No-op once terminal.
    pub fn select_single(&mut self, label: impl Into<String>) {
        let Some(step) = self.current_step() else {
            return;
        };
        let id = step.id().clone();
        self.answers.set(id, AnswerValue::Choice(label.into()));
        self.advance();
    }

    /// Toggle an option label in the current step's multi-select answer.
    ///
    /// Does not advance; zero toggled options is a valid state to advance
    /// from. No-op once terminal.
    pub fn toggle_multi(&mut self, label: &str) {
        let Some(step) = self.current_step() else {
            return;
        };
        let id = step.id().clone();
        self.answers.toggle(id, label);
    }

    /// Record the raw text of the current entry step.
    ///
    /// Called on every keystroke's resulting value, replacing the previous
    /// text. Recomputes the derived metric when this is the height entry and
    /// a weight entry already exists; a weight edit alone never triggers the
    /// recomputation. No-op once terminal.
    pub fn set_text(&mut self, raw: impl Into<String>) {
        let Some(step) = self.current_step() else {
            return;
        };
        let id = step.id().clone();
        let raw = raw.into();
        self.answers.set(id.clone(), AnswerValue::Text(raw.clone()));
        self.recompute_metric(&id, &raw);
    }

    /// Request to leave the current step.
    ///
    /// Gated steps block until their entry is filled; the block is silent
    /// (the cursor simply does not move). Passing the last step fires the
    /// completion receiver with a snapshot of the answers and makes the
    /// session terminal; requests after that keep returning
    /// [`Advance::Completed`] without further effect.
    pub fn request_advance(&mut self) -> Advance {
        if matches!(self.state, SessionState::Active(_)) && !self.can_advance() {
            return Advance::Blocked;
        }
        self.advance()
    }

    /// Move the cursor forward unconditionally, completing past the end.
    fn advance(&mut self) -> Advance {
        match self.state {
            SessionState::Completed => Advance::Completed,
            SessionState::Active(cursor) if cursor + 1 < self.definition.len() => {
                self.state = SessionState::Active(cursor + 1);
                Advance::Moved
            }
            SessionState::Active(_) => {
                self.state = SessionState::Completed;
                if let Some(receiver) = self.on_complete.take() {
                    receiver(self.answers.clone());
                }
                Advance::Completed
            }
        }
    }

    /// Derived-metric hook for text entries.
    ///
    /// The trigger is deliberately asymmetric: only a height entry with a
    /// weight already recorded recomputes (or clears) the metric.
    fn recompute_metric(&mut self, id: &StepId, height_raw: &str) {
        let Some(fields) = self.definition.body_metric() else {
            return;
        };
        if *id != fields.height {
            return;
        }
        let Some(AnswerValue::Text(weight_raw)) = self.answers.get(&fields.weight) else {
            return;
        };
        self.metric = body_mass_index(weight_raw, height_raw);
    }
}

impl std::fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuizSession")
            .field("state", &self.state)
            .field("answers", &self.answers)
            .field("metric", &self.metric)
            .field("has_receiver", &self.on_complete.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quizfunnel_types::{ChoiceOption, InfoStep, SingleChoiceStep, Step, StepKind};

    fn single(id: &str, labels: &[&str]) -> Step {
        Step::new(
            id,
            id,
            StepKind::SingleChoice(SingleChoiceStep::new(
                labels.iter().map(|label| ChoiceOption::new(*label)).collect(),
            )),
        )
    }

    #[test]
    fn starts_on_first_step() {
        let session = QuizSession::new(QuizDefinition::new(vec![
            single("a", &["x"]),
            single("b", &["y"]),
        ]));

        assert_eq!(session.current_step().unwrap().id(), &StepId::new("a"));
        assert!(!session.is_last());
        assert!(!session.is_completed());
    }

    #[test]
    fn select_records_and_advances() {
        let mut session = QuizSession::new(QuizDefinition::new(vec![
            single("a", &["x"]),
            single("b", &["y"]),
        ]));

        session.select_single("x");

        assert_eq!(session.current_step().unwrap().id(), &StepId::new("b"));
        assert_eq!(
            session.answers().get_choice(&StepId::new("a")).unwrap(),
            "x"
        );
        assert!(session.is_last());
    }

    #[test]
    fn empty_quiz_completes_on_first_advance() {
        let mut session = QuizSession::new(QuizDefinition::empty());

        assert_eq!(session.request_advance(), Advance::Completed);
        assert!(session.is_completed());
        assert!(session.view().is_none());
    }

    #[test]
    fn info_step_always_permits_advance() {
        let mut session = QuizSession::new(QuizDefinition::new(vec![Step::new(
            "proof",
            "Great!",
            StepKind::Info(InfoStep::new("Thousands already did it.")),
        )]));

        assert!(session.can_advance());
        assert_eq!(session.request_advance(), Advance::Completed);
    }
}
