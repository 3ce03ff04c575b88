//! Integration tests for quizfunnel sessions.

use std::cell::RefCell;
use std::rc::Rc;

use quizfunnel::{
    Advance, Answers, AnswerValue, ChoiceOption, InfoStep, MultiChoiceStep, QuizDefinition,
    QuizSession, SingleChoiceStep, Step, StepId, StepKind, TextEntryStep,
};

/// A small fixture: one choice, two gated entries, one multi-select, one
/// informational step, with the entries feeding the body metric.
fn short_quiz() -> QuizDefinition {
    QuizDefinition::new(vec![
        Step::new(
            "goal",
            "What is your goal?",
            StepKind::SingleChoice(SingleChoiceStep::new(vec![
                ChoiceOption::new("Lose weight"),
                ChoiceOption::new("Build muscle"),
            ])),
        ),
        Step::new(
            "weight",
            "Your weight?",
            StepKind::TextEntry(TextEntryStep::new().with_unit("kg")),
        ),
        Step::new(
            "height",
            "Your height?",
            StepKind::TextEntry(TextEntryStep::new().with_unit("m")),
        ),
        Step::new(
            "focus",
            "Focus areas?",
            StepKind::MultiChoice(MultiChoiceStep::new(vec![
                ChoiceOption::new("Arms"),
                ChoiceOption::new("Back"),
            ])),
        ),
        Step::new(
            "outro",
            "Almost there!",
            StepKind::Info(InfoStep::new("Your plan is nearly ready.")),
        ),
    ])
    .with_body_metric("weight", "height")
}

#[test]
fn progress_fraction_tracks_the_cursor() {
    let quiz = short_quiz();
    let n = quiz.len();
    let mut session = QuizSession::new(quiz);

    session.select_single("Lose weight");
    assert_eq!(session.view().unwrap().progress, 2.0 / n as f64);

    session.set_text("70");
    assert_eq!(session.request_advance(), Advance::Moved);
    assert_eq!(session.view().unwrap().progress, 3.0 / n as f64);
}

#[test]
fn gated_step_blocks_until_a_value_is_set() {
    let mut session = QuizSession::new(short_quiz());
    session.select_single("Lose weight");

    // On the weight entry with nothing recorded.
    assert!(!session.can_advance());
    assert!(!session.view().unwrap().can_advance);
    assert_eq!(session.request_advance(), Advance::Blocked);
    assert_eq!(session.view().unwrap().step.id(), &StepId::new("weight"));

    session.set_text("70");
    assert!(session.can_advance());
    assert!(session.view().unwrap().can_advance);
    assert_eq!(session.request_advance(), Advance::Moved);
    assert_eq!(session.view().unwrap().step.id(), &StepId::new("height"));
}

#[test]
fn clearing_the_entry_blocks_again() {
    let mut session = QuizSession::new(short_quiz());
    session.select_single("Lose weight");

    session.set_text("70");
    assert!(session.can_advance());

    session.set_text("");
    assert!(!session.can_advance());
    assert_eq!(session.request_advance(), Advance::Blocked);
}

#[test]
fn completion_receiver_fires_exactly_once_with_the_full_snapshot() {
    let deliveries: Rc<RefCell<Vec<Answers>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&deliveries);

    let mut session = QuizSession::new(short_quiz())
        .on_complete(move |answers| sink.borrow_mut().push(answers));

    session.select_single("Build muscle");
    session.set_text("70");
    assert_eq!(session.request_advance(), Advance::Moved);
    session.set_text("1.75");
    assert_eq!(session.request_advance(), Advance::Moved);
    session.toggle_multi("Arms");
    assert_eq!(session.request_advance(), Advance::Moved);

    // Passing the last (informational) step is the terminal transition.
    assert!(session.is_last());
    assert_eq!(session.request_advance(), Advance::Completed);
    assert!(session.is_completed());

    // Asking again neither re-fires the receiver nor changes state.
    assert_eq!(session.request_advance(), Advance::Completed);

    let deliveries = deliveries.borrow();
    assert_eq!(deliveries.len(), 1);
    let snapshot = &deliveries[0];
    assert_eq!(snapshot.len(), 4);
    assert_eq!(
        snapshot.get_choice(&StepId::new("goal")).unwrap(),
        "Build muscle"
    );
    assert_eq!(snapshot.get_text(&StepId::new("height")).unwrap(), "1.75");
    assert_eq!(snapshot.get_choices(&StepId::new("focus")).unwrap(), ["Arms"]);
}

#[test]
fn advancing_n_minus_one_times_reaches_the_last_step() {
    let steps: Vec<Step> = (0..6)
        .map(|i| {
            Step::new(format!("step{i}"), "...", StepKind::Info(InfoStep::new("")))
        })
        .collect();
    let n = steps.len();
    let mut session = QuizSession::new(QuizDefinition::new(steps));

    for k in 1..n {
        assert_eq!(session.request_advance(), Advance::Moved);
        assert_eq!(session.view().unwrap().progress, (k + 1) as f64 / n as f64);
    }
    assert!(session.is_last());
    assert_eq!(session.request_advance(), Advance::Completed);
}

#[test]
fn intents_after_completion_are_silent_noops() {
    let mut session = QuizSession::new(QuizDefinition::new(vec![Step::new(
        "only",
        "Only step",
        StepKind::Info(InfoStep::new("")),
    )]));

    assert_eq!(session.request_advance(), Advance::Completed);
    let snapshot = session.answers().clone();

    session.select_single("anything");
    session.toggle_multi("anything");
    session.set_text("anything");
    assert_eq!(session.request_advance(), Advance::Completed);

    assert_eq!(session.answers(), &snapshot);
    assert!(session.current_step().is_none());
}

#[test]
fn metric_appears_when_height_follows_weight() {
    let mut session = QuizSession::new(short_quiz());
    session.select_single("Lose weight");

    session.set_text("70");
    assert_eq!(session.metric(), None);
    session.request_advance();

    session.set_text("1.75");
    assert_eq!(session.metric().unwrap().to_string(), "22.9");
    assert_eq!(session.view().unwrap().metric, session.metric());
}

#[test]
fn centimeter_height_matches_meter_height() {
    let mut session = QuizSession::new(short_quiz());
    session.select_single("Lose weight");
    session.set_text("70");
    session.request_advance();

    session.set_text("175");
    assert_eq!(session.metric().unwrap().to_string(), "22.9");
}

#[test]
fn invalid_height_clears_the_metric() {
    let mut session = QuizSession::new(short_quiz());
    session.select_single("Lose weight");
    session.set_text("70");
    session.request_advance();

    session.set_text("1.75");
    assert!(session.metric().is_some());

    session.set_text("abc");
    assert_eq!(session.metric(), None);
}

#[test]
fn weight_edits_alone_never_recompute() {
    // Height is recorded first by editing out of order via a definition
    // where height precedes weight in the sequence.
    let quiz = QuizDefinition::new(vec![
        Step::new(
            "height",
            "Your height?",
            StepKind::TextEntry(TextEntryStep::new()),
        ),
        Step::new(
            "weight",
            "Your weight?",
            StepKind::TextEntry(TextEntryStep::new()),
        ),
    ])
    .with_body_metric("weight", "height");

    let mut session = QuizSession::new(quiz);

    // No weight recorded yet: the height edit finds nothing to pair with.
    session.set_text("1.75");
    assert_eq!(session.metric(), None);
    session.request_advance();

    // A weight edit is not a trigger, even with height present.
    session.set_text("70");
    assert_eq!(session.metric(), None);
}

#[test]
fn toggling_twice_restores_the_empty_set() {
    let mut session = QuizSession::new(short_quiz());
    session.select_single("Lose weight");
    session.set_text("70");
    session.request_advance();
    session.set_text("1.75");
    session.request_advance();

    session.toggle_multi("Back");
    session.toggle_multi("Back");

    assert!(
        session
            .answers()
            .get_choices(&StepId::new("focus"))
            .unwrap()
            .is_empty()
    );
    // Zero selections still permits the advance.
    assert!(session.can_advance());
}

#[test]
fn multi_select_with_no_touch_leaves_no_entry() {
    let mut session = QuizSession::new(short_quiz());
    session.select_single("Lose weight");
    session.set_text("70");
    session.request_advance();
    session.set_text("1.75");
    session.request_advance();

    // Advance straight past the multi-select step without toggling.
    assert_eq!(session.request_advance(), Advance::Moved);
    assert!(!session.answers().contains(&StepId::new("focus")));
}

#[test]
fn selection_advances_past_the_choice_step() {
    let mut session = QuizSession::new(short_quiz());
    session.select_single("Lose weight");

    // The cursor has moved on; a second select records on the next step,
    // not the previous one.
    assert_eq!(
        session
            .answers()
            .get_choice(&StepId::new("goal"))
            .unwrap(),
        "Lose weight"
    );
    assert_eq!(session.view().unwrap().step.id(), &StepId::new("weight"));
}

#[test]
fn answer_values_stay_discriminated_in_the_snapshot() {
    let delivered: Rc<RefCell<Option<Answers>>> = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&delivered);

    let mut session =
        QuizSession::new(short_quiz()).on_complete(move |answers| *sink.borrow_mut() = Some(answers));

    session.select_single("Lose weight");
    session.set_text("70");
    session.request_advance();
    session.set_text("1.75");
    session.request_advance();
    session.toggle_multi("Arms");
    session.request_advance();
    session.request_advance();

    let delivered = delivered.borrow();
    let snapshot = delivered.as_ref().unwrap();
    assert!(matches!(
        snapshot.get(&StepId::new("goal")),
        Some(AnswerValue::Choice(_))
    ));
    assert!(matches!(
        snapshot.get(&StepId::new("weight")),
        Some(AnswerValue::Text(_))
    ));
    assert!(matches!(
        snapshot.get(&StepId::new("focus")),
        Some(AnswerValue::Choices(_))
    ));
}
