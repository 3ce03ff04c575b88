//! Dialoguer backend implementation for the QuizBackend trait.

use std::cell::RefCell;
use std::rc::Rc;

use dialoguer::{Confirm, Input, MultiSelect, Select, theme::ColorfulTheme};
use quizfunnel::{
    Advance, Answers, ChoiceOption, InfoStep, MultiChoiceStep, QuizBackend, QuizDefinition,
    QuizError, QuizSession, SingleChoiceStep, StepKind, TextEntryStep,
};
use thiserror::Error;

/// Error type for the Dialoguer backend.
#[derive(Debug, Error)]
pub enum WizardError {
    /// User cancelled the quiz (e.g., pressed Ctrl+C or Escape).
    #[error("Quiz cancelled by user")]
    Cancelled,

    /// An I/O error occurred during prompting.
    #[error("Dialoguer error: {0}")]
    Dialoguer(#[from] dialoguer::Error),
}

impl From<WizardError> for QuizError {
    fn from(err: WizardError) -> Self {
        match err {
            WizardError::Cancelled => Self::Cancelled,
            other => Self::backend(other),
        }
    }
}

/// Helper to check if a dialoguer error is a cancellation (Ctrl+C / Escape)
fn is_cancelled(err: &dialoguer::Error) -> bool {
    matches!(err, dialoguer::Error::IO(io_err) if io_err.kind() == std::io::ErrorKind::Interrupted)
}

/// Dialoguer backend for interactive CLI quizzes.
///
/// Drives a `QuizSession` step by step with `dialoguer` prompts and a
/// colorful theme. The session owns all quiz state; this backend only
/// renders views and forwards intents.
#[derive(Debug, Default, Clone)]
pub struct DialoguerWizard {
    /// Use colorful theme for prompts.
    colorful: bool,
}

impl DialoguerWizard {
    /// Create a new wizard with default (colorful) theme.
    pub fn new() -> Self {
        Self { colorful: true }
    }

    /// Create a wizard with plain (no color) theme.
    pub fn plain() -> Self {
        Self { colorful: false }
    }

    fn ask_single_choice(
        &self,
        session: &mut QuizSession,
        prompt: &str,
        step: &SingleChoiceStep,
    ) -> Result<(), WizardError> {
        let items: Vec<String> = step.options.iter().map(option_line).collect();

        let mut builder: Select;
        let _theme;
        if self.colorful {
            _theme = ColorfulTheme::default();
            builder = Select::with_theme(&_theme);
        } else {
            builder = Select::new();
        }
        builder = builder.with_prompt(prompt).items(&items).default(0);

        match builder.interact() {
            Ok(index) => {
                session.select_single(step.options[index].label.clone());
                Ok(())
            }
            Err(e) if is_cancelled(&e) => Err(WizardError::Cancelled),
            Err(e) => Err(WizardError::Dialoguer(e)),
        }
    }

    fn ask_multi_choice(
        &self,
        session: &mut QuizSession,
        prompt: &str,
        step: &MultiChoiceStep,
    ) -> Result<(), WizardError> {
        let items: Vec<String> = step.options.iter().map(option_line).collect();

        let mut builder: MultiSelect;
        let _theme;
        if self.colorful {
            _theme = ColorfulTheme::default();
            builder = MultiSelect::with_theme(&_theme);
        } else {
            builder = MultiSelect::new();
        }
        builder = builder.with_prompt(prompt).items(&items);

        match builder.interact() {
            Ok(indices) => {
                for index in indices {
                    session.toggle_multi(&step.options[index].label);
                }
                // Zero selections is fine; the step never gates.
                session.request_advance();
                Ok(())
            }
            Err(e) if is_cancelled(&e) => Err(WizardError::Cancelled),
            Err(e) => Err(WizardError::Dialoguer(e)),
        }
    }

    fn ask_text_entry(
        &self,
        session: &mut QuizSession,
        prompt: &str,
        step: &TextEntryStep,
        show_metric: bool,
    ) -> Result<(), WizardError> {
        let mut prompt = match &step.unit {
            Some(unit) => format!("{prompt} ({unit})"),
            None => prompt.to_string(),
        };
        if let Some(placeholder) = &step.placeholder {
            prompt = format!("{prompt} [{placeholder}]");
        }

        loop {
            let _theme;
            let mut builder: Input<String>;
            if self.colorful {
                _theme = ColorfulTheme::default();
                builder = Input::with_theme(&_theme);
            } else {
                builder = Input::new();
            }
            builder = builder.with_prompt(&prompt).allow_empty(true);

            match builder.interact_text() {
                Ok(value) => {
                    session.set_text(value);
                    if show_metric
                        && let Some(metric) = session.metric()
                    {
                        println!("Your calculated BMI: {metric}");
                    }
                    match session.request_advance() {
                        Advance::Blocked => {
                            println!("Error: a value is required");
                            continue;
                        }
                        Advance::Moved | Advance::Completed => return Ok(()),
                    }
                }
                Err(e) if is_cancelled(&e) => return Err(WizardError::Cancelled),
                Err(e) => return Err(WizardError::Dialoguer(e)),
            }
        }
    }

    fn show_info(
        &self,
        session: &mut QuizSession,
        prompt: &str,
        step: &InfoStep,
    ) -> Result<(), WizardError> {
        println!("{prompt}");
        println!("{}", step.body);

        loop {
            let mut builder: Confirm;
            let _theme;
            if self.colorful {
                _theme = ColorfulTheme::default();
                builder = Confirm::with_theme(&_theme);
            } else {
                builder = Confirm::new();
            }
            builder = builder.with_prompt("Continue?").default(true);

            match builder.interact() {
                Ok(true) => {
                    session.request_advance();
                    return Ok(());
                }
                Ok(false) => continue,
                Err(e) if is_cancelled(&e) => return Err(WizardError::Cancelled),
                Err(e) => return Err(WizardError::Dialoguer(e)),
            }
        }
    }
}

/// Render an option as a single selection line.
fn option_line(option: &ChoiceOption) -> String {
    match &option.description {
        Some(description) => format!("{} ({description})", option.label),
        None => option.label.clone(),
    }
}

impl QuizBackend for DialoguerWizard {
    type Error = WizardError;

    fn run(&self, definition: &QuizDefinition) -> Result<Answers, WizardError> {
        let collected = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&collected);
        let mut session = QuizSession::new(definition.clone())
            .on_complete(move |answers| *sink.borrow_mut() = Some(answers));

        let total = definition.len();
        let height_step = definition.body_metric().map(|fields| fields.height.clone());

        loop {
            let Some(view) = session.view() else {
                break;
            };
            let step = view.step.clone();
            let position = (view.progress * total as f64).round() as usize;
            let prompt = format!("[{position}/{total}] {}", step.prompt());

            match step.kind() {
                StepKind::SingleChoice(single) => {
                    self.ask_single_choice(&mut session, &prompt, single)?;
                }
                StepKind::MultiChoice(multi) => {
                    self.ask_multi_choice(&mut session, &prompt, multi)?;
                }
                StepKind::TextEntry(entry) => {
                    let show_metric = height_step.as_ref() == Some(step.id());
                    self.ask_text_entry(&mut session, &prompt, entry, show_metric)?;
                }
                StepKind::Info(info) => {
                    self.show_info(&mut session, &prompt, info)?;
                }
            }
        }

        Ok(collected.borrow_mut().take().unwrap_or_default())
    }
}
