//! Run the fitness funnel as an interactive CLI wizard.
//!
//! ```sh
//! cargo run --example fitness
//! ```

use anyhow::Result;
use example_quizzes::fitness_funnel;
use quizfunnel::{QuizBackend, QuizError};
use quizfunnel_wizard_dialoguer::DialoguerWizard;

fn main() -> Result<()> {
    let answers = match DialoguerWizard::new()
        .run(&fitness_funnel())
        .map_err(QuizError::from)
    {
        Ok(answers) => answers,
        Err(err) if err.is_cancelled() => {
            println!("Quiz abandoned.");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    println!();
    println!("Collected {} answers:", answers.len());
    for (step, value) in &answers {
        println!("  {step}: {value:?}");
    }

    Ok(())
}
