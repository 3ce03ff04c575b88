//! The fitness onboarding funnel: 18 steps from gender to commitment.

use quizfunnel::{
    ChoiceOption, InfoStep, MultiChoiceStep, QuizDefinition, SingleChoiceStep, Step, StepKind,
    TextEntryStep,
};

fn options(labels: &[&str]) -> Vec<ChoiceOption> {
    labels.iter().map(|label| ChoiceOption::new(*label)).collect()
}

fn single(id: &str, prompt: &str, choices: Vec<ChoiceOption>) -> Step {
    Step::new(id, prompt, StepKind::SingleChoice(SingleChoiceStep::new(choices)))
}

/// The full onboarding funnel. The weight and height entries feed the
/// derived body-mass metric shown on the height step.
pub fn fitness_funnel() -> QuizDefinition {
    QuizDefinition::new(vec![
        single(
            "gender",
            "What is your gender?",
            options(&["Man", "Woman"]),
        ),
        single(
            "age",
            "How old are you?",
            options(&["18 - 29", "30 - 39", "40 - 49", "50+"]),
        ),
        single(
            "goal",
            "What is your main goal?",
            vec![
                ChoiceOption::with_description(
                    "Lean out and define",
                    "Lose fat and show muscle",
                ),
                ChoiceOption::with_description(
                    "Lose weight fast",
                    "Drop measurements as quickly as possible",
                ),
                ChoiceOption::with_description(
                    "Gain lean mass",
                    "Get stronger with a toned body",
                ),
                ChoiceOption::with_description(
                    "Improve conditioning",
                    "More stamina and energy",
                ),
            ],
        ),
        single(
            "obstacle",
            "What holds you back the most today?",
            options(&[
                "Lack of time",
                "Low motivation",
                "Anxiety and cravings",
                "Slow metabolism",
                "I don't know where to start",
            ]),
        ),
        single(
            "experience",
            "How experienced are you with training?",
            vec![
                ChoiceOption::with_description("Sedentary", "Haven't trained in months or years"),
                ChoiceOption::with_description("Beginner", "Train now and then, no routine"),
                ChoiceOption::with_description("Intermediate", "Train 2 to 3 times a week"),
                ChoiceOption::with_description("Advanced", "Train hard almost every day"),
            ],
        ),
        single(
            "motivation",
            "What motivated you to start now?",
            options(&[
                "Feeling good at the beach",
                "Health and energy",
                "Self-esteem and confidence",
                "A specific event",
            ]),
        ),
        single(
            "time",
            "How much time do you have per day?",
            vec![
                ChoiceOption::with_description("15-20 minutes", "Short, intense workouts"),
                ChoiceOption::with_description("30-45 minutes", "Ideal for consistent results"),
                ChoiceOption::with_description("More than 1 hour", "Plenty of time to spare"),
            ],
        ),
        single(
            "environment",
            "Where do you prefer to train?",
            vec![
                ChoiceOption::with_description("At home", "Comfort and convenience"),
                ChoiceOption::with_description("At the gym", "I like the equipment"),
                ChoiceOption::with_description("Outdoors", "Parks and open spaces"),
            ],
        ),
        single(
            "frequency",
            "How many times a week can you train?",
            options(&["1 to 2 times", "3 to 4 times", "5 times or more"]),
        ),
        single(
            "weight_goal",
            "How much weight do you want to lose?",
            options(&[
                "2kg to 5kg",
                "5kg to 10kg",
                "More than 10kg",
                "I don't want to lose weight, just define",
            ]),
        ),
        Step::new(
            "current_weight",
            "What is your current weight?",
            StepKind::TextEntry(
                TextEntryStep::new()
                    .with_placeholder("e.g. 70.5")
                    .with_unit("kg"),
            ),
        ),
        Step::new(
            "height",
            "What is your height?",
            StepKind::TextEntry(
                TextEntryStep::new()
                    .with_placeholder("e.g. 1.75")
                    .with_unit("m"),
            ),
        ),
        Step::new(
            "social_proof",
            "Great! We understand your profile.",
            StepKind::Info(InfoStep::new(
                "Thousands of people with a profile like yours have already seen \
                 real results in the first two weeks.",
            )),
        ),
        single(
            "injury",
            "Do you have any injuries?",
            options(&[
                "No, I'm 100% healthy",
                "Yes, in the knee",
                "Yes, in the back",
                "Yes, in the shoulder",
                "Another injury",
            ]),
        ),
        single(
            "visualization",
            "How do you want to feel?",
            options(&[
                "Confident in any outfit",
                "Energized all day",
                "Proud of my photos",
                "Free of bloating",
            ]),
        ),
        single(
            "format",
            "How would you like to receive your training plan?",
            options(&["Text", "Images", "Videos", "All of them"]),
        ),
        Step::new(
            "focus_areas",
            "Which areas do you want to focus on? (Pick as many as you like)",
            StepKind::MultiChoice(MultiChoiceStep::new(options(&[
                "Belly / Abs",
                "Legs / Thighs",
                "Glutes",
                "Arms",
                "Back",
                "Chest",
            ]))),
        ),
        single(
            "commitment",
            "Last step! Are you really committed to following the plan for the next 30 days?",
            options(&["Yes, I'm committed!", "No, I'd rather stay as I am"]),
        ),
    ])
    .with_body_metric("current_weight", "height")
}
