use crate::infra::build_service;
use crate::report::{render_explanation, render_matches, render_scores};
use careerpath::assessment::{PersonalityTrait, Question, QuestionBank};
use careerpath::config::AppConfig;
use careerpath::error::AppError;
use careerpath::quiz::{CareerPathService, QuizResult, ResultRepository};
use clap::{Args, ValueEnum};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Scripted respondent whose answers drive the demo.
    #[arg(long, value_enum, default_value_t = Persona::Analyst)]
    pub(crate) persona: Persona,
    /// Print the stored result payload as returned by the HTTP API.
    #[arg(long)]
    pub(crate) show_json: bool,
    /// Include the per-trait breakdown for the best match.
    #[arg(long)]
    pub(crate) explain: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum Persona {
    /// Curious, methodical and reserved.
    #[default]
    Analyst,
    /// Imaginative and outgoing with a loose grip on routine.
    Creator,
    /// Warm, steady and people-focused.
    Caregiver,
    /// Neutral on every statement.
    Undecided,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Leaning {
    Low,
    Neutral,
    High,
}

impl Persona {
    fn label(self) -> &'static str {
        match self {
            Persona::Analyst => "analyst",
            Persona::Creator => "creator",
            Persona::Caregiver => "caregiver",
            Persona::Undecided => "undecided",
        }
    }

    fn leaning(self, personality_trait: PersonalityTrait) -> Leaning {
        use Leaning::{High, Low, Neutral};
        use PersonalityTrait::*;

        match (self, personality_trait) {
            (Persona::Undecided, _) => Neutral,
            (Persona::Analyst, Openness | Conscientiousness) => High,
            (Persona::Analyst, Extraversion | Neuroticism) => Low,
            (Persona::Analyst, Agreeableness) => Neutral,
            (Persona::Creator, Openness | Extraversion) => High,
            (Persona::Creator, Conscientiousness) => Low,
            (Persona::Creator, Agreeableness | Neuroticism) => Neutral,
            (Persona::Caregiver, Agreeableness | Conscientiousness) => High,
            (Persona::Caregiver, Neuroticism) => Low,
            (Persona::Caregiver, Openness | Extraversion) => Neutral,
        }
    }

    /// Raw Likert answer this persona gives to one statement.
    fn answer(self, question: &Question) -> i64 {
        let adjusted = match self.leaning(question.category) {
            Leaning::High => 5,
            Leaning::Neutral => 3,
            Leaning::Low => 1,
        };
        if question.weight.is_reversed() {
            6 - adjusted
        } else {
            adjusted
        }
    }
}

fn scripted_answers(persona: Persona, questions: &QuestionBank) -> Vec<i64> {
    questions
        .questions()
        .iter()
        .map(|question| persona.answer(question))
        .collect()
}

/// Stores a submission and reads it back the way an API client would.
fn submit_and_reload<R>(
    service: &CareerPathService<R>,
    answers: &[i64],
) -> Result<QuizResult, AppError>
where
    R: ResultRepository + 'static,
{
    let submitted = service.submit(answers)?;
    Ok(service.get(&submitted.result_id)?)
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        persona,
        show_json,
        explain,
    } = args;

    let config = AppConfig::load()?;
    let service = build_service(&config)?;

    println!("CareerPath demo (persona: {})", persona.label());
    let answers = scripted_answers(persona, service.questions());
    let rendered: Vec<String> = answers.iter().map(i64::to_string).collect();
    println!(
        "Answered {} statements: {}",
        answers.len(),
        rendered.join(",")
    );

    let result = submit_and_reload(&service, &answers)?;
    println!(
        "Stored result {} at {}\n",
        result.result_id,
        result.completed_at.format("%Y-%m-%d %H:%M:%S UTC")
    );

    print!("{}", render_scores(&result.scores));
    println!();
    print!("{}", render_matches(&result.matches));

    if explain {
        if let Some(best) = result.matches.first() {
            println!();
            print!("{}", render_explanation(&result.scores, &best.career));
        }
    }

    if show_json {
        let json = serde_json::to_string_pretty(&result.summary_view())
            .map_err(std::io::Error::from)?;
        println!("\nStored result payload:\n{}", json);
    }

    Ok(())
}
