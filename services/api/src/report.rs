use crate::infra::{build_service, load_catalogs};
use careerpath::assessment::{PersonalityScores, PersonalityTrait, TraitLevel};
use careerpath::careers::{
    match_components, trait_weight, Career, CareerCatalog, CareerMatch, CareerMatcher,
};
use careerpath::config::AppConfig;
use careerpath::error::AppError;
use clap::Args;
use serde::Serialize;
use serde_json::json;
use std::fmt::Write as _;

#[derive(Args, Debug)]
pub(crate) struct QuizScoreArgs {
    /// Answers in questionnaire order, 1 (strongly disagree) to 5 (strongly agree)
    #[arg(
        long,
        required = true,
        num_args = 1..,
        value_delimiter = ',',
        allow_negative_numbers = true
    )]
    pub(crate) answers: Vec<i64>,
    /// Print the result as JSON instead of a text report
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct CareerListArgs {
    /// Print the catalog as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct CareerMatchArgs {
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub(crate) openness: u8,
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub(crate) conscientiousness: u8,
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub(crate) extraversion: u8,
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub(crate) agreeableness: u8,
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub(crate) neuroticism: u8,
    /// Number of careers to show (defaults to APP_MATCH_LIMIT or 5)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub(crate) limit: Option<u64>,
    /// Show the per-trait similarity terms behind each match
    #[arg(long)]
    pub(crate) explain: bool,
    /// Print the matches as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

/// Machine-readable output of `quiz score --json`.
#[derive(Debug, Serialize)]
struct ScoreReport {
    scores: PersonalityScores,
    dominant_trait: PersonalityTrait,
    matches: Vec<CareerMatch>,
}

pub(crate) fn run_quiz_score(args: QuizScoreArgs) -> Result<(), AppError> {
    let QuizScoreArgs { answers, json } = args;
    let config = AppConfig::load()?;
    let service = build_service(&config)?;

    let scores = service.calculate_personality_scores(&answers)?;
    let matches = service.match_careers(&scores);

    if json {
        let payload = ScoreReport {
            scores,
            dominant_trait: scores.dominant_trait(),
            matches,
        };
        print_json(&payload)?;
    } else {
        print!("{}", render_scores(&scores));
        print!("{}", render_matches(&matches));
    }

    Ok(())
}

pub(crate) fn run_careers_list(args: CareerListArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let careers = config.catalog.career_catalog()?;

    if args.json {
        print_json(&json!({ "careers": careers.careers() }))?;
    } else {
        print!("{}", render_catalog(&careers));
    }
    Ok(())
}

pub(crate) fn run_careers_match(args: CareerMatchArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let careers = config.catalog.career_catalog()?;
    let scores = PersonalityScores::new(
        args.openness,
        args.conscientiousness,
        args.extraversion,
        args.agreeableness,
        args.neuroticism,
    )?;

    let mut match_config = config.matching;
    if let Some(limit) = args.limit {
        match_config.result_limit = usize::try_from(limit).unwrap_or(usize::MAX);
    }
    let matches = CareerMatcher::new(match_config).rank(&scores, careers.careers());

    if args.json {
        print_json(&json!({ "matches": matches }))?;
        return Ok(());
    }

    print!("{}", render_scores(&scores));
    print!("{}", render_matches(&matches));
    if args.explain {
        for entry in &matches {
            print!("{}", render_explanation(&scores, &entry.career));
        }
    }
    Ok(())
}

pub(crate) fn run_catalog_validate() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let (questions, careers) = load_catalogs(&config.catalog)?;

    println!("Catalog validation passed");
    println!(
        "- questions: {} ({})",
        questions.len(),
        source_label(config.catalog.questions_path.as_deref())
    );
    for personality_trait in PersonalityTrait::ALL {
        let items = questions.questions_for_trait(personality_trait);
        let reversed = items
            .iter()
            .filter(|question| question.weight.is_reversed())
            .count();
        println!(
            "  - {}: {} items ({} reverse-keyed)",
            personality_trait.display_name(),
            items.len(),
            reversed
        );
    }

    let without_profile = careers
        .careers()
        .iter()
        .filter(|career| career.personality_match.is_none())
        .count();
    println!(
        "- careers: {} ({})",
        careers.len(),
        source_label(config.catalog.careers_path.as_deref())
    );
    if without_profile > 0 {
        println!(
            "  - {} without an ideal profile (scored at the fallback)",
            without_profile
        );
    }
    Ok(())
}

fn source_label(path: Option<&std::path::Path>) -> String {
    match path {
        Some(path) => path.display().to_string(),
        None => "bundled".to_string(),
    }
}

fn print_json<T: Serialize>(payload: &T) -> Result<(), AppError> {
    let rendered = serde_json::to_string_pretty(payload)
        .map_err(std::io::Error::from)?;
    println!("{rendered}");
    Ok(())
}

/// Trait table with the banded level for each score.
pub(crate) fn render_scores(scores: &PersonalityScores) -> String {
    let mut out = String::from("Personality profile\n");
    for (personality_trait, value) in scores.iter() {
        let _ = writeln!(
            out,
            "- {:<18} {:>3}  {:<8} {}",
            personality_trait.display_name(),
            value,
            TraitLevel::from_score(value).label(),
            bar(value)
        );
    }
    let _ = writeln!(
        out,
        "Dominant trait: {}",
        scores.dominant_trait().display_name()
    );
    out
}

pub(crate) fn render_matches(matches: &[CareerMatch]) -> String {
    if matches.is_empty() {
        return "No careers matched (catalog is empty)\n".to_string();
    }

    let mut out = format!("Top {} career matches\n", matches.len());
    for (rank, entry) in matches.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>2}. {} ({}) | match {} | {} | growth {}",
            rank + 1,
            entry.career.title,
            entry.career.id,
            entry.match_score,
            entry.career.salary,
            entry.career.growth
        );
    }
    out
}

pub(crate) fn render_catalog(catalog: &CareerCatalog) -> String {
    let mut out = format!("{} careers\n", catalog.len());
    for career in catalog.careers() {
        let profile = if career.personality_match.is_some() {
            ""
        } else {
            " [no ideal profile]"
        };
        let _ = writeln!(
            out,
            "- {} ({}) | {} | growth {}{}",
            career.title, career.id, career.salary, career.growth, profile
        );
    }
    out
}

/// Per-trait similarity breakdown for one career.
pub(crate) fn render_explanation(scores: &PersonalityScores, career: &Career) -> String {
    let Some(ideal) = career.personality_match.as_ref() else {
        return format!(
            "{}: no ideal profile, fallback score applies\n",
            career.title
        );
    };

    let mut out = format!("{} breakdown\n", career.title);
    for part in match_components(scores, ideal) {
        let _ = writeln!(
            out,
            "  - {:<18} ideal {:.2} | similarity {:.2} | weight {:.2} (x{:.1})",
            part.personality_trait.display_name(),
            ideal.get(part.personality_trait),
            part.similarity,
            part.weight,
            trait_weight(part.personality_trait)
        );
    }
    out
}

fn bar(value: u8) -> String {
    let filled = usize::from(value / 10);
    format!("{}{}", "#".repeat(filled), ".".repeat(10 - filled))
}
