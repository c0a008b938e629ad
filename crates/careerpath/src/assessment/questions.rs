use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use super::domain::{PersonalityTrait, Question, QuestionWeight};
use super::scoring::calculate_scores;
use super::PersonalityScores;
use crate::error::{AssessmentError, ConfigurationError};

const STANDARD_QUESTIONS: &str = include_str!("../../data/questions.json");

/// Validated, read-only questionnaire.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Result<Self, ConfigurationError> {
        validate_questions(&questions)?;
        Ok(Self { questions })
    }

    /// The questionnaire bundled with the crate.
    pub fn standard() -> Result<Self, ConfigurationError> {
        Self::from_json_str(STANDARD_QUESTIONS)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, ConfigurationError> {
        let questions: Vec<Question> = serde_json::from_str(raw)?;
        Self::new(questions)
    }

    /// Reads `id,text,category,weight` rows.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, ConfigurationError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut questions = Vec::new();

        for row in csv_reader.deserialize::<QuestionRow>() {
            questions.push(row?.into_question()?);
        }

        Self::new(questions)
    }

    /// Loads a `.csv` or JSON catalog from disk.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigurationError> {
        let path = path.as_ref();
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("csv"))
            .unwrap_or(false);

        if is_csv {
            let file = std::fs::File::open(path).map_err(|source| ConfigurationError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            Self::from_csv_reader(file)
        } else {
            let raw = std::fs::read_to_string(path).map_err(|source| ConfigurationError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            Self::from_json_str(&raw)
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn questions_for_trait(&self, personality_trait: PersonalityTrait) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|question| question.category == personality_trait)
            .collect()
    }

    /// Scores answers given in questionnaire order.
    pub fn score(&self, answers: &[i64]) -> Result<PersonalityScores, AssessmentError> {
        calculate_scores(answers, &self.questions)
    }
}

pub(crate) fn validate_questions(questions: &[Question]) -> Result<(), ConfigurationError> {
    let mut seen = HashSet::new();
    for question in questions {
        if !seen.insert(question.id.as_str()) {
            return Err(ConfigurationError::DuplicateQuestion(question.id.clone()));
        }
    }

    for personality_trait in PersonalityTrait::ALL {
        if !questions
            .iter()
            .any(|question| question.category == personality_trait)
        {
            return Err(ConfigurationError::TraitWithoutQuestions(personality_trait));
        }
    }

    Ok(())
}

#[derive(Debug, Deserialize)]
struct QuestionRow {
    id: String,
    text: String,
    category: String,
    weight: i64,
}

impl QuestionRow {
    fn into_question(self) -> Result<Question, ConfigurationError> {
        let category = self
            .category
            .parse::<PersonalityTrait>()
            .map_err(|_| ConfigurationError::UnknownCategory {
                question_id: self.id.clone(),
                category: self.category.clone(),
            })?;
        let weight = i8::try_from(self.weight)
            .ok()
            .and_then(|weight| QuestionWeight::try_from(weight).ok())
            .ok_or_else(|| ConfigurationError::UnsupportedWeight {
                question_id: self.id.clone(),
                weight: self.weight,
            })?;

        Ok(Question {
            id: self.id,
            text: self.text,
            category,
            weight,
        })
    }
}
