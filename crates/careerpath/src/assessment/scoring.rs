use super::domain::{PersonalityScores, PersonalityTrait, Question};
use crate::error::{AssessmentError, ConfigurationError, ValidationError};

/// Highest value on the Likert scale.
const LIKERT_MAX: u8 = 5;
const LIKERT_MIN: u8 = 1;

#[derive(Debug, Default, Clone, Copy)]
struct TraitTally {
    sum: u32,
    count: u32,
}

impl TraitTally {
    fn percentage(self) -> u8 {
        let ratio = f64::from(self.sum) / (f64::from(self.count) * f64::from(LIKERT_MAX));
        round_half_up(ratio * 100.0) as u8
    }
}

/// Converts positional Likert answers into trait percentages.
///
/// `answers[i]` answers `questions[i]`. Reverse-scored questions contribute
/// `6 - answer`. Each trait score is the mean adjusted answer expressed as a
/// percentage of the scale maximum, rounded half up.
pub fn calculate_scores(
    answers: &[i64],
    questions: &[Question],
) -> Result<PersonalityScores, AssessmentError> {
    let mut tallies = [TraitTally::default(); 5];
    for question in questions {
        tallies[question.category.index()].count += 1;
    }
    for (tally, personality_trait) in tallies.iter().zip(PersonalityTrait::ALL) {
        if tally.count == 0 {
            return Err(ConfigurationError::TraitWithoutQuestions(personality_trait).into());
        }
    }

    if answers.len() != questions.len() {
        return Err(ValidationError::AnswerCountMismatch {
            expected: questions.len(),
            actual: answers.len(),
        }
        .into());
    }

    for (position, (&raw, question)) in answers.iter().zip(questions).enumerate() {
        let answer = likert_answer(position, raw)?;
        tallies[question.category.index()].sum += u32::from(question.adjust(answer));
    }

    let mut values = [0u8; 5];
    for (slot, tally) in values.iter_mut().zip(tallies) {
        *slot = tally.percentage();
    }

    Ok(PersonalityScores::from_array(values))
}

fn likert_answer(position: usize, raw: i64) -> Result<u8, ValidationError> {
    u8::try_from(raw)
        .ok()
        .filter(|value| (LIKERT_MIN..=LIKERT_MAX).contains(value))
        .ok_or(ValidationError::AnswerOutOfRange {
            position: position + 1,
            value: raw,
        })
}

/// Rounds `.5` toward positive infinity.
pub(crate) fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}
