use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ValidationError;

/// Big Five dimension a question measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonalityTrait {
    Openness,
    Conscientiousness,
    Extraversion,
    Agreeableness,
    Neuroticism,
}

impl PersonalityTrait {
    /// Canonical OCEAN ordering used for iteration and tie-breaks.
    pub const ALL: [PersonalityTrait; 5] = [
        PersonalityTrait::Openness,
        PersonalityTrait::Conscientiousness,
        PersonalityTrait::Extraversion,
        PersonalityTrait::Agreeableness,
        PersonalityTrait::Neuroticism,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            PersonalityTrait::Openness => "openness",
            PersonalityTrait::Conscientiousness => "conscientiousness",
            PersonalityTrait::Extraversion => "extraversion",
            PersonalityTrait::Agreeableness => "agreeableness",
            PersonalityTrait::Neuroticism => "neuroticism",
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            PersonalityTrait::Openness => "Openness",
            PersonalityTrait::Conscientiousness => "Conscientiousness",
            PersonalityTrait::Extraversion => "Extraversion",
            PersonalityTrait::Agreeableness => "Agreeableness",
            PersonalityTrait::Neuroticism => "Neuroticism",
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            PersonalityTrait::Openness => 0,
            PersonalityTrait::Conscientiousness => 1,
            PersonalityTrait::Extraversion => 2,
            PersonalityTrait::Agreeableness => 3,
            PersonalityTrait::Neuroticism => 4,
        }
    }
}

impl fmt::Display for PersonalityTrait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raised when a trait name does not belong to the Big Five set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown personality trait '{0}'")]
pub struct UnknownTrait(pub String);

impl FromStr for PersonalityTrait {
    type Err = UnknownTrait;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "openness" | "o" => Ok(Self::Openness),
            "conscientiousness" | "c" => Ok(Self::Conscientiousness),
            "extraversion" | "extroversion" | "e" => Ok(Self::Extraversion),
            "agreeableness" | "a" => Ok(Self::Agreeableness),
            "neuroticism" | "n" => Ok(Self::Neuroticism),
            _ => Err(UnknownTrait(value.to_string())),
        }
    }
}

/// Scoring direction of a question. Serialized as `1` or `-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
pub enum QuestionWeight {
    Direct,
    Reversed,
}

impl QuestionWeight {
    pub const fn is_reversed(self) -> bool {
        matches!(self, QuestionWeight::Reversed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("question weight must be 1 or -1 (received {0})")]
pub struct UnsupportedWeight(pub i8);

impl TryFrom<i8> for QuestionWeight {
    type Error = UnsupportedWeight;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Direct),
            -1 => Ok(Self::Reversed),
            other => Err(UnsupportedWeight(other)),
        }
    }
}

impl From<QuestionWeight> for i8 {
    fn from(value: QuestionWeight) -> Self {
        match value {
            QuestionWeight::Direct => 1,
            QuestionWeight::Reversed => -1,
        }
    }
}

/// Likert statement presented to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub text: String,
    pub category: PersonalityTrait,
    pub weight: QuestionWeight,
}

impl Question {
    /// Maps a validated 1..=5 answer onto the trait's direction.
    pub fn adjust(&self, answer: u8) -> u8 {
        match self.weight {
            QuestionWeight::Direct => answer,
            QuestionWeight::Reversed => 6 - answer,
        }
    }
}

/// Trait percentages in `[0, 100]` produced by a quiz submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct PersonalityScores {
    pub openness: u8,
    pub conscientiousness: u8,
    pub extraversion: u8,
    pub agreeableness: u8,
    pub neuroticism: u8,
}

impl PersonalityScores {
    pub fn new(
        openness: u8,
        conscientiousness: u8,
        extraversion: u8,
        agreeableness: u8,
        neuroticism: u8,
    ) -> Result<Self, ValidationError> {
        let values = [
            openness,
            conscientiousness,
            extraversion,
            agreeableness,
            neuroticism,
        ];
        for (personality_trait, value) in PersonalityTrait::ALL.into_iter().zip(values) {
            if value > 100 {
                return Err(ValidationError::InvalidTraitScore {
                    personality_trait,
                    value: f64::from(value),
                });
            }
        }
        Ok(Self::from_array(values))
    }

    /// Same score for every trait; used for neutral baselines.
    pub fn uniform(value: u8) -> Result<Self, ValidationError> {
        Self::new(value, value, value, value, value)
    }

    pub(crate) fn from_array(values: [u8; 5]) -> Self {
        Self {
            openness: values[0],
            conscientiousness: values[1],
            extraversion: values[2],
            agreeableness: values[3],
            neuroticism: values[4],
        }
    }

    pub fn get(&self, personality_trait: PersonalityTrait) -> u8 {
        match personality_trait {
            PersonalityTrait::Openness => self.openness,
            PersonalityTrait::Conscientiousness => self.conscientiousness,
            PersonalityTrait::Extraversion => self.extraversion,
            PersonalityTrait::Agreeableness => self.agreeableness,
            PersonalityTrait::Neuroticism => self.neuroticism,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (PersonalityTrait, u8)> + '_ {
        PersonalityTrait::ALL
            .into_iter()
            .map(move |personality_trait| (personality_trait, self.get(personality_trait)))
    }

    /// Highest scoring trait; ties go to the earlier trait in OCEAN order.
    pub fn dominant_trait(&self) -> PersonalityTrait {
        let mut dominant = PersonalityTrait::Openness;
        for (personality_trait, value) in self.iter() {
            if value > self.get(dominant) {
                dominant = personality_trait;
            }
        }
        dominant
    }

    pub fn level(&self, personality_trait: PersonalityTrait) -> TraitLevel {
        TraitLevel::from_score(self.get(personality_trait))
    }
}

impl TryFrom<&Value> for PersonalityScores {
    type Error = ValidationError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let map = value.as_object().ok_or(ValidationError::MalformedScores)?;
        let mut values = [0u8; 5];

        for (slot, personality_trait) in values.iter_mut().zip(PersonalityTrait::ALL) {
            let raw = map
                .get(personality_trait.label())
                .ok_or(ValidationError::MissingTrait(personality_trait))?;
            let number = raw
                .as_f64()
                .ok_or_else(|| ValidationError::NonNumericTrait {
                    personality_trait,
                    value: raw.to_string(),
                })?;
            if number.fract() != 0.0 || !(0.0..=100.0).contains(&number) {
                return Err(ValidationError::InvalidTraitScore {
                    personality_trait,
                    value: number,
                });
            }
            *slot = number as u8;
        }

        Ok(Self::from_array(values))
    }
}

impl TryFrom<Value> for PersonalityScores {
    type Error = ValidationError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::try_from(&value)
    }
}

/// Coarse band used when describing a trait score to people.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraitLevel {
    Low,
    Moderate,
    High,
}

impl TraitLevel {
    pub const fn from_score(score: u8) -> Self {
        if score >= 70 {
            TraitLevel::High
        } else if score >= 40 {
            TraitLevel::Moderate
        } else {
            TraitLevel::Low
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            TraitLevel::Low => "low",
            TraitLevel::Moderate => "moderate",
            TraitLevel::High => "high",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scores_parse_from_complete_object() {
        let payload = json!({
            "openness": 80,
            "conscientiousness": 72,
            "extraversion": 40,
            "agreeableness": 64,
            "neuroticism": 36,
            "favorite_color": "teal",
        });

        let scores = PersonalityScores::try_from(&payload).expect("valid scores");
        assert_eq!(scores.openness, 80);
        assert_eq!(scores.neuroticism, 36);
        assert_eq!(scores.dominant_trait(), PersonalityTrait::Openness);
    }

    #[test]
    fn scores_reject_missing_trait() {
        let payload = json!({
            "openness": 80,
            "conscientiousness": 72,
            "extraversion": 40,
            "agreeableness": 64,
        });

        match PersonalityScores::try_from(&payload) {
            Err(ValidationError::MissingTrait(PersonalityTrait::Neuroticism)) => {}
            other => panic!("expected missing neuroticism, got {other:?}"),
        }
    }

    #[test]
    fn scores_reject_non_numeric_and_fractional_values() {
        let non_numeric = json!({
            "openness": "high",
            "conscientiousness": 72,
            "extraversion": 40,
            "agreeableness": 64,
            "neuroticism": 36,
        });
        assert!(matches!(
            PersonalityScores::try_from(&non_numeric),
            Err(ValidationError::NonNumericTrait {
                personality_trait: PersonalityTrait::Openness,
                ..
            })
        ));

        let fractional = json!({
            "openness": 80,
            "conscientiousness": 72.5,
            "extraversion": 40,
            "agreeableness": 64,
            "neuroticism": 36,
        });
        assert!(matches!(
            PersonalityScores::try_from(&fractional),
            Err(ValidationError::InvalidTraitScore {
                personality_trait: PersonalityTrait::Conscientiousness,
                ..
            })
        ));

        assert!(matches!(
            PersonalityScores::try_from(&json!([80, 72, 40, 64, 36])),
            Err(ValidationError::MalformedScores)
        ));
    }

    #[test]
    fn scores_reject_values_above_one_hundred() {
        assert!(PersonalityScores::new(101, 0, 0, 0, 0).is_err());
        assert!(serde_json::from_value::<PersonalityScores>(json!({
            "openness": 80,
            "conscientiousness": 72,
            "extraversion": 140,
            "agreeableness": 64,
            "neuroticism": 36,
        }))
        .is_err());
    }

    #[test]
    fn dominant_trait_prefers_canonical_order_on_ties() {
        let scores = PersonalityScores::new(60, 80, 80, 20, 10).expect("valid scores");
        assert_eq!(scores.dominant_trait(), PersonalityTrait::Conscientiousness);
    }

    #[test]
    fn question_weight_round_trips_as_signed_integer() {
        let question: Question = serde_json::from_value(json!({
            "id": "n2",
            "text": "I seldom feel blue.",
            "category": "neuroticism",
            "weight": -1,
        }))
        .expect("question parses");
        assert_eq!(question.weight, QuestionWeight::Reversed);
        assert_eq!(question.adjust(1), 5);
        assert_eq!(question.adjust(3), 3);

        assert!(serde_json::from_value::<Question>(json!({
            "id": "n3",
            "text": "I panic easily.",
            "category": "neuroticism",
            "weight": 2,
        }))
        .is_err());
    }

    #[test]
    fn trait_levels_band_scores() {
        assert_eq!(TraitLevel::from_score(39), TraitLevel::Low);
        assert_eq!(TraitLevel::from_score(40), TraitLevel::Moderate);
        assert_eq!(TraitLevel::from_score(70), TraitLevel::High);
        assert_eq!(
            "Extroversion".parse::<PersonalityTrait>(),
            Ok(PersonalityTrait::Extraversion)
        );
    }
}
