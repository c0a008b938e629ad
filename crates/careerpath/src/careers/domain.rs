use std::fmt;

use serde::{Deserialize, Serialize};

use crate::assessment::PersonalityTrait;

/// Identifier wrapper for catalog careers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CareerId(pub String);

impl fmt::Display for CareerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Normalized trait profile, each value in `[0, 1]`, best suited to a career.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IdealProfile {
    pub openness: f64,
    pub conscientiousness: f64,
    pub extraversion: f64,
    pub agreeableness: f64,
    pub neuroticism: f64,
}

impl IdealProfile {
    pub fn get(&self, personality_trait: PersonalityTrait) -> f64 {
        match personality_trait {
            PersonalityTrait::Openness => self.openness,
            PersonalityTrait::Conscientiousness => self.conscientiousness,
            PersonalityTrait::Extraversion => self.extraversion,
            PersonalityTrait::Agreeableness => self.agreeableness,
            PersonalityTrait::Neuroticism => self.neuroticism,
        }
    }

    /// First trait whose ideal falls outside `[0, 1]`.
    pub fn out_of_range(&self) -> Option<(PersonalityTrait, f64)> {
        PersonalityTrait::ALL
            .into_iter()
            .map(|personality_trait| (personality_trait, self.get(personality_trait)))
            .find(|(_, value)| !(0.0..=1.0).contains(value))
    }
}

/// Static catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Career {
    pub id: CareerId,
    pub title: String,
    pub description: String,
    pub salary: String,
    pub skills: Vec<String>,
    pub growth: String,
    pub companies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personality_match: Option<IdealProfile>,
}

/// A career decorated with the score it earned for one set of trait scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerMatch {
    #[serde(flatten)]
    pub career: Career,
    pub match_score: u8,
}
