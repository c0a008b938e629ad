use serde::{Deserialize, Serialize};

use super::super::domain::{Career, IdealProfile};
use crate::assessment::{round_half_up, PersonalityScores, PersonalityTrait};

/// Score assigned to careers that carry no ideal profile.
pub const FALLBACK_MATCH_SCORE: u8 = 50;

/// Lowest score a career with an ideal profile can earn before clamping.
const DISPLAY_BASELINE: f64 = 65.0;
/// Width of the display band above the baseline.
const DISPLAY_SPREAD: f64 = 30.0;

/// Relative importance of each trait when comparing profiles.
pub const fn trait_weight(personality_trait: PersonalityTrait) -> f64 {
    match personality_trait {
        PersonalityTrait::Openness => 1.2,
        PersonalityTrait::Conscientiousness => 1.4,
        PersonalityTrait::Extraversion => 1.0,
        PersonalityTrait::Agreeableness => 1.0,
        PersonalityTrait::Neuroticism => 0.8,
    }
}

/// One trait's share of a match, kept for audit output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TraitContribution {
    pub personality_trait: PersonalityTrait,
    pub similarity: f64,
    pub weighted_score: f64,
    pub weight: f64,
}

/// Per-trait similarity terms for a user against a career's ideal profile.
pub fn match_components(
    scores: &PersonalityScores,
    ideal: &IdealProfile,
) -> Vec<TraitContribution> {
    PersonalityTrait::ALL
        .into_iter()
        .map(|personality_trait| {
            let user = f64::from(scores.get(personality_trait)) / 100.0;
            let target = ideal.get(personality_trait);
            let similarity = 1.0 - (user - target).abs();
            // The ideal scales its own term so traits the career leans on count more.
            let weight = target * trait_weight(personality_trait);

            TraitContribution {
                personality_trait,
                similarity,
                weighted_score: similarity * weight,
                weight,
            }
        })
        .collect()
}

/// Match score in `[0, 100]` for one career.
pub fn calculate_match_score(scores: &PersonalityScores, career: &Career) -> u8 {
    let Some(ideal) = career.personality_match.as_ref() else {
        return FALLBACK_MATCH_SCORE;
    };

    let components = match_components(scores, ideal);
    let weighted_sum: f64 = components.iter().map(|part| part.weighted_score).sum();
    let total_weight: f64 = components.iter().map(|part| part.weight).sum();

    let average = if total_weight > 0.0 {
        weighted_sum / total_weight
    } else {
        0.0
    };

    round_half_up(DISPLAY_BASELINE + average * DISPLAY_SPREAD).clamp(0.0, 100.0) as u8
}
