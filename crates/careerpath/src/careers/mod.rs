//! Career catalog and the personality-based matcher.

mod catalog;
pub mod domain;
pub mod matching;

pub use catalog::CareerCatalog;
pub use domain::{Career, CareerId, CareerMatch, IdealProfile};
pub use matching::{
    calculate_match_score, match_careers, match_components, trait_weight, CareerMatcher,
    MatchConfig, TraitContribution, DEFAULT_RESULT_LIMIT, FALLBACK_MATCH_SCORE,
};
