use std::collections::HashSet;
use std::path::Path;

use super::domain::Career;
use crate::error::ConfigurationError;

const STANDARD_CAREERS: &str = include_str!("../../data/careers.json");

/// Validated, read-only career catalog in presentation order.
#[derive(Debug, Clone)]
pub struct CareerCatalog {
    careers: Vec<Career>,
}

impl CareerCatalog {
    pub fn new(careers: Vec<Career>) -> Result<Self, ConfigurationError> {
        validate_careers(&careers)?;
        Ok(Self { careers })
    }

    pub fn standard() -> Result<Self, ConfigurationError> {
        Self::from_json_str(STANDARD_CAREERS)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, ConfigurationError> {
        let careers: Vec<Career> = serde_json::from_str(raw)?;
        Self::new(careers)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigurationError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigurationError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn careers(&self) -> &[Career] {
        &self.careers
    }

    pub fn get(&self, id: &str) -> Option<&Career> {
        self.careers.iter().find(|career| career.id.0 == id)
    }

    pub fn len(&self) -> usize {
        self.careers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.careers.is_empty()
    }
}

fn validate_careers(careers: &[Career]) -> Result<(), ConfigurationError> {
    let mut seen = HashSet::new();
    for career in careers {
        if !seen.insert(career.id.0.as_str()) {
            return Err(ConfigurationError::DuplicateCareer(career.id.0.clone()));
        }

        if let Some((personality_trait, value)) = career
            .personality_match
            .as_ref()
            .and_then(|profile| profile.out_of_range())
        {
            return Err(ConfigurationError::IdealOutOfRange {
                career_id: career.id.0.clone(),
                personality_trait,
                value,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::PersonalityTrait;

    #[test]
    fn standard_catalog_loads_with_profiles() {
        let catalog = CareerCatalog::standard().expect("bundled careers load");
        assert_eq!(catalog.len(), 12);
        assert!(catalog
            .careers()
            .iter()
            .all(|career| career.personality_match.is_some()));

        let analyst = catalog
            .get("data-scientist")
            .expect("data scientist present");
        assert_eq!(analyst.title, "Data Scientist");
        assert!(catalog.get("astronaut").is_none());
    }

    #[test]
    fn catalog_accepts_careers_without_profiles() {
        let raw = r#"[{
            "id": "florist",
            "title": "Florist",
            "description": "Arranges flowers.",
            "salary": "$30,000 - $45,000",
            "skills": ["Design"],
            "growth": "2%",
            "companies": ["Local shops"]
        }]"#;

        let catalog = CareerCatalog::from_json_str(raw).expect("catalog parses");
        assert!(catalog.careers()[0].personality_match.is_none());
    }

    #[test]
    fn catalog_rejects_out_of_range_ideals() {
        let raw = r#"[{
            "id": "pilot",
            "title": "Pilot",
            "description": "Flies aircraft.",
            "salary": "$120,000",
            "skills": [],
            "growth": "6%",
            "companies": [],
            "personality_match": {
                "openness": 0.5,
                "conscientiousness": 1.3,
                "extraversion": 0.5,
                "agreeableness": 0.5,
                "neuroticism": 0.2
            }
        }]"#;

        match CareerCatalog::from_json_str(raw) {
            Err(ConfigurationError::IdealOutOfRange {
                career_id,
                personality_trait,
                value,
            }) => {
                assert_eq!(career_id, "pilot");
                assert_eq!(personality_trait, PersonalityTrait::Conscientiousness);
                assert_eq!(value, 1.3);
            }
            other => panic!("expected ideal out of range, got {other:?}"),
        }
    }

    #[test]
    fn catalog_rejects_duplicate_ids() {
        let mut careers = CareerCatalog::standard()
            .expect("bundled careers load")
            .careers()
            .to_vec();
        careers.push(careers[1].clone());

        assert!(matches!(
            CareerCatalog::new(careers),
            Err(ConfigurationError::DuplicateCareer(id)) if id == "data-scientist"
        ));
    }
}
