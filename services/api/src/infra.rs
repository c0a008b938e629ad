use careerpath::assessment::QuestionBank;
use careerpath::careers::CareerCatalog;
use careerpath::config::{AppConfig, CatalogConfig};
use careerpath::error::ConfigurationError;
use careerpath::quiz::{CareerPathService, QuizResult, RepositoryError, ResultId, ResultRepository};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryResultRepository {
    records: Arc<Mutex<HashMap<ResultId, QuizResult>>>,
}

impl ResultRepository for InMemoryResultRepository {
    fn insert(&self, result: QuizResult) -> Result<QuizResult, RepositoryError> {
        let mut guard = self
            .records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("result store poisoned".to_string()))?;
        if guard.contains_key(&result.result_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(result.result_id.clone(), result.clone());
        Ok(result)
    }

    fn fetch(&self, id: &ResultId) -> Result<Option<QuizResult>, RepositoryError> {
        let guard = self
            .records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("result store poisoned".to_string()))?;
        Ok(guard.get(id).cloned())
    }
}

/// Loads and validates both catalogs; any defect is fatal for the caller.
pub(crate) fn load_catalogs(
    config: &CatalogConfig,
) -> Result<(QuestionBank, CareerCatalog), ConfigurationError> {
    let questions = config.question_bank()?;
    let careers = config.career_catalog()?;
    info!(
        questions = questions.len(),
        careers = careers.len(),
        custom_questions = config.questions_path.is_some(),
        custom_careers = config.careers_path.is_some(),
        "catalogs loaded"
    );
    Ok((questions, careers))
}

/// Wires the configured catalogs and match limit into a service backed by process memory.
pub(crate) fn build_service(
    config: &AppConfig,
) -> Result<CareerPathService<InMemoryResultRepository>, ConfigurationError> {
    let (questions, careers) = load_catalogs(&config.catalog)?;
    Ok(CareerPathService::new(
        questions,
        careers,
        config.matching,
        Arc::new(InMemoryResultRepository::default()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use careerpath::assessment::PersonalityScores;
    use chrono::Utc;

    #[test]
    fn repository_rejects_duplicate_ids() {
        let repository = InMemoryResultRepository::default();
        let result = QuizResult {
            result_id: ResultId("result-test".to_string()),
            scores: PersonalityScores::uniform(60).expect("valid"),
            matches: Vec::new(),
            completed_at: Utc::now(),
        };

        repository.insert(result.clone()).expect("first insert");
        assert!(matches!(
            repository.insert(result.clone()),
            Err(RepositoryError::Conflict)
        ));
        assert_eq!(
            repository.fetch(&result.result_id).expect("fetch works"),
            Some(result)
        );
    }
}
