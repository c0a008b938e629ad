use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::assessment::{PersonalityTrait, Question, QuestionBank, QuestionWeight};
use crate::careers::{Career, CareerCatalog, CareerId, IdealProfile, MatchConfig};
use crate::quiz::repository::{QuizResult, RepositoryError, ResultId, ResultRepository};
use crate::quiz::{quiz_router, CareerPathService};

/// One direct question per trait, in OCEAN order.
pub(super) fn question_bank() -> QuestionBank {
    let questions = PersonalityTrait::ALL
        .into_iter()
        .map(|personality_trait| Question {
            id: format!("{}-1", personality_trait.label()),
            text: format!("I score high on {}.", personality_trait.display_name()),
            category: personality_trait,
            weight: QuestionWeight::Direct,
        })
        .collect();
    QuestionBank::new(questions).expect("fixture questions valid")
}

pub(super) fn career(id: &str, profile: Option<IdealProfile>) -> Career {
    Career {
        id: CareerId(id.to_string()),
        title: id.replace('-', " "),
        description: format!("Fixture career {id}"),
        salary: "$60,000 - $90,000".to_string(),
        skills: vec!["Focus".to_string()],
        growth: "5%".to_string(),
        companies: vec!["Acme".to_string()],
        personality_match: profile,
    }
}

pub(super) fn profile(o: f64, c: f64, e: f64, a: f64, n: f64) -> IdealProfile {
    IdealProfile {
        openness: o,
        conscientiousness: c,
        extraversion: e,
        agreeableness: a,
        neuroticism: n,
    }
}

/// Seven careers so the top-five cut is exercised.
pub(super) fn career_catalog() -> CareerCatalog {
    CareerCatalog::new(vec![
        career("archivist", None),
        career("data-scientist", Some(profile(0.9, 0.9, 0.4, 0.6, 0.45))),
        career("event-planner", Some(profile(0.6, 0.7, 0.95, 0.7, 0.3))),
        career("researcher", Some(profile(0.95, 0.85, 0.3, 0.55, 0.45))),
        career("accountant", Some(profile(0.4, 0.95, 0.3, 0.5, 0.35))),
        career("counselor", Some(profile(0.7, 0.75, 0.6, 0.95, 0.35))),
        career("illustrator", Some(profile(0.95, 0.5, 0.4, 0.6, 0.55))),
    ])
    .expect("fixture careers valid")
}

pub(super) fn build_service() -> (CareerPathService<MemoryResults>, Arc<MemoryResults>) {
    let repository = Arc::new(MemoryResults::default());
    let service = CareerPathService::new(
        question_bank(),
        career_catalog(),
        MatchConfig::default(),
        repository.clone(),
    );
    (service, repository)
}

pub(super) fn service_with<R>(repository: R) -> Arc<CareerPathService<R>>
where
    R: ResultRepository + 'static,
{
    Arc::new(CareerPathService::new(
        question_bank(),
        career_catalog(),
        MatchConfig::default(),
        Arc::new(repository),
    ))
}

#[derive(Default, Clone)]
pub(super) struct MemoryResults {
    pub(super) records: Arc<Mutex<HashMap<ResultId, QuizResult>>>,
}

impl MemoryResults {
    pub(super) fn len(&self) -> usize {
        self.records.lock().expect("results mutex poisoned").len()
    }
}

impl ResultRepository for MemoryResults {
    fn insert(&self, result: QuizResult) -> Result<QuizResult, RepositoryError> {
        let mut guard = self.records.lock().expect("results mutex poisoned");
        if guard.contains_key(&result.result_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(result.result_id.clone(), result.clone());
        Ok(result)
    }

    fn fetch(&self, id: &ResultId) -> Result<Option<QuizResult>, RepositoryError> {
        let guard = self.records.lock().expect("results mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

pub(super) struct ConflictResults;

impl ResultRepository for ConflictResults {
    fn insert(&self, _result: QuizResult) -> Result<QuizResult, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn fetch(&self, _id: &ResultId) -> Result<Option<QuizResult>, RepositoryError> {
        Ok(None)
    }
}

pub(super) struct UnavailableResults;

impl ResultRepository for UnavailableResults {
    fn insert(&self, _result: QuizResult) -> Result<QuizResult, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &ResultId) -> Result<Option<QuizResult>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn router_with_service(service: CareerPathService<MemoryResults>) -> axum::Router {
    quiz_router(Arc::new(service))
}
