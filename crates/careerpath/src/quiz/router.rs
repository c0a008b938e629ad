use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::repository::{RepositoryError, ResultId, ResultRepository};
use super::service::{CareerPathService, ServiceError};
use crate::assessment::{PersonalityScores, Question};
use crate::careers::{Career, CareerMatch};
use crate::error::{AssessmentError, ValidationError};

/// Raw answers in questionnaire order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswersRequest {
    pub answers: Vec<i64>,
}

/// Trait scores as submitted by a client; validated before matching.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRequest {
    pub scores: Value,
}

#[derive(Debug, Serialize)]
struct QuestionList<'a> {
    total: usize,
    questions: &'a [Question],
}

#[derive(Debug, Serialize)]
struct MatchList {
    matches: Vec<CareerMatch>,
}

/// Router builder exposing the quiz and career endpoints.
pub fn quiz_router<R>(service: Arc<CareerPathService<R>>) -> Router
where
    R: ResultRepository + 'static,
{
    Router::new()
        .route("/api/v1/quiz/questions", get(questions_handler::<R>))
        .route("/api/v1/quiz/scores", post(scores_handler::<R>))
        .route("/api/v1/quiz/results", post(submit_handler::<R>))
        .route("/api/v1/quiz/results/:result_id", get(result_handler::<R>))
        .route("/api/v1/careers", get(careers_handler::<R>))
        .route("/api/v1/careers/matches", post(matches_handler::<R>))
        .route("/api/v1/careers/:career_id", get(career_handler::<R>))
        .with_state(service)
}

pub(crate) async fn questions_handler<R>(
    State(service): State<Arc<CareerPathService<R>>>,
) -> Response
where
    R: ResultRepository + 'static,
{
    let questions = service.questions().questions();
    let payload = QuestionList {
        total: questions.len(),
        questions,
    };
    (StatusCode::OK, Json(payload)).into_response()
}

pub(crate) async fn scores_handler<R>(
    State(service): State<Arc<CareerPathService<R>>>,
    payload: Result<Json<AnswersRequest>, JsonRejection>,
) -> Response
where
    R: ResultRepository + 'static,
{
    let request = match request_body(payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    match service.calculate_personality_scores(&request.answers) {
        Ok(scores) => (StatusCode::OK, Json(scores)).into_response(),
        Err(error) => assessment_error_response(error),
    }
}

pub(crate) async fn matches_handler<R>(
    State(service): State<Arc<CareerPathService<R>>>,
    payload: Result<Json<MatchRequest>, JsonRejection>,
) -> Response
where
    R: ResultRepository + 'static,
{
    let request = match request_body(payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let scores = match PersonalityScores::try_from(&request.scores) {
        Ok(scores) => scores,
        Err(error) => return assessment_error_response(error.into()),
    };

    let matches = service.match_careers(&scores);
    (StatusCode::OK, Json(MatchList { matches })).into_response()
}

pub(crate) async fn submit_handler<R>(
    State(service): State<Arc<CareerPathService<R>>>,
    payload: Result<Json<AnswersRequest>, JsonRejection>,
) -> Response
where
    R: ResultRepository + 'static,
{
    let request = match request_body(payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    match service.submit(&request.answers) {
        Ok(result) => (StatusCode::CREATED, Json(result.summary_view())).into_response(),
        Err(ServiceError::Assessment(error)) => assessment_error_response(error),
        Err(ServiceError::Repository(RepositoryError::Conflict)) => {
            error_response(StatusCode::CONFLICT, "result already exists")
        }
        Err(other) => error_response(StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
    }
}

pub(crate) async fn result_handler<R>(
    State(service): State<Arc<CareerPathService<R>>>,
    Path(result_id): Path<String>,
) -> Response
where
    R: ResultRepository + 'static,
{
    let id = ResultId(result_id);
    match service.get(&id) {
        Ok(result) => (StatusCode::OK, Json(result.summary_view())).into_response(),
        Err(ServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "result_id": id.0,
                "error": "result not found",
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
        Err(other) => error_response(StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
    }
}

pub(crate) async fn careers_handler<R>(
    State(service): State<Arc<CareerPathService<R>>>,
) -> Response
where
    R: ResultRepository + 'static,
{
    let careers: &[Career] = service.careers().careers();
    (StatusCode::OK, Json(json!({ "careers": careers }))).into_response()
}

pub(crate) async fn career_handler<R>(
    State(service): State<Arc<CareerPathService<R>>>,
    Path(career_id): Path<String>,
) -> Response
where
    R: ResultRepository + 'static,
{
    match service.career(&career_id) {
        Some(career) => (StatusCode::OK, Json(career)).into_response(),
        None => {
            let payload = json!({
                "career_id": career_id,
                "error": "career not found",
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
    }
}

/// Body extraction failures are client input errors, answered like any other validation failure.
fn request_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, Response> {
    match payload {
        Ok(Json(request)) => Ok(request),
        Err(rejection) => {
            let error = ValidationError::MalformedBody(rejection.body_text());
            Err(assessment_error_response(error.into()))
        }
    }
}

fn assessment_error_response(error: AssessmentError) -> Response {
    let status = match &error {
        AssessmentError::Validation(_) => StatusCode::BAD_REQUEST,
        AssessmentError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    error_response(status, error.to_string())
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    let payload = json!({
        "error": message.into(),
    });
    (status, Json(payload)).into_response()
}
