use crate::assessment::PersonalityTrait;
use crate::config::ConfigError;
use crate::quiz::{RepositoryError, ServiceError};
use crate::telemetry::TelemetryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;
use std::path::PathBuf;

/// Caller supplied input that cannot be scored or matched.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("expected {expected} answers but received {actual}")]
    AnswerCountMismatch { expected: usize, actual: usize },
    #[error("answer #{position} must be between 1 and 5 (received {value})")]
    AnswerOutOfRange { position: usize, value: i64 },
    #[error("personality scores must be an object keyed by trait name")]
    MalformedScores,
    #[error("malformed request body: {0}")]
    MalformedBody(String),
    #[error("personality scores are missing the {0} trait")]
    MissingTrait(PersonalityTrait),
    #[error("{personality_trait} score must be numeric (received {value})")]
    NonNumericTrait {
        personality_trait: PersonalityTrait,
        value: String,
    },
    #[error("{personality_trait} score must be an integer between 0 and 100 (received {value})")]
    InvalidTraitScore {
        personality_trait: PersonalityTrait,
        value: f64,
    },
}

/// Catalog integrity defect. Surfaces at startup, never per request in a sound build.
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("question catalog has no questions for the {0} trait")]
    TraitWithoutQuestions(PersonalityTrait),
    #[error("question id '{0}' appears more than once")]
    DuplicateQuestion(String),
    #[error("career id '{0}' appears more than once")]
    DuplicateCareer(String),
    #[error("career '{career_id}' has {personality_trait} ideal {value} outside [0, 1]")]
    IdealOutOfRange {
        career_id: String,
        personality_trait: PersonalityTrait,
        value: f64,
    },
    #[error("question '{question_id}' has unknown category '{category}'")]
    UnknownCategory {
        question_id: String,
        category: String,
    },
    #[error("question '{question_id}' has unsupported weight {weight}")]
    UnsupportedWeight { question_id: String, weight: i64 },
    #[error("failed to read catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid catalog CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Failure of a scoring or matching operation.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

impl AssessmentError {
    pub fn is_validation(&self) -> bool {
        matches!(self, AssessmentError::Validation(_))
    }
}

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Assessment(AssessmentError),
    Repository(RepositoryError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Assessment(AssessmentError::Validation(err)) => {
                write!(f, "invalid input: {}", err)
            }
            AppError::Assessment(AssessmentError::Configuration(err)) => {
                write!(f, "catalog error: {}", err)
            }
            AppError::Repository(err) => write!(f, "storage error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Assessment(err) => Some(err),
            AppError::Repository(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Assessment(err) if err.is_validation() => StatusCode::BAD_REQUEST,
            AppError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
            AppError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
            AppError::Assessment(_)
            | AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Repository(RepositoryError::Unavailable(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<AssessmentError> for AppError {
    fn from(value: AssessmentError) -> Self {
        Self::Assessment(value)
    }
}

impl From<ServiceError> for AppError {
    fn from(value: ServiceError) -> Self {
        match value {
            ServiceError::Assessment(err) => Self::Assessment(err),
            ServiceError::Repository(err) => Self::Repository(err),
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(value: ValidationError) -> Self {
        Self::Assessment(value.into())
    }
}

impl From<ConfigurationError> for AppError {
    fn from(value: ConfigurationError) -> Self {
        Self::Assessment(value.into())
    }
}
