//! Big Five personality scoring and career matching.
//!
//! Answers flow through [`assessment`] into [`assessment::PersonalityScores`], which
//! [`careers`] ranks against the career catalog. [`quiz`] wires both behind a service
//! and an axum router for the HTTP binary.

pub mod assessment;
pub mod careers;
pub mod config;
pub mod error;
pub mod quiz;
pub mod telemetry;
