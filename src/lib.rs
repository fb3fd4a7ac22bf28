//! Hybrid tutor recommendation engine.
//!
//! Ranks tutors for a student by combining a content-based logistic match
//! probability with a collaborative-filtering prediction derived from other
//! students' historical ratings. All scoring is pure computation over an
//! immutable snapshot supplied by the provider traits in
//! [`services::providers`]; nothing is persisted between requests.

pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use config::EngineConfig;
pub use error::{EngineError, EngineResult};
pub use models::{RecommendationRequest, RecommendationResponse};
pub use services::RecommendationService;
