use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{
    AcademicLevel, ExperienceBand, Mode, PriceBand, StudentId, StudentPreference, TutorId,
    TutorProfile,
};
use crate::error::EngineError;

/// A recommendation request.
///
/// Every preference field is optional: absent fields are defaulted, never
/// rejected. `student_id` enables collaborative filtering and stored
/// preference lookup; without it the request is scored cold-start.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecommendationRequest {
    pub student_id: Option<StudentId>,
    pub subject: Option<String>,
    pub mode: Option<Mode>,
    pub level: Option<AcademicLevel>,
    pub preferred_price_range: Option<PriceBand>,
    pub experience_preference: Option<ExperienceBand>,
    pub top_k: Option<usize>,
}

impl RecommendationRequest {
    /// Resolves the effective preferences for this request.
    ///
    /// Request fields win over the stored profile; whatever is still missing
    /// falls back to the baseline defaults.
    pub fn resolve_preferences(&self, stored: Option<StudentPreference>) -> StudentPreference {
        let base = stored.unwrap_or_default();
        StudentPreference {
            subject: self.subject.clone().unwrap_or(base.subject),
            mode: self.mode.unwrap_or(base.mode),
            level: self.level.unwrap_or(base.level),
            preferred_price_range: self
                .preferred_price_range
                .unwrap_or(base.preferred_price_range),
            experience_preference: self
                .experience_preference
                .unwrap_or(base.experience_preference),
        }
    }
}

/// Raw score breakdown, retained on every result for explainability
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ScoreBreakdown {
    pub logistic_score: f64,
    pub cf_score: f64,
    pub final_score: f64,
}

/// One ranked tutor with its score breakdown
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RankedTutor {
    pub tutor_id: TutorId,
    pub tutor_name: String,
    pub subject: String,
    pub mode: Mode,
    pub experience_years: u32,
    pub hourly_rate: f64,
    pub rating: f64,
    pub location: String,
    pub scores: ScoreBreakdown,
}

impl RankedTutor {
    /// Builds the client-facing summary from a catalog profile
    pub fn from_profile(profile: &TutorProfile, scores: ScoreBreakdown) -> Self {
        Self {
            tutor_id: profile.tutor_id.clone(),
            tutor_name: profile.name.clone(),
            subject: profile.subject.clone(),
            mode: profile.mode,
            experience_years: profile.experience_years,
            hourly_rate: profile.hourly_rate,
            rating: profile.rating,
            location: profile.location.clone(),
            scores,
        }
    }
}

/// The full ranked response for one request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationResponse {
    pub student_preferences: StudentPreference,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_id: Option<StudentId>,
    pub total_recommendations: usize,
    pub recommendations: Vec<RankedTutor>,
    pub generated_at: DateTime<Utc>,
}

/// Structured failure envelope for callers that serialize errors
#[derive(Debug, Clone, Serialize)]
pub struct FailureResponse {
    pub success: bool,
    pub message: String,
}

impl From<&EngineError> for FailureResponse {
    fn from(err: &EngineError) -> Self {
        Self {
            success: false,
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_preferences_defaults_missing_fields() {
        let request = RecommendationRequest {
            subject: Some("Physics".to_string()),
            ..RecommendationRequest::default()
        };
        let prefs = request.resolve_preferences(None);
        assert_eq!(prefs.subject, "Physics");
        assert_eq!(prefs.preferred_price_range, PriceBand::Medium);
        assert_eq!(prefs.mode, Mode::Online);
    }

    #[test]
    fn test_resolve_preferences_request_overrides_stored() {
        let stored = StudentPreference {
            subject: "English".to_string(),
            mode: Mode::Offline,
            level: AcademicLevel::University,
            preferred_price_range: PriceBand::Low,
            experience_preference: ExperienceBand::Beginner,
        };
        let request = RecommendationRequest {
            mode: Some(Mode::Hybrid),
            ..RecommendationRequest::default()
        };

        let prefs = request.resolve_preferences(Some(stored));
        assert_eq!(prefs.mode, Mode::Hybrid);
        assert_eq!(prefs.subject, "English");
        assert_eq!(prefs.preferred_price_range, PriceBand::Low);
    }

    #[test]
    fn test_failure_response_from_error() {
        let err = EngineError::data_unavailable("tutor catalog fetch", "connection refused");
        let failure = FailureResponse::from(&err);
        assert!(!failure.success);
        assert!(failure.message.contains("tutor catalog fetch"));
    }

    #[test]
    fn test_request_deserializes_with_absent_fields() {
        let request: RecommendationRequest =
            serde_json::from_str(r#"{"subject": "Math", "top_k": 3}"#).unwrap();
        assert_eq!(request.subject.as_deref(), Some("Math"));
        assert_eq!(request.top_k, Some(3));
        assert!(request.preferred_price_range.is_none());
    }
}
