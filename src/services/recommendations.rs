use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, instrument};

use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    InteractionHistory, RecommendationRequest, RecommendationResponse, StudentPreference,
    TutorProfile,
};
use crate::services::providers::{
    InteractionHistoryProvider, StudentDirectoryProvider, TutorCatalogProvider,
};
use crate::services::ranker::HybridRanker;

/// Orchestrates one recommendation request: resolve the effective
/// preferences, fetch the snapshot, run the hybrid ranking, assemble the
/// response.
///
/// All scoring is pure computation over the immutable snapshot, so two
/// concurrent requests for different students are fully independent.
pub struct RecommendationService {
    config: EngineConfig,
    catalog: Arc<dyn TutorCatalogProvider>,
    directory: Arc<dyn StudentDirectoryProvider>,
    history: Arc<dyn InteractionHistoryProvider>,
}

impl RecommendationService {
    /// Validates the scoring configuration up front so a broken deployment
    /// fails at construction rather than on the first request.
    pub fn new(
        config: EngineConfig,
        catalog: Arc<dyn TutorCatalogProvider>,
        directory: Arc<dyn StudentDirectoryProvider>,
        history: Arc<dyn InteractionHistoryProvider>,
    ) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            catalog,
            directory,
            history,
        })
    }

    /// Ranks every tutor in the catalog for this request.
    ///
    /// The snapshot is fetched in full before any scoring begins; a provider
    /// failure fails the request whole rather than returning a partial list.
    #[instrument(skip(self, request), fields(student_id = ?request.student_id, top_k = ?request.top_k))]
    pub async fn recommend(
        &self,
        request: RecommendationRequest,
    ) -> EngineResult<RecommendationResponse> {
        let preferences = self.resolve_preferences(&request).await?;

        let (tutors, history) = tokio::try_join!(self.fetch_catalog(), self.fetch_history())?;

        let ranker = HybridRanker::new(&self.config)?;
        let recommendations = ranker.rank(
            &preferences,
            request.student_id.as_ref(),
            &tutors,
            &history,
            request.top_k,
        );

        info!(
            total = recommendations.len(),
            catalog_size = tutors.len(),
            "Ranked tutor recommendations"
        );

        Ok(RecommendationResponse {
            student_preferences: preferences,
            student_id: request.student_id,
            total_recommendations: recommendations.len(),
            recommendations,
            generated_at: Utc::now(),
        })
    }

    /// Request fields override the stored profile; anything still missing
    /// falls back to the baseline defaults instead of failing the request.
    async fn resolve_preferences(
        &self,
        request: &RecommendationRequest,
    ) -> EngineResult<StudentPreference> {
        let stored = match &request.student_id {
            Some(student_id) => self
                .directory
                .preferences(student_id)
                .await
                .map_err(|err| with_stage("student directory lookup", err))?,
            None => None,
        };
        if stored.is_none() {
            debug!("No stored preferences; request fields apply over the baseline");
        }
        Ok(request.resolve_preferences(stored))
    }

    async fn fetch_catalog(&self) -> EngineResult<Vec<TutorProfile>> {
        self.catalog
            .tutor_catalog()
            .await
            .map_err(|err| with_stage("tutor catalog fetch", err))
    }

    async fn fetch_history(&self) -> EngineResult<InteractionHistory> {
        self.history
            .interaction_history()
            .await
            .map_err(|err| with_stage("interaction history fetch", err))
    }
}

/// Names the failing pipeline stage on provider errors so callers can
/// diagnose without retrying blindly
fn with_stage(stage: &str, err: EngineError) -> EngineError {
    match err {
        EngineError::DataUnavailable { message, .. } => EngineError::DataUnavailable {
            stage: stage.to_string(),
            message,
        },
        other => other,
    }
}
