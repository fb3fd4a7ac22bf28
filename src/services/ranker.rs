use std::cmp::Ordering;

use tracing::debug;

use crate::config::EngineConfig;
use crate::error::EngineResult;
use crate::models::{
    InteractionHistory, RankedTutor, ScoreBreakdown, StudentId, StudentPreference, TutorId,
    TutorProfile,
};
use crate::services::collaborative::CollaborativeScorer;
use crate::services::content::ContentScorer;
use crate::services::features::FeatureNormalizer;
use crate::services::similarity::SimilarityMap;

/// Merges content-based and collaborative scores into the final ranking.
///
/// A stateless, side-effect-free function of the snapshot: no state survives
/// between invocations, so two calls on the same snapshot produce identical
/// ordering and scores.
pub struct HybridRanker<'a> {
    config: &'a EngineConfig,
    normalizer: FeatureNormalizer<'a>,
    content: ContentScorer,
}

impl<'a> HybridRanker<'a> {
    pub fn new(config: &'a EngineConfig) -> EngineResult<Self> {
        Ok(Self {
            config,
            normalizer: FeatureNormalizer::new(config),
            content: ContentScorer::new(config)?,
        })
    }

    /// Scores every tutor in the catalog, orders descending by final score
    /// with ascending tutor id as the tie-break, and truncates to `top_k`
    /// when requested.
    pub fn rank(
        &self,
        prefs: &StudentPreference,
        student_id: Option<&StudentId>,
        tutors: &[TutorProfile],
        history: &InteractionHistory,
        top_k: Option<usize>,
    ) -> Vec<RankedTutor> {
        // One fixed tutor ordering shared by every rating vector this request
        let mut tutor_order: Vec<TutorId> =
            tutors.iter().map(|t| t.tutor_id.clone()).collect();
        tutor_order.sort_unstable();

        // Tutor-independent, so computed once per request rather than once
        // per tutor
        let similarities =
            student_id.map(|active| SimilarityMap::build(active, history, &tutor_order));
        let collaborative =
            CollaborativeScorer::new(history, similarities.as_ref(), student_id);

        let mut ranked: Vec<RankedTutor> = tutors
            .iter()
            .map(|tutor| {
                let features = self.normalizer.vectorize(prefs, tutor);
                let logistic_score = self.content.score(&features);
                let cf_score = collaborative.score(tutor);
                let final_score = self.config.content_weight * logistic_score
                    + self.config.collaborative_weight * cf_score;
                debug!(
                    tutor_id = %tutor.tutor_id,
                    logistic_score,
                    cf_score,
                    final_score,
                    "Scored tutor"
                );
                RankedTutor::from_profile(
                    tutor,
                    ScoreBreakdown {
                        logistic_score,
                        cf_score,
                        final_score,
                    },
                )
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.scores
                .final_score
                .partial_cmp(&a.scores.final_score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.tutor_id.cmp(&b.tutor_id))
        });

        if let Some(k) = top_k {
            ranked.truncate(k);
        }
        ranked
    }
}
