use crate::models::{InteractionHistory, StudentId, TutorProfile};
use crate::services::linalg::clamp01;
use crate::services::similarity::SimilarityMap;

/// Rating scale ceiling used to normalize predictions into [0,1]
const RATING_SCALE: f64 = 5.0;

/// Predicts a normalized rating for (student, tutor) from similar students'
/// historical votes.
///
/// The rules form a strict precedence chain, each short-circuiting the next:
/// direct evidence, then the similarity-weighted prediction, then the
/// cold-start fallback to the tutor's own aggregate rating.
pub struct CollaborativeScorer<'a> {
    history: &'a InteractionHistory,
    similarities: Option<&'a SimilarityMap>,
    active: Option<&'a StudentId>,
}

impl<'a> CollaborativeScorer<'a> {
    pub fn new(
        history: &'a InteractionHistory,
        similarities: Option<&'a SimilarityMap>,
        active: Option<&'a StudentId>,
    ) -> Self {
        Self {
            history,
            similarities,
            active,
        }
    }

    pub fn score(&self, tutor: &TutorProfile) -> f64 {
        // Direct evidence: the student's own rating wins outright
        if let Some(active) = self.active {
            if let Some(rating) = self.history.rating(active, &tutor.tutor_id) {
                return clamp01(rating / RATING_SCALE);
            }
        }

        // Similarity-weighted average over every other student who rated
        // this tutor
        if let (Some(active), Some(similarities)) = (self.active, self.similarities) {
            let mut numerator = 0.0;
            let mut denominator = 0.0;
            for (other, rating) in self.history.raters_of(&tutor.tutor_id) {
                if other == active {
                    continue;
                }
                let weight = similarities.get(other);
                numerator += weight * rating;
                denominator += weight;
            }
            if denominator > 0.0 {
                return clamp01(numerator / denominator / RATING_SCALE);
            }
        }

        // Cold start: nobody similar rated this tutor
        clamp01(tutor.rating / RATING_SCALE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EducationLevel, InteractionRecord, Mode, TutorId};

    fn tutor(id: &str, rating: f64) -> TutorProfile {
        TutorProfile {
            tutor_id: TutorId::from(id),
            name: "Nisha Maharjan".to_string(),
            subject: "Math".to_string(),
            mode: Mode::Online,
            experience_years: 5,
            hourly_rate: 800.0,
            education_level: EducationLevel::Master,
            rating,
            location: "Lalitpur".to_string(),
        }
    }

    fn order(ids: &[&str]) -> Vec<TutorId> {
        ids.iter().map(|id| TutorId::from(*id)).collect()
    }

    #[test]
    fn test_direct_evidence_returns_own_rating_exactly() {
        // Other students disagree loudly; the student's own 5/5 still wins.
        let history = InteractionHistory::from_records([
            InteractionRecord::new("student_1", "tutor_1", 5.0),
            InteractionRecord::new("student_2", "tutor_1", 1.0),
            InteractionRecord::new("student_3", "tutor_1", 1.5),
        ]);
        let active = StudentId::from("student_1");
        let map = SimilarityMap::build(&active, &history, &order(&["tutor_1"]));
        let scorer = CollaborativeScorer::new(&history, Some(&map), Some(&active));

        assert_eq!(scorer.score(&tutor("tutor_1", 2.0)), 1.0);
    }

    #[test]
    fn test_weighted_prediction_over_similar_raters() {
        // student_1 and student_2 share tutor_1 history exactly (similarity
        // 1); student_2 rated tutor_2 with 4.0, so the prediction is 4/5.
        let history = InteractionHistory::from_records([
            InteractionRecord::new("student_1", "tutor_1", 5.0),
            InteractionRecord::new("student_2", "tutor_1", 5.0),
            InteractionRecord::new("student_2", "tutor_2", 4.0),
        ]);
        let active = StudentId::from("student_1");
        let tutor_order = order(&["tutor_1", "tutor_2"]);
        let map = SimilarityMap::build(&active, &history, &tutor_order);
        let scorer = CollaborativeScorer::new(&history, Some(&map), Some(&active));

        let score = scorer.score(&tutor("tutor_2", 3.0));
        let sim = map.get(&StudentId::from("student_2"));
        let expected = (sim * 4.0) / sim / 5.0;
        assert!((score - expected).abs() < 1e-12);
    }

    #[test]
    fn test_cold_start_falls_back_to_aggregate_rating() {
        // Disjoint histories: similarity 0, so the denominator is 0 and the
        // tutor's own aggregate rating decides.
        let history = InteractionHistory::from_records([
            InteractionRecord::new("student_1", "tutor_1", 5.0),
            InteractionRecord::new("student_2", "tutor_2", 2.0),
        ]);
        let active = StudentId::from("student_1");
        let tutor_order = order(&["tutor_1", "tutor_2"]);
        let map = SimilarityMap::build(&active, &history, &tutor_order);
        let scorer = CollaborativeScorer::new(&history, Some(&map), Some(&active));

        let score = scorer.score(&tutor("tutor_2", 4.5));
        assert!((score - 0.9).abs() < 1e-12);
    }

    #[test]
    fn test_anonymous_request_uses_cold_start() {
        let history = InteractionHistory::from_records([InteractionRecord::new(
            "student_2", "tutor_1", 5.0,
        )]);
        let scorer = CollaborativeScorer::new(&history, None, None);

        assert!((scorer.score(&tutor("tutor_1", 4.0)) - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_score_is_clipped_to_unit_interval() {
        // An out-of-scale aggregate rating must not leak past the clip.
        let history = InteractionHistory::new();
        let scorer = CollaborativeScorer::new(&history, None, None);

        assert_eq!(scorer.score(&tutor("tutor_1", 9.0)), 1.0);
        assert_eq!(scorer.score(&tutor("tutor_1", -1.0)), 0.0);
    }
}
