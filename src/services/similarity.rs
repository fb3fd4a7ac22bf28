use std::collections::HashMap;

use crate::models::{InteractionHistory, StudentId, TutorId};
use crate::services::linalg::{dot, norm};

/// Cosine similarity of the active student against every other student with
/// rating history, clipped to [0,1].
///
/// Rating vectors and similarity values are tutor-independent once the
/// history snapshot is fixed, so the map is built once per recommendation
/// request and shared read-only across all tutor evaluations in that request.
#[derive(Debug, Clone)]
pub struct SimilarityMap {
    active: StudentId,
    scores: HashMap<StudentId, f64>,
}

impl SimilarityMap {
    /// Builds the similarity row for `active`.
    ///
    /// Every student's rating vector is laid out over the same fixed
    /// `tutor_order`, with 0.0 where no rating exists.
    pub fn build(
        active: &StudentId,
        history: &InteractionHistory,
        tutor_order: &[TutorId],
    ) -> Self {
        let active_vector = history.rating_vector(active, tutor_order);
        let mut scores = HashMap::new();

        for other in history.students() {
            if other == active {
                continue;
            }
            let other_vector = history.rating_vector(other, tutor_order);
            scores.insert(other.clone(), cosine_clipped(&active_vector, &other_vector));
        }

        Self {
            active: active.clone(),
            scores,
        }
    }

    /// Self-similarity is fixed at 1.0; students without history score 0.0
    pub fn get(&self, student: &StudentId) -> f64 {
        if *student == self.active {
            return 1.0;
        }
        self.scores.get(student).copied().unwrap_or(0.0)
    }
}

/// (A.B) / (|A| |B|), defined as 0 when either vector has zero magnitude so a
/// student with no ratings never produces NaN, and truncated at 0 so an
/// anti-correlated student cannot depress a prediction below zero.
fn cosine_clipped(a: &[f64], b: &[f64]) -> f64 {
    let magnitude_a = norm(a);
    let magnitude_b = norm(b);
    if magnitude_a == 0.0 || magnitude_b == 0.0 {
        return 0.0;
    }
    (dot(a, b) / (magnitude_a * magnitude_b)).clamp(0.0, 1.0)
}
