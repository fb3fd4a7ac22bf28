use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{StudentId, TutorId};

/// One student's rating of one tutor on the 1-5 scale.
///
/// Records are append-only and owned by the external history store; the
/// engine only ever reads them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InteractionRecord {
    pub student_id: StudentId,
    pub tutor_id: TutorId,
    pub rating: f64,
}

impl InteractionRecord {
    pub fn new(student_id: impl Into<StudentId>, tutor_id: impl Into<TutorId>, rating: f64) -> Self {
        Self {
            student_id: student_id.into(),
            tutor_id: tutor_id.into(),
            rating,
        }
    }
}

/// Read-side index over interaction records.
///
/// Backed by ordered maps so that iteration (and therefore floating-point
/// summation order) is identical across invocations on the same snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct InteractionHistory {
    ratings: BTreeMap<StudentId, BTreeMap<TutorId, f64>>,
}

impl InteractionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: impl IntoIterator<Item = InteractionRecord>) -> Self {
        let mut history = Self::new();
        for record in records {
            history.insert(record);
        }
        history
    }

    /// Latest record wins if the same (student, tutor) pair appears twice
    pub fn insert(&mut self, record: InteractionRecord) {
        self.ratings
            .entry(record.student_id)
            .or_default()
            .insert(record.tutor_id, record.rating);
    }

    /// The student's own rating of a tutor, if one exists
    pub fn rating(&self, student: &StudentId, tutor: &TutorId) -> Option<f64> {
        self.ratings.get(student)?.get(tutor).copied()
    }

    /// Every student with at least one recorded rating
    pub fn students(&self) -> impl Iterator<Item = &StudentId> {
        self.ratings.keys()
    }

    /// Every (student, rating) pair for a given tutor, in student-id order
    pub fn raters_of<'a>(&'a self, tutor: &'a TutorId) -> impl Iterator<Item = (&'a StudentId, f64)> {
        self.ratings
            .iter()
            .filter_map(move |(student, per_tutor)| per_tutor.get(tutor).map(|r| (student, *r)))
    }

    /// Dense rating vector over a fixed tutor ordering, 0.0 where unrated
    pub fn rating_vector(&self, student: &StudentId, tutor_order: &[TutorId]) -> Vec<f64> {
        let per_tutor = self.ratings.get(student);
        tutor_order
            .iter()
            .map(|tutor| {
                per_tutor
                    .and_then(|ratings| ratings.get(tutor))
                    .copied()
                    .unwrap_or(0.0)
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }
}
