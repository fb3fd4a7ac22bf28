use std::collections::HashMap;

use async_trait::async_trait;
use tracing::debug;

use super::{InteractionHistoryProvider, StudentDirectoryProvider, TutorCatalogProvider};
use crate::error::EngineResult;
use crate::models::{
    InteractionHistory, InteractionRecord, StudentId, StudentPreference, TutorProfile,
};

/// Tutor catalog held in memory.
///
/// Backs the demo binary and the test suite; real deployments implement
/// [`TutorCatalogProvider`] over their own store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTutorCatalog {
    tutors: Vec<TutorProfile>,
}

impl InMemoryTutorCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a tutor to the catalog
    pub fn add_tutor(&mut self, tutor: TutorProfile) {
        self.tutors.push(tutor);
    }
}

#[async_trait]
impl TutorCatalogProvider for InMemoryTutorCatalog {
    async fn tutor_catalog(&self) -> EngineResult<Vec<TutorProfile>> {
        debug!(tutor_count = self.tutors.len(), "Serving tutor catalog from memory");
        Ok(self.tutors.clone())
    }
}

/// Student preference store held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryStudentDirectory {
    students: HashMap<StudentId, StudentPreference>,
}

impl InMemoryStudentDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers stored preferences for a student
    pub fn add_student(&mut self, student: StudentId, preferences: StudentPreference) {
        self.students.insert(student, preferences);
    }
}

#[async_trait]
impl StudentDirectoryProvider for InMemoryStudentDirectory {
    async fn preferences(&self, student: &StudentId) -> EngineResult<Option<StudentPreference>> {
        Ok(self.students.get(student).cloned())
    }
}

/// Interaction history held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryInteractionStore {
    records: Vec<InteractionRecord>,
}

impl InMemoryInteractionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rating record
    pub fn add_record(&mut self, record: InteractionRecord) {
        self.records.push(record);
    }
}

#[async_trait]
impl InteractionHistoryProvider for InMemoryInteractionStore {
    async fn interaction_history(&self) -> EngineResult<InteractionHistory> {
        debug!(record_count = self.records.len(), "Serving interaction history from memory");
        Ok(InteractionHistory::from_records(self.records.iter().cloned()))
    }
}
