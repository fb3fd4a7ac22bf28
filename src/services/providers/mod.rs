/// Collaborator data source abstraction
///
/// The engine never owns student, tutor, or rating data: registration,
/// booking, and ratings CRUD live elsewhere. Each collaborator sits behind an
/// async trait so the pipeline can be wired to a database, a remote service,
/// or the in-memory fixtures interchangeably.
use crate::error::EngineResult;
use crate::models::{InteractionHistory, StudentId, StudentPreference, TutorProfile};

pub mod memory;

/// Read-only source of the tutor catalog
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait TutorCatalogProvider: Send + Sync {
    /// Fetches the snapshot of tutors eligible for ranking
    async fn tutor_catalog(&self) -> EngineResult<Vec<TutorProfile>>;
}

/// Read-only source of stored student preferences
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait StudentDirectoryProvider: Send + Sync {
    /// Looks up stored preferences; `None` for unknown students
    async fn preferences(&self, student: &StudentId) -> EngineResult<Option<StudentPreference>>;
}

/// Read-only source of the student-tutor rating history
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait InteractionHistoryProvider: Send + Sync {
    /// Fetches the rating history snapshot the request will score against
    async fn interaction_history(&self) -> EngineResult<InteractionHistory>;
}
