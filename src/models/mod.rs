mod interaction;
mod recommendation;
mod student;
mod tutor;

pub use interaction::{InteractionHistory, InteractionRecord};
pub use recommendation::{
    FailureResponse, RankedTutor, RecommendationRequest, RecommendationResponse, ScoreBreakdown,
};
pub use student::{AcademicLevel, ExperienceBand, Mode, PriceBand, StudentId, StudentPreference};
pub use tutor::{EducationLevel, TutorId, TutorProfile};
