pub mod collaborative;
pub mod content;
pub mod features;
pub mod linalg;
pub mod providers;
pub mod ranker;
pub mod recommendations;
pub mod similarity;

pub use collaborative::CollaborativeScorer;
pub use content::ContentScorer;
pub use features::{FeatureNormalizer, FeatureVector};
pub use ranker::HybridRanker;
pub use recommendations::RecommendationService;
pub use similarity::SimilarityMap;
