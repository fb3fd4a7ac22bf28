use crate::config::EngineConfig;
use crate::models::{StudentPreference, TutorProfile};
use crate::services::linalg::clamp01;

/// Number of elements in the match feature vector
pub const FEATURE_COUNT: usize = 6;

/// Named layout of the feature vector
pub mod feature_index {
    pub const SUBJECT_MATCH: usize = 0;
    pub const MODE_MATCH: usize = 1;
    pub const EXPERIENCE: usize = 2;
    pub const PRICE: usize = 3;
    pub const EDUCATION: usize = 4;
    pub const RATING: usize = 5;
}

/// A normalized (student, tutor) match vector; every element lies in [0,1].
///
/// Fixed-size by construction, so a layout mismatch against the weight table
/// is caught when the scorer is built rather than mid-request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn get(&self, index: usize) -> f64 {
        self.0[index]
    }
}

/// Turns a (student preference, tutor profile) pair into the feature vector.
///
/// Derived and ephemeral: recomputed per pair, nothing is cached here.
pub struct FeatureNormalizer<'a> {
    config: &'a EngineConfig,
}

impl<'a> FeatureNormalizer<'a> {
    pub fn new(config: &'a EngineConfig) -> Self {
        Self { config }
    }

    pub fn vectorize(&self, prefs: &StudentPreference, tutor: &TutorProfile) -> FeatureVector {
        let subject_match = if prefs.subject_matches(&tutor.subject) {
            1.0
        } else {
            0.0
        };
        let mode_match = if prefs.mode == tutor.mode { 1.0 } else { 0.0 };
        let experience_norm = clamp01(f64::from(tutor.experience_years) / self.config.experience_ceiling);

        let band = self.config.price_bands.range(prefs.preferred_price_range);
        let price_norm = clamp01((tutor.hourly_rate - band.min) / band.width());

        let education_norm = tutor.education_level.ordinal();
        let rating_norm = clamp01((tutor.rating - 1.0) / 4.0);

        FeatureVector([
            subject_match,
            mode_match,
            experience_norm,
            price_norm,
            education_norm,
            rating_norm,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::feature_index::*;
    use super::*;
    use crate::models::{EducationLevel, Mode, PriceBand, TutorId};

    fn tutor(rate: f64, years: u32) -> TutorProfile {
        TutorProfile {
            tutor_id: TutorId::from("tutor_1"),
            name: "Asha Gurung".to_string(),
            subject: "Math".to_string(),
            mode: Mode::Online,
            experience_years: years,
            hourly_rate: rate,
            education_level: EducationLevel::Doctorate,
            rating: 4.8,
            location: "Kathmandu".to_string(),
        }
    }

    #[test]
    fn test_reference_scenario_vector() {
        let config = EngineConfig::default();
        let normalizer = FeatureNormalizer::new(&config);
        let prefs = StudentPreference::default();

        // Subject and mode match, 5 of 15 years, rate at the exact mid-band
        // point of the medium band (500..1000), doctorate, 4.8 rating.
        let features = normalizer.vectorize(&prefs, &tutor(750.0, 5));

        assert_eq!(features.get(SUBJECT_MATCH), 1.0);
        assert_eq!(features.get(MODE_MATCH), 1.0);
        assert!((features.get(EXPERIENCE) - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(features.get(PRICE), 0.5);
        assert_eq!(features.get(EDUCATION), 1.0);
        assert!((features.get(RATING) - 0.95).abs() < 1e-12);
    }

    #[test]
    fn test_price_norm_band_boundaries() {
        let config = EngineConfig::default();
        let normalizer = FeatureNormalizer::new(&config);
        let prefs = StudentPreference {
            preferred_price_range: PriceBand::Medium,
            ..StudentPreference::default()
        };

        assert_eq!(normalizer.vectorize(&prefs, &tutor(500.0, 5)).get(PRICE), 0.0);
        assert_eq!(normalizer.vectorize(&prefs, &tutor(1000.0, 5)).get(PRICE), 1.0);
    }

    #[test]
    fn test_out_of_band_rates_are_clamped() {
        let config = EngineConfig::default();
        let normalizer = FeatureNormalizer::new(&config);
        let prefs = StudentPreference::default();

        assert_eq!(normalizer.vectorize(&prefs, &tutor(200.0, 5)).get(PRICE), 0.0);
        assert_eq!(normalizer.vectorize(&prefs, &tutor(5000.0, 5)).get(PRICE), 1.0);
    }

    #[test]
    fn test_experience_clamped_at_ceiling() {
        let config = EngineConfig::default();
        let normalizer = FeatureNormalizer::new(&config);
        let prefs = StudentPreference::default();

        assert_eq!(normalizer.vectorize(&prefs, &tutor(750.0, 40)).get(EXPERIENCE), 1.0);
        assert_eq!(normalizer.vectorize(&prefs, &tutor(750.0, 0)).get(EXPERIENCE), 0.0);
    }

    #[test]
    fn test_every_feature_in_unit_interval() {
        let config = EngineConfig::default();
        let normalizer = FeatureNormalizer::new(&config);
        let prefs = StudentPreference {
            subject: "Physics".to_string(),
            mode: Mode::Offline,
            ..StudentPreference::default()
        };

        let features = normalizer.vectorize(&prefs, &tutor(9999.0, 99));
        for value in features.as_slice() {
            assert!((0.0..=1.0).contains(value));
        }
    }
}
