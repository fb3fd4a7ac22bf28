use serde::Deserialize;

use crate::error::{EngineError, EngineResult};
use crate::models::PriceBand;
use crate::services::features::FEATURE_COUNT;

/// Scoring configuration
///
/// The weights are fixed deployment configuration, not trained parameters.
/// Defaults are the reference model; any field can be overridden through
/// `TUTORMATCH_`-prefixed environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct EngineConfig {
    /// Intercept term of the logistic match model
    #[serde(default = "default_intercept")]
    pub intercept: f64,

    /// One weight per feature, aligned with the feature vector layout
    #[serde(default = "default_feature_weights")]
    pub feature_weights: Vec<f64>,

    /// Years of experience that count as fully experienced
    #[serde(default = "default_experience_ceiling")]
    pub experience_ceiling: f64,

    /// Share of the final score taken from the content-based model
    #[serde(default = "default_content_weight")]
    pub content_weight: f64,

    /// Share of the final score taken from collaborative filtering
    #[serde(default = "default_collaborative_weight")]
    pub collaborative_weight: f64,

    /// Hourly-rate range each price band maps to
    #[serde(default)]
    pub price_bands: PriceBandTable,
}

fn default_intercept() -> f64 {
    -0.5
}

fn default_feature_weights() -> Vec<f64> {
    vec![2.5, 1.8, 1.2, 0.8, 1.0, 1.5]
}

fn default_experience_ceiling() -> f64 {
    15.0
}

fn default_content_weight() -> f64 {
    0.6
}

fn default_collaborative_weight() -> f64 {
    0.4
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            intercept: default_intercept(),
            feature_weights: default_feature_weights(),
            experience_ceiling: default_experience_ceiling(),
            content_weight: default_content_weight(),
            collaborative_weight: default_collaborative_weight(),
            price_bands: PriceBandTable::default(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let config: EngineConfig = envy::prefixed("TUTORMATCH_")
            .from_env()
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the structural invariants the scorers rely on.
    ///
    /// A violation means a broken deployment, so it surfaces as
    /// [`EngineError::Configuration`] before any request is scored.
    pub fn validate(&self) -> EngineResult<()> {
        if self.feature_weights.len() != FEATURE_COUNT {
            return Err(EngineError::Configuration(format!(
                "feature weight table has {} entries, the feature vector has {}",
                self.feature_weights.len(),
                FEATURE_COUNT
            )));
        }
        if self.experience_ceiling <= 0.0 {
            return Err(EngineError::Configuration(format!(
                "experience ceiling must be positive, got {}",
                self.experience_ceiling
            )));
        }
        if self.content_weight < 0.0
            || self.collaborative_weight < 0.0
            || (self.content_weight + self.collaborative_weight - 1.0).abs() > 1e-9
        {
            return Err(EngineError::Configuration(format!(
                "hybrid weights must be a convex combination, got {} and {}",
                self.content_weight, self.collaborative_weight
            )));
        }
        self.price_bands.validate()
    }
}

/// Hourly-rate range for one price band
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub fn width(&self) -> f64 {
        self.max - self.min
    }
}

/// Per-band rate ranges used by price normalization
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PriceBandTable {
    pub low: PriceRange,
    pub medium: PriceRange,
    pub high: PriceRange,
}

impl Default for PriceBandTable {
    fn default() -> Self {
        Self {
            low: PriceRange {
                min: 0.0,
                max: 600.0,
            },
            medium: PriceRange {
                min: 500.0,
                max: 1000.0,
            },
            high: PriceRange {
                min: 800.0,
                max: 2000.0,
            },
        }
    }
}

impl PriceBandTable {
    /// Resolves the rate range for a student's price band
    pub fn range(&self, band: PriceBand) -> PriceRange {
        match band {
            PriceBand::Low => self.low,
            PriceBand::Medium => self.medium,
            PriceBand::High => self.high,
        }
    }

    fn validate(&self) -> EngineResult<()> {
        for (name, range) in [("low", self.low), ("medium", self.medium), ("high", self.high)] {
            if range.width() <= 0.0 {
                return Err(EngineError::Configuration(format!(
                    "price band '{}' has a degenerate range ({}..{})",
                    name, range.min, range.max
                )));
            }
        }
        Ok(())
    }
}
