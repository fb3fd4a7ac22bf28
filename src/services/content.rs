use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::services::features::{FeatureVector, FEATURE_COUNT};
use crate::services::linalg::dot;

/// Sigmoid inputs beyond this magnitude saturate to exactly 0 or 1
const SIGMOID_OVERFLOW: f64 = 700.0;

/// Fixed-weight logistic model producing the content-based match probability.
///
/// Pure and stateless: identical inputs always yield identical outputs. The
/// weights are injected at construction; there is no global model state.
#[derive(Debug, Clone)]
pub struct ContentScorer {
    intercept: f64,
    weights: [f64; FEATURE_COUNT],
}

impl ContentScorer {
    /// Fails with a configuration error if the weight table does not line up
    /// with the feature vector layout. That is a deployment bug, not user
    /// input, so it surfaces before any request is scored.
    pub fn new(config: &EngineConfig) -> EngineResult<Self> {
        let weights: [f64; FEATURE_COUNT] =
            config.feature_weights.as_slice().try_into().map_err(|_| {
                EngineError::Configuration(format!(
                    "feature weight table has {} entries, the feature vector has {}",
                    config.feature_weights.len(),
                    FEATURE_COUNT
                ))
            })?;
        Ok(Self {
            intercept: config.intercept,
            weights,
        })
    }

    /// P(match) = 1 / (1 + e^-(intercept + w.x))
    pub fn score(&self, features: &FeatureVector) -> f64 {
        sigmoid(self.intercept + dot(&self.weights, features.as_slice()))
    }
}

fn sigmoid(z: f64) -> f64 {
    if z > SIGMOID_OVERFLOW {
        return 1.0;
    }
    if z < -SIGMOID_OVERFLOW {
        return 0.0;
    }
    1.0 / (1.0 + (-z).exp())
}
