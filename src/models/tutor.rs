use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::Display;

use super::Mode;

/// Identifier for a tutor
///
/// Ordering on tutor ids is the canonical ranking tie-break, so the newtype
/// derives `Ord`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TutorId(String);

impl TutorId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for TutorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TutorId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Highest education level a tutor holds, encoded ordinally for scoring
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EducationLevel {
    None,
    Bachelor,
    Master,
    Doctorate,
}

impl EducationLevel {
    /// Maps a raw catalog label to an education level.
    ///
    /// Unknown labels fall back to `None`, which scores zero.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "bachelor" | "bachelors" => Self::Bachelor,
            "master" | "masters" => Self::Master,
            "doctorate" | "phd" => Self::Doctorate,
            _ => Self::None,
        }
    }

    /// Ordinal encoding in [0,1]: none=0, bachelor=1/3, master=2/3, doctorate=1
    pub fn ordinal(&self) -> f64 {
        match self {
            Self::None => 0.0,
            Self::Bachelor => 1.0 / 3.0,
            Self::Master => 2.0 / 3.0,
            Self::Doctorate => 1.0,
        }
    }
}

impl<'de> Deserialize<'de> for EducationLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

/// A tutor's profile as snapshotted from the catalog. Read-only to the engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TutorProfile {
    pub tutor_id: TutorId,
    pub name: String,
    pub subject: String,
    pub mode: Mode,
    pub experience_years: u32,
    pub hourly_rate: f64,
    pub education_level: EducationLevel,
    /// Aggregate rating on the 1-5 scale
    pub rating: f64,
    pub location: String,
}
