use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Identifier for a student
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(String);

impl StudentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for StudentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for StudentId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Delivery mode for tutoring sessions
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Mode {
    Online,
    Offline,
    Hybrid,
}

/// Academic level a student is studying at
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AcademicLevel {
    Primary,
    #[serde(rename = "Middle School")]
    MiddleSchool,
    #[serde(rename = "High School")]
    HighSchool,
    University,
}

/// Price band a student is comfortable with
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PriceBand {
    Low,
    Medium,
    High,
}

impl PriceBand {
    /// Unknown labels default to `Medium` rather than failing the request
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "low" => Self::Low,
            "high" => Self::High,
            _ => Self::Medium,
        }
    }
}

impl<'de> Deserialize<'de> for PriceBand {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

/// How experienced the student wants their tutor to be
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceBand {
    Beginner,
    Intermediate,
    Advanced,
}

/// A student's stated preferences, immutable for the duration of a request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudentPreference {
    pub subject: String,
    pub mode: Mode,
    pub level: AcademicLevel,
    pub preferred_price_range: PriceBand,
    pub experience_preference: ExperienceBand,
}

impl Default for StudentPreference {
    /// Baseline preferences substituted for absent request fields
    fn default() -> Self {
        Self {
            subject: "Math".to_string(),
            mode: Mode::Online,
            level: AcademicLevel::HighSchool,
            preferred_price_range: PriceBand::Medium,
            experience_preference: ExperienceBand::Intermediate,
        }
    }
}

impl StudentPreference {
    /// Case-normalized subject comparison
    pub fn subject_matches(&self, subject: &str) -> bool {
        self.subject.trim().eq_ignore_ascii_case(subject.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_id_display() {
        let id = StudentId::from("student_1");
        assert_eq!(format!("{}", id), "student_1");
    }

    #[test]
    fn test_academic_level_serde() {
        let json = serde_json::to_string(&AcademicLevel::HighSchool).unwrap();
        assert_eq!(json, "\"High School\"");

        let parsed: AcademicLevel = serde_json::from_str("\"University\"").unwrap();
        assert_eq!(parsed, AcademicLevel::University);
    }

    #[test]
    fn test_price_band_serde() {
        let json = serde_json::to_string(&PriceBand::Medium).unwrap();
        assert_eq!(json, "\"medium\"");

        let parsed: PriceBand = serde_json::from_str("\"low\"").unwrap();
        assert_eq!(parsed, PriceBand::Low);
    }

    #[test]
    fn test_unknown_price_band_defaults_to_medium() {
        let parsed: PriceBand = serde_json::from_str("\"premium\"").unwrap();
        assert_eq!(parsed, PriceBand::Medium);
    }

    #[test]
    fn test_default_preferences() {
        let prefs = StudentPreference::default();
        assert_eq!(prefs.subject, "Math");
        assert_eq!(prefs.mode, Mode::Online);
        assert_eq!(prefs.preferred_price_range, PriceBand::Medium);
    }

    #[test]
    fn test_subject_match_is_case_normalized() {
        let prefs = StudentPreference {
            subject: "Math".to_string(),
            ..StudentPreference::default()
        };
        assert!(prefs.subject_matches("math"));
        assert!(prefs.subject_matches("  MATH "));
        assert!(!prefs.subject_matches("Physics"));
    }
}
