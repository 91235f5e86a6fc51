//! Value types fed into the scorer.
//!
//! Every field is defaulted so a partially filled candidate or job still
//! deserializes; the scorer treats absent data as "unknown", never as an error.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The subset of an applicant profile (or parsed resume) relevant to scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidateFeatures {
    pub skills: Vec<String>,
    pub location: Option<String>,
    pub experience_years: Option<f64>,
    /// Free-text entries, e.g. "BS Computer Science, UP Diliman".
    pub education: Vec<String>,
    pub summary: Option<String>,
    pub experience_text: Option<String>,
    pub days_since_applied: Option<i64>,
}

impl CandidateFeatures {
    /// Concatenated lowercase text searched for keyword phrases.
    pub fn searchable_text(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();
        if let Some(summary) = self.summary.as_deref() {
            parts.push(summary);
        }
        if let Some(text) = self.experience_text.as_deref() {
            parts.push(text);
        }
        parts.extend(self.skills.iter().map(String::as_str));
        parts.join(" ").to_lowercase()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemoteType {
    #[default]
    None,
    Hybrid,
    Remote,
}

impl RemoteType {
    /// Maps the stored column value. Unknown values fall back to on-site.
    pub fn from_db(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_lowercase()).as_deref() {
            Some("remote") | Some("fully_remote") => RemoteType::Remote,
            Some("hybrid") => RemoteType::Hybrid,
            _ => RemoteType::None,
        }
    }
}

/// The subset of a job posting relevant to scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobRequirements {
    pub required_skills: Vec<String>,
    pub preferred_skills: Vec<String>,
    pub location: Option<String>,
    pub remote_type: RemoteType,
    pub min_experience_years: Option<f64>,
    pub required_education: Option<String>,
    pub keyword_phrases: Vec<String>,
}

/// Per-job weighting for the detailed scan. Weights are percentages (0–100).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanCriteria {
    pub skills_weight: u8,
    pub experience_weight: u8,
    pub education_weight: u8,
    pub keyword_weight: u8,
    pub location_weight: u8,
    pub ai_scanning_enabled: bool,
}

impl Default for ScanCriteria {
    fn default() -> Self {
        Self {
            skills_weight: 30,
            experience_weight: 25,
            education_weight: 20,
            keyword_weight: 15,
            location_weight: 10,
            ai_scanning_enabled: false,
        }
    }
}

impl ScanCriteria {
    pub fn weight_sum(&self) -> u32 {
        [
            self.skills_weight,
            self.experience_weight,
            self.education_weight,
            self.keyword_weight,
            self.location_weight,
        ]
        .iter()
        .map(|w| *w as u32)
        .sum()
    }
}

/// Whole days between `applied_at` and `now`. Negative when `applied_at` is in the future.
pub fn days_since(applied_at: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - applied_at).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_candidate_deserializes_from_empty_object() {
        let candidate: CandidateFeatures = serde_json::from_str("{}").unwrap();
        assert!(candidate.skills.is_empty());
        assert_eq!(candidate.experience_years, None);
    }

    #[test]
    fn test_job_remote_type_defaults_to_none() {
        let job: JobRequirements =
            serde_json::from_str(r#"{"required_skills": ["rust"]}"#).unwrap();
        assert_eq!(job.remote_type, RemoteType::None);
        assert_eq!(job.required_skills, vec!["rust".to_string()]);
    }

    #[test]
    fn test_remote_type_from_db() {
        assert_eq!(RemoteType::from_db(Some("Remote")), RemoteType::Remote);
        assert_eq!(RemoteType::from_db(Some("hybrid")), RemoteType::Hybrid);
        assert_eq!(RemoteType::from_db(Some("onsite")), RemoteType::None);
        assert_eq!(RemoteType::from_db(None), RemoteType::None);
    }

    #[test]
    fn test_default_criteria_weights_sum_to_100() {
        assert_eq!(ScanCriteria::default().weight_sum(), 100);
    }

    #[test]
    fn test_searchable_text_is_lowercase_concatenation() {
        let candidate = CandidateFeatures {
            skills: vec!["GraphQL".to_string()],
            summary: Some("Backend Engineer".to_string()),
            experience_text: Some("Built Payment APIs".to_string()),
            ..Default::default()
        };
        assert_eq!(
            candidate.searchable_text(),
            "backend engineer built payment apis graphql"
        );
    }

    #[test]
    fn test_days_since() {
        let now = Utc::now();
        assert_eq!(days_since(now - Duration::days(10), now), 10);
        assert_eq!(days_since(now + Duration::days(2), now), -2);
    }
}
