use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::matching::features::CandidateFeatures;

/// An uploaded resume with fields already extracted by the parsing collaborator.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub file_name: String,
    pub candidate_name: Option<String>,
    pub summary: Option<String>,
    pub experience_text: Option<String>,
    pub skills: Vec<String>,
    pub education: Vec<String>,
    pub location: Option<String>,
    pub experience_years: Option<f64>,
    pub created_at: DateTime<Utc>,
}

impl ResumeRow {
    pub fn features(&self) -> CandidateFeatures {
        CandidateFeatures {
            skills: self.skills.clone(),
            location: self.location.clone(),
            experience_years: self.experience_years,
            education: self.education.clone(),
            summary: self.summary.clone(),
            experience_text: self.experience_text.clone(),
            days_since_applied: None,
        }
    }
}

/// A persisted scan. Scores are stored as smallint; recommendation as its label.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ResumeScanRow {
    pub id: Uuid,
    pub resume_id: Uuid,
    pub job_id: Uuid,
    pub overall_match: i16,
    pub skills_match: i16,
    pub experience_match: i16,
    pub education_match: i16,
    pub keyword_match: i16,
    pub location_fit: Option<bool>,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub ai_recommendation: Option<String>,
    pub ai_reasoning: Option<String>,
    pub ai_key_points: Vec<String>,
    pub created_at: DateTime<Utc>,
}
