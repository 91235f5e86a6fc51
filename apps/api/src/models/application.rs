use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::matching::features::{days_since, CandidateFeatures};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ApplicationRow {
    pub id: Uuid,
    pub job_id: Uuid,
    pub applicant_name: String,
    pub applicant_email: String,
    pub status: String,
    pub skills: Vec<String>,
    pub location: Option<String>,
    pub experience_years: Option<f64>,
    pub education: Vec<String>,
    pub cover_letter: Option<String>,
    pub applied_at: DateTime<Utc>,
}

impl ApplicationRow {
    pub fn features(&self, now: DateTime<Utc>) -> CandidateFeatures {
        CandidateFeatures {
            skills: self.skills.clone(),
            location: self.location.clone(),
            experience_years: self.experience_years,
            education: self.education.clone(),
            summary: self.cover_letter.clone(),
            experience_text: None,
            days_since_applied: Some(days_since(self.applied_at, now)),
        }
    }
}
