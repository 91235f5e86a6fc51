use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::matching::features::{JobRequirements, RemoteType, ScanCriteria};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobRow {
    pub id: Uuid,
    pub company_id: Uuid,
    pub title: String,
    pub company_name: String,
    pub location: Option<String>,
    pub remote_type: Option<String>,
    pub required_skills: Vec<String>,
    pub preferred_skills: Vec<String>,
    pub min_experience_years: Option<f64>,
    pub required_education: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl JobRow {
    /// Keyword phrases live on the job's scan criteria, not on the posting.
    pub fn requirements(&self, criteria: Option<&ScanCriteriaRow>) -> JobRequirements {
        JobRequirements {
            required_skills: self.required_skills.clone(),
            preferred_skills: self.preferred_skills.clone(),
            location: self.location.clone(),
            remote_type: RemoteType::from_db(self.remote_type.as_deref()),
            min_experience_years: self.min_experience_years,
            required_education: self.required_education.clone(),
            keyword_phrases: criteria.map(|c| c.keywords.clone()).unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ScanCriteriaRow {
    pub id: Uuid,
    pub job_id: Uuid,
    pub skills_weight: i16,
    pub experience_weight: i16,
    pub education_weight: i16,
    pub keyword_weight: i16,
    pub location_weight: i16,
    pub keywords: Vec<String>,
    pub ai_scanning_enabled: bool,
    pub updated_at: DateTime<Utc>,
}

impl ScanCriteriaRow {
    pub fn criteria(&self) -> ScanCriteria {
        let pct = |w: i16| w.clamp(0, 100) as u8;
        ScanCriteria {
            skills_weight: pct(self.skills_weight),
            experience_weight: pct(self.experience_weight),
            education_weight: pct(self.education_weight),
            keyword_weight: pct(self.keyword_weight),
            location_weight: pct(self.location_weight),
            ai_scanning_enabled: self.ai_scanning_enabled,
        }
    }
}
