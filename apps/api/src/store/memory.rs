//! In-memory `MatchStore` for handler tests.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::scorer::MatchResult;
use crate::models::application::ApplicationRow;
use crate::models::job::{JobRow, ScanCriteriaRow};
use crate::models::resume::{ResumeRow, ResumeScanRow};
use crate::store::{ApplicationFilter, MatchStore};

#[derive(Default)]
pub struct InMemoryStore {
    pub applications: RwLock<Vec<ApplicationRow>>,
    pub jobs: RwLock<HashMap<Uuid, JobRow>>,
    pub resumes: RwLock<HashMap<Uuid, ResumeRow>>,
    pub criteria: RwLock<HashMap<Uuid, ScanCriteriaRow>>,
    pub scans: RwLock<HashMap<Uuid, ResumeScanRow>>,
}

impl InMemoryStore {
    pub async fn insert_job(&self, job: JobRow) {
        self.jobs.write().await.insert(job.id, job);
    }

    pub async fn insert_resume(&self, resume: ResumeRow) {
        self.resumes.write().await.insert(resume.id, resume);
    }

    pub async fn insert_criteria(&self, criteria: ScanCriteriaRow) {
        self.criteria.write().await.insert(criteria.job_id, criteria);
    }

    pub async fn insert_application(&self, application: ApplicationRow) {
        self.applications.write().await.push(application);
    }
}

#[async_trait]
impl MatchStore for InMemoryStore {
    async fn list_applications(
        &self,
        filter: &ApplicationFilter,
    ) -> Result<Vec<ApplicationRow>, AppError> {
        let mut rows: Vec<ApplicationRow> = self
            .applications
            .read()
            .await
            .iter()
            .filter(|a| filter.job_id.map_or(true, |id| a.job_id == id))
            .filter(|a| filter.status.as_deref().map_or(true, |s| a.status == s))
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.applied_at.cmp(&a.applied_at).then(a.id.cmp(&b.id)));
        Ok(rows
            .into_iter()
            .skip(filter.offset.max(0) as usize)
            .take(filter.limit.max(0) as usize)
            .collect())
    }

    async fn find_job(&self, job_id: Uuid) -> Result<Option<JobRow>, AppError> {
        Ok(self.jobs.read().await.get(&job_id).cloned())
    }

    async fn find_resume(&self, resume_id: Uuid) -> Result<Option<ResumeRow>, AppError> {
        Ok(self.resumes.read().await.get(&resume_id).cloned())
    }

    async fn find_scan_criteria(
        &self,
        job_id: Uuid,
    ) -> Result<Option<ScanCriteriaRow>, AppError> {
        Ok(self.criteria.read().await.get(&job_id).cloned())
    }

    async fn save_scan_result(
        &self,
        resume_id: Uuid,
        job_id: Uuid,
        result: &MatchResult,
    ) -> Result<Uuid, AppError> {
        let id = Uuid::new_v4();
        let recommendation = result.ai_recommendation.as_ref();
        let row = ResumeScanRow {
            id,
            resume_id,
            job_id,
            overall_match: result.overall_match as i16,
            skills_match: result.skills_match as i16,
            experience_match: result.experience_match as i16,
            education_match: result.education_match as i16,
            keyword_match: result.keyword_match as i16,
            location_fit: result.location_fit,
            matched_skills: result.matched_skills.clone(),
            missing_skills: result.missing_skills.clone(),
            ai_recommendation: recommendation.map(|r| r.decision.as_str().to_string()),
            ai_reasoning: recommendation.map(|r| r.reasoning.clone()),
            ai_key_points: recommendation
                .map(|r| r.key_points.clone())
                .unwrap_or_default(),
            created_at: Utc::now(),
        };
        self.scans.write().await.insert(id, row);
        Ok(id)
    }

    async fn find_scan(&self, scan_id: Uuid) -> Result<Option<ResumeScanRow>, AppError> {
        Ok(self.scans.read().await.get(&scan_id).cloned())
    }
}
