use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::scorer::MatchResult;
use crate::models::application::ApplicationRow;
use crate::models::job::{JobRow, ScanCriteriaRow};
use crate::models::resume::{ResumeRow, ResumeScanRow};
use crate::store::{ApplicationFilter, MatchStore};

#[derive(Clone)]
pub struct PgMatchStore {
    pool: PgPool,
}

impl PgMatchStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MatchStore for PgMatchStore {
    async fn list_applications(
        &self,
        filter: &ApplicationFilter,
    ) -> Result<Vec<ApplicationRow>, AppError> {
        let rows = sqlx::query_as::<_, ApplicationRow>(
            r#"
            SELECT *
            FROM applications
            WHERE ($1::uuid IS NULL OR job_id = $1)
              AND ($2::text IS NULL OR status = $2)
            ORDER BY applied_at DESC, id
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(filter.job_id)
        .bind(filter.status.as_deref())
        .bind(filter.limit)
        .bind(filter.offset)
        .fetch_all(&self.pool)
        .await?;

        debug!("Loaded {} applications ({filter:?})", rows.len());
        Ok(rows)
    }

    async fn find_job(&self, job_id: Uuid) -> Result<Option<JobRow>, AppError> {
        Ok(
            sqlx::query_as::<_, JobRow>("SELECT * FROM jobs WHERE id = $1")
                .bind(job_id)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn find_resume(&self, resume_id: Uuid) -> Result<Option<ResumeRow>, AppError> {
        Ok(
            sqlx::query_as::<_, ResumeRow>("SELECT * FROM resumes WHERE id = $1")
                .bind(resume_id)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn find_scan_criteria(
        &self,
        job_id: Uuid,
    ) -> Result<Option<ScanCriteriaRow>, AppError> {
        Ok(sqlx::query_as::<_, ScanCriteriaRow>(
            "SELECT * FROM scan_criteria WHERE job_id = $1 ORDER BY updated_at DESC LIMIT 1",
        )
        .bind(job_id)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn save_scan_result(
        &self,
        resume_id: Uuid,
        job_id: Uuid,
        result: &MatchResult,
    ) -> Result<Uuid, AppError> {
        let scan_id = Uuid::new_v4();
        let recommendation = result.ai_recommendation.as_ref();

        sqlx::query(
            r#"
            INSERT INTO resume_scans
                (id, resume_id, job_id, overall_match, skills_match, experience_match,
                 education_match, keyword_match, location_fit, matched_skills,
                 missing_skills, ai_recommendation, ai_reasoning, ai_key_points)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            "#,
        )
        .bind(scan_id)
        .bind(resume_id)
        .bind(job_id)
        .bind(result.overall_match as i16)
        .bind(result.skills_match as i16)
        .bind(result.experience_match as i16)
        .bind(result.education_match as i16)
        .bind(result.keyword_match as i16)
        .bind(result.location_fit)
        .bind(&result.matched_skills)
        .bind(&result.missing_skills)
        .bind(recommendation.map(|r| r.decision.as_str()))
        .bind(recommendation.map(|r| r.reasoning.as_str()))
        .bind(
            recommendation
                .map(|r| r.key_points.clone())
                .unwrap_or_default(),
        )
        .execute(&self.pool)
        .await?;

        info!("Stored resume scan {scan_id} (resume {resume_id}, job {job_id})");
        Ok(scan_id)
    }

    async fn find_scan(&self, scan_id: Uuid) -> Result<Option<ResumeScanRow>, AppError> {
        Ok(
            sqlx::query_as::<_, ResumeScanRow>("SELECT * FROM resume_scans WHERE id = $1")
                .bind(scan_id)
                .fetch_optional(&self.pool)
                .await?,
        )
    }
}
