//! Persistence seam for the two scoring call sites.
//!
//! `AppState` carries an `Arc<dyn MatchStore>`; production uses `PgMatchStore`,
//! handler tests use the in-memory store.

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::scorer::MatchResult;
use crate::models::application::ApplicationRow;
use crate::models::job::{JobRow, ScanCriteriaRow};
use crate::models::resume::{ResumeRow, ResumeScanRow};

#[cfg(test)]
pub mod memory;
pub mod postgres;

pub use postgres::PgMatchStore;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplicationFilter {
    pub job_id: Option<Uuid>,
    pub status: Option<String>,
    pub limit: i64,
    pub offset: i64,
}

#[async_trait]
pub trait MatchStore: Send + Sync {
    /// Newest first.
    async fn list_applications(
        &self,
        filter: &ApplicationFilter,
    ) -> Result<Vec<ApplicationRow>, AppError>;

    async fn find_job(&self, job_id: Uuid) -> Result<Option<JobRow>, AppError>;

    async fn find_resume(&self, resume_id: Uuid) -> Result<Option<ResumeRow>, AppError>;

    async fn find_scan_criteria(&self, job_id: Uuid)
        -> Result<Option<ScanCriteriaRow>, AppError>;

    /// Persists a scan and returns its id.
    async fn save_scan_result(
        &self,
        resume_id: Uuid,
        job_id: Uuid,
        result: &MatchResult,
    ) -> Result<Uuid, AppError>;

    async fn find_scan(&self, scan_id: Uuid) -> Result<Option<ResumeScanRow>, AppError>;
}
