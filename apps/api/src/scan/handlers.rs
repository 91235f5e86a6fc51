//! Axum route handlers for the Resume Scan API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::features::{CandidateFeatures, JobRequirements, ScanCriteria};
use crate::matching::profile::{ScoringPreset, ScoringProfile};
use crate::matching::scorer::MatchResult;
use crate::models::resume::ResumeScanRow;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanRequest {
    pub resume_id: Uuid,
    pub job_id: Uuid,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeSummary {
    pub id: Uuid,
    pub file_name: String,
    pub candidate_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct JobSummary {
    pub id: Uuid,
    pub title: String,
    pub company: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResponse {
    pub scan_id: Uuid,
    pub resume: ResumeSummary,
    pub job: JobSummary,
    #[serde(flatten)]
    pub result: MatchResult,
}

#[derive(Debug, Deserialize)]
pub struct ScorePreviewRequest {
    #[serde(default)]
    pub candidate: CandidateFeatures,
    #[serde(default)]
    pub job: JobRequirements,
    pub criteria: Option<CriteriaRequest>,
    #[serde(default)]
    pub profile: ScoringPreset,
}

/// Request-side criteria. Weights arrive as plain JSON numbers so that
/// negative, oversized and fractional values reach validation as a 400
/// instead of failing extraction.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CriteriaRequest {
    pub skills_weight: f64,
    pub experience_weight: f64,
    pub education_weight: f64,
    pub keyword_weight: f64,
    pub location_weight: f64,
    pub ai_scanning_enabled: bool,
}

impl Default for CriteriaRequest {
    fn default() -> Self {
        let defaults = ScanCriteria::default();
        Self {
            skills_weight: defaults.skills_weight as f64,
            experience_weight: defaults.experience_weight as f64,
            education_weight: defaults.education_weight as f64,
            keyword_weight: defaults.keyword_weight as f64,
            location_weight: defaults.location_weight as f64,
            ai_scanning_enabled: defaults.ai_scanning_enabled,
        }
    }
}

impl CriteriaRequest {
    /// Each weight must be a whole number in 0–100.
    pub fn validate(&self) -> Result<ScanCriteria, AppError> {
        let weights = [
            ("skills_weight", self.skills_weight),
            ("experience_weight", self.experience_weight),
            ("education_weight", self.education_weight),
            ("keyword_weight", self.keyword_weight),
            ("location_weight", self.location_weight),
        ];
        let invalid: Vec<&str> = weights
            .iter()
            .filter(|(_, w)| !(0.0..=100.0).contains(w) || w.fract() != 0.0)
            .map(|(name, _)| *name)
            .collect();
        if !invalid.is_empty() {
            return Err(AppError::Validation(format!(
                "weights must be whole numbers between 0 and 100: {}",
                invalid.join(", ")
            )));
        }

        Ok(ScanCriteria {
            skills_weight: self.skills_weight as u8,
            experience_weight: self.experience_weight as u8,
            education_weight: self.education_weight as u8,
            keyword_weight: self.keyword_weight as u8,
            location_weight: self.location_weight as u8,
            ai_scanning_enabled: self.ai_scanning_enabled,
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resume/scan
///
/// Scores one resume against one job with the job's scan criteria and stores the result.
pub async fn handle_scan(
    State(state): State<AppState>,
    Json(request): Json<ScanRequest>,
) -> Result<Json<ScanResponse>, AppError> {
    let resume = state
        .store
        .find_resume(request.resume_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {} not found", request.resume_id)))?;

    let job = state
        .store
        .find_job(request.job_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {} not found", request.job_id)))?;

    let criteria_row = state.store.find_scan_criteria(job.id).await?;
    let criteria = criteria_row.as_ref().map(|row| row.criteria());
    if let Some(criteria) = &criteria {
        warn_on_unbalanced_weights(job.id, criteria);
    }

    let profile = ScoringProfile::detailed_scan(criteria.as_ref());
    debug!(
        "Scan profile for job {}: weight total {:.2}, ai {}",
        job.id,
        profile.weights.sum(),
        profile.ai_recommendations
    );
    let result = state.scorer.score(
        &resume.features(),
        &job.requirements(criteria_row.as_ref()),
        &profile,
    );

    let scan_id = state
        .store
        .save_scan_result(resume.id, job.id, &result)
        .await?;

    info!(
        "Scanned resume {} against job {}: {}/100",
        resume.id, job.id, result.overall_match
    );

    Ok(Json(ScanResponse {
        scan_id,
        resume: ResumeSummary {
            id: resume.id,
            file_name: resume.file_name,
            candidate_name: resume.candidate_name,
        },
        job: JobSummary {
            id: job.id,
            title: job.title,
            company: job.company_name,
        },
        result,
    }))
}

/// GET /api/v1/resume/scan/:id
pub async fn handle_get_scan(
    State(state): State<AppState>,
    Path(scan_id): Path<Uuid>,
) -> Result<Json<ResumeScanRow>, AppError> {
    let scan = state
        .store
        .find_scan(scan_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Scan {scan_id} not found")))?;
    Ok(Json(scan))
}

/// POST /api/v1/match/score
///
/// Scores an ad-hoc candidate/job pair. Nothing is read or stored.
pub async fn handle_score_preview(
    State(state): State<AppState>,
    Json(request): Json<ScorePreviewRequest>,
) -> Result<Json<MatchResult>, AppError> {
    let criteria = request
        .criteria
        .as_ref()
        .map(CriteriaRequest::validate)
        .transpose()?;

    let profile = ScoringProfile::for_preset(request.profile, criteria.as_ref());
    Ok(Json(state.scorer.score(
        &request.candidate,
        &request.job,
        &profile,
    )))
}

/// Weights are applied as absolute percentages; a sum other than 100 skews the composite.
fn warn_on_unbalanced_weights(job_id: Uuid, criteria: &ScanCriteria) {
    let sum = criteria.weight_sum();
    if sum != 100 {
        warn!("Scan criteria for job {job_id} sum to {sum}, not 100; composite is clamped");
    }
}
