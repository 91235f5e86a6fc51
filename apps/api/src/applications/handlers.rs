//! Axum route handlers for the ATS application list.

use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::MAX_APPLICATIONS_PAGE_LIMIT;
use crate::errors::AppError;
use crate::matching::profile::ScoringProfile;
use crate::models::job::JobRow;
use crate::state::AppState;
use crate::store::ApplicationFilter;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationSort {
    #[default]
    Recent,
    Match,
}

#[derive(Debug, Default, Deserialize)]
pub struct ApplicationsQuery {
    pub job_id: Option<Uuid>,
    pub status: Option<String>,
    /// Applied to the fetched page, after scoring.
    pub min_score: Option<u8>,
    #[serde(default)]
    pub sort: ApplicationSort,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationListItem {
    pub id: Uuid,
    pub job_id: Uuid,
    pub job_title: Option<String>,
    pub applicant_name: String,
    pub applicant_email: String,
    pub status: String,
    pub applied_at: DateTime<Utc>,
    pub job_match_score: u8,
    pub location_fit: Option<bool>,
    pub missing_skills: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ApplicationListResponse {
    pub applications: Vec<ApplicationListItem>,
    pub count: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/applications
///
/// Lists applications (optionally for one job) with an embedded `jobMatchScore`.
pub async fn handle_list_applications(
    State(state): State<AppState>,
    Query(query): Query<ApplicationsQuery>,
) -> Result<Json<ApplicationListResponse>, AppError> {
    let filter = build_filter(&query, state.config.applications_page_limit)?;
    let applications = state.store.list_applications(&filter).await?;

    let profile = ScoringProfile::quick_list();
    let now = Utc::now();
    let mut jobs: HashMap<Uuid, Option<JobRow>> = HashMap::new();
    let mut items = Vec::with_capacity(applications.len());

    for application in applications {
        if !jobs.contains_key(&application.job_id) {
            let job = state.store.find_job(application.job_id).await?;
            jobs.insert(application.job_id, job);
        }

        let job = jobs.get(&application.job_id).and_then(Option::as_ref);
        let (job_title, job_match_score, location_fit, missing_skills) = match job {
            Some(job) => {
                let result = state.scorer.score(
                    &application.features(now),
                    &job.requirements(None),
                    &profile,
                );
                (
                    Some(job.title.clone()),
                    result.overall_match,
                    result.location_fit,
                    result.missing_skills,
                )
            }
            None => {
                warn!(
                    "Application {} references missing job {}; scoring as 0",
                    application.id, application.job_id
                );
                (None, 0, None, vec![])
            }
        };

        items.push(ApplicationListItem {
            id: application.id,
            job_id: application.job_id,
            job_title,
            applicant_name: application.applicant_name,
            applicant_email: application.applicant_email,
            status: application.status,
            applied_at: application.applied_at,
            job_match_score,
            location_fit,
            missing_skills,
        });
    }

    if let Some(min_score) = query.min_score {
        items.retain(|item| item.job_match_score >= min_score);
    }
    if query.sort == ApplicationSort::Match {
        items.sort_by(|a, b| b.job_match_score.cmp(&a.job_match_score));
    }

    debug!(
        "Scored {} applications with {} scorer across {} jobs",
        items.len(),
        state.scorer.backend(),
        jobs.len()
    );

    Ok(Json(ApplicationListResponse {
        count: items.len(),
        applications: items,
    }))
}

fn build_filter(query: &ApplicationsQuery, default_limit: i64) -> Result<ApplicationFilter, AppError> {
    let limit = query.limit.unwrap_or(default_limit);
    if limit < 1 {
        return Err(AppError::Validation("limit must be at least 1".to_string()));
    }
    let offset = query.offset.unwrap_or(0);
    if offset < 0 {
        return Err(AppError::Validation("offset cannot be negative".to_string()));
    }

    Ok(ApplicationFilter {
        job_id: query.job_id,
        status: query
            .status
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string),
        limit: limit.min(MAX_APPLICATIONS_PAGE_LIMIT),
        offset,
    })
}
