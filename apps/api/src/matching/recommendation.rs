//! Templated recommendation derived from the composite score. No model call.

use serde::{Deserialize, Serialize};

pub const RECOMMEND_THRESHOLD: u8 = 80;
pub const MAYBE_THRESHOLD: u8 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationDecision {
    Recommend,
    Maybe,
    Reject,
}

impl RecommendationDecision {
    pub fn from_score(overall: u8) -> Self {
        if overall >= RECOMMEND_THRESHOLD {
            RecommendationDecision::Recommend
        } else if overall >= MAYBE_THRESHOLD {
            RecommendationDecision::Maybe
        } else {
            RecommendationDecision::Reject
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationDecision::Recommend => "recommend",
            RecommendationDecision::Maybe => "maybe",
            RecommendationDecision::Reject => "reject",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiRecommendation {
    pub decision: RecommendationDecision,
    pub reasoning: String,
    pub key_points: Vec<String>,
}

/// Facts the templates draw on.
#[derive(Debug, Clone)]
pub struct RecommendationInput<'a> {
    pub overall: u8,
    pub matched_skills: &'a [String],
    pub missing_skills: &'a [String],
    pub total_job_skills: usize,
    pub candidate_years: Option<f64>,
    pub min_years: Option<f64>,
    pub experience_gap: Option<f64>,
}

pub fn build_recommendation(input: &RecommendationInput<'_>) -> AiRecommendation {
    let decision = RecommendationDecision::from_score(input.overall);
    let score = input.overall;

    let (reasoning, key_points) = match decision {
        RecommendationDecision::Recommend => (
            format!(
                "Strong match ({score}/100). The candidate covers the core requirements of this role."
            ),
            vec![
                skills_point(input),
                experience_level_point(input),
                "High confidence: profile aligns with the weighted scan criteria".to_string(),
            ],
        ),
        RecommendationDecision::Maybe => (
            format!(
                "Partial match ({score}/100). Worth a closer look, but some requirements are not evidenced."
            ),
            vec![
                missing_skills_point(input, "Skills to verify in interview"),
                experience_gap_point(input),
                "Moderate confidence: review the resume manually before deciding".to_string(),
            ],
        ),
        RecommendationDecision::Reject => (
            format!(
                "Weak match ({score}/100). The resume does not meet enough of the role's requirements."
            ),
            vec![
                missing_skills_point(input, "Missing required skills"),
                experience_gap_point(input),
                format!(
                    "Overall match is below the {MAYBE_THRESHOLD}/100 review threshold"
                ),
            ],
        ),
    };

    AiRecommendation {
        decision,
        reasoning,
        key_points,
    }
}

fn skills_point(input: &RecommendationInput<'_>) -> String {
    if input.total_job_skills == 0 {
        "No specific skills listed for this job".to_string()
    } else {
        format!(
            "Matches {} of {} listed skills",
            input.matched_skills.len(),
            input.total_job_skills
        )
    }
}

fn experience_level_point(input: &RecommendationInput<'_>) -> String {
    match (input.candidate_years, input.min_years) {
        (Some(years), Some(min)) => {
            format!("{years:.0} years of experience against a {min:.0}-year minimum")
        }
        (Some(years), None) => format!("{years:.0} years of experience"),
        (None, _) => "Experience level not stated on the resume".to_string(),
    }
}

fn missing_skills_point(input: &RecommendationInput<'_>, label: &str) -> String {
    if input.missing_skills.is_empty() {
        return "All required skills are present".to_string();
    }
    let top: Vec<&str> = input
        .missing_skills
        .iter()
        .take(3)
        .map(String::as_str)
        .collect();
    format!("{label}: {}", top.join(", "))
}

fn experience_gap_point(input: &RecommendationInput<'_>) -> String {
    match input.experience_gap {
        Some(gap) => format!("Experience gap of {gap:.1} years below the stated minimum"),
        None if input.candidate_years.is_none() => {
            "Experience level could not be determined".to_string()
        }
        None => "Meets the experience requirement".to_string(),
    }
}
