//! Match Scorer — pluggable, trait-based scorer that measures a candidate
//! against a job's requirements.
//!
//! Default: `WeightedMatchScorer` (pure, deterministic, total).
//!
//! `AppState` holds an `Arc<dyn MatchScorer>`. Both call sites (ATS list and
//! resume scan) go through the same scorer and differ only by `ScoringProfile`.

use serde::{Deserialize, Serialize};

use crate::matching::features::{CandidateFeatures, JobRequirements};
use crate::matching::profile::{ScoringPreset, ScoringProfile};
use crate::matching::recommendation::{build_recommendation, AiRecommendation, RecommendationInput};
use crate::matching::subscores::{
    education_score, experience_gap, experience_score, keyword_score, location_affinity,
    recency_factor, skills_breakdown,
};

// ────────────────────────────────────────────────────────────────────────────
// Output data model
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub overall_match: u8,
    pub skills_match: u8,
    pub experience_match: u8,
    pub education_match: u8,
    pub keyword_match: u8,
    pub location_match: u8,
    pub recency_match: u8,
    pub location_fit: Option<bool>,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub ai_recommendation: Option<AiRecommendation>,
    pub profile: ScoringPreset,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap scoring backends without touching handlers.
///
/// Scoring never fails: every missing input has a neutral default, so there
/// is no error type. Boundary validation belongs to the caller.
pub trait MatchScorer: Send + Sync {
    fn score(
        &self,
        candidate: &CandidateFeatures,
        job: &JobRequirements,
        profile: &ScoringProfile,
    ) -> MatchResult;

    /// "weighted" — echoed in logs.
    fn backend(&self) -> &'static str;
}

/// Weighted-sum scorer over skills, experience, education, keywords,
/// location and recency.
///
/// Algorithm:
/// 1. Compute every sub-score on a 0–100 scale (see `subscores`).
/// 2. composite = Σ(weight × sub-score) using the profile's weights.
/// 3. Round, clamp to [0, 100].
/// 4. Bucket into recommend/maybe/reject when the profile enables it.
pub struct WeightedMatchScorer;

impl MatchScorer for WeightedMatchScorer {
    fn score(
        &self,
        candidate: &CandidateFeatures,
        job: &JobRequirements,
        profile: &ScoringProfile,
    ) -> MatchResult {
        score_match(candidate, job, profile)
    }

    fn backend(&self) -> &'static str {
        "weighted"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core weighted-sum algorithm
// ────────────────────────────────────────────────────────────────────────────

fn to_percent(score: f64) -> u8 {
    score.round().clamp(0.0, 100.0) as u8
}

pub fn score_match(
    candidate: &CandidateFeatures,
    job: &JobRequirements,
    profile: &ScoringProfile,
) -> MatchResult {
    let skills = skills_breakdown(candidate, job);
    let skills_score = skills.overall.unwrap_or(profile.empty_skills_score);
    let required_score = skills.required.unwrap_or(100.0);
    let preferred_score = skills.preferred.unwrap_or(100.0);

    let experience = experience_score(
        candidate.experience_years,
        job.min_experience_years,
        profile.experience_strategy,
    );
    let education = education_score(&candidate.education, job.required_education.as_deref());
    let keyword = keyword_score(candidate, &job.keyword_phrases);
    let location = location_affinity(
        candidate.location.as_deref(),
        job.location.as_deref(),
        job.remote_type,
    );
    let location_score = location.factor * 100.0;
    let recency_score = recency_factor(candidate.days_since_applied) * 100.0;

    let w = &profile.weights;
    let composite = w.required_skills * required_score
        + w.preferred_skills * preferred_score
        + w.skills * skills_score
        + w.experience * experience
        + w.education * education
        + w.keyword * keyword
        + w.location * location_score
        + w.recency * recency_score;
    let overall_match = to_percent(composite);

    let ai_recommendation = profile.ai_recommendations.then(|| {
        build_recommendation(&RecommendationInput {
            overall: overall_match,
            matched_skills: &skills.matched,
            missing_skills: &skills.missing,
            total_job_skills: skills.total,
            candidate_years: candidate.experience_years,
            min_years: job.min_experience_years,
            experience_gap: experience_gap(candidate.experience_years, job.min_experience_years),
        })
    });

    MatchResult {
        overall_match,
        skills_match: to_percent(skills_score),
        experience_match: to_percent(experience),
        education_match: to_percent(education),
        keyword_match: to_percent(keyword),
        location_match: to_percent(location_score),
        recency_match: to_percent(recency_score),
        location_fit: location.fit,
        matched_skills: skills.matched,
        missing_skills: skills.missing,
        ai_recommendation,
        profile: profile.preset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::features::{RemoteType, ScanCriteria};
    use crate::matching::recommendation::RecommendationDecision;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn manila_candidate(years: f64) -> CandidateFeatures {
        CandidateFeatures {
            skills: strings(&["javascript", "react"]),
            experience_years: Some(years),
            location: Some("Manila".to_string()),
            ..Default::default()
        }
    }

    fn manila_job() -> JobRequirements {
        JobRequirements {
            required_skills: strings(&["javascript", "node"]),
            preferred_skills: strings(&["react"]),
            min_experience_years: Some(3.0),
            location: Some("Manila".to_string()),
            remote_type: RemoteType::None,
            ..Default::default()
        }
    }

    #[test]
    fn test_reference_example() {
        let result = score_match(
            &manila_candidate(4.0),
            &manila_job(),
            &ScoringProfile::detailed_scan(None),
        );
        assert_eq!(result.matched_skills, strings(&["javascript", "react"]));
        assert_eq!(result.missing_skills, strings(&["node"]));
        assert_eq!(result.skills_match, 67);
        assert_eq!(result.experience_match, 85);
        assert_eq!(result.location_match, 100);
        assert_eq!(result.location_fit, Some(true));
    }

    #[test]
    fn test_reference_example_junior() {
        let result = score_match(
            &manila_candidate(1.0),
            &manila_job(),
            &ScoringProfile::quick_list(),
        );
        assert_eq!(result.experience_match, 40);
    }

    #[test]
    fn test_detailed_scan_composite() {
        // skills 66.67*.30 + exp 85*.25 + edu 60*.20 + kw 50*.15 + loc 100*.10
        // = 20.0 + 21.25 + 12.0 + 7.5 + 10.0 = 70.75 → 71
        let result = score_match(
            &manila_candidate(4.0),
            &manila_job(),
            &ScoringProfile::detailed_scan(None),
        );
        assert_eq!(result.overall_match, 71);
        assert_eq!(result.profile, ScoringPreset::DetailedScan);
    }

    #[test]
    fn test_quick_list_composite() {
        // required 50*.5 + preferred 100*.15 + exp 85*.2 + loc 100*.1 + recency 75*.05
        // = 25 + 15 + 17 + 10 + 3.75 = 70.75 → 71
        let result = score_match(
            &manila_candidate(4.0),
            &manila_job(),
            &ScoringProfile::quick_list(),
        );
        assert_eq!(result.overall_match, 71);
        assert_eq!(result.recency_match, 75);
        assert!(result.ai_recommendation.is_none());
    }

    #[test]
    fn test_empty_job_skills_follow_profile_default() {
        let job = JobRequirements::default();
        let candidate = manila_candidate(4.0);
        let quick = score_match(&candidate, &job, &ScoringProfile::quick_list());
        let scan = score_match(&candidate, &job, &ScoringProfile::detailed_scan(None));
        assert_eq!(quick.skills_match, 100);
        assert_eq!(scan.skills_match, 50);
        assert!(quick.missing_skills.is_empty());
    }

    #[test]
    fn test_experience_at_or_above_minimum_is_at_least_80() {
        for years in [3.0, 3.5, 4.0, 10.0, 40.0] {
            let result = score_match(
                &manila_candidate(years),
                &manila_job(),
                &ScoringProfile::detailed_scan(None),
            );
            assert!(result.experience_match >= 80, "years={years}");
        }
    }

    #[test]
    fn test_experience_below_minimum_strictly_decreases_until_floor() {
        let job = JobRequirements {
            min_experience_years: Some(5.0),
            ..manila_job()
        };
        let scores: Vec<u8> = [4.0, 3.0, 2.0, 1.0]
            .iter()
            .map(|y| {
                score_match(&manila_candidate(*y), &job, &ScoringProfile::quick_list())
                    .experience_match
            })
            .collect();
        assert_eq!(scores, vec![60, 40, 20, 0]);
        let floored = score_match(&manila_candidate(0.0), &job, &ScoringProfile::quick_list());
        assert_eq!(floored.experience_match, 0);
    }

    #[test]
    fn test_remote_job_always_fits() {
        let job = JobRequirements {
            location: Some("Singapore".to_string()),
            remote_type: RemoteType::Remote,
            ..manila_job()
        };
        let mut candidate = manila_candidate(4.0);
        for location in [None, Some("Cebu"), Some("")] {
            candidate.location = location.map(String::from);
            let result = score_match(&candidate, &job, &ScoringProfile::quick_list());
            assert_eq!(result.location_fit, Some(true));
            assert_eq!(result.location_match, 100);
        }
    }

    #[test]
    fn test_case_insensitive_skill_match() {
        let candidate = CandidateFeatures {
            skills: strings(&["React"]),
            ..Default::default()
        };
        let job = JobRequirements {
            required_skills: strings(&["react"]),
            ..Default::default()
        };
        let result = score_match(&candidate, &job, &ScoringProfile::detailed_scan(None));
        assert_eq!(result.skills_match, 100);
        assert!(result.missing_skills.is_empty());
    }

    #[test]
    fn test_scores_bounded_with_oversized_weights() {
        let criteria = ScanCriteria {
            skills_weight: 100,
            experience_weight: 100,
            education_weight: 100,
            keyword_weight: 100,
            location_weight: 100,
            ai_scanning_enabled: true,
        };
        let candidate = CandidateFeatures {
            education: strings(&["BS Computer Science"]),
            ..manila_candidate(10.0)
        };
        let job = JobRequirements {
            preferred_skills: vec![],
            required_skills: strings(&["javascript"]),
            ..manila_job()
        };
        let result = score_match(&candidate, &job, &ScoringProfile::detailed_scan(Some(&criteria)));
        assert_eq!(result.overall_match, 100);
        let rec = result.ai_recommendation.unwrap();
        assert_eq!(rec.decision, RecommendationDecision::Recommend);
        assert_eq!(rec.key_points[0], "Matches 1 of 1 listed skills");
    }

    #[test]
    fn test_zero_weights_score_zero() {
        let criteria = ScanCriteria {
            skills_weight: 0,
            experience_weight: 0,
            education_weight: 0,
            keyword_weight: 0,
            location_weight: 0,
            ai_scanning_enabled: true,
        };
        let result = score_match(
            &manila_candidate(4.0),
            &manila_job(),
            &ScoringProfile::detailed_scan(Some(&criteria)),
        );
        assert_eq!(result.overall_match, 0);
        assert_eq!(
            result.ai_recommendation.map(|r| r.decision),
            Some(RecommendationDecision::Reject)
        );
    }

    #[test]
    fn test_empty_inputs_degrade_to_neutral() {
        let result = score_match(
            &CandidateFeatures::default(),
            &JobRequirements::default(),
            &ScoringProfile::detailed_scan(None),
        );
        // skills 50, exp 50, edu 60, kw 50, loc 60
        // = 15 + 12.5 + 12 + 7.5 + 6 = 53
        assert_eq!(result.overall_match, 53);
        assert_eq!(result.location_fit, None);
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let criteria = ScanCriteria {
            ai_scanning_enabled: true,
            ..ScanCriteria::default()
        };
        let profile = ScoringProfile::detailed_scan(Some(&criteria));
        let first = WeightedMatchScorer.score(&manila_candidate(4.0), &manila_job(), &profile);
        let second = WeightedMatchScorer.score(&manila_candidate(4.0), &manila_job(), &profile);
        assert_eq!(first, second);
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let result = score_match(
            &manila_candidate(4.0),
            &manila_job(),
            &ScoringProfile::quick_list(),
        );
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["overallMatch"], 71);
        assert_eq!(json["missingSkills"][0], "node");
        assert_eq!(json["profile"], "quick_list");
        assert!(json["aiRecommendation"].is_null());
    }

    #[test]
    fn test_backend_label() {
        assert_eq!(WeightedMatchScorer.backend(), "weighted");
    }
}
