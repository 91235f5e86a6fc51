//! Scoring profiles: a named preset resolved into concrete weights and policies.

use serde::{Deserialize, Serialize};

use crate::matching::features::ScanCriteria;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringPreset {
    /// ATS application list: fixed weights, recency-aware.
    QuickList,
    /// Resume scan: job-configurable weights, keyword/education-aware.
    #[default]
    DetailedScan,
}

/// How experience is scored when the job states no minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceStrategy {
    /// `min(years / 5, 1) * 100`
    RatioBased,
    /// Flat 75 regardless of years.
    FlatDefault,
}

/// Fractional weights applied to 0–100 sub-scores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CompositeWeights {
    pub required_skills: f64,
    pub preferred_skills: f64,
    pub skills: f64,
    pub experience: f64,
    pub education: f64,
    pub keyword: f64,
    pub location: f64,
    pub recency: f64,
}

pub const QUICK_LIST_WEIGHTS: CompositeWeights = CompositeWeights {
    required_skills: 0.5,
    preferred_skills: 0.15,
    skills: 0.0,
    experience: 0.2,
    education: 0.0,
    keyword: 0.0,
    location: 0.1,
    recency: 0.05,
};

impl CompositeWeights {
    pub fn sum(&self) -> f64 {
        self.required_skills
            + self.preferred_skills
            + self.skills
            + self.experience
            + self.education
            + self.keyword
            + self.location
            + self.recency
    }

    /// Percentages divided by 100. Not renormalized: a criteria set summing
    /// to 140 can push the composite past 100, which the scorer clamps.
    pub fn from_criteria(criteria: &ScanCriteria) -> Self {
        let pct = |w: u8| w as f64 / 100.0;
        Self {
            skills: pct(criteria.skills_weight),
            experience: pct(criteria.experience_weight),
            education: pct(criteria.education_weight),
            keyword: pct(criteria.keyword_weight),
            location: pct(criteria.location_weight),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoringProfile {
    pub preset: ScoringPreset,
    pub weights: CompositeWeights,
    /// `skillsMatch` when the job lists no skills at all.
    pub empty_skills_score: f64,
    pub experience_strategy: ExperienceStrategy,
    pub ai_recommendations: bool,
}

impl ScoringProfile {
    pub fn quick_list() -> Self {
        Self {
            preset: ScoringPreset::QuickList,
            weights: QUICK_LIST_WEIGHTS,
            empty_skills_score: 100.0,
            experience_strategy: ExperienceStrategy::FlatDefault,
            ai_recommendations: false,
        }
    }

    /// Falls back to default criteria (30/25/20/15/10, AI off) when the job has none.
    pub fn detailed_scan(criteria: Option<&ScanCriteria>) -> Self {
        let default_criteria = ScanCriteria::default();
        let criteria = criteria.unwrap_or(&default_criteria);
        Self {
            preset: ScoringPreset::DetailedScan,
            weights: CompositeWeights::from_criteria(criteria),
            empty_skills_score: 50.0,
            experience_strategy: ExperienceStrategy::RatioBased,
            ai_recommendations: criteria.ai_scanning_enabled,
        }
    }

    pub fn for_preset(preset: ScoringPreset, criteria: Option<&ScanCriteria>) -> Self {
        match preset {
            ScoringPreset::QuickList => Self::quick_list(),
            ScoringPreset::DetailedScan => Self::detailed_scan(criteria),
        }
    }
}
