//! Feature sub-score calculators.
//!
//! Each calculator returns a value on the 0–100 scale (location and recency
//! also expose their 0.0–1.0 factor). None of them fail: unknown inputs map
//! to a fixed neutral value.

use crate::matching::features::{CandidateFeatures, JobRequirements, RemoteType};
use crate::matching::profile::ExperienceStrategy;

// ────────────────────────────────────────────────────────────────────────────
// Skills
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct SkillsBreakdown {
    /// Match over required ∪ preferred. `None` when the job lists no skills.
    pub overall: Option<f64>,
    /// `None` when the job lists no required skills.
    pub required: Option<f64>,
    /// `None` when the job lists no preferred skills.
    pub preferred: Option<f64>,
    /// Distinct job skills across both lists.
    pub total: usize,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Substring-or-equality in either direction, case-insensitive.
fn skill_matches(candidate_skills: &[String], job_skill: &str) -> bool {
    candidate_skills
        .iter()
        .any(|c| c == job_skill || c.contains(job_skill) || job_skill.contains(c.as_str()))
}

/// Drops blanks and case-insensitive duplicates, keeping first spelling and order.
fn dedup_skills<'a>(skills: impl Iterator<Item = &'a String>) -> Vec<(&'a str, String)> {
    let mut seen: Vec<(&'a str, String)> = Vec::new();
    for skill in skills {
        let key = normalize(skill);
        if key.is_empty() || seen.iter().any(|(_, k)| *k == key) {
            continue;
        }
        seen.push((skill.trim(), key));
    }
    seen
}

fn ratio(matched: usize, total: usize) -> Option<f64> {
    (total > 0).then(|| matched as f64 / total as f64 * 100.0)
}

pub fn skills_breakdown(candidate: &CandidateFeatures, job: &JobRequirements) -> SkillsBreakdown {
    let candidate_skills: Vec<String> = candidate
        .skills
        .iter()
        .map(|s| normalize(s))
        .filter(|s| !s.is_empty())
        .collect();

    let required = dedup_skills(job.required_skills.iter());
    let preferred = dedup_skills(job.preferred_skills.iter());
    let all = dedup_skills(job.required_skills.iter().chain(job.preferred_skills.iter()));

    let mut matched = Vec::new();
    for (display, key) in &all {
        if skill_matches(&candidate_skills, key) {
            matched.push(display.to_string());
        }
    }

    let mut missing = Vec::new();
    let mut required_hits = 0;
    for (display, key) in &required {
        if skill_matches(&candidate_skills, key) {
            required_hits += 1;
        } else {
            missing.push(display.to_string());
        }
    }

    let preferred_hits = preferred
        .iter()
        .filter(|(_, key)| skill_matches(&candidate_skills, key))
        .count();

    SkillsBreakdown {
        overall: ratio(matched.len(), all.len()),
        required: ratio(required_hits, required.len()),
        preferred: ratio(preferred_hits, preferred.len()),
        total: all.len(),
        matched,
        missing,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Experience
// ────────────────────────────────────────────────────────────────────────────

const EXPERIENCE_UNKNOWN: f64 = 50.0;
const EXPERIENCE_FLAT_DEFAULT: f64 = 75.0;

/// Score at exactly the minimum; excess adds 5/year, shortfall costs 20/year.
const EXPERIENCE_AT_MINIMUM: f64 = 80.0;

pub fn experience_score(
    candidate_years: Option<f64>,
    min_years: Option<f64>,
    strategy: ExperienceStrategy,
) -> f64 {
    match (candidate_years, min_years) {
        (Some(years), Some(min)) if years >= min => {
            (EXPERIENCE_AT_MINIMUM + (years - min) * 5.0).min(100.0)
        }
        (Some(years), Some(min)) => (EXPERIENCE_AT_MINIMUM - (min - years) * 20.0).max(0.0),
        (None, Some(_)) => EXPERIENCE_UNKNOWN,
        (years, None) => match strategy {
            ExperienceStrategy::FlatDefault => EXPERIENCE_FLAT_DEFAULT,
            ExperienceStrategy::RatioBased => years
                .map(|y| (y.max(0.0) / 5.0).min(1.0) * 100.0)
                .unwrap_or(EXPERIENCE_UNKNOWN),
        },
    }
}

/// Years short of the minimum, if any.
pub fn experience_gap(candidate_years: Option<f64>, min_years: Option<f64>) -> Option<f64> {
    match (candidate_years, min_years) {
        (Some(years), Some(min)) if years < min => Some(min - years),
        _ => None,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Education
// ────────────────────────────────────────────────────────────────────────────

pub fn education_score(education: &[String], required: Option<&str>) -> f64 {
    let entries: Vec<String> = education
        .iter()
        .map(|e| normalize(e))
        .filter(|e| !e.is_empty())
        .collect();
    let required = required.map(normalize).filter(|r| !r.is_empty());

    match (required, entries.is_empty()) {
        (Some(req), false) if entries.iter().any(|e| e.contains(&req)) => 100.0,
        (Some(_), false) => 60.0,
        (Some(_), true) => 20.0,
        (None, false) => 80.0,
        (None, true) => 60.0,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Location
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocationAffinity {
    /// 0.0 – 1.0
    pub factor: f64,
    /// `None` when either side is unknown.
    pub fit: Option<bool>,
}

pub fn location_affinity(
    candidate_location: Option<&str>,
    job_location: Option<&str>,
    remote_type: RemoteType,
) -> LocationAffinity {
    if remote_type == RemoteType::Remote {
        return LocationAffinity {
            factor: 1.0,
            fit: Some(true),
        };
    }

    let candidate = candidate_location.map(normalize).unwrap_or_default();
    let job = job_location.map(normalize).unwrap_or_default();

    if candidate.is_empty() || job.is_empty() {
        return LocationAffinity {
            factor: 0.6,
            fit: None,
        };
    }

    let factor = if candidate == job {
        1.0
    } else if candidate.contains(&job) || job.contains(&candidate) {
        0.8
    } else {
        0.4
    };

    LocationAffinity {
        factor,
        fit: Some(factor >= 0.8),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Recency
// ────────────────────────────────────────────────────────────────────────────

pub fn recency_factor(days_since_applied: Option<i64>) -> f64 {
    match days_since_applied {
        None => 0.75,
        Some(d) if d <= 7 => 1.0,
        Some(d) if d <= 30 => 0.85,
        Some(d) if d <= 90 => 0.6,
        Some(_) => 0.4,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Keywords
// ────────────────────────────────────────────────────────────────────────────

const KEYWORD_NEUTRAL: f64 = 50.0;

pub fn keyword_score(candidate: &CandidateFeatures, phrases: &[String]) -> f64 {
    let phrases: Vec<String> = phrases
        .iter()
        .map(|p| normalize(p))
        .filter(|p| !p.is_empty())
        .collect();
    if phrases.is_empty() {
        return KEYWORD_NEUTRAL;
    }

    let haystack = candidate.searchable_text();
    let found = phrases.iter().filter(|p| haystack.contains(p.as_str())).count();
    found as f64 / phrases.len() as f64 * 100.0
}
