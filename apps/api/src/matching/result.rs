//! Match result — the fixed-shape record returned to callers, plus the two ways of
//! building one: from an oracle payload, or from nothing (the fallback).

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::matching::payload::OraclePayload;

/// Oracle recommendations beyond this count are dropped.
pub const MAX_RECOMMENDATIONS: usize = 6;

pub const FALLBACK_RECOMMENDATIONS: [&str; 3] = [
    "Add more job-specific technical skills.",
    "Complete a certification relevant to the role.",
    "Build a portfolio project demonstrating your expertise.",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillBreakdown {
    #[serde(rename = "Core Skills")]
    pub core_skills: f64,
    #[serde(rename = "Preferred Skills")]
    pub preferred_skills: f64,
    #[serde(rename = "Experience Bonus")]
    pub experience_bonus: f64,
}

/// The oracle's own classification of the role, surfaced for debugging only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DebugInferred {
    pub inferred_core_skills: Vec<String>,
    pub inferred_preferred_skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub match_percentage: f64,
    pub core_match: f64,
    pub preferred_match: f64,
    pub matched_skills: Vec<String>,
    pub missing_core_skills: Vec<String>,
    pub missing_preferred_skills: Vec<String>,
    pub recommendations: Vec<String>,
    pub skill_breakdown: SkillBreakdown,
    pub debug_inferred: DebugInferred,
    /// Present only on fallback results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl MatchResult {
    pub fn is_fallback(&self) -> bool {
        self.note.is_some()
    }

    /// Builds the full analysis result from a parsed oracle payload.
    pub fn from_payload(payload: OraclePayload, experience_bonus: u32) -> Self {
        let bonus = f64::from(experience_bonus);
        let core = percentage(payload.core_match);
        let preferred = percentage(payload.preferred_match);
        let overall = percentage(payload.overall_before_experience + bonus);

        let mut recommendations = payload.recommendations;
        recommendations.truncate(MAX_RECOMMENDATIONS);

        MatchResult {
            match_percentage: overall,
            core_match: core,
            preferred_match: preferred,
            matched_skills: dedupe(
                payload
                    .matched_core_skills
                    .into_iter()
                    .chain(payload.matched_preferred_skills),
            ),
            missing_core_skills: payload.missing_core_skills,
            missing_preferred_skills: payload.missing_preferred_skills,
            recommendations,
            skill_breakdown: SkillBreakdown {
                core_skills: core,
                preferred_skills: preferred,
                experience_bonus: bonus,
            },
            debug_inferred: DebugInferred {
                inferred_core_skills: payload.inferred_core_skills,
                inferred_preferred_skills: payload.inferred_preferred_skills,
            },
            note: None,
        }
    }

    /// Oracle-free result. Total: never fails, whatever the inputs.
    ///
    /// The score is a constant optimistic baseline (`min(100, 100 + bonus)`), not a
    /// skill-derived estimate. Callers should treat it as "unknown", and the `note`
    /// tells them so.
    pub fn fallback(skills: &[String], experience_bonus: u32, error: Option<&str>) -> Self {
        let bonus = f64::from(experience_bonus);
        let overall = percentage(100.0 + bonus);
        let breakdown_score = round1((overall * 0.1).min(100.0));

        let note = match error {
            Some(reason) if !reason.is_empty() => format!("Fallback used due to error: {reason}"),
            _ => "Fallback used.".to_string(),
        };

        MatchResult {
            match_percentage: overall,
            core_match: overall,
            preferred_match: overall,
            matched_skills: skills.to_vec(),
            missing_core_skills: Vec::new(),
            missing_preferred_skills: Vec::new(),
            recommendations: FALLBACK_RECOMMENDATIONS
                .iter()
                .map(|r| r.to_string())
                .collect(),
            skill_breakdown: SkillBreakdown {
                core_skills: breakdown_score,
                preferred_skills: breakdown_score,
                experience_bonus: bonus,
            },
            debug_inferred: DebugInferred::default(),
            note: Some(note),
        }
    }
}

/// Clamps to `[0, 100]` and rounds to one decimal place.
fn percentage(value: f64) -> f64 {
    round1(value.clamp(0.0, 100.0))
}

/// Ties go to the even digit, like Python's `round(x, 1)`.
fn round1(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

/// Drops repeats, keeping the first occurrence of each skill.
fn dedupe(skills: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    skills
        .into_iter()
        .filter(|skill| seen.insert(skill.clone()))
        .collect()
}
