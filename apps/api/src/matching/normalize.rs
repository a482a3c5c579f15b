//! Input normalization — canonical skill spelling, trimmed role, experience bonus.
//!
//! Total over all inputs: nothing in here can fail.

use serde::{Deserialize, Serialize};

/// Coarse experience bucket supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceBand {
    #[serde(rename = "0-1")]
    UnderOne,
    #[serde(rename = "1-3")]
    OneToThree,
    #[serde(rename = "3-5")]
    ThreeToFive,
    #[serde(rename = "5-7")]
    FiveToSeven,
    #[serde(rename = "7+")]
    SevenPlus,
}

impl ExperienceBand {
    /// Returns `None` for anything outside the fixed band labels.
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim() {
            "0-1" => Some(Self::UnderOne),
            "1-3" => Some(Self::OneToThree),
            "3-5" => Some(Self::ThreeToFive),
            "5-7" => Some(Self::FiveToSeven),
            "7+" => Some(Self::SevenPlus),
            _ => None,
        }
    }

    /// Buckets whole years of experience. Lower bounds are inclusive.
    pub fn from_years(years: u32) -> Self {
        match years {
            0 => Self::UnderOne,
            1..=2 => Self::OneToThree,
            3..=4 => Self::ThreeToFive,
            5..=6 => Self::FiveToSeven,
            _ => Self::SevenPlus,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::UnderOne => "0-1",
            Self::OneToThree => "1-3",
            Self::ThreeToFive => "3-5",
            Self::FiveToSeven => "5-7",
            Self::SevenPlus => "7+",
        }
    }

    /// Bonus points added on top of the oracle's pre-experience score.
    pub fn bonus(self) -> u32 {
        match self {
            Self::UnderOne => 0,
            Self::OneToThree => 5,
            Self::ThreeToFive => 10,
            Self::FiveToSeven => 15,
            Self::SevenPlus => 20,
        }
    }
}

/// Bonus for a raw band label; unknown labels earn nothing.
pub fn experience_bonus(label: &str) -> u32 {
    ExperienceBand::parse(label).map_or(0, ExperienceBand::bonus)
}

/// Candidate input in canonical form.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedInput {
    pub skills: Vec<String>,
    pub job_role: String,
    pub experience_bonus: u32,
}

/// "Machine Learning " → "machine-learning". Only the space character is replaced.
pub fn normalize_skill(skill: &str) -> String {
    skill.trim().to_lowercase().replace(' ', "-")
}

/// Normalizes skills in order (duplicates kept, blanks dropped), trims the role,
/// and resolves the experience bonus.
pub fn normalize<S: AsRef<str>>(skills: &[S], job_role: &str, experience: &str) -> NormalizedInput {
    let skills = skills
        .iter()
        .map(|s| normalize_skill(s.as_ref()))
        .filter(|s| !s.is_empty())
        .collect();

    NormalizedInput {
        skills,
        job_role: job_role.trim().to_string(),
        experience_bonus: experience_bonus(experience),
    }
}
