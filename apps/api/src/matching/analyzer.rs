//! Match Analyzer — orchestrates one job-fit analysis.
//!
//! Flow: normalize → build prompt → oracle.generate → extract JSON → assemble result.
//! Any failure after normalization is caught here, once, and turned into a fallback
//! result. `analyze` never returns an error.

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use crate::llm_client::{LlmError, TextGenerator};
use crate::matching::extract::{extract_json_object, ExtractError};
use crate::matching::normalize::{normalize, NormalizedInput};
use crate::matching::payload::OraclePayload;
use crate::matching::prompts::build_match_prompt;
use crate::matching::result::MatchResult;

/// Everything that can push an analysis onto the fallback path.
#[derive(Debug, Error)]
enum AnalysisError {
    #[error(transparent)]
    Oracle(#[from] LlmError),

    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error("Unexpected payload shape: {0}")]
    Payload(#[from] serde_json::Error),
}

#[derive(Clone)]
pub struct MatchAnalyzer {
    oracle: Arc<dyn TextGenerator>,
}

impl MatchAnalyzer {
    pub fn new(oracle: Arc<dyn TextGenerator>) -> Self {
        Self { oracle }
    }

    /// Scores `skills` against `job_role`. Degrades to a fallback result instead of failing.
    pub async fn analyze<S: AsRef<str>>(
        &self,
        skills: &[S],
        job_role: &str,
        experience: &str,
    ) -> MatchResult {
        let input = normalize(skills, job_role, experience);

        match self.analyze_with_oracle(&input).await {
            Ok(result) => {
                info!(
                    "Match analysis for role '{}': {}% ({} skills, bonus {})",
                    input.job_role,
                    result.match_percentage,
                    input.skills.len(),
                    input.experience_bonus
                );
                result
            }
            Err(e) => {
                // The fallback score is a constant baseline, not a skill-derived estimate.
                warn!(
                    "Match analysis for role '{}' fell back to baseline score: {e}",
                    input.job_role
                );
                let reason = e.to_string();
                MatchResult::fallback(&input.skills, input.experience_bonus, Some(reason.as_str()))
            }
        }
    }

    async fn analyze_with_oracle(
        &self,
        input: &NormalizedInput,
    ) -> Result<MatchResult, AnalysisError> {
        let prompt = build_match_prompt(&input.job_role, &input.skills, input.experience_bonus);
        let text = self.oracle.generate(&prompt).await?;
        let object = extract_json_object(&text)?;
        let payload = OraclePayload::from_object(object)?;
        Ok(MatchResult::from_payload(payload, input.experience_bonus))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::test_support::CannedOracle;

    const PROSE_WRAPPED: &str = "Here is the result:\n{\"core_match\": 80, \"preferred_match\": 60, \"overall_before_experience\": 70, \"matched_core_skills\": [\"python\"]}\nThanks!";

    #[tokio::test]
    async fn test_prose_wrapped_payload_is_assembled() {
        let analyzer = MatchAnalyzer::new(CannedOracle::replying(PROSE_WRAPPED));
        let result = analyzer.analyze(&["Python"], "Data Analyst", "3-5").await;

        assert!(!result.is_fallback());
        assert_eq!(result.core_match, 80.0);
        assert_eq!(result.preferred_match, 60.0);
        assert_eq!(result.match_percentage, 80.0);
        assert_eq!(result.matched_skills, vec!["python"]);
        assert_eq!(result.skill_breakdown.experience_bonus, 10.0);
    }

    #[tokio::test]
    async fn test_prompt_carries_normalized_input() {
        let oracle = CannedOracle::replying("{}");
        let analyzer = MatchAnalyzer::new(oracle.clone());
        analyzer
            .analyze(&["Machine Learning", " Python "], "  ML Engineer ", "7+")
            .await;

        let prompts = oracle.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("Job Role: ML Engineer\n"));
        assert!(prompts[0].contains("User Skills: machine-learning, python"));
        assert!(prompts[0].contains("Experience Bonus (points): 20"));
    }

    #[tokio::test]
    async fn test_empty_object_reply_scores_bonus_only() {
        let analyzer = MatchAnalyzer::new(CannedOracle::replying("{}"));
        let result = analyzer.analyze(&["go"], "SRE", "1-3").await;
        assert!(!result.is_fallback());
        assert_eq!(result.match_percentage, 5.0);
        assert!(result.matched_skills.is_empty());
    }

    #[tokio::test]
    async fn test_reply_without_json_falls_back_with_note() {
        let analyzer = MatchAnalyzer::new(CannedOracle::replying("Sorry, I can't do that."));
        let result = analyzer.analyze(&["Rust", "SQL"], "Backend", "0-1").await;

        assert!(result.is_fallback());
        let note = result.note.unwrap();
        assert!(note.starts_with("Fallback used due to error:"));
        assert!(note.contains("No JSON object found"));
        assert_eq!(result.matched_skills, vec!["rust", "sql"]);
    }

    #[tokio::test]
    async fn test_oracle_failure_falls_back_with_note() {
        let analyzer = MatchAnalyzer::new(CannedOracle::failing(429, "Quota exceeded"));
        let result = analyzer.analyze(&["Rust"], "Backend", "5-7").await;

        assert!(result.is_fallback());
        assert!(result.note.unwrap().contains("Quota exceeded"));
        assert_eq!(result.match_percentage, 100.0);
        assert_eq!(result.skill_breakdown.experience_bonus, 15.0);
    }

    #[tokio::test]
    async fn test_unknown_band_adds_no_bonus() {
        let reply = r#"{"overall_before_experience": 42}"#;
        let analyzer = MatchAnalyzer::new(CannedOracle::replying(reply));
        let result = analyzer.analyze(&["rust"], "Backend", "ten years").await;
        assert_eq!(result.match_percentage, 42.0);
        assert_eq!(result.skill_breakdown.experience_bonus, 0.0);
    }

    #[tokio::test]
    async fn test_oversized_reply_is_bounded() {
        let reply = serde_json::json!({
            "overall_before_experience": 95,
            "matched_core_skills": ["python", "sql"],
            "matched_preferred_skills": ["python"],
            "recommendations": (1..=10).map(|i| format!("tip {i}")).collect::<Vec<_>>()
        })
        .to_string();
        let analyzer = MatchAnalyzer::new(CannedOracle::replying(&reply));
        let result = analyzer.analyze(&["python"], "Data Engineer", "7+").await;

        assert_eq!(result.match_percentage, 100.0);
        assert_eq!(result.recommendations.len(), 6);
        assert_eq!(result.matched_skills.len(), 2);
    }
}
