//! Analysis history — append-only record of completed analyses.
//!
//! Optional: the server only records when a database is configured.

use sqlx::PgPool;
use uuid::Uuid;

use crate::matching::result::MatchResult;
use crate::models::analysis::AnalysisRow;

pub const DEFAULT_HISTORY_LIMIT: i64 = 20;
pub const MAX_HISTORY_LIMIT: i64 = 100;

/// Clamps a caller-supplied page size to `1..=MAX_HISTORY_LIMIT`.
pub fn history_limit(requested: Option<i64>) -> i64 {
    requested
        .unwrap_or(DEFAULT_HISTORY_LIMIT)
        .clamp(1, MAX_HISTORY_LIMIT)
}

/// Core gaps followed by preferred gaps.
fn missing_skills(result: &MatchResult) -> Vec<String> {
    result
        .missing_core_skills
        .iter()
        .chain(&result.missing_preferred_skills)
        .cloned()
        .collect()
}

/// Inserts one analysis row and returns its id.
pub async fn record_analysis(
    pool: &PgPool,
    job_role: &str,
    experience: &str,
    result: &MatchResult,
) -> Result<Uuid, sqlx::Error> {
    let id = Uuid::new_v4();

    sqlx::query(
        r#"
        INSERT INTO analysis_results
            (id, job_role, experience, match_percentage, matched_skills,
             missing_skills, recommendations, used_fallback)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        "#,
    )
    .bind(id)
    .bind(job_role)
    .bind(experience)
    .bind(result.match_percentage)
    .bind(&result.matched_skills)
    .bind(missing_skills(result))
    .bind(&result.recommendations)
    .bind(result.is_fallback())
    .execute(pool)
    .await?;

    Ok(id)
}

/// Newest analyses first.
pub async fn recent_analyses(pool: &PgPool, limit: i64) -> Result<Vec<AnalysisRow>, sqlx::Error> {
    sqlx::query_as::<_, AnalysisRow>(
        "SELECT * FROM analysis_results ORDER BY created_at DESC LIMIT $1",
    )
    .bind(limit)
    .fetch_all(pool)
    .await
}
