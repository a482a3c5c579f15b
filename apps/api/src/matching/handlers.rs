//! Axum route handlers for the Matching API.

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::errors::AppError;
use crate::matching::history::{history_limit, recent_analyses, record_analysis};
use crate::matching::normalize::ExperienceBand;
use crate::matching::result::MatchResult;
use crate::models::analysis::AnalysisRow;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Skills arrive either as a JSON list or as one comma-separated string (form input).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SkillsInput {
    List(Vec<Value>),
    Text(String),
}

impl SkillsInput {
    /// Raw skill strings; non-string list entries are skipped.
    pub fn into_strings(self) -> Vec<String> {
        match self {
            SkillsInput::List(items) => items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect(),
            SkillsInput::Text(text) => text.split(',').map(str::to_string).collect(),
        }
    }
}

/// Experience arrives either as a band label ("3-5") or as whole years (4).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ExperienceInput {
    Years(f64),
    Label(String),
}

impl Default for ExperienceInput {
    fn default() -> Self {
        ExperienceInput::Label(ExperienceBand::UnderOne.label().to_string())
    }
}

impl ExperienceInput {
    /// The band label handed to the analyzer. Labels pass through untouched, so an
    /// unknown label still earns zero bonus downstream.
    pub fn band_label(&self) -> String {
        match self {
            ExperienceInput::Years(years) => {
                // Saturating cast: negative and NaN become 0.
                ExperienceBand::from_years(years.floor() as u32)
                    .label()
                    .to_string()
            }
            ExperienceInput::Label(label) => label.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub skills: Option<SkillsInput>,
    #[serde(default)]
    pub job_role: Option<String>,
    #[serde(default)]
    pub experience: Option<ExperienceInput>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    pub result: MatchResult,
}

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub limit: Option<i64>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyze
///
/// An unreadable body is a 400. Otherwise it always succeeds: an unavailable
/// oracle yields a fallback result carrying `note`.
pub async fn handle_analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| AppError::Validation(rejection.body_text()))?;

    let skills = request
        .skills
        .map(SkillsInput::into_strings)
        .unwrap_or_default();
    let job_role = request.job_role.unwrap_or_default();
    let experience = request.experience.unwrap_or_default().band_label();

    let result = state.analyzer.analyze(&skills, &job_role, &experience).await;

    if let Some(pool) = &state.db {
        match record_analysis(pool, job_role.trim(), &experience, &result).await {
            Ok(id) => debug!("Recorded analysis {id}"),
            Err(e) => warn!("Failed to record analysis: {e}"),
        }
    }

    Ok(Json(AnalyzeResponse {
        success: true,
        result,
    }))
}

/// GET /api/v1/analyses?limit=N
///
/// Most recent recorded analyses, newest first.
pub async fn handle_list_analyses(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<Vec<AnalysisRow>>, AppError> {
    let pool = state.db.as_ref().ok_or_else(|| {
        AppError::NotFound("Analysis history is disabled (no DATABASE_URL)".to_string())
    })?;

    let rows = recent_analyses(pool, history_limit(query.limit)).await?;
    Ok(Json(rows))
}
