use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AnalysisRow {
    pub id: Uuid,
    pub job_role: String,
    pub experience: String,
    pub match_percentage: f64,
    pub matched_skills: Vec<String>,
    /// Core and preferred gaps, in that order.
    pub missing_skills: Vec<String>,
    pub recommendations: Vec<String>,
    pub used_fallback: bool,
    pub created_at: DateTime<Utc>,
}
