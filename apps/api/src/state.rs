use sqlx::PgPool;

use crate::matching::analyzer::MatchAnalyzer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: MatchAnalyzer,
    /// `None` when `DATABASE_URL` is unset; analysis history is then disabled.
    pub db: Option<PgPool>,
}
