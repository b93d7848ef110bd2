//! Security event feed handlers

use axum::extract::rejection::QueryRejection;
use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::models::SecurityEvent;
use crate::{AppError, AppResult, AppState};

const DEFAULT_LIMIT: usize = 20;

#[derive(Debug, Deserialize, Default)]
pub struct RecentQuery {
    pub limit: Option<usize>,
    pub severity: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RecentEvents {
    pub events: Vec<SecurityEvent>,
    pub total: usize,
}

/// Most recent events, newest first, optionally filtered by exact severity
/// label. The filter runs after the slice to `limit`, so it can return fewer
/// matches than exist earlier in the store; an unrecognized label just yields
/// an empty list.
pub async fn recent(
    State(state): State<AppState>,
    query: Result<Query<RecentQuery>, QueryRejection>,
) -> AppResult<Json<RecentEvents>> {
    let Query(query) = query.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT);

    let mut events = state.store.recent(limit);
    if let Some(severity) = &query.severity {
        events.retain(|e| e.severity.as_str() == severity);
    }
    events.reverse();

    let total = events.len();
    Ok(Json(RecentEvents { events, total }))
}

/// Generate one new event and append it to the store.
pub async fn realtime(State(state): State<AppState>) -> Json<SecurityEvent> {
    let mut rng = rand::thread_rng();
    let event = state.store.record(&mut rng);
    tracing::debug!("event {} recorded, store size {}", event.id, state.store.len());
    Json(event)
}
