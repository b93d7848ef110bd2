//! Dashboard statistics handler

use std::collections::BTreeMap;

use axum::{extract::State, Json};
use rand::Rng;
use serde::Serialize;

use crate::models::Severity;
use crate::{stats, AppState};

#[derive(Debug, Serialize)]
pub struct DashboardStats {
    pub total_events: usize,
    pub critical_alerts: usize,
    pub high_alerts: usize,
    pub blocked_attacks: usize,
    pub threat_score: u32,
    pub severity_distribution: BTreeMap<&'static str, usize>,
    pub top_attacks: Vec<AttackTypeCount>,
    pub top_countries: Vec<CountryCount>,
    /// Cosmetic noise for the UI, freshly randomized per call.
    pub active_incidents: u32,
    /// Cosmetic noise for the UI, freshly randomized per call.
    pub avg_response_time: f64,
}

#[derive(Debug, Serialize)]
pub struct AttackTypeCount {
    #[serde(rename = "type")]
    pub attack_type: String,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct CountryCount {
    pub country: String,
    pub count: usize,
}

/// Overall dashboard statistics. Seeds the store on first use; counts and the
/// distribution cover the whole store, the top-5 lists and threat score only
/// the trailing window.
pub async fn stats(State(state): State<AppState>) -> Json<DashboardStats> {
    let mut rng = rand::thread_rng();
    state.store.seed_if_empty(&mut rng);

    let events = state.store.snapshot();
    let recent = stats::window(&events);

    let top_attacks = stats::top_n_by(recent, 5, |e| e.attack_type.as_str())
        .into_iter()
        .map(|(attack_type, count)| AttackTypeCount { attack_type, count })
        .collect();
    let top_countries = stats::top_n_by(recent, 5, |e| e.country.as_str())
        .into_iter()
        .map(|(country, count)| CountryCount { country, count })
        .collect();

    Json(DashboardStats {
        total_events: events.len(),
        critical_alerts: stats::count_with_severity(&events, Severity::Critical),
        high_alerts: stats::count_with_severity(&events, Severity::High),
        blocked_attacks: stats::count_blocked(&events),
        threat_score: stats::threat_score(&events),
        severity_distribution: stats::count_by_severity(&events),
        top_attacks,
        top_countries,
        active_incidents: rng.gen_range(2..=8),
        avg_response_time: (rng.gen_range(2.5_f64..8.5) * 10.0).round() / 10.0,
    })
}
