//! Threat map handler

use axum::Json;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::generator::THREAT_COUNTRIES;
use crate::models::Severity;

#[derive(Debug, Serialize)]
pub struct ThreatPoint {
    pub country: String,
    pub lat: f64,
    pub lon: f64,
    pub severity: Severity,
    pub count: u32,
}

#[derive(Debug, Serialize)]
pub struct ThreatMap {
    pub threats: Vec<ThreatPoint>,
}

/// Fresh random geo points for the world map; disconnected from the event
/// store, so every call returns a different list.
pub fn map_points(rng: &mut impl Rng) -> Vec<ThreatPoint> {
    let count: usize = rng.gen_range(10..=25);
    (0..count)
        .map(|_| ThreatPoint {
            country: THREAT_COUNTRIES.choose(rng).unwrap().to_string(),
            lat: rng.gen_range(-60.0..70.0),
            lon: rng.gen_range(-180.0..180.0),
            severity: *Severity::ALL.choose(rng).unwrap(),
            count: rng.gen_range(1..=50),
        })
        .collect()
}

pub async fn map() -> Json<ThreatMap> {
    let mut rng = rand::thread_rng();
    Json(ThreatMap {
        threats: map_points(&mut rng),
    })
}
