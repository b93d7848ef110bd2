//! 24-hour timeline handler

use axum::Json;
use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TimelineBucket {
    pub time: String,
    pub events: u32,
    pub critical: u32,
    pub high: u32,
    pub medium: u32,
}

#[derive(Debug, Serialize)]
pub struct Timeline {
    pub timeline: Vec<TimelineBucket>,
}

/// One randomized bucket per hour, ending with the hour containing `now`.
/// Disconnected from the event store.
pub fn hourly_buckets(now: DateTime<Utc>, rng: &mut impl Rng) -> Vec<TimelineBucket> {
    (0..24i64)
        .map(|i| {
            let hour = now - Duration::hours(23 - i);
            TimelineBucket {
                time: hour.format("%H:00").to_string(),
                events: rng.gen_range(10..=100),
                critical: rng.gen_range(0..=5),
                high: rng.gen_range(2..=15),
                medium: rng.gen_range(5..=30),
            }
        })
        .collect()
}

pub async fn hourly() -> Json<Timeline> {
    let mut rng = rand::thread_rng();
    Json(Timeline {
        timeline: hourly_buckets(Utc::now(), &mut rng),
    })
}
