//! Security event model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Ordinal threat level attached to every event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
    Info,
}

impl Severity {
    /// All levels, ordered from most to least severe.
    pub const ALL: [Severity; 5] = [
        Severity::Critical,
        Severity::High,
        Severity::Medium,
        Severity::Low,
        Severity::Info,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
            Severity::Info => "Info",
        }
    }

    /// Contribution of a single event at this level to the threat score.
    pub fn weight(&self) -> u32 {
        match self {
            Severity::Critical => 10,
            Severity::High => 7,
            Severity::Medium => 4,
            Severity::Low => 2,
            Severity::Info => 1,
        }
    }
}

/// A fabricated security incident record. Immutable once stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityEvent {
    pub id: u64,
    pub timestamp: DateTime<Utc>,
    pub severity: Severity,
    pub attack_type: String,
    pub source_ip: String,
    pub destination_ip: String,
    pub country: String,
    pub blocked: bool,
    pub description: String,
    pub affected_asset: String,
    pub protocol: String,
    pub port: u16,
}
