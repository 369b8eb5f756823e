//! Status tiers for projected services

use serde::Serialize;

/// Urgency of a projected service
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceStatus {
    /// No history for this kind
    NoData,
    Ok,
    /// Within 3000 km or 30 days of falling due
    Soon,
    Expired,
}

impl ServiceStatus {
    /// Badge text
    pub fn label(&self) -> &'static str {
        match self {
            ServiceStatus::NoData => "No data",
            ServiceStatus::Ok => "OK",
            ServiceStatus::Soon => "Due soon",
            ServiceStatus::Expired => "Expired",
        }
    }

    pub fn is_expired(&self) -> bool {
        matches!(self, ServiceStatus::Expired)
    }
}

impl std::fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Classifier verdict plus the values shown next to it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub status: ServiceStatus,
    /// `next_due_distance - current odometer`, when a distance rule applies
    pub distance_remaining: Option<i64>,
    pub days_remaining: Option<i64>,
}
