//! Projected next-due values for one service kind

use carcare_types::ServiceKind;
use chrono::NaiveDate;
use serde::Serialize;

/// Next-due data derived from the latest matching service record.
///
/// Every optional field is `None` when the car has no history for the kind.
/// Recomputed on every evaluation and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Projection {
    pub kind: ServiceKind,
    pub label: &'static str,
    pub last_service_date: Option<NaiveDate>,
    /// Odometer reading at which the service falls due
    pub next_due_distance: Option<u32>,
    pub next_due_date: Option<NaiveDate>,
    /// Whole days until `next_due_date`, rounded up; negative once past
    pub days_remaining: Option<i64>,
}

impl Projection {
    pub fn no_data(kind: ServiceKind, label: &'static str) -> Self {
        Self {
            kind,
            label,
            last_service_date: None,
            next_due_distance: None,
            next_due_date: None,
            days_remaining: None,
        }
    }

    pub fn has_history(&self) -> bool {
        self.last_service_date.is_some()
    }
}
