//! Maintenance kind definition

use carcare_types::ServiceKind;
use serde::Serialize;

/// Recurrence rule for one kind of maintenance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServiceDefinition {
    pub kind: ServiceKind,
    /// Display name
    pub label: &'static str,
    /// Non-periodic kinds never get a projection
    pub periodic: bool,
    /// Distance between services in km
    pub interval_km: Option<u32>,
    /// Calendar months between services
    pub interval_months: Option<u32>,
}

impl ServiceDefinition {
    /// Periodic definitions carry at least one interval, others carry none
    pub fn is_well_formed(&self) -> bool {
        let has_interval = self.interval_km.is_some() || self.interval_months.is_some();
        self.periodic == has_interval
    }
}
