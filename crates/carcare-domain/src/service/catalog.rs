//! Static table of maintenance kinds and their recurrence rules

use carcare_types::ServiceKind;

use crate::model::ServiceDefinition;

/// All known maintenance kinds, in display order
pub const SERVICE_DEFINITIONS: &[ServiceDefinition] = &[
    ServiceDefinition {
        kind: ServiceKind::Oil,
        label: "Oil change",
        periodic: true,
        interval_km: Some(10_000),
        interval_months: Some(12),
    },
    ServiceDefinition {
        kind: ServiceKind::Brakes,
        label: "Brake pads",
        periodic: true,
        interval_km: Some(30_000),
        interval_months: None,
    },
    ServiceDefinition {
        kind: ServiceKind::Inspection,
        label: "Annual inspection",
        periodic: true,
        interval_km: None,
        interval_months: Some(12),
    },
    ServiceDefinition {
        kind: ServiceKind::Tires,
        label: "Tire replacement",
        periodic: true,
        interval_km: Some(45_000),
        interval_months: Some(60),
    },
    ServiceDefinition {
        kind: ServiceKind::Other,
        label: "Other maintenance",
        periodic: false,
        interval_km: None,
        interval_months: None,
    },
];

/// Periodic definitions in declaration order
pub fn periodic_definitions() -> impl Iterator<Item = &'static ServiceDefinition> {
    SERVICE_DEFINITIONS.iter().filter(|def| def.periodic)
}

/// Look up the definition of a kind
pub fn definition_for(kind: ServiceKind) -> Option<&'static ServiceDefinition> {
    SERVICE_DEFINITIONS.iter().find(|def| def.kind == kind)
}
