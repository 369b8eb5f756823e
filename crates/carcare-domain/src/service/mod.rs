//! Domain services

pub mod catalog;
pub mod classifier;
pub mod cost_aggregator;
pub mod notification_gate;
pub mod projector;
pub mod validation;

pub use catalog::{definition_for, periodic_definitions, SERVICE_DEFINITIONS};
pub use classifier::classify;
pub use cost_aggregator::{aggregate_by_car_and_year, yearly_cost_rows, YearlyCost};
pub use notification_gate::{GateOutcome, GateState, NotificationGate};
pub use projector::project;
