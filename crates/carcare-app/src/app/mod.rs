//! Application Layer
//!
//! Orchestrates between the CLI and the domain/infrastructure layers:
//! - `garage`: car and service-record use cases
//! - `maintenance_service`: due-date overview and overdue alerts
//! - `stats_service`: yearly cost statistics

pub mod garage;
pub mod maintenance_service;
pub mod stats_service;

pub use garage::{Garage, NewCar, NewService, RemovedCar};
pub use maintenance_service::{car_overview, ensure_permission_asked, refresh_alerts, CarOverview, DueItem};
pub use stats_service::{yearly_costs, YearlyReport};
