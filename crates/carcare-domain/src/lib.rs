//! Maintenance domain: service catalog, due-date projection, status
//! classification, overdue notification gate and cost statistics.

pub mod model;
pub mod platform;
pub mod repository;
pub mod service;
