//! Application service layer - use cases, config, statistics export

pub mod app;
pub mod config;
pub mod export;
pub mod repository;
