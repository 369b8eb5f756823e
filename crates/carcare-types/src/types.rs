//! Shared entities: cars, service records and service kinds

use chrono::{DateTime, NaiveDate, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Maintenance category of a service record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceKind {
    Oil,
    Brakes,
    Inspection,
    Tires,
    Other,
}

impl ServiceKind {
    /// Stable lowercase identifier used in storage keys and JSON
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceKind::Oil => "oil",
            ServiceKind::Brakes => "brakes",
            ServiceKind::Inspection => "inspection",
            ServiceKind::Tires => "tires",
            ServiceKind::Other => "other",
        }
    }
}

impl std::fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Registered car
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Car {
    /// Unique identifier
    pub id: String,
    /// Manufacturer (e.g., "Toyota")
    pub brand: String,
    /// Model name (e.g., "Corolla")
    pub model: String,
    /// Year of manufacture
    pub year: i32,
    /// Current odometer reading in km
    pub mileage: u32,
    /// Picture of the car (path or data URL)
    #[serde(default)]
    pub image: Option<String>,
    /// When registered
    pub registered_at: DateTime<Utc>,
}

impl Car {
    pub fn new(brand: String, model: String, year: i32, mileage: u32) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            brand,
            model,
            year,
            mileage,
            image: None,
            registered_at: Utc::now(),
        }
    }

    pub fn with_image(mut self, image: String) -> Self {
        self.image = Some(image);
        self
    }

    /// "Brand Model", used in listings and statistics
    pub fn display_name(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }

    /// Case-insensitive match of `query` against "brand model"
    pub fn matches_search(&self, query: &str) -> bool {
        self.display_name()
            .to_lowercase()
            .contains(&query.to_lowercase())
    }
}

/// A maintenance event performed on a car. Never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceRecord {
    pub id: String,
    pub car_id: String,
    pub kind: ServiceKind,
    pub performed_on: NaiveDate,
    /// Odometer reading when the service was done
    pub odometer_at_service: u32,
    pub cost: f64,
    #[serde(default)]
    pub note: String,
}

impl ServiceRecord {
    pub fn new(
        car_id: String,
        kind: ServiceKind,
        performed_on: NaiveDate,
        odometer_at_service: u32,
        cost: f64,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            car_id,
            kind,
            performed_on,
            odometer_at_service,
            cost,
            note: String::new(),
        }
    }

    pub fn with_note(mut self, note: String) -> Self {
        self.note = note;
        self
    }
}
