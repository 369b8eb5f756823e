//! Input checks applied before cars and service records are created

use carcare_types::{Car, ValidationError};
use chrono::NaiveDate;

/// The first production automobile
const EARLIEST_CAR_YEAR: i32 = 1886;

pub fn validate_car(brand: &str, model: &str, year: i32, current_year: i32) -> Result<(), ValidationError> {
    if brand.trim().is_empty() {
        return Err(ValidationError::EmptyBrand);
    }
    if model.trim().is_empty() {
        return Err(ValidationError::EmptyModel);
    }
    if !(EARLIEST_CAR_YEAR..=current_year + 1).contains(&year) {
        return Err(ValidationError::YearOutOfRange(year));
    }
    Ok(())
}

/// A record may not move the odometer backwards and must have a sane cost
pub fn validate_service(car: &Car, odometer: u32, cost: f64) -> Result<(), ValidationError> {
    if odometer < car.mileage {
        return Err(ValidationError::OdometerBelowCurrent {
            given: odometer,
            current: car.mileage,
        });
    }
    if !cost.is_finite() || cost < 0.0 {
        return Err(ValidationError::InvalidCost(cost));
    }
    Ok(())
}

/// Parse an ISO `YYYY-MM-DD` date
pub fn parse_date(input: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDate(input.to_string()))
}
