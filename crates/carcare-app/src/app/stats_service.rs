//! Stats Service - yearly service costs per car

use carcare_domain::service::{yearly_cost_rows, YearlyCost};
use carcare_types::Result;
use serde::Serialize;

use super::garage::Garage;

#[derive(Debug, Clone, Serialize)]
pub struct YearlyReport {
    pub year: i32,
    pub rows: Vec<YearlyCost>,
    pub total: f64,
}

/// Service cost of every car in `year`
pub fn yearly_costs(garage: &Garage, year: i32) -> Result<YearlyReport> {
    let cars = garage.list_cars(None)?;
    let records = garage.all_services()?;
    let rows = yearly_cost_rows(&cars, &records, year);
    let total = rows.iter().map(|r| r.total_cost).sum();
    Ok(YearlyReport { year, rows, total })
}
