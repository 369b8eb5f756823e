//! Yearly service cost statistics

use std::collections::BTreeMap;

use carcare_types::{Car, ServiceRecord};
use chrono::Datelike;
use serde::Serialize;

/// Total service cost of one car in one year
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearlyCost {
    pub car_id: String,
    pub car_name: String,
    pub total_cost: f64,
}

/// Sum costs per car over records performed in `year`
pub fn aggregate_by_car_and_year(records: &[ServiceRecord], year: i32) -> BTreeMap<String, f64> {
    records
        .iter()
        .filter(|r| r.performed_on.year() == year)
        .fold(BTreeMap::new(), |mut totals, r| {
            *totals.entry(r.car_id.clone()).or_insert(0.0) += r.cost;
            totals
        })
}

/// One row per car, in the given car order; cars without records in `year` get 0
pub fn yearly_cost_rows(cars: &[Car], records: &[ServiceRecord], year: i32) -> Vec<YearlyCost> {
    let totals = aggregate_by_car_and_year(records, year);
    cars.iter()
        .map(|car| YearlyCost {
            car_id: car.id.clone(),
            car_name: car.display_name(),
            total_cost: totals.get(&car.id).copied().unwrap_or(0.0),
        })
        .collect()
}
