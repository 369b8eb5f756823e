//! Due-date projection from service history

use std::cmp::Ordering;

use carcare_types::ServiceRecord;
use chrono::{DateTime, Months, NaiveDate, NaiveTime, Utc};
use tracing::debug;

use super::catalog::periodic_definitions;
use crate::model::{Projection, ServiceDefinition};

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Project the next due distance and date of every periodic service kind.
///
/// Returns one entry per periodic definition, in catalog order. The latest
/// record of each kind is the one with the greatest `performed_on`; records
/// sharing that date are ordered by `odometer_at_service`, then by `id`.
/// `now` is only used for `days_remaining`.
pub fn project(
    current_odometer: u32,
    history: &[ServiceRecord],
    now: DateTime<Utc>,
) -> Vec<Projection> {
    debug!(current_odometer, records = history.len(), "projecting due services");
    periodic_definitions()
        .map(|def| project_one(def, history, now))
        .collect()
}

fn project_one(def: &ServiceDefinition, history: &[ServiceRecord], now: DateTime<Utc>) -> Projection {
    let Some(last) = latest_of_kind(def, history) else {
        return Projection::no_data(def.kind, def.label);
    };

    let next_due_distance = def
        .interval_km
        .map(|km| last.odometer_at_service.saturating_add(km));

    let next_due_date = def
        .interval_months
        .and_then(|months| last.performed_on.checked_add_months(Months::new(months)));
    let days_remaining = next_due_date.map(|date| days_until(date, now));

    Projection {
        kind: def.kind,
        label: def.label,
        last_service_date: Some(last.performed_on),
        next_due_distance,
        next_due_date,
        days_remaining,
    }
}

fn latest_of_kind<'a>(def: &ServiceDefinition, history: &'a [ServiceRecord]) -> Option<&'a ServiceRecord> {
    history
        .iter()
        .filter(|record| record.kind == def.kind)
        .max_by(|a, b| recency(a, b))
}

fn recency(a: &ServiceRecord, b: &ServiceRecord) -> Ordering {
    a.performed_on
        .cmp(&b.performed_on)
        .then(a.odometer_at_service.cmp(&b.odometer_at_service))
        .then_with(|| a.id.cmp(&b.id))
}

/// Days from `now` until midnight UTC of `date`, rounded up
fn days_until(date: NaiveDate, now: DateTime<Utc>) -> i64 {
    let due = date.and_time(NaiveTime::MIN).and_utc();
    let millis = (due - now).num_milliseconds();
    millis.div_euclid(MILLIS_PER_DAY) + i64::from(millis.rem_euclid(MILLIS_PER_DAY) > 0)
}
