//! Status classification of projected services
//!
//! The distance rule is checked first. Only when the distance is comfortably
//! ahead (or no distance rule applies) does the date rule decide, so a car
//! that is SOON by distance reports SOON even if it is past due by date.

use crate::model::{Classification, Projection, ServiceStatus};

/// Below this many km left the service is due soon
pub const SOON_DISTANCE_KM: i64 = 3_000;

/// Below this many days left the service is due soon
pub const SOON_DAYS: i64 = 30;

pub fn classify(projection: &Projection, current_odometer: u32) -> Classification {
    let distance_remaining = projection
        .next_due_distance
        .map(|due| i64::from(due) - i64::from(current_odometer));
    let days_remaining = projection.days_remaining;

    let status = if !projection.has_history() {
        ServiceStatus::NoData
    } else if let Some(km_left) = distance_remaining {
        if km_left <= 0 {
            ServiceStatus::Expired
        } else if km_left < SOON_DISTANCE_KM {
            ServiceStatus::Soon
        } else {
            days_remaining.map_or(ServiceStatus::Ok, status_by_days)
        }
    } else {
        days_remaining.map_or(ServiceStatus::Ok, status_by_days)
    };

    Classification {
        status,
        distance_remaining,
        days_remaining,
    }
}

fn status_by_days(days_left: i64) -> ServiceStatus {
    if days_left < 0 {
        ServiceStatus::Expired
    } else if days_left < SOON_DAYS {
        ServiceStatus::Soon
    } else {
        ServiceStatus::Ok
    }
}
