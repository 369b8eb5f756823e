//! Maintenance Service - due-date overview of a car
//!
//! Every call re-runs projection, classification and the notification gate.
//! [`Garage`] calls [`refresh_alerts`] after each odometer update and each
//! added or removed service record; a change of date needs an explicit call.

use carcare_domain::model::{Classification, Projection};
use carcare_domain::platform::{Clock, Notifier, Permission};
use carcare_domain::repository::KeyValueStore;
use carcare_domain::service::{classify, project, GateOutcome, NotificationGate};
use carcare_types::{Car, Result};
use serde::Serialize;
use tracing::{debug, warn};

use super::garage::Garage;

/// Marker recording that the user was already asked for alert permission
pub const PERMISSION_ASKED_KEY: &str = "notification-permission-asked";

/// One row of the overview
#[derive(Debug, Clone, Serialize)]
pub struct DueItem {
    pub projection: Projection,
    pub classification: Classification,
    #[serde(skip)]
    pub gate: GateOutcome,
}

#[derive(Debug, Clone, Serialize)]
pub struct CarOverview {
    pub car: Car,
    pub items: Vec<DueItem>,
}

impl CarOverview {
    /// Rows whose alert fired during this evaluation
    pub fn fired(&self) -> impl Iterator<Item = &DueItem> {
        self.items.iter().filter(|i| i.gate == GateOutcome::Fired)
    }
}

/// Project, classify and run the notification gate for every periodic service of a car
pub fn car_overview(garage: &Garage, car_id: &str, clock: &dyn Clock) -> Result<CarOverview> {
    let car = garage.get_car(car_id)?;
    let history = garage.service_history(car_id)?;
    let gate = NotificationGate::new(garage.memory(), garage.notifier());

    let items = project(car.mileage, &history, clock.now())
        .into_iter()
        .map(|projection| {
            let classification = classify(&projection, car.mileage);
            let outcome = gate.evaluate(&car.id, projection.kind, projection.label, classification.status);
            debug!(kind = %projection.kind, status = ?classification.status, ?outcome, "evaluated");
            DueItem {
                projection,
                classification,
                gate: outcome,
            }
        })
        .collect();

    Ok(CarOverview { car, items })
}

/// Run the notification gate of one car, returning how many alerts fired
pub fn refresh_alerts(garage: &Garage, car_id: &str, clock: &dyn Clock) -> Result<usize> {
    let overview = car_overview(garage, car_id, clock)?;
    Ok(overview.fired().count())
}

/// Ask for alert permission once per data directory, if the platform has not decided yet.
///
/// Failures are logged; the returned permission is what the platform reports afterwards.
pub fn ensure_permission_asked(memory: &dyn KeyValueStore, notifier: &dyn Notifier) -> Permission {
    let permission = notifier.permission();
    if permission != Permission::Default {
        return permission;
    }
    match memory.mark(PERMISSION_ASKED_KEY) {
        Ok(true) => {
            let result = notifier.request_permission();
            debug!(?result, "alert permission requested");
            result
        }
        Ok(false) => permission,
        Err(e) => {
            warn!("failed to record permission request: {}", e);
            permission
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{NewCar, NewService};
    use carcare_domain::model::ServiceStatus;
    use carcare_domain::platform::FixedClock;
    use carcare_infra::TerminalNotifier;
    use carcare_types::{Error, ServiceKind};
    use chrono::{NaiveDate, TimeZone, Utc};
    use std::cell::Cell;
    use std::rc::Rc;
    use tempfile::tempdir;

    #[derive(Clone)]
    struct SharedNotifier {
        permission: Rc<Cell<Permission>>,
        fired: Rc<Cell<usize>>,
        requests: Rc<Cell<usize>>,
    }

    impl SharedNotifier {
        fn new(permission: Permission) -> Self {
            Self {
                permission: Rc::new(Cell::new(permission)),
                fired: Rc::new(Cell::new(0)),
                requests: Rc::new(Cell::new(0)),
            }
        }
    }

    impl Notifier for SharedNotifier {
        fn permission(&self) -> Permission {
            self.permission.get()
        }

        fn request_permission(&self) -> Permission {
            self.requests.set(self.requests.get() + 1);
            self.permission.set(Permission::Granted);
            Permission::Granted
        }

        fn fire(&self, _title: &str, _body: &str) -> std::result::Result<(), Error> {
            self.fired.set(self.fired.get() + 1);
            Ok(())
        }
    }

    fn clock(y: i32, m: u32, d: u32) -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap())
    }

    fn setup(dir: &std::path::Path, notifier: SharedNotifier) -> (Garage, String) {
        let garage = Garage::open(dir.to_path_buf(), Box::new(notifier))
            .unwrap()
            .with_clock(Box::new(clock(2023, 1, 15)));
        let car = garage
            .add_car(
                NewCar {
                    brand: "Ford".to_string(),
                    model: "Focus".to_string(),
                    year: 2014,
                    mileage: 40_000,
                    image: None,
                },
                2024,
            )
            .unwrap();
        (garage, car.id)
    }

    fn log(garage: &Garage, car_id: &str, kind: ServiceKind, on: NaiveDate, odometer: u32) {
        garage
            .add_service(
                car_id,
                NewService {
                    kind,
                    performed_on: on,
                    odometer,
                    cost: 0.0,
                    note: String::new(),
                },
            )
            .unwrap();
    }

    fn status_of(overview: &CarOverview, kind: ServiceKind) -> ServiceStatus {
        overview
            .items
            .iter()
            .find(|i| i.projection.kind == kind)
            .unwrap()
            .classification
            .status
    }

    #[test]
    fn test_new_car_has_no_data_everywhere() {
        let dir = tempdir().unwrap();
        let (garage, id) = setup(dir.path(), SharedNotifier::new(Permission::Granted));
        let overview = car_overview(&garage, &id, &clock(2024, 1, 1)).unwrap();
        assert_eq!(overview.items.len(), 4);
        assert!(overview
            .items
            .iter()
            .all(|i| i.classification.status == ServiceStatus::NoData));
    }

    #[test]
    fn test_overdue_inspection_alerts_once_until_serviced() {
        let dir = tempdir().unwrap();
        let notifier = SharedNotifier::new(Permission::Granted);
        let (garage, id) = setup(dir.path(), notifier.clone());
        log(&garage, &id, ServiceKind::Inspection, NaiveDate::from_ymd_opt(2023, 1, 15).unwrap(), 40_000);

        let late = clock(2024, 2, 1);
        let first = car_overview(&garage, &id, &late).unwrap();
        assert_eq!(status_of(&first, ServiceKind::Inspection), ServiceStatus::Expired);
        assert_eq!(first.fired().count(), 1);
        car_overview(&garage, &id, &late).unwrap();
        car_overview(&garage, &id, &late).unwrap();
        assert_eq!(notifier.fired.get(), 1);

        log(&garage, &id, ServiceKind::Inspection, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(), 41_000);
        let serviced = car_overview(&garage, &id, &late).unwrap();
        assert_eq!(status_of(&serviced, ServiceKind::Inspection), ServiceStatus::Ok);

        let next_year = clock(2025, 3, 1);
        car_overview(&garage, &id, &next_year).unwrap();
        assert_eq!(notifier.fired.get(), 2);
    }

    #[test]
    fn test_mileage_update_drives_expiry() {
        let dir = tempdir().unwrap();
        let notifier = SharedNotifier::new(Permission::Granted);
        let (garage, id) = setup(dir.path(), notifier.clone());
        log(&garage, &id, ServiceKind::Brakes, NaiveDate::from_ymd_opt(2023, 5, 1).unwrap(), 40_000);
        let now = clock(2023, 6, 1);

        assert_eq!(status_of(&car_overview(&garage, &id, &now).unwrap(), ServiceKind::Brakes), ServiceStatus::Ok);
        garage.update_mileage(&id, 68_000).unwrap();
        assert_eq!(status_of(&car_overview(&garage, &id, &now).unwrap(), ServiceKind::Brakes), ServiceStatus::Soon);
        garage.update_mileage(&id, 70_000).unwrap();
        assert_eq!(status_of(&car_overview(&garage, &id, &now).unwrap(), ServiceKind::Brakes), ServiceStatus::Expired);
        assert_eq!(notifier.fired.get(), 1);
    }

    #[test]
    fn test_servicing_without_overview_rearms_alert() {
        let dir = tempdir().unwrap();
        let notifier = SharedNotifier::new(Permission::Granted);
        let (garage, id) = setup(dir.path(), notifier.clone());
        log(&garage, &id, ServiceKind::Brakes, NaiveDate::from_ymd_opt(2023, 1, 10).unwrap(), 40_000);

        garage.update_mileage(&id, 70_000).unwrap();
        assert_eq!(notifier.fired.get(), 1);

        log(&garage, &id, ServiceKind::Brakes, NaiveDate::from_ymd_opt(2023, 1, 15).unwrap(), 70_000);
        garage.update_mileage(&id, 100_000).unwrap();
        assert_eq!(notifier.fired.get(), 2);
        assert_eq!(refresh_alerts(&garage, &id, &clock(2023, 1, 15)).unwrap(), 0);
    }

    #[test]
    fn test_permission_is_requested_once() {
        let dir = tempdir().unwrap();
        let notifier = SharedNotifier::new(Permission::Default);
        let (garage, _) = setup(dir.path(), notifier.clone());

        assert_eq!(ensure_permission_asked(garage.memory(), garage.notifier()), Permission::Granted);
        notifier.permission.set(Permission::Default);
        assert_eq!(ensure_permission_asked(garage.memory(), garage.notifier()), Permission::Default);
        assert_eq!(notifier.requests.get(), 1);
    }

    #[test]
    fn test_terminal_notifier_is_asked_once_then_alerts() {
        let dir = tempdir().unwrap();
        let garage = Garage::open(dir.path().to_path_buf(), Box::new(TerminalNotifier::new(None)))
            .unwrap()
            .with_clock(Box::new(clock(2023, 1, 15)));
        assert_eq!(garage.notifier().permission(), Permission::Default);

        assert_eq!(ensure_permission_asked(garage.memory(), garage.notifier()), Permission::Granted);
        assert!(garage.memory().get(PERMISSION_ASKED_KEY).unwrap());
        assert_eq!(garage.notifier().permission(), Permission::Granted);
    }

    #[test]
    fn test_unknown_car() {
        let dir = tempdir().unwrap();
        let (garage, _) = setup(dir.path(), SharedNotifier::new(Permission::Granted));
        assert!(matches!(
            car_overview(&garage, "missing", &clock(2024, 1, 1)),
            Err(Error::CarNotFound(_))
        ));
    }
}
