//! One-shot overdue alerts per (car, service kind)
//!
//! Each pair is either silent or notified. An EXPIRED evaluation of a silent
//! pair records a marker and fires one alert; any other evaluation clears the
//! marker so a later expiry alerts again. The marker lives in a
//! [`KeyValueStore`] separate from car and service data.

use carcare_types::ServiceKind;
use tracing::{debug, info, warn};

use crate::model::ServiceStatus;
use crate::platform::{Notifier, Permission};
use crate::repository::KeyValueStore;

pub const ALERT_TITLE: &str = "Maintenance overdue!";

/// Persisted state of one (car, kind) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    Silent,
    Notified,
}

/// What a single evaluation did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    /// Alert fired and the pair is now notified
    Fired,
    /// Still expired, alert was already delivered
    AlreadyNotified,
    /// No longer expired, marker removed
    Cleared,
    /// Not expired and nothing to clear
    Silent,
    /// Expired, but the platform cannot show alerts right now
    Suppressed(Permission),
}

pub struct NotificationGate<'a> {
    memory: &'a dyn KeyValueStore,
    notifier: &'a dyn Notifier,
}

impl<'a> NotificationGate<'a> {
    pub fn new(memory: &'a dyn KeyValueStore, notifier: &'a dyn Notifier) -> Self {
        Self { memory, notifier }
    }

    /// Storage key of a (car, kind) pair
    pub fn key(car_id: &str, kind: ServiceKind) -> String {
        format!("notified-{}-{}", car_id, kind.as_str())
    }

    /// Current state of a pair; unreadable memory counts as silent
    pub fn state(&self, car_id: &str, kind: ServiceKind) -> GateState {
        match self.memory.get(&Self::key(car_id, kind)) {
            Ok(true) => GateState::Notified,
            Ok(false) => GateState::Silent,
            Err(e) => {
                warn!(car_id, %kind, "notification memory unreadable: {}", e);
                GateState::Silent
            }
        }
    }

    /// Feed the latest classification of a pair through the gate.
    ///
    /// Call on every change of odometer, history or date. Store and alert
    /// failures are logged and never returned.
    pub fn evaluate(
        &self,
        car_id: &str,
        kind: ServiceKind,
        label: &str,
        status: ServiceStatus,
    ) -> GateOutcome {
        let key = Self::key(car_id, kind);

        if !status.is_expired() {
            return match self.memory.remove(&key) {
                Ok(true) => {
                    info!(car_id, %kind, "overdue condition resolved");
                    GateOutcome::Cleared
                }
                Ok(false) => GateOutcome::Silent,
                Err(e) => {
                    warn!(car_id, %kind, "failed to clear notification marker: {}", e);
                    GateOutcome::Silent
                }
            };
        }

        let permission = self.notifier.permission();
        if permission != Permission::Granted {
            debug!(car_id, %kind, ?permission, "alert suppressed");
            return GateOutcome::Suppressed(permission);
        }

        match self.memory.mark(&key) {
            Ok(true) => {
                let body = format!("{} is due.", label);
                if let Err(e) = self.notifier.fire(ALERT_TITLE, &body) {
                    warn!(car_id, %kind, "failed to show alert: {}", e);
                }
                info!(car_id, %kind, "overdue alert delivered");
                GateOutcome::Fired
            }
            Ok(false) => GateOutcome::AlreadyNotified,
            Err(e) => {
                warn!(car_id, %kind, "failed to record notification marker: {}", e);
                GateOutcome::Silent
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carcare_types::{Error, StoreError};
    use std::cell::{Cell, RefCell};
    use std::collections::HashSet;

    #[derive(Default)]
    struct MemoryStore {
        keys: RefCell<HashSet<String>>,
        broken: bool,
    }

    impl KeyValueStore for MemoryStore {
        fn get(&self, key: &str) -> Result<bool, Error> {
            if self.broken {
                return Err(StoreError::IoError("disk gone".to_string()).into());
            }
            Ok(self.keys.borrow().contains(key))
        }

        fn set(&self, key: &str) -> Result<(), Error> {
            if self.broken {
                return Err(StoreError::IoError("disk gone".to_string()).into());
            }
            self.keys.borrow_mut().insert(key.to_string());
            Ok(())
        }

        fn remove(&self, key: &str) -> Result<bool, Error> {
            if self.broken {
                return Err(StoreError::IoError("disk gone".to_string()).into());
            }
            Ok(self.keys.borrow_mut().remove(key))
        }
    }

    struct RecordingNotifier {
        permission: Cell<Permission>,
        fired: RefCell<Vec<(String, String)>>,
        failing: bool,
    }

    impl RecordingNotifier {
        fn granted() -> Self {
            Self::with_permission(Permission::Granted)
        }

        fn with_permission(permission: Permission) -> Self {
            Self {
                permission: Cell::new(permission),
                fired: RefCell::new(Vec::new()),
                failing: false,
            }
        }

        fn fired_count(&self) -> usize {
            self.fired.borrow().len()
        }
    }

    impl Notifier for RecordingNotifier {
        fn permission(&self) -> Permission {
            self.permission.get()
        }

        fn request_permission(&self) -> Permission {
            self.permission.get()
        }

        fn fire(&self, title: &str, body: &str) -> Result<(), Error> {
            self.fired.borrow_mut().push((title.to_string(), body.to_string()));
            if self.failing {
                return Err(StoreError::IoError("no display".to_string()).into());
            }
            Ok(())
        }
    }

    #[test]
    fn test_unseen_pair_is_silent() {
        let memory = MemoryStore::default();
        let notifier = RecordingNotifier::granted();
        let gate = NotificationGate::new(&memory, &notifier);
        assert_eq!(gate.state("car-a", ServiceKind::Oil), GateState::Silent);
    }

    #[test]
    fn test_repeated_expiry_fires_once() {
        let memory = MemoryStore::default();
        let notifier = RecordingNotifier::granted();
        let gate = NotificationGate::new(&memory, &notifier);

        assert_eq!(
            gate.evaluate("car-a", ServiceKind::Oil, "Oil change", ServiceStatus::Expired),
            GateOutcome::Fired
        );
        for _ in 0..5 {
            assert_eq!(
                gate.evaluate("car-a", ServiceKind::Oil, "Oil change", ServiceStatus::Expired),
                GateOutcome::AlreadyNotified
            );
        }
        assert_eq!(notifier.fired_count(), 1);
        assert_eq!(gate.state("car-a", ServiceKind::Oil), GateState::Notified);
        assert_eq!(
            notifier.fired.borrow()[0],
            (ALERT_TITLE.to_string(), "Oil change is due.".to_string())
        );
    }

    #[test]
    fn test_recovery_rearms_the_alert() {
        let memory = MemoryStore::default();
        let notifier = RecordingNotifier::granted();
        let gate = NotificationGate::new(&memory, &notifier);

        gate.evaluate("car-a", ServiceKind::Oil, "Oil change", ServiceStatus::Expired);
        gate.evaluate("car-a", ServiceKind::Oil, "Oil change", ServiceStatus::Expired);
        assert_eq!(
            gate.evaluate("car-a", ServiceKind::Oil, "Oil change", ServiceStatus::Ok),
            GateOutcome::Cleared
        );
        assert_eq!(gate.state("car-a", ServiceKind::Oil), GateState::Silent);
        gate.evaluate("car-a", ServiceKind::Oil, "Oil change", ServiceStatus::Expired);
        gate.evaluate("car-a", ServiceKind::Oil, "Oil change", ServiceStatus::Expired);
        assert_eq!(notifier.fired_count(), 2);
    }

    #[test]
    fn test_soon_also_clears_marker() {
        let memory = MemoryStore::default();
        let notifier = RecordingNotifier::granted();
        let gate = NotificationGate::new(&memory, &notifier);

        gate.evaluate("car-a", ServiceKind::Tires, "Tires", ServiceStatus::Expired);
        assert_eq!(
            gate.evaluate("car-a", ServiceKind::Tires, "Tires", ServiceStatus::Soon),
            GateOutcome::Cleared
        );
        assert_eq!(
            gate.evaluate("car-a", ServiceKind::Tires, "Tires", ServiceStatus::NoData),
            GateOutcome::Silent
        );
    }

    #[test]
    fn test_pairs_are_independent() {
        let memory = MemoryStore::default();
        let notifier = RecordingNotifier::granted();
        let gate = NotificationGate::new(&memory, &notifier);

        gate.evaluate("car-a", ServiceKind::Oil, "Oil change", ServiceStatus::Expired);
        gate.evaluate("car-b", ServiceKind::Oil, "Oil change", ServiceStatus::Expired);
        gate.evaluate("car-a", ServiceKind::Brakes, "Brake pads", ServiceStatus::Expired);
        assert_eq!(notifier.fired_count(), 3);
    }

    #[test]
    fn test_without_permission_nothing_is_recorded() {
        let memory = MemoryStore::default();
        let notifier = RecordingNotifier::with_permission(Permission::Denied);
        let gate = NotificationGate::new(&memory, &notifier);

        assert_eq!(
            gate.evaluate("car-a", ServiceKind::Oil, "Oil change", ServiceStatus::Expired),
            GateOutcome::Suppressed(Permission::Denied)
        );
        assert_eq!(gate.state("car-a", ServiceKind::Oil), GateState::Silent);

        notifier.permission.set(Permission::Granted);
        assert_eq!(
            gate.evaluate("car-a", ServiceKind::Oil, "Oil change", ServiceStatus::Expired),
            GateOutcome::Fired
        );
        assert_eq!(notifier.fired_count(), 1);
    }

    #[test]
    fn test_failed_alert_still_counts_as_delivered() {
        let memory = MemoryStore::default();
        let mut notifier = RecordingNotifier::granted();
        notifier.failing = true;
        let gate = NotificationGate::new(&memory, &notifier);

        assert_eq!(
            gate.evaluate("car-a", ServiceKind::Oil, "Oil change", ServiceStatus::Expired),
            GateOutcome::Fired
        );
        assert_eq!(
            gate.evaluate("car-a", ServiceKind::Oil, "Oil change", ServiceStatus::Expired),
            GateOutcome::AlreadyNotified
        );
    }

    #[test]
    fn test_broken_memory_never_fires() {
        let memory = MemoryStore {
            broken: true,
            ..Default::default()
        };
        let notifier = RecordingNotifier::granted();
        let gate = NotificationGate::new(&memory, &notifier);

        assert_eq!(
            gate.evaluate("car-a", ServiceKind::Oil, "Oil change", ServiceStatus::Expired),
            GateOutcome::Silent
        );
        assert_eq!(
            gate.evaluate("car-a", ServiceKind::Oil, "Oil change", ServiceStatus::Ok),
            GateOutcome::Silent
        );
        assert_eq!(notifier.fired_count(), 0);
    }

    #[test]
    fn test_key_format() {
        assert_eq!(NotificationGate::key("abc", ServiceKind::Inspection), "notified-abc-inspection");
    }
}
