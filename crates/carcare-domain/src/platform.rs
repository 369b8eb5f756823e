//! Injected platform capabilities: wall clock and desktop alerts

use carcare_types::Error;
use chrono::{DateTime, Utc};

/// Source of "now" for date-based projections
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the system clock
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always returns the same instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Alert permission as reported by the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Granted,
    Denied,
    /// Not decided yet; alerts are not shown until granted
    Default,
    /// The platform has no alert primitive
    Unsupported,
}

/// One-shot alert primitive.
///
/// Callers treat every method as fire-and-forget: a failed or unsupported
/// alert never changes a classification.
pub trait Notifier {
    fn permission(&self) -> Permission;

    /// Ask the user for permission. Resolves to the new permission state.
    fn request_permission(&self) -> Permission;

    fn fire(&self, title: &str, body: &str) -> Result<(), Error>;
}

/// Notifier for hosts without any alert primitive
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn permission(&self) -> Permission {
        Permission::Unsupported
    }

    fn request_permission(&self) -> Permission {
        Permission::Unsupported
    }

    fn fire(&self, _title: &str, _body: &str) -> Result<(), Error> {
        Ok(())
    }
}
