//! Repository adapters for persistence layer

use std::path::PathBuf;

use carcare_domain::platform::{Notifier, Permission};
use carcare_infra::TerminalNotifier;
use carcare_types::Result;

use crate::app::{ensure_permission_asked, Garage};
use crate::config::Config;

/// Open the garage in the configured data directory with a terminal notifier.
///
/// The first open with an undecided alert preference asks for permission and
/// saves the answer to the configuration.
pub fn open_garage(config: &Config) -> Result<Garage> {
    let store_dir = config.store_dir()?;
    let notifier = TerminalNotifier::new(config.notifications_enabled);
    let garage = Garage::open(store_dir, Box::new(notifier))?;

    if config.notifications_enabled.is_none() {
        let mut permission = ensure_permission_asked(garage.memory(), garage.notifier());
        if permission == Permission::Default {
            // asked before, but the answer was reset since
            permission = garage.notifier().request_permission();
        }
        if permission == Permission::Granted {
            Config::remember_notifications(true)?;
        }
    }
    Ok(garage)
}

/// Open the garage at a custom directory
pub fn open_garage_at(store_dir: PathBuf, notifier: Box<dyn Notifier>) -> Result<Garage> {
    Garage::open(store_dir, notifier)
}
