//! Terminal alert back-end

use carcare_domain::platform::{Notifier, Permission};
use carcare_types::Error;
use std::cell::Cell;
use std::io::Write;
use tracing::debug;

/// Prints alerts to stderr, preceded by the terminal bell.
///
/// Permission starts from the user's configured preference; an unset
/// preference is `Default` until [`Notifier::request_permission`] is called.
pub struct TerminalNotifier {
    permission: Cell<Permission>,
}

impl TerminalNotifier {
    pub fn new(enabled: Option<bool>) -> Self {
        let permission = match enabled {
            Some(true) => Permission::Granted,
            Some(false) => Permission::Denied,
            None => Permission::Default,
        };
        Self {
            permission: Cell::new(permission),
        }
    }
}

impl Notifier for TerminalNotifier {
    fn permission(&self) -> Permission {
        self.permission.get()
    }

    /// Terminals cannot prompt, so an undecided preference turns alerts on
    /// and tells the user how to switch them off.
    fn request_permission(&self) -> Permission {
        if self.permission.get() == Permission::Default {
            eprintln!("Overdue alerts are on. Turn them off with `carcare config --set-notifications false`.");
            self.permission.set(Permission::Granted);
        }
        self.permission.get()
    }

    fn fire(&self, title: &str, body: &str) -> Result<(), Error> {
        let mut stderr = std::io::stderr().lock();
        writeln!(stderr, "\x07[!] {}: {}", title, body)?;
        debug!(title, "alert written to terminal");
        Ok(())
    }
}
