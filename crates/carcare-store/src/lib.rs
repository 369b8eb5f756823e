//! Persistent JSON stores for cars, service records and notification memory
//!
//! Each store owns one file in the data directory. A missing or malformed
//! file loads as an empty collection.

pub mod cars;
pub mod notifications;
pub mod services;

pub use cars::CarStore;
pub use notifications::NotificationMemory;
pub use services::ServiceStore;

use carcare_types::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use tracing::warn;

/// Load a JSON file, falling back to `T::default()` when absent or unreadable
fn load_or_default<T: DeserializeOwned + Default>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Ok(T::default());
    }
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    Ok(serde_json::from_reader(reader).unwrap_or_else(|e| {
        warn!(path = %path.display(), "discarding malformed store file: {}", e);
        T::default()
    }))
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, value)?;
    Ok(())
}
