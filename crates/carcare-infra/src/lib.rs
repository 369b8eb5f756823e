//! Infrastructure layer - repository implementations and notifier back-ends

pub mod notifier;
pub mod persistence;

pub use notifier::TerminalNotifier;
pub use persistence::{FileCarRepository, FileKeyValueStore, FileServiceRecordRepository};
