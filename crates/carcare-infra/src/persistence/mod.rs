//! Persistence implementations
//!
//! File-based implementations of the domain repository traits.

mod file_car_repo;
mod file_key_value_store;
mod file_service_record_repo;

pub use file_car_repo::FileCarRepository;
pub use file_key_value_store::FileKeyValueStore;
pub use file_service_record_repo::FileServiceRecordRepository;
