//! Repository trait definitions for data persistence

use carcare_types::Error;
use carcare_types::{Car, ServiceRecord};

/// Repository for registered cars
pub trait CarRepository {
    /// Insert or replace a car
    fn save(&self, car: &Car) -> Result<(), Error>;

    /// Find a car by ID
    fn find_by_id(&self, id: &str) -> Result<Option<Car>, Error>;

    /// Find all cars
    fn find_all(&self) -> Result<Vec<Car>, Error>;

    /// Remove a car, returning whether it existed
    fn remove(&self, id: &str) -> Result<bool, Error>;

    /// Raise the stored odometer reading to `mileage` if it is larger.
    ///
    /// Returns the reading in effect afterwards, or `None` for an unknown car.
    fn update_mileage(&self, id: &str, mileage: u32) -> Result<Option<u32>, Error>;
}

/// Repository for service history
pub trait ServiceRecordRepository {
    /// Append a record
    fn save(&self, record: &ServiceRecord) -> Result<(), Error>;

    /// All records of one car
    fn find_by_car(&self, car_id: &str) -> Result<Vec<ServiceRecord>, Error>;

    /// All records of all cars
    fn find_all(&self) -> Result<Vec<ServiceRecord>, Error>;

    /// Remove a record, returning whether it existed
    fn remove(&self, id: &str) -> Result<bool, Error>;

    /// Remove every record of a car, returning how many were removed
    fn remove_by_car(&self, car_id: &str) -> Result<usize, Error>;
}

/// Durable boolean markers keyed by string
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<bool, Error>;

    fn set(&self, key: &str) -> Result<(), Error>;

    /// Remove the marker, returning whether it was present
    fn remove(&self, key: &str) -> Result<bool, Error>;

    /// Set the marker and report whether it was absent before.
    ///
    /// Stores with shared state override this so the check and the write
    /// happen as one step.
    fn mark(&self, key: &str) -> Result<bool, Error> {
        if self.get(key)? {
            return Ok(false);
        }
        self.set(key)?;
        Ok(true)
    }
}
