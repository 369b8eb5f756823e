//! Car store for registered cars

use carcare_types::{Car, Result};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::{load_or_default, write_json};

/// Persistent store for registered cars
pub struct CarStore {
    store_path: PathBuf,
    cars: HashMap<String, Car>,
}

impl CarStore {
    /// Create or load a car store
    pub fn open(store_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&store_dir)?;
        let store_path = store_dir.join("cars.json");
        let cars = load_or_default(&store_path)?;
        Ok(Self { store_path, cars })
    }

    /// Save store to disk
    fn save(&self) -> Result<()> {
        write_json(&self.store_path, &self.cars)
    }

    /// Add or replace a car
    pub fn add_car(&mut self, car: Car) -> Result<String> {
        let id = car.id.clone();
        self.cars.insert(id.clone(), car);
        self.save()?;
        Ok(id)
    }

    /// Remove a car by ID
    pub fn remove_car(&mut self, id: &str) -> Result<bool> {
        let removed = self.cars.remove(id).is_some();
        if removed {
            self.save()?;
        }
        Ok(removed)
    }

    /// Get a car by ID
    pub fn get_car(&self, id: &str) -> Option<&Car> {
        self.cars.get(id)
    }

    /// Get all cars sorted by brand, model, then registration time
    pub fn all_cars(&self) -> Vec<&Car> {
        let mut cars: Vec<_> = self.cars.values().collect();
        cars.sort_by(|a, b| {
            a.brand
                .cmp(&b.brand)
                .then_with(|| a.model.cmp(&b.model))
                .then(a.registered_at.cmp(&b.registered_at))
        });
        cars
    }

    /// Get total car count
    pub fn count(&self) -> usize {
        self.cars.len()
    }

    /// Raise the odometer reading; smaller readings are ignored.
    ///
    /// Returns the reading in effect afterwards, or `None` for an unknown car.
    pub fn update_mileage(&mut self, id: &str, mileage: u32) -> Result<Option<u32>> {
        let Some(car) = self.cars.get_mut(id) else {
            return Ok(None);
        };
        if mileage <= car.mileage {
            return Ok(Some(car.mileage));
        }
        car.mileage = mileage;
        self.save()?;
        Ok(Some(mileage))
    }
}
