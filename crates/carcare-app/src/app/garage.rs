//! Car and service-record use cases

use std::path::PathBuf;

use carcare_domain::platform::{Clock, Notifier, SystemClock};
use carcare_domain::repository::{CarRepository, KeyValueStore, ServiceRecordRepository};
use carcare_domain::service::validation::{validate_car, validate_service};
use carcare_infra::{FileCarRepository, FileKeyValueStore, FileServiceRecordRepository};
use carcare_types::{Car, Error, Result, ServiceKind, ServiceRecord};
use chrono::NaiveDate;
use tracing::{info, warn};

use super::maintenance_service::refresh_alerts;

/// Input for registering a car
#[derive(Debug, Clone)]
pub struct NewCar {
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub mileage: u32,
    pub image: Option<String>,
}

/// Input for logging a service
#[derive(Debug, Clone)]
pub struct NewService {
    pub kind: ServiceKind,
    pub performed_on: NaiveDate,
    pub odometer: u32,
    pub cost: f64,
    pub note: String,
}

/// What was deleted together with a car
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemovedCar {
    pub records: usize,
    pub markers: usize,
}

/// Cars, their service history and the notification memory of one data directory
pub struct Garage {
    cars: FileCarRepository,
    services: FileServiceRecordRepository,
    memory: FileKeyValueStore,
    notifier: Box<dyn Notifier>,
    clock: Box<dyn Clock>,
}

impl Garage {
    pub fn open(store_dir: PathBuf, notifier: Box<dyn Notifier>) -> Result<Self> {
        Ok(Self {
            cars: FileCarRepository::open(store_dir.clone())?,
            services: FileServiceRecordRepository::open(store_dir.clone())?,
            memory: FileKeyValueStore::open(store_dir)?,
            notifier,
            clock: Box::new(SystemClock),
        })
    }

    /// Replace the clock used when re-evaluating alerts after a change
    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn memory(&self) -> &dyn KeyValueStore {
        &self.memory
    }

    pub fn notifier(&self) -> &dyn Notifier {
        self.notifier.as_ref()
    }

    /// Validate and register a car. `current_year` bounds the model year.
    pub fn add_car(&self, new: NewCar, current_year: i32) -> Result<Car> {
        validate_car(&new.brand, &new.model, new.year, current_year)?;
        let mut car = Car::new(
            new.brand.trim().to_string(),
            new.model.trim().to_string(),
            new.year,
            new.mileage,
        );
        if let Some(image) = new.image {
            car = car.with_image(image);
        }
        self.cars.save(&car)?;
        info!(car_id = %car.id, "registered {}", car.display_name());
        Ok(car)
    }

    pub fn get_car(&self, id: &str) -> Result<Car> {
        self.cars
            .find_by_id(id)?
            .ok_or_else(|| Error::CarNotFound(id.to_string()))
    }

    /// All cars, optionally filtered by a case-insensitive "brand model" search
    pub fn list_cars(&self, search: Option<&str>) -> Result<Vec<Car>> {
        let cars = self.cars.find_all()?;
        Ok(match search {
            Some(query) => cars.into_iter().filter(|c| c.matches_search(query)).collect(),
            None => cars,
        })
    }

    pub fn car_count(&self) -> usize {
        self.cars.count()
    }

    /// Delete a car with its service history and alert markers
    pub fn remove_car(&self, id: &str) -> Result<RemovedCar> {
        if !self.cars.remove(id)? {
            return Err(Error::CarNotFound(id.to_string()));
        }
        let records = self.services.remove_by_car(id)?;
        let markers = self.memory.remove_prefix(&format!("notified-{}-", id))?;
        info!(car_id = id, records, markers, "car removed");
        Ok(RemovedCar { records, markers })
    }

    /// Record a new odometer reading; lower readings leave the car unchanged
    pub fn update_mileage(&self, id: &str, mileage: u32) -> Result<u32> {
        let current = self.raise_mileage(id, mileage)?;
        self.after_change(id);
        Ok(current)
    }

    fn raise_mileage(&self, id: &str, mileage: u32) -> Result<u32> {
        self.cars
            .update_mileage(id, mileage)?
            .ok_or_else(|| Error::CarNotFound(id.to_string()))
    }

    /// Re-run the notification gate of a car after its data changed
    fn after_change(&self, car_id: &str) {
        if let Err(e) = refresh_alerts(self, car_id, self.clock.as_ref()) {
            warn!(car_id, "failed to re-evaluate alerts: {}", e);
        }
    }

    /// Validate a service, raise the car's odometer to its reading, then log it
    pub fn add_service(&self, car_id: &str, new: NewService) -> Result<ServiceRecord> {
        let car = self.get_car(car_id)?;
        validate_service(&car, new.odometer, new.cost)?;

        let record = ServiceRecord::new(car.id.clone(), new.kind, new.performed_on, new.odometer, new.cost)
            .with_note(new.note);
        self.raise_mileage(&car.id, new.odometer)?;
        self.services.save(&record)?;
        info!(car_id, kind = %record.kind, "service logged");
        self.after_change(&car.id);
        Ok(record)
    }

    /// Service history of a car, newest first
    pub fn service_history(&self, car_id: &str) -> Result<Vec<ServiceRecord>> {
        self.get_car(car_id)?;
        self.services.find_by_car(car_id)
    }

    pub fn all_services(&self) -> Result<Vec<ServiceRecord>> {
        self.services.find_all()
    }

    pub fn remove_service(&self, id: &str) -> Result<()> {
        let car_id = self
            .services
            .find_all()?
            .into_iter()
            .find(|r| r.id == id)
            .map(|r| r.car_id)
            .ok_or_else(|| Error::ServiceNotFound(id.to_string()))?;
        self.services.remove(id)?;
        self.after_change(&car_id);
        Ok(())
    }
}
