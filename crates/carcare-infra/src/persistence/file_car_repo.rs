//! File-based car repository implementation

use std::cell::RefCell;
use std::path::PathBuf;

use carcare_domain::repository::CarRepository;
use carcare_store::CarStore;
use carcare_types::{Car, Error, Result};

/// File-based implementation of CarRepository
///
/// Stores cars in `cars.json` under the data directory.
pub struct FileCarRepository {
    store: RefCell<CarStore>,
}

impl FileCarRepository {
    /// Create or load a car repository
    pub fn open(store_dir: PathBuf) -> Result<Self> {
        Ok(Self {
            store: RefCell::new(CarStore::open(store_dir)?),
        })
    }

    pub fn count(&self) -> usize {
        self.store.borrow().count()
    }
}

impl CarRepository for FileCarRepository {
    fn save(&self, car: &Car) -> std::result::Result<(), Error> {
        self.store.borrow_mut().add_car(car.clone())?;
        Ok(())
    }

    fn find_by_id(&self, id: &str) -> std::result::Result<Option<Car>, Error> {
        Ok(self.store.borrow().get_car(id).cloned())
    }

    fn find_all(&self) -> std::result::Result<Vec<Car>, Error> {
        Ok(self.store.borrow().all_cars().into_iter().cloned().collect())
    }

    fn remove(&self, id: &str) -> std::result::Result<bool, Error> {
        self.store.borrow_mut().remove_car(id)
    }

    fn update_mileage(&self, id: &str, mileage: u32) -> std::result::Result<Option<u32>, Error> {
        self.store.borrow_mut().update_mileage(id, mileage)
    }
}
