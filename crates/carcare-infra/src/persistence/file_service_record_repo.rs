//! File-based service history repository implementation

use std::cell::RefCell;
use std::path::PathBuf;

use carcare_domain::repository::ServiceRecordRepository;
use carcare_store::ServiceStore;
use carcare_types::{Error, Result, ServiceRecord};

/// File-based implementation of ServiceRecordRepository
pub struct FileServiceRecordRepository {
    store: RefCell<ServiceStore>,
}

impl FileServiceRecordRepository {
    /// Create or load a service history repository
    pub fn open(store_dir: PathBuf) -> Result<Self> {
        Ok(Self {
            store: RefCell::new(ServiceStore::open(store_dir)?),
        })
    }
}

impl ServiceRecordRepository for FileServiceRecordRepository {
    fn save(&self, record: &ServiceRecord) -> std::result::Result<(), Error> {
        self.store.borrow_mut().add_record(record.clone())?;
        Ok(())
    }

    fn find_by_car(&self, car_id: &str) -> std::result::Result<Vec<ServiceRecord>, Error> {
        Ok(self
            .store
            .borrow()
            .records_for_car(car_id)
            .into_iter()
            .cloned()
            .collect())
    }

    fn find_all(&self) -> std::result::Result<Vec<ServiceRecord>, Error> {
        Ok(self.store.borrow().all_records().to_vec())
    }

    fn remove(&self, id: &str) -> std::result::Result<bool, Error> {
        self.store.borrow_mut().remove_record(id)
    }

    fn remove_by_car(&self, car_id: &str) -> std::result::Result<usize, Error> {
        self.store.borrow_mut().remove_by_car(car_id)
    }
}
