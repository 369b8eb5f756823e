//! Service history store

use carcare_types::{Result, ServiceRecord};
use std::fs;
use std::path::PathBuf;

use crate::{load_or_default, write_json};

/// Persistent store for service records, kept in insertion order
pub struct ServiceStore {
    store_path: PathBuf,
    records: Vec<ServiceRecord>,
}

impl ServiceStore {
    /// Create or load a service store
    pub fn open(store_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&store_dir)?;
        let store_path = store_dir.join("services.json");
        let records = load_or_default(&store_path)?;
        Ok(Self { store_path, records })
    }

    fn save(&self) -> Result<()> {
        write_json(&self.store_path, &self.records)
    }

    /// Append a record
    pub fn add_record(&mut self, record: ServiceRecord) -> Result<String> {
        let id = record.id.clone();
        self.records.push(record);
        self.save()?;
        Ok(id)
    }

    /// Remove a record by ID
    pub fn remove_record(&mut self, id: &str) -> Result<bool> {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        let removed = self.records.len() != before;
        if removed {
            self.save()?;
        }
        Ok(removed)
    }

    /// Remove all records of a car
    pub fn remove_by_car(&mut self, car_id: &str) -> Result<usize> {
        let before = self.records.len();
        self.records.retain(|r| r.car_id != car_id);
        let removed = before - self.records.len();
        if removed > 0 {
            self.save()?;
        }
        Ok(removed)
    }

    /// Records of one car, newest first
    pub fn records_for_car(&self, car_id: &str) -> Vec<&ServiceRecord> {
        let mut records: Vec<_> = self.records.iter().filter(|r| r.car_id == car_id).collect();
        records.sort_by(|a, b| b.performed_on.cmp(&a.performed_on));
        records
    }

    pub fn all_records(&self) -> &[ServiceRecord] {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carcare_types::ServiceKind;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    fn record(car_id: &str, day: u32) -> ServiceRecord {
        ServiceRecord::new(
            car_id.to_string(),
            ServiceKind::Oil,
            NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
            10_000,
            100.0,
        )
    }

    #[test]
    fn test_records_for_car_newest_first() {
        let dir = tempdir().unwrap();
        let mut store = ServiceStore::open(dir.path().to_path_buf()).unwrap();
        store.add_record(record("a", 1)).unwrap();
        store.add_record(record("b", 2)).unwrap();
        store.add_record(record("a", 20)).unwrap();

        let days: Vec<_> = store
            .records_for_car("a")
            .iter()
            .map(|r| r.performed_on)
            .collect();
        assert_eq!(
            days,
            vec![
                NaiveDate::from_ymd_opt(2024, 3, 20).unwrap(),
                NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            ]
        );
    }

    #[test]
    fn test_remove_by_car_persists() {
        let dir = tempdir().unwrap();
        {
            let mut store = ServiceStore::open(dir.path().to_path_buf()).unwrap();
            store.add_record(record("a", 1)).unwrap();
            store.add_record(record("a", 2)).unwrap();
            store.add_record(record("b", 3)).unwrap();
            assert_eq!(store.remove_by_car("a").unwrap(), 2);
        }
        let store = ServiceStore::open(dir.path().to_path_buf()).unwrap();
        assert_eq!(store.all_records().len(), 1);
        assert_eq!(store.all_records()[0].car_id, "b");
    }

    #[test]
    fn test_wrong_shape_loads_empty() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("services.json"), r#"{"id": "x"}"#).unwrap();
        let store = ServiceStore::open(dir.path().to_path_buf()).unwrap();
        assert!(store.all_records().is_empty());
    }
}
