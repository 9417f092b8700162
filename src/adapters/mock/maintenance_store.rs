use crate::domain::{
    MaintenanceRecord, MaintenanceType,
    value_objects::{CarId, MaintenanceTypeId},
};
use crate::ports::maintenance_store::{MaintenanceStore as MaintenanceStoreTrait, Result};
use async_trait::async_trait;
use std::sync::Mutex;

/// Mock implementation of MaintenanceStore
///
/// Holds maintenance records and maintenance types in memory. Both are
/// added by tests or at startup; the booking context never writes them.
#[allow(dead_code)]
pub struct MaintenanceStore {
    records: Mutex<Vec<MaintenanceRecord>>,
    types: Mutex<Vec<MaintenanceType>>,
}

#[allow(dead_code)]
impl MaintenanceStore {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            types: Mutex::new(Vec::new()),
        }
    }

    /// Add a maintenance record for testing purposes
    pub fn add_record(&self, record: MaintenanceRecord) {
        self.records.lock().unwrap().push(record);
    }

    /// Register a maintenance type and return its generated ID
    pub fn add_maintenance_type(&self, name: &str) -> MaintenanceTypeId {
        let maintenance_type = MaintenanceType {
            maintenance_type_id: MaintenanceTypeId::new(),
            name: name.to_string(),
        };
        let id = maintenance_type.maintenance_type_id;
        self.types.lock().unwrap().push(maintenance_type);
        id
    }
}

impl Default for MaintenanceStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MaintenanceStoreTrait for MaintenanceStore {
    async fn has_open_maintenance(&self, car_id: CarId) -> Result<bool> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .any(|record| record.car_id == car_id && record.is_open()))
    }

    async fn find_maintenance_types(&self) -> Result<Vec<MaintenanceType>> {
        let mut types = self.types.lock().unwrap().clone();
        types.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(types)
    }
}
