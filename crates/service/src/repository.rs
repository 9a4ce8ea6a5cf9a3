use async_trait::async_trait;
use models::Employee;

use crate::errors::StorageError;
use crate::storage::json_list_store::JsonListStore;

/// Whole-collection persistence for employee records.
/// Implementations can be file-backed or in-memory; no partial updates.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn load(&self) -> Result<Vec<Employee>, StorageError>;
    async fn save(&self, employees: &[Employee]) -> Result<(), StorageError>;
}

#[async_trait]
impl EmployeeRepository for JsonListStore<Employee> {
    async fn load(&self) -> Result<Vec<Employee>, StorageError> { JsonListStore::load(self).await }
    async fn save(&self, employees: &[Employee]) -> Result<(), StorageError> { JsonListStore::save(self, employees).await }
}
