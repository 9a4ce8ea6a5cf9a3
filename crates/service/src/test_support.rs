//! In-memory repositories for exercising the service and router without a disk.

use std::sync::Mutex;

use async_trait::async_trait;
use models::Employee;

use crate::errors::StorageError;
use crate::repository::EmployeeRepository;

/// Holds the "file" as an optional collection; `None` behaves like a missing file.
#[derive(Default)]
pub struct MemoryRepository {
    stored: Mutex<Option<Vec<Employee>>>,
}

impl MemoryRepository {
    pub fn snapshot(&self) -> Option<Vec<Employee>> {
        self.stored.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

fn not_found() -> StorageError {
    StorageError::Io {
        path: "memory".into(),
        source: std::io::Error::from(std::io::ErrorKind::NotFound),
    }
}

#[async_trait]
impl EmployeeRepository for MemoryRepository {
    async fn load(&self) -> Result<Vec<Employee>, StorageError> {
        let stored = self.stored.lock().map_err(|_| not_found())?;
        stored.clone().ok_or_else(not_found)
    }

    async fn save(&self, employees: &[Employee]) -> Result<(), StorageError> {
        let mut stored = self.stored.lock().map_err(|_| not_found())?;
        *stored = Some(employees.to_vec());
        Ok(())
    }
}

/// Reads succeed, every write fails with a permission error.
#[derive(Default)]
pub struct ReadOnlyRepository {
    pub employees: Vec<Employee>,
}

#[async_trait]
impl EmployeeRepository for ReadOnlyRepository {
    async fn load(&self) -> Result<Vec<Employee>, StorageError> {
        Ok(self.employees.clone())
    }

    async fn save(&self, _employees: &[Employee]) -> Result<(), StorageError> {
        Err(StorageError::Io {
            path: "read-only".into(),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        })
    }
}
