use std::sync::Arc;

use models::{Employee, EmployeeInput};
use tracing::{info, instrument, warn};

use crate::errors::ServiceError;
use crate::repository::EmployeeRepository;

/// CRUD over the employee collection.
///
/// Every call loads the full collection, and every successful write saves the
/// full collection back. Reads are fail-open: a missing or unparsable store is
/// treated as an empty collection. Nothing serializes the load/save pair, so
/// two concurrent writes can lose one of the updates.
#[derive(Clone)]
pub struct EmployeeService {
    repo: Arc<dyn EmployeeRepository>,
}

impl EmployeeService {
    pub fn new(repo: Arc<dyn EmployeeRepository>) -> Self { Self { repo } }

    async fn load_or_empty(&self) -> Vec<Employee> {
        match self.repo.load().await {
            Ok(employees) => employees,
            Err(e) => {
                warn!(error = %e, "employee store unreadable; using empty collection");
                Vec::new()
            }
        }
    }

    pub async fn list(&self) -> Vec<Employee> {
        self.load_or_empty().await
    }

    pub async fn get(&self, id: &str) -> Option<Employee> {
        self.load_or_empty().await.into_iter().find(|e| e.id == id)
    }

    /// Validate and append a new record; returns the generated id.
    #[instrument(skip_all)]
    pub async fn create(&self, input: EmployeeInput) -> Result<String, ServiceError> {
        let new = input.into_new()?;
        let mut employees = self.load_or_empty().await;
        let id = new.insert_into(&mut employees);
        self.repo.save(&employees).await?;
        info!(id = %id, "created employee");
        Ok(id)
    }

    /// Shallow-merge a fully valid body over the stored record.
    /// The existence check runs before validation.
    #[instrument(skip(self, input))]
    pub async fn update(&self, id: &str, input: EmployeeInput) -> Result<(), ServiceError> {
        let mut employees = self.load_or_empty().await;
        let existing = employees
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| ServiceError::not_found("employee"))?;
        input.into_patch()?.apply_to(existing);
        self.repo.save(&employees).await?;
        info!(id = %id, "updated employee");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        let mut employees = self.load_or_empty().await;
        let index = employees
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| ServiceError::not_found("employee"))?;
        employees.remove(index);
        self.repo.save(&employees).await?;
        info!(id = %id, "deleted employee");
        Ok(())
    }
}
