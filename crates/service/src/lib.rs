//! Service layer for the employee collection.
//! - `storage` reads and writes whole collections as JSON files.
//! - `repository` is the seam the service talks to.
//! - `employees` runs the read-modify-write cycle for every request.

pub mod errors;
pub mod storage;
pub mod repository;
pub mod employees;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use employees::EmployeeService;
pub use errors::{ServiceError, StorageError};
pub use repository::EmployeeRepository;
pub use storage::json_list_store::JsonListStore;
