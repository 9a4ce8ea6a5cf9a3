//! Employee record types and the validation rules applied before anything is persisted.
//! - No I/O: everything here is pure data and pure functions.

pub mod errors;
pub mod employee;
pub mod validation;

pub use employee::{Employee, EmployeeInput, EmployeePatch, NewEmployee};
pub use errors::ValidationErrors;
