use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use tracing::info;

use common::types::Message;
use models::{Employee, EmployeeInput};

use crate::errors::ApiError;
use crate::startup::AppState;

#[derive(Debug, Serialize)]
pub struct Created {
    pub message: &'static str,
    pub id: String,
}

/// List every stored employee.
pub async fn list_employees(State(state): State<AppState>) -> Json<Vec<Employee>> {
    let employees = state.employees.list().await;
    info!(count = employees.len(), "list employees");
    Json(employees)
}

pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Employee>, ApiError> {
    state.employees.get(&id).await.map(Json).ok_or(ApiError::NotFound)
}

/// Validate and store a new employee; the id is generated here.
pub async fn create_employee(
    State(state): State<AppState>,
    payload: Result<Json<EmployeeInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Created>), ApiError> {
    let Json(input) = payload?;
    let id = state.employees.create(input).await?;
    Ok((StatusCode::CREATED, Json(Created { message: "Employee created successfully", id })))
}

/// Merge a fully valid body over an existing employee.
pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<EmployeeInput>, JsonRejection>,
) -> Result<Json<Message>, ApiError> {
    // unknown ids answer 404 even when the body is unusable
    let input = match payload {
        Ok(Json(input)) => input,
        Err(rejection) => {
            if state.employees.get(&id).await.is_none() {
                return Err(ApiError::NotFound);
            }
            return Err(rejection.into());
        }
    };
    state.employees.update(&id, input).await?;
    Ok(Json(Message { message: "Employee updated successfully" }))
}

pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Message>, ApiError> {
    state.employees.delete(&id).await?;
    Ok(Json(Message { message: "Employee deleted successfully" }))
}
