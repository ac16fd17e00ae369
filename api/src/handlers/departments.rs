//! Department handlers
//!
//! Endpoints for departments and the employees attached to them.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, Query, State,
    },
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::app::{DepartmentDetail, DepartmentRequest, DepartmentSummary, EmployeeRequest};
use crate::domain::entities::{DepartmentId, EmployeeId};
use crate::domain::ports::{DepartmentRepository, EmployeeRepository};
use crate::error::AppError;
use crate::AppState;

use super::extract::{path_params, validated_body};

/// Query parameters for listing departments
#[derive(Debug, Default, Deserialize)]
pub struct ListDepartmentsQuery {
    /// Name or code fragment
    pub q: Option<String>,
}

/// GET /api/departments
pub async fn list_departments<D, E>(
    State(state): State<AppState<D, E>>,
    Query(query): Query<ListDepartmentsQuery>,
) -> Result<Json<Vec<DepartmentSummary>>, AppError>
where
    D: DepartmentRepository + 'static,
    E: EmployeeRepository + 'static,
{
    let departments = state
        .department_service
        .list_departments(query.q.as_deref())
        .await?;
    Ok(Json(departments))
}

/// GET /api/departments/:id
pub async fn get_department<D, E>(
    State(state): State<AppState<D, E>>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<DepartmentDetail>, AppError>
where
    D: DepartmentRepository + 'static,
    E: EmployeeRepository + 'static,
{
    let id = DepartmentId(path_params(path)?);
    let department = state.department_service.get_department(&id).await?;
    Ok(Json(department))
}

/// POST /api/departments
///
/// Responds 201 with a `Location` header pointing at the new department.
pub async fn create_department<D, E>(
    State(state): State<AppState<D, E>>,
    payload: Result<Json<DepartmentRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError>
where
    D: DepartmentRepository + 'static,
    E: EmployeeRepository + 'static,
{
    let request = validated_body(payload)?;
    let department = state.department_service.create_department(&request).await?;

    let location = format!("/api/departments/{}", department.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(department),
    ))
}

/// PUT /api/departments/:id
pub async fn update_department<D, E>(
    State(state): State<AppState<D, E>>,
    path: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<DepartmentRequest>, JsonRejection>,
) -> Result<Json<DepartmentDetail>, AppError>
where
    D: DepartmentRepository + 'static,
    E: EmployeeRepository + 'static,
{
    let id = DepartmentId(path_params(path)?);
    let request = validated_body(payload)?;
    let department = state
        .department_service
        .update_department(&id, &request)
        .await?;
    Ok(Json(department))
}

/// DELETE /api/departments/:id
pub async fn delete_department<D, E>(
    State(state): State<AppState<D, E>>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, AppError>
where
    D: DepartmentRepository + 'static,
    E: EmployeeRepository + 'static,
{
    let id = DepartmentId(path_params(path)?);
    state.department_service.delete_department(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/departments/:id/employees
pub async fn add_employee<D, E>(
    State(state): State<AppState<D, E>>,
    path: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<EmployeeRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError>
where
    D: DepartmentRepository + 'static,
    E: EmployeeRepository + 'static,
{
    let department_id = DepartmentId(path_params(path)?);
    let request = validated_body(payload)?;
    let employee = state
        .department_service
        .add_employee(&department_id, &request)
        .await?;

    let location = format!(
        "/api/departments/{}/employees/{}",
        department_id, employee.id
    );
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(employee),
    ))
}

/// DELETE /api/departments/:department_id/employees/:employee_id
pub async fn remove_employee<D, E>(
    State(state): State<AppState<D, E>>,
    path: Result<Path<(Uuid, Uuid)>, PathRejection>,
) -> Result<StatusCode, AppError>
where
    D: DepartmentRepository + 'static,
    E: EmployeeRepository + 'static,
{
    let (department_id, employee_id) = path_params(path)?;
    state
        .department_service
        .remove_employee(&DepartmentId(department_id), &EmployeeId(employee_id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
