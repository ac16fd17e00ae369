//! Department service
//!
//! Business rules for departments and their employees: code and email
//! uniqueness, employment period checks, and department/employee pairing.
//! Each public method performs at most one mutating repository call, so it
//! either commits all of its effects or none of them.

use std::sync::Arc;

use crate::domain::entities::{valid_period, Department, DepartmentId, EmployeeId};
use crate::domain::ports::{DepartmentRepository, EmployeeRepository};
use crate::error::DomainError;

use super::dto::{DepartmentDetail, DepartmentRequest, DepartmentSummary, EmployeeRequest, EmployeeView};
use super::mapper;

/// Service for managing departments and their employees
pub struct DepartmentService<DR, ER>
where
    DR: DepartmentRepository,
    ER: EmployeeRepository,
{
    departments: Arc<DR>,
    employees: Arc<ER>,
}

impl<DR, ER> DepartmentService<DR, ER>
where
    DR: DepartmentRepository,
    ER: EmployeeRepository,
{
    pub fn new(departments: Arc<DR>, employees: Arc<ER>) -> Self {
        Self {
            departments,
            employees,
        }
    }

    /// Create a department with a normalized, unused code
    pub async fn create_department(
        &self,
        request: &DepartmentRequest,
    ) -> Result<DepartmentDetail, DomainError> {
        let code = normalize_code(request.code.as_deref())?;
        if self.departments.exists_by_code(&code).await? {
            return Err(duplicate_code(&code));
        }

        let department = self
            .departments
            .create(&mapper::to_new_department(request))
            .await?;

        tracing::info!(department_id = %department.id, code = %department.code, "Department created");
        Ok(mapper::to_detail(&department))
    }

    /// Overwrite a department's fields; its employees are left alone
    pub async fn update_department(
        &self,
        id: &DepartmentId,
        request: &DepartmentRequest,
    ) -> Result<DepartmentDetail, DomainError> {
        let mut department = self.get_department_entity(id).await?;
        let code = normalize_code(request.code.as_deref())?;

        if let Some(existing) = self.departments.find_by_code(&code).await? {
            if existing.id != *id {
                return Err(duplicate_code(&code));
            }
        }

        mapper::update_entity(&mut department, request);
        let department = self.departments.update(&department).await?;

        tracing::info!(department_id = %department.id, code = %department.code, "Department updated");
        Ok(mapper::to_detail(&department))
    }

    /// Attach a new employee to a department
    pub async fn add_employee(
        &self,
        department_id: &DepartmentId,
        request: &EmployeeRequest,
    ) -> Result<EmployeeView, DomainError> {
        let mut department = self.get_department_entity(department_id).await?;

        let email = mapper::normalize_email(request.email.as_deref().unwrap_or_default());
        if let Some(existing) = self.employees.find_by_email(&email).await? {
            return Err(DomainError::AlreadyExists(format!(
                "Employee email already exists: {}",
                existing.email
            )));
        }

        if !valid_period(request.start_date, request.end_date) {
            return Err(DomainError::Validation(
                "Employee end date cannot be before start date".to_string(),
            ));
        }

        let employee = mapper::to_employee(&mut department, request);
        let employee = self.employees.create(&employee).await?;

        tracing::info!(
            department_id = %department_id,
            employee_id = %employee.id,
            "Employee added"
        );
        Ok(mapper::to_employee_response(&employee))
    }

    /// Remove an employee from the named department.
    ///
    /// An absent employee and an employee of another department are reported
    /// with the same `NotFound` error.
    pub async fn remove_employee(
        &self,
        department_id: &DepartmentId,
        employee_id: &EmployeeId,
    ) -> Result<(), DomainError> {
        let mut department = self.get_department_entity(department_id).await?;

        let employee = self
            .employees
            .find_by_id(employee_id)
            .await?
            .filter(|e| e.department_id == *department_id)
            .ok_or_else(|| {
                DomainError::NotFound(format!("Employee not found in department: {}", employee_id))
            })?;

        department.remove_employee(&employee.id);
        self.employees.delete(&employee.id).await?;

        tracing::info!(department_id = %department_id, employee_id = %employee_id, "Employee removed");
        Ok(())
    }

    /// Delete a department together with all of its employees
    pub async fn delete_department(&self, id: &DepartmentId) -> Result<(), DomainError> {
        let department = self.get_department_entity(id).await?;
        self.departments.delete(&department.id).await?;

        tracing::info!(
            department_id = %id,
            employees = department.employee_count(),
            "Department deleted"
        );
        Ok(())
    }

    pub async fn get_department(&self, id: &DepartmentId) -> Result<DepartmentDetail, DomainError> {
        let department = self.get_department_entity(id).await?;
        Ok(mapper::to_detail(&department))
    }

    /// List departments, optionally filtered by a name/code fragment.
    ///
    /// Sorted by name, ignoring case.
    pub async fn list_departments(
        &self,
        query: Option<&str>,
    ) -> Result<Vec<DepartmentSummary>, DomainError> {
        let query = query.map(str::trim).unwrap_or_default();
        let departments = if query.is_empty() {
            self.departments.find_all().await?
        } else {
            self.departments.search(query).await?
        };

        let mut summaries: Vec<DepartmentSummary> =
            departments.iter().map(mapper::to_summary).collect();
        summaries.sort_by_cached_key(|s| s.name.to_lowercase());
        Ok(summaries)
    }

    async fn get_department_entity(&self, id: &DepartmentId) -> Result<Department, DomainError> {
        self.departments
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Department not found: {}", id)))
    }
}

/// Upper-casing can lengthen a code ("ß" becomes "SS"), so the column
/// limit is checked on the normalized form
const MAX_CODE_CHARS: usize = 40;

fn normalize_code(code: Option<&str>) -> Result<String, DomainError> {
    let code = match code.map(str::trim) {
        Some(code) if !code.is_empty() => code.to_uppercase(),
        _ => {
            return Err(DomainError::Validation(
                "Department code is required".to_string(),
            ))
        }
    };

    if code.chars().count() > MAX_CODE_CHARS {
        return Err(DomainError::Validation(format!(
            "Department code must be less than {} characters",
            MAX_CODE_CHARS
        )));
    }
    Ok(code)
}

fn duplicate_code(code: &str) -> DomainError {
    DomainError::AlreadyExists(format!("Department code already exists: {}", code))
}
