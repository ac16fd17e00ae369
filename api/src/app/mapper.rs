//! Department mapper
//!
//! Converts between domain entities and request/response shapes, applying
//! the normalization rules (trimming, case-folding) on the way in.

use crate::domain::entities::{
    Department, Employee, EmployeeId, EmploymentStatus, NewDepartment,
};

use super::dto::{DepartmentDetail, DepartmentRequest, DepartmentSummary, EmployeeRequest, EmployeeView};

pub fn to_summary(department: &Department) -> DepartmentSummary {
    DepartmentSummary {
        id: department.id.0,
        name: department.name.clone(),
        code: department.code.clone(),
        head: department.head.clone(),
        location: department.location.clone(),
        annual_budget: department.annual_budget,
        employee_count: department.employee_count(),
        updated_at: department.updated_at,
    }
}

/// Employees are ordered by last name, then first name (ordinal comparison)
pub fn to_detail(department: &Department) -> DepartmentDetail {
    let mut employees: Vec<&Employee> = department.employees.iter().collect();
    employees.sort_by(|a, b| {
        a.last_name
            .cmp(&b.last_name)
            .then_with(|| a.first_name.cmp(&b.first_name))
    });

    DepartmentDetail {
        id: department.id.0,
        name: department.name.clone(),
        code: department.code.clone(),
        description: department.description.clone(),
        location: department.location.clone(),
        head: department.head.clone(),
        annual_budget: department.annual_budget,
        created_at: department.created_at,
        updated_at: department.updated_at,
        employees: employees.into_iter().map(to_employee_response).collect(),
    }
}

/// Overwrite the mutable fields of `department`; its employees are untouched
pub fn update_entity(department: &mut Department, request: &DepartmentRequest) {
    let fields = to_new_department(request);
    department.name = fields.name;
    department.code = fields.code;
    department.description = fields.description;
    department.location = fields.location;
    department.head = fields.head;
    department.annual_budget = fields.annual_budget;
}

pub fn to_new_department(request: &DepartmentRequest) -> NewDepartment {
    NewDepartment {
        name: trim(request.name.as_deref()),
        code: trim(request.code.as_deref()).to_uppercase(),
        description: trim_to_none(request.description.as_deref()),
        location: trim_to_none(request.location.as_deref()),
        head: trim_to_none(request.head.as_deref()),
        annual_budget: request.annual_budget.unwrap_or_default(),
    }
}

/// Build a new employee and register it in the department's collection
pub fn to_employee(department: &mut Department, request: &EmployeeRequest) -> Employee {
    let employee = Employee {
        id: EmployeeId::new(),
        department_id: department.id,
        first_name: trim(request.first_name.as_deref()),
        last_name: trim(request.last_name.as_deref()),
        email: normalize_email(request.email.as_deref().unwrap_or_default()),
        job_title: trim_to_none(request.job_title.as_deref()),
        status: request.status.unwrap_or(EmploymentStatus::Active),
        start_date: request.start_date,
        end_date: request.end_date,
    };
    department.add_employee(employee.clone());
    employee
}

pub fn to_employee_response(employee: &Employee) -> EmployeeView {
    EmployeeView {
        id: employee.id.0,
        first_name: employee.first_name.clone(),
        last_name: employee.last_name.clone(),
        email: employee.email.clone(),
        job_title: employee.job_title.clone(),
        status: employee.status,
        start_date: employee.start_date,
        end_date: employee.end_date,
    }
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn trim(value: Option<&str>) -> String {
    value.map(str::trim).unwrap_or_default().to_string()
}

fn trim_to_none(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
