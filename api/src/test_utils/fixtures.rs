//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid value that can be customized.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;

use crate::app::dto::{DepartmentRequest, EmployeeRequest};
use crate::domain::entities::{
    Department, DepartmentId, Employee, EmployeeId, EmploymentStatus, NewDepartment,
};

/// Create a valid department request
pub fn department_request(name: &str, code: &str) -> DepartmentRequest {
    DepartmentRequest {
        name: Some(name.to_string()),
        code: Some(code.to_string()),
        description: Some("Builds products".to_string()),
        location: Some("NY".to_string()),
        head: Some("Ada Lovelace".to_string()),
        annual_budget: Some(Decimal::new(1_000_000, 0)),
    }
}

/// Create a valid, active employee request
pub fn employee_request(first_name: &str, last_name: &str, email: &str) -> EmployeeRequest {
    EmployeeRequest {
        first_name: Some(first_name.to_string()),
        last_name: Some(last_name.to_string()),
        email: Some(email.to_string()),
        job_title: Some("Engineer".to_string()),
        status: Some(EmploymentStatus::Active),
        start_date: NaiveDate::from_ymd_opt(2010, 1, 10),
        end_date: None,
    }
}

/// Create normalized data for a department insert
pub fn new_department(name: &str, code: &str) -> NewDepartment {
    NewDepartment {
        name: name.to_string(),
        code: code.to_string(),
        description: None,
        location: None,
        head: None,
        annual_budget: Decimal::new(1_000_000, 0),
    }
}

/// Create a persisted-looking department with no employees
pub fn test_department(name: &str, code: &str) -> Department {
    Department {
        id: DepartmentId::new(),
        name: name.to_string(),
        code: code.to_string(),
        description: None,
        location: None,
        head: None,
        annual_budget: Decimal::new(1_000_000, 0),
        created_at: Utc::now(),
        updated_at: Utc::now(),
        employees: vec![],
    }
}

/// Create an active employee that is not attached to any stored department
pub fn test_employee(first_name: &str, last_name: &str, email: &str) -> Employee {
    Employee {
        id: EmployeeId::new(),
        department_id: DepartmentId::new(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: email.to_string(),
        job_title: None,
        status: EmploymentStatus::Active,
        start_date: None,
        end_date: None,
    }
}
