//! Department domain entity
//!
//! An organizational unit with a unique code that owns its employees.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::employee::Employee;

/// Unique identifier for a department
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DepartmentId(pub Uuid);

impl DepartmentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for DepartmentId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for DepartmentId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for DepartmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A department together with its fully loaded employee collection
#[derive(Debug, Clone)]
pub struct Department {
    pub id: DepartmentId,
    pub name: String,
    /// Always stored trimmed and upper-cased
    pub code: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub head: Option<String>,
    pub annual_budget: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub employees: Vec<Employee>,
}

impl Department {
    pub fn employee_count(&self) -> usize {
        self.employees.len()
    }

    /// Attach an employee to this department's collection
    pub fn add_employee(&mut self, mut employee: Employee) {
        employee.department_id = self.id;
        self.employees.push(employee);
    }

    /// Detach an employee, returning it if it was part of the collection
    pub fn remove_employee(&mut self, employee_id: &super::EmployeeId) -> Option<Employee> {
        let index = self.employees.iter().position(|e| &e.id == employee_id)?;
        Some(self.employees.remove(index))
    }
}

/// Normalized data for a department that has not been persisted yet
#[derive(Debug, Clone)]
pub struct NewDepartment {
    pub name: String,
    pub code: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub head: Option<String>,
    pub annual_budget: Decimal,
}
