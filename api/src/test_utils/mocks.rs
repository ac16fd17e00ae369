//! In-memory implementations of the repository ports
//!
//! Both repositories read and write the same tables, mirroring the two
//! tables of the real schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{Department, DepartmentId, Employee, EmployeeId, NewDepartment};
use crate::domain::ports::{DepartmentRepository, EmployeeRepository};
use crate::error::DomainError;

/// A department row without its employee collection
#[derive(Debug, Clone)]
struct DepartmentRow {
    id: DepartmentId,
    name: String,
    code: String,
    description: Option<String>,
    location: Option<String>,
    head: Option<String>,
    annual_budget: Decimal,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(Default)]
struct Tables {
    departments: HashMap<DepartmentId, DepartmentRow>,
    employees: HashMap<EmployeeId, Employee>,
}

impl Tables {
    fn load(&self, row: &DepartmentRow) -> Department {
        Department {
            id: row.id,
            name: row.name.clone(),
            code: row.code.clone(),
            description: row.description.clone(),
            location: row.location.clone(),
            head: row.head.clone(),
            annual_budget: row.annual_budget,
            created_at: row.created_at,
            updated_at: row.updated_at,
            employees: self
                .employees
                .values()
                .filter(|e| e.department_id == row.id)
                .cloned()
                .collect(),
        }
    }

    fn code_taken(&self, code: &str, except: Option<DepartmentId>) -> bool {
        self.departments
            .values()
            .any(|d| Some(d.id) != except && d.code.eq_ignore_ascii_case(code))
    }
}

/// Shared in-memory store handing out both repositories
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn departments(&self) -> InMemoryDepartmentRepository {
        InMemoryDepartmentRepository {
            tables: self.tables.clone(),
        }
    }

    pub fn employees(&self) -> InMemoryEmployeeRepository {
        InMemoryEmployeeRepository {
            tables: self.tables.clone(),
        }
    }

    pub fn department_count(&self) -> usize {
        self.tables.read().unwrap().departments.len()
    }

    pub fn employee_count(&self) -> usize {
        self.tables.read().unwrap().employees.len()
    }
}

// ============================================================================
// In-Memory Department Repository
// ============================================================================

pub struct InMemoryDepartmentRepository {
    tables: Arc<RwLock<Tables>>,
}

#[async_trait]
impl DepartmentRepository for InMemoryDepartmentRepository {
    async fn find_by_id(&self, id: &DepartmentId) -> Result<Option<Department>, DomainError> {
        let tables = self.tables.read().unwrap();
        Ok(tables.departments.get(id).map(|row| tables.load(row)))
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Department>, DomainError> {
        let tables = self.tables.read().unwrap();
        Ok(tables
            .departments
            .values()
            .find(|d| d.code.eq_ignore_ascii_case(code))
            .map(|row| tables.load(row)))
    }

    async fn exists_by_code(&self, code: &str) -> Result<bool, DomainError> {
        let tables = self.tables.read().unwrap();
        Ok(tables.code_taken(code, None))
    }

    async fn find_all(&self) -> Result<Vec<Department>, DomainError> {
        let tables = self.tables.read().unwrap();
        Ok(tables
            .departments
            .values()
            .map(|row| tables.load(row))
            .collect())
    }

    async fn search(&self, fragment: &str) -> Result<Vec<Department>, DomainError> {
        let fragment = fragment.to_lowercase();
        let tables = self.tables.read().unwrap();
        Ok(tables
            .departments
            .values()
            .filter(|d| {
                d.name.to_lowercase().contains(&fragment)
                    || d.code.to_lowercase().contains(&fragment)
            })
            .map(|row| tables.load(row))
            .collect())
    }

    async fn create(&self, department: &NewDepartment) -> Result<Department, DomainError> {
        let mut tables = self.tables.write().unwrap();
        if tables.code_taken(&department.code, None) {
            return Err(DomainError::AlreadyExists(format!(
                "Department code already exists: {}",
                department.code
            )));
        }

        let now = Utc::now();
        let row = DepartmentRow {
            id: DepartmentId::new(),
            name: department.name.clone(),
            code: department.code.clone(),
            description: department.description.clone(),
            location: department.location.clone(),
            head: department.head.clone(),
            annual_budget: department.annual_budget,
            created_at: now,
            updated_at: now,
        };
        let loaded = tables.load(&row);
        tables.departments.insert(row.id, row);
        Ok(loaded)
    }

    async fn update(&self, department: &Department) -> Result<Department, DomainError> {
        let mut tables = self.tables.write().unwrap();
        if tables.code_taken(&department.code, Some(department.id)) {
            return Err(DomainError::AlreadyExists(format!(
                "Department code already exists: {}",
                department.code
            )));
        }

        let row = tables
            .departments
            .get_mut(&department.id)
            .ok_or_else(|| DomainError::NotFound(format!("Department {} not found", department.id)))?;
        row.name = department.name.clone();
        row.code = department.code.clone();
        row.description = department.description.clone();
        row.location = department.location.clone();
        row.head = department.head.clone();
        row.annual_budget = department.annual_budget;
        row.updated_at = Utc::now();

        let row = row.clone();
        Ok(tables.load(&row))
    }

    async fn delete(&self, id: &DepartmentId) -> Result<(), DomainError> {
        let mut tables = self.tables.write().unwrap();
        if tables.departments.remove(id).is_none() {
            return Err(DomainError::NotFound(format!("Department {} not found", id)));
        }
        tables.employees.retain(|_, e| e.department_id != *id);
        Ok(())
    }
}

// ============================================================================
// In-Memory Employee Repository
// ============================================================================

pub struct InMemoryEmployeeRepository {
    tables: Arc<RwLock<Tables>>,
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn find_by_id(&self, id: &EmployeeId) -> Result<Option<Employee>, DomainError> {
        let tables = self.tables.read().unwrap();
        Ok(tables.employees.get(id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, DomainError> {
        let tables = self.tables.read().unwrap();
        Ok(tables
            .employees
            .values()
            .find(|e| e.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn create(&self, employee: &Employee) -> Result<Employee, DomainError> {
        let mut tables = self.tables.write().unwrap();
        if !tables.departments.contains_key(&employee.department_id) {
            return Err(DomainError::Database(format!(
                "foreign key violation: department {} does not exist",
                employee.department_id
            )));
        }
        if tables
            .employees
            .values()
            .any(|e| e.email.eq_ignore_ascii_case(&employee.email))
        {
            return Err(DomainError::AlreadyExists(format!(
                "Employee email already exists: {}",
                employee.email
            )));
        }

        tables.employees.insert(employee.id, employee.clone());
        Ok(employee.clone())
    }

    async fn delete(&self, id: &EmployeeId) -> Result<(), DomainError> {
        let mut tables = self.tables.write().unwrap();
        match tables.employees.remove(id) {
            Some(_) => Ok(()),
            None => Err(DomainError::NotFound(format!("Employee {} not found", id))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{new_department, test_employee};

    #[tokio::test]
    async fn unique_code_is_enforced_by_store() {
        let store = InMemoryStore::new();
        let departments = store.departments();

        departments.create(&new_department("Engineering", "ENG")).await.unwrap();
        let result = departments.create(&new_department("Other", "eng")).await;

        assert!(matches!(result, Err(DomainError::AlreadyExists(_))));
    }

    #[tokio::test]
    async fn employee_requires_existing_department() {
        let store = InMemoryStore::new();
        let employee = test_employee("Grace", "Hopper", "grace@example.com");

        let result = store.employees().create(&employee).await;

        assert!(matches!(result, Err(DomainError::Database(_))));
    }
}
