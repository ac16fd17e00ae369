//! PostgreSQL adapter for EmployeeRepository

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use crate::domain::entities::{DepartmentId, Employee, EmployeeId, EmploymentStatus};
use crate::domain::ports::EmployeeRepository;
use crate::entity::employees;
use crate::error::DomainError;

use super::write_error;

/// PostgreSQL implementation of EmployeeRepository
pub struct PostgresEmployeeRepository {
    db: DatabaseConnection,
}

impl PostgresEmployeeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EmployeeRepository for PostgresEmployeeRepository {
    async fn find_by_id(&self, id: &EmployeeId) -> Result<Option<Employee>, DomainError> {
        let result = employees::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, DomainError> {
        let result = employees::Entity::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(employees::Column::Email)))
                    .eq(email.trim().to_lowercase()),
            )
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn create(&self, employee: &Employee) -> Result<Employee, DomainError> {
        let model = employees::ActiveModel {
            id: Set(employee.id.0),
            department_id: Set(employee.department_id.0),
            first_name: Set(employee.first_name.clone()),
            last_name: Set(employee.last_name.clone()),
            email: Set(employee.email.clone()),
            job_title: Set(employee.job_title.clone()),
            status: Set(employee.status.to_string()),
            start_date: Set(employee.start_date),
            end_date: Set(employee.end_date),
        };

        let result = model.insert(&self.db).await.map_err(|e| {
            write_error(e, || {
                format!("Employee email already exists: {}", employee.email)
            })
        })?;

        Ok(result.into())
    }

    async fn delete(&self, id: &EmployeeId) -> Result<(), DomainError> {
        let result = employees::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        if result.rows_affected == 0 {
            Err(DomainError::NotFound(format!("Employee {} not found", id)))
        } else {
            Ok(())
        }
    }
}

/// Convert SeaORM model to domain entity
impl From<employees::Model> for Employee {
    fn from(model: employees::Model) -> Self {
        Employee {
            id: EmployeeId(model.id),
            department_id: DepartmentId(model.department_id),
            first_name: model.first_name,
            last_name: model.last_name,
            email: model.email,
            job_title: model.job_title,
            status: model.status.parse().unwrap_or(EmploymentStatus::Active),
            start_date: model.start_date,
            end_date: model.end_date,
        }
    }
}
