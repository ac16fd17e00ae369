//! PostgreSQL adapter for DepartmentRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::{Expr, Func, LikeExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, Set, TransactionTrait,
};
use uuid::Uuid;

use crate::domain::entities::{Department, DepartmentId, Employee, NewDepartment};
use crate::domain::ports::DepartmentRepository;
use crate::entity::{departments, employees};
use crate::error::DomainError;

use super::{escape_like, write_error};

/// PostgreSQL implementation of DepartmentRepository
pub struct PostgresDepartmentRepository {
    db: DatabaseConnection,
}

impl PostgresDepartmentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Load departments matching `condition` together with their employees
    async fn find_with_employees(&self, condition: Condition) -> Result<Vec<Department>, DomainError> {
        let results = departments::Entity::find()
            .filter(condition)
            .find_with_related(employees::Entity)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results
            .into_iter()
            .map(|(department, employees)| into_department(department, employees))
            .collect())
    }
}

#[async_trait]
impl DepartmentRepository for PostgresDepartmentRepository {
    async fn find_by_id(&self, id: &DepartmentId) -> Result<Option<Department>, DomainError> {
        let results = self
            .find_with_employees(Condition::all().add(departments::Column::Id.eq(id.0)))
            .await?;

        Ok(results.into_iter().next())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Department>, DomainError> {
        let condition = Condition::all().add(
            Expr::expr(Func::upper(Expr::col((
                departments::Entity,
                departments::Column::Code,
            ))))
            .eq(code.trim().to_uppercase()),
        );

        Ok(self.find_with_employees(condition).await?.into_iter().next())
    }

    async fn exists_by_code(&self, code: &str) -> Result<bool, DomainError> {
        let count = departments::Entity::find()
            .filter(
                Expr::expr(Func::upper(Expr::col(departments::Column::Code)))
                    .eq(code.trim().to_uppercase()),
            )
            .count(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(count > 0)
    }

    async fn find_all(&self) -> Result<Vec<Department>, DomainError> {
        self.find_with_employees(Condition::all()).await
    }

    async fn search(&self, fragment: &str) -> Result<Vec<Department>, DomainError> {
        let pattern = format!("%{}%", escape_like(&fragment.to_lowercase()));
        let contains = |column: departments::Column| {
            Expr::expr(Func::lower(Expr::col((departments::Entity, column))))
                .like(LikeExpr::new(pattern.clone()).escape('\\'))
        };

        let condition = Condition::any()
            .add(contains(departments::Column::Name))
            .add(contains(departments::Column::Code));

        self.find_with_employees(condition).await
    }

    async fn create(&self, department: &NewDepartment) -> Result<Department, DomainError> {
        let now = Utc::now().fixed_offset();

        let model = departments::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(department.name.clone()),
            code: Set(department.code.clone()),
            description: Set(department.description.clone()),
            location: Set(department.location.clone()),
            head: Set(department.head.clone()),
            annual_budget: Set(department.annual_budget),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(&self.db).await.map_err(|e| {
            write_error(e, || {
                format!("Department code already exists: {}", department.code)
            })
        })?;

        Ok(into_department(result, vec![]))
    }

    async fn update(&self, department: &Department) -> Result<Department, DomainError> {
        let result = departments::ActiveModel {
            id: Set(department.id.0),
            name: Set(department.name.clone()),
            code: Set(department.code.clone()),
            description: Set(department.description.clone()),
            location: Set(department.location.clone()),
            head: Set(department.head.clone()),
            annual_budget: Set(department.annual_budget),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .map_err(|e| match e {
            DbErr::RecordNotUpdated => {
                DomainError::NotFound(format!("Department {} not found", department.id))
            }
            e => write_error(e, || {
                format!("Department code already exists: {}", department.code)
            }),
        })?;

        let mut updated = into_department(result, vec![]);
        updated.employees = department.employees.clone();
        Ok(updated)
    }

    async fn delete(&self, id: &DepartmentId) -> Result<(), DomainError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        employees::Entity::delete_many()
            .filter(employees::Column::DepartmentId.eq(id.0))
            .exec(&txn)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        let result = departments::Entity::delete_by_id(id.0)
            .exec(&txn)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        // Dropping the transaction without commit rolls the employee delete back
        if result.rows_affected == 0 {
            return Err(DomainError::NotFound(format!("Department {} not found", id)));
        }

        txn.commit()
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }
}

/// Convert SeaORM models to the domain aggregate
fn into_department(model: departments::Model, employees: Vec<employees::Model>) -> Department {
    Department {
        id: DepartmentId(model.id),
        name: model.name,
        code: model.code,
        description: model.description,
        location: model.location,
        head: model.head,
        annual_budget: model.annual_budget,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
        employees: employees.into_iter().map(Employee::from).collect(),
    }
}
