//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod department_repo;
pub mod employee_repo;
pub mod schema;


pub use department_repo::PostgresDepartmentRepository;
pub use employee_repo::PostgresEmployeeRepository;
pub use schema::ensure_schema;

use sea_orm::{DbErr, SqlErr};

use crate::error::DomainError;

/// Translate a failed write, turning unique-constraint violations into
/// `AlreadyExists` so a lost check-then-insert race reads like a duplicate
fn write_error(e: DbErr, duplicate: impl FnOnce() -> String) -> DomainError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => DomainError::AlreadyExists(duplicate()),
        _ => DomainError::Database(e.to_string()),
    }
}

/// Escape `%`, `_` and `\` so user input only ever matches literally
fn escape_like(fragment: &str) -> String {
    let mut escaped = String::with_capacity(fragment.len());
    for c in fragment.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
