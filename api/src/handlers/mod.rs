//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod departments;
pub mod extract;

pub use departments::{
    add_employee, create_department, delete_department, get_department, list_departments,
    remove_employee, update_department,
};
