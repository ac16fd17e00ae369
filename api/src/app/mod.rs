//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and the HTTP shapes.

pub mod department_service;
pub mod dto;
pub mod mapper;
pub mod seed;

pub use department_service::DepartmentService;
pub use dto::{DepartmentDetail, DepartmentRequest, DepartmentSummary, EmployeeRequest};
pub use seed::seed_demo_data;
