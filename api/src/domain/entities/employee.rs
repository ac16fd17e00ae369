//! Employee domain entity
//!
//! A person record attached to exactly one department.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::department::DepartmentId;

/// Unique identifier for an employee
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmployeeId(pub Uuid);

impl EmployeeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EmployeeId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for EmployeeId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Employment status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmploymentStatus {
    Active,
    OnLeave,
    Terminated,
}

impl std::fmt::Display for EmploymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmploymentStatus::Active => write!(f, "ACTIVE"),
            EmploymentStatus::OnLeave => write!(f, "ON_LEAVE"),
            EmploymentStatus::Terminated => write!(f, "TERMINATED"),
        }
    }
}

impl std::str::FromStr for EmploymentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ACTIVE" => Ok(EmploymentStatus::Active),
            "ON_LEAVE" => Ok(EmploymentStatus::OnLeave),
            "TERMINATED" => Ok(EmploymentStatus::Terminated),
            _ => Err(format!("Unknown employment status: {}", s)),
        }
    }
}

/// An employee of a department
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: EmployeeId,
    /// Navigational back-reference to the owning department
    pub department_id: DepartmentId,
    pub first_name: String,
    pub last_name: String,
    /// Always stored trimmed and lower-cased
    pub email: String,
    pub job_title: Option<String>,
    pub status: EmploymentStatus,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// Check that an employment period does not end before it starts.
/// An open-ended or partially known period is always valid.
pub fn valid_period(start: Option<NaiveDate>, end: Option<NaiveDate>) -> bool {
    match (start, end) {
        (Some(start), Some(end)) => end >= start,
        _ => true,
    }
}
