//! Request and response shapes for the department API
//!
//! Requests carry declarative field constraints checked by `validator`
//! before they reach the service. Responses are plain projections built by
//! the mapper.

use std::borrow::Cow;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::domain::entities::EmploymentStatus;

/// Body of `POST /api/departments` and `PUT /api/departments/:id`
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentRequest {
    #[validate(
        required(message = "Department name is required"),
        custom = "not_blank",
        length(max = 120, message = "Department name must be less than 120 characters")
    )]
    pub name: Option<String>,

    #[validate(
        required(message = "Department code is required"),
        custom = "not_blank",
        length(max = 40, message = "Department code must be less than 40 characters")
    )]
    pub code: Option<String>,

    #[validate(length(max = 500, message = "Description must be less than 500 characters"))]
    pub description: Option<String>,

    #[validate(length(max = 80, message = "Location must be less than 80 characters"))]
    pub location: Option<String>,

    #[validate(length(max = 80, message = "Department head must be less than 80 characters"))]
    pub head: Option<String>,

    #[validate(
        required(message = "Budget is required"),
        custom = "positive_budget"
    )]
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    pub annual_budget: Option<Decimal>,
}

/// Body of `POST /api/departments/:id/employees`
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRequest {
    #[validate(
        required(message = "First name is required"),
        custom = "not_blank",
        length(max = 60, message = "First name must be less than 60 characters")
    )]
    pub first_name: Option<String>,

    #[validate(
        required(message = "Last name is required"),
        custom = "not_blank",
        length(max = 60, message = "Last name must be less than 60 characters")
    )]
    pub last_name: Option<String>,

    #[validate(
        required(message = "Email is required"),
        custom = "not_blank",
        email(message = "Email address is invalid")
    )]
    pub email: Option<String>,

    #[validate(length(max = 80, message = "Job title must be less than 80 characters"))]
    pub job_title: Option<String>,

    #[validate(required(message = "Employment status is required"))]
    pub status: Option<EmploymentStatus>,

    pub start_date: Option<NaiveDate>,

    pub end_date: Option<NaiveDate>,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some(Cow::from("must not be blank"));
        return Err(error);
    }
    Ok(())
}

fn positive_budget(value: &Decimal) -> Result<(), ValidationError> {
    if *value <= Decimal::ZERO {
        let mut error = ValidationError::new("positive");
        error.message = Some(Cow::from("Budget must be greater than zero"));
        return Err(error);
    }
    Ok(())
}

/// Condensed department projection for list endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentSummary {
    pub id: Uuid,
    pub name: String,
    pub code: String,
    pub head: Option<String>,
    pub location: Option<String>,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub annual_budget: Decimal,
    pub employee_count: usize,
    pub updated_at: DateTime<Utc>,
}

/// Full department projection including its sorted employees
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentDetail {
    pub id: Uuid,
    pub name: String,
    pub code: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub head: Option<String>,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub annual_budget: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub employees: Vec<EmployeeView>,
}

/// Employee projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeView {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub job_title: Option<String>,
    pub status: EmploymentStatus,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}
