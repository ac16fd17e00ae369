//! Request parsing helpers
//!
//! Handlers take `Result<Json<T>, JsonRejection>` and
//! `Result<Path<T>, PathRejection>` so that malformed input is reported in
//! the API's own error format instead of axum's plain-text rejections.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path,
    },
    Json,
};
use validator::Validate;

use crate::error::AppError;

/// Unwrap a JSON body and run its field validations
pub fn validated_body<T: Validate>(
    payload: Result<Json<T>, JsonRejection>,
) -> Result<T, AppError> {
    let Json(body) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    body.validate()?;
    Ok(body)
}

/// Unwrap path parameters
pub fn path_params<T>(path: Result<Path<T>, PathRejection>) -> Result<T, AppError> {
    path.map(|Path(params)| params)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::dto::DepartmentRequest;
    use crate::test_utils::department_request;

    #[test]
    fn valid_body_passes_through() {
        let body = validated_body(Ok(Json(department_request("Engineering", "eng")))).unwrap();
        assert_eq!(body.code.as_deref(), Some("eng"));
    }

    #[test]
    fn invalid_body_reports_fields() {
        let result = validated_body(Ok(Json(DepartmentRequest::default())));

        match result {
            Err(AppError::InvalidFields(fields)) => {
                assert_eq!(fields["name"], "Department name is required");
                assert_eq!(fields["code"], "Department code is required");
                assert_eq!(fields["annualBudget"], "Budget is required");
            }
            other => panic!("expected invalid fields, got {:?}", other),
        }
    }
}
