//! Translation of registry rejections into HTTP responses.

use crate::dto::ErrorRes;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use clinic_core::{ClinicError, ErrorKind, UnavailableReason};

/// A registry rejection on its way back to an HTTP client.
#[derive(Debug)]
pub struct ApiError(pub ClinicError);

impl From<ClinicError> for ApiError {
    fn from(err: ClinicError) -> Self {
        Self(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0.kind() {
            ErrorKind::Validation | ErrorKind::InvalidSpecialty | ErrorKind::InvalidPrescription => {
                StatusCode::BAD_REQUEST
            }
            ErrorKind::PatientNotFound => StatusCode::NOT_FOUND,
            ErrorKind::PhysicianUnavailable => match &self.0 {
                ClinicError::PhysicianUnavailable {
                    reason: UnavailableReason::UnknownLicense,
                    ..
                } => StatusCode::NOT_FOUND,
                _ => StatusCode::UNPROCESSABLE_ENTITY,
            },
            ErrorKind::DuplicateRecord | ErrorKind::SlotTaken => StatusCode::CONFLICT,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!("request rejected ({}): {}", status, self.0);
        let body = ErrorRes {
            kind: self.0.kind().as_str().to_string(),
            message: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
