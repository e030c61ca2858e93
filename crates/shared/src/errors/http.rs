use crate::errors::{error::ErrorResponse, repository::RepositoryError, service::ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    NotFound(String),
    ServiceUnavailable(String),
    Internal(String),
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(errors) => HttpError::BadRequest(errors.join("; ")),

            ServiceError::NotFound(msg) => HttpError::NotFound(msg),

            ServiceError::CheckoutUnavailable(msg) => HttpError::ServiceUnavailable(msg),

            ServiceError::Repo(repo_err) => match repo_err {
                RepositoryError::NotFound => HttpError::NotFound("Not found".into()),
                _ => HttpError::Internal("Storage error".into()),
            },

            ServiceError::Internal(msg) | ServiceError::Custom(msg) => HttpError::Internal(msg),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            HttpError::ServiceUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse {
            status: "error".into(),
            message: msg,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_bad_request() {
        let err = HttpError::from(ServiceError::Validation(vec!["items must not be empty".into()]));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn missing_rows_map_to_not_found() {
        let service = HttpError::from(ServiceError::NotFound("order 42 not found".into()));
        assert_eq!(service.into_response().status(), StatusCode::NOT_FOUND);

        let repo = HttpError::from(ServiceError::Repo(RepositoryError::NotFound));
        assert_eq!(repo.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn storage_failures_map_to_internal_error() {
        let err = HttpError::from(ServiceError::Repo(RepositoryError::Sqlx(
            sqlx::Error::PoolClosed,
        )));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn disabled_checkout_maps_to_service_unavailable() {
        let err = HttpError::from(ServiceError::CheckoutUnavailable(
            "payment checkout is disabled".into(),
        ));
        assert_eq!(err.into_response().status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
