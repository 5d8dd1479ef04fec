// Handlers are split by security tier:
// public (no token) and protected (bearer token checked by middleware::require_bearer).
pub mod protected;
pub mod public;

use axum::extract::{rejection::PathRejection, Path};

use crate::error::ApiError;

/// Planet ids arrive as a path segment; anything but an integer is a 400.
pub(crate) fn planet_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, ApiError> {
    path.map(|Path(id)| id)
        .map_err(|rejection| ApiError::bad_request(rejection.body_text()))
}
