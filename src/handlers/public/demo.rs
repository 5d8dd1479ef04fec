// Parameter-handling demo routes. No state, two outcomes.
use axum::extract::{
    rejection::{PathRejection, QueryRejection},
    Path, Query,
};
use serde::Deserialize;

use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, Message};

const ADULT_AGE: i64 = 18;

#[derive(Debug, Deserialize)]
pub struct AgeParams {
    pub name: String,
    pub age: i64,
}

fn check_age(name: &str, age: i64) -> ApiResult<Message> {
    if age < ADULT_AGE {
        return Err(ApiError::unauthorized(format!("Sorry {}, you are not old enough.", name)));
    }
    Ok(ApiResponse::success(Message::new(format!("Welcome {}, you are old enough!", name))))
}

/// GET /super_simple
pub async fn super_simple() -> ApiResult<Message> {
    Ok(ApiResponse::success(Message::new("Hello from the super simple Planetary API. boo yah")))
}

/// GET /not_found
pub async fn not_found() -> ApiError {
    ApiError::not_found("That resource was not found")
}

/// GET /parameters?name=..&age=..
pub async fn parameters(query: Result<Query<AgeParams>, QueryRejection>) -> ApiResult<Message> {
    let Query(params) = query.map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;
    check_age(&params.name, params.age)
}

/// GET /url_parameters/:name/:age
pub async fn url_parameters(path: Result<Path<(String, i64)>, PathRejection>) -> ApiResult<Message> {
    let Path((name, age)) = path.map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;
    check_age(&name, age)
}
