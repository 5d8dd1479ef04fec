use axum::extract::{rejection::PathRejection, Path, State};
use serde_json::Value;

use crate::api::format::{planet_to_api_value, planets_to_api_value};
use crate::context::AppContext;
use crate::handlers::planet_id;
use crate::middleware::{ApiResponse, ApiResult};

/// GET /planets - every planet, ordered by id
pub async fn list(State(ctx): State<AppContext>) -> ApiResult<Value> {
    let planets = ctx.planets().list().await?;
    Ok(ApiResponse::success(planets_to_api_value(&planets)))
}

/// GET /planets/:planet_id
pub async fn get(
    State(ctx): State<AppContext>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Value> {
    let planet = ctx.planets().select_404(planet_id(path)?).await?;
    Ok(ApiResponse::success(planet_to_api_value(&planet)))
}
