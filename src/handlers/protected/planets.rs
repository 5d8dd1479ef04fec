use axum::extract::{rejection::PathRejection, Extension, Path, State};

use crate::api::format::planet_to_api_value;
use crate::context::AppContext;
use crate::database::repository::PLANET_NAME_TAKEN;
use crate::database::{NewPlanet, PlanetChanges};
use crate::error::ApiError;
use crate::handlers::planet_id;
use crate::middleware::{ApiResponse, ApiResult, AuthUser, JsonOrForm, Message};

/// POST /planets - add a planet; the name must not be taken
pub async fn create(
    State(ctx): State<AppContext>,
    Extension(user): Extension<AuthUser>,
    JsonOrForm(payload): JsonOrForm<NewPlanet>,
) -> ApiResult<Message> {
    let new_planet = payload.validated()?;
    let planets = ctx.planets();

    if planets.name_exists(&new_planet.planet_name).await? {
        return Err(ApiError::conflict(PLANET_NAME_TAKEN));
    }

    let planet = planets.insert(new_planet).await?;
    tracing::info!(user = %user.email, planet_id = planet.planet_id, "Planet added");

    Ok(ApiResponse::created(Message::with_record(
        "You added a planet",
        planet_to_api_value(&planet),
    )))
}

/// PUT /planets/:planet_id - change only the supplied fields
pub async fn update(
    State(ctx): State<AppContext>,
    Extension(user): Extension<AuthUser>,
    path: Result<Path<i64>, PathRejection>,
    JsonOrForm(payload): JsonOrForm<PlanetChanges>,
) -> ApiResult<Message> {
    let planet_id = planet_id(path)?;
    let changes = payload.validated()?;

    let planet = ctx.planets().update(planet_id, changes).await?;
    tracing::info!(user = %user.email, planet_id, "Planet updated");

    Ok(ApiResponse::accepted(Message::with_record(
        "You updated a planet",
        planet_to_api_value(&planet),
    )))
}

/// DELETE /planets/:planet_id
pub async fn delete(
    State(ctx): State<AppContext>,
    Extension(user): Extension<AuthUser>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Message> {
    let planet_id = planet_id(path)?;

    ctx.planets().delete(planet_id).await?;
    tracing::info!(user = %user.email, planet_id, "Planet deleted");

    Ok(ApiResponse::accepted(Message::new("You deleted a planet")))
}
