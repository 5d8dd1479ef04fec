use axum::extract::State;
use serde::{Deserialize, Serialize};

use crate::auth::generate_jwt;
use crate::context::AppContext;
use crate::database::FieldCheck;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, JsonOrForm};

const BAD_CREDENTIALS: &str = "Bad email or password";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub access_token: String,
}

/// POST /login - exchange email and password for a bearer token
///
/// The password must equal the stored one exactly. Unknown email and wrong
/// password give the same 401 so callers cannot fish for accounts.
pub async fn login(
    State(ctx): State<AppContext>,
    JsonOrForm(payload): JsonOrForm<LoginRequest>,
) -> ApiResult<LoginResponse> {
    let mut check = FieldCheck::new();
    let email = check.text("email", payload.email);
    let password = check.verbatim("password", payload.password);
    check.finish()?;

    let user = match ctx.users().find_by_email(&email).await? {
        Some(user) if user.password_matches(&password) => user,
        Some(_) => {
            tracing::warn!(email = %email, "Login failed: wrong password");
            return Err(ApiError::unauthorized(BAD_CREDENTIALS));
        }
        None => {
            tracing::warn!(email = %email, "Login failed: unknown email");
            return Err(ApiError::unauthorized(BAD_CREDENTIALS));
        }
    };

    let access_token = generate_jwt(&user.email, &ctx.config.security)?;
    tracing::info!(user_id = user.id, "Login succeeded");

    Ok(ApiResponse::success(LoginResponse {
        message: "Login succeeded!".to_string(),
        access_token,
    }))
}
