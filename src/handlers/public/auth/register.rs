use axum::extract::State;
use serde::Deserialize;

use crate::api::format::user_to_api_value;
use crate::context::AppContext;
use crate::database::repository::EMAIL_TAKEN;
use crate::database::{FieldCheck, NewUser, RecordError};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, JsonOrForm, Message};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegisterRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl RegisterRequest {
    /// All four fields are required; every missing one is reported.
    pub fn into_new_user(self) -> Result<NewUser, RecordError> {
        let mut check = FieldCheck::new();
        let user = NewUser {
            first_name: check.text("first_name", self.first_name),
            last_name: check.text("last_name", self.last_name),
            email: check.text("email", self.email),
            password: check.verbatim("password", self.password),
        };
        check.finish()?;
        Ok(user)
    }
}

/// POST /register - create a user account
///
/// Accepts JSON or form fields `first_name`, `last_name`, `email`, `password`.
/// Answers 201 on success, 409 when the email is taken, 400 on missing fields.
pub async fn register(
    State(ctx): State<AppContext>,
    JsonOrForm(payload): JsonOrForm<RegisterRequest>,
) -> ApiResult<Message> {
    let new_user = payload.into_new_user()?;
    let users = ctx.users();

    if users.find_by_email(&new_user.email).await?.is_some() {
        return Err(ApiError::conflict(EMAIL_TAKEN));
    }

    // The unique index still catches a concurrent registration
    let user = users.insert(new_user).await?;
    tracing::info!(user_id = user.id, email = %user.email, "User registered");

    Ok(ApiResponse::created(Message::with_record(
        "User created successfully.",
        user_to_api_value(&user),
    )))
}
