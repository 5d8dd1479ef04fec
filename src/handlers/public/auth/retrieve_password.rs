use axum::extract::{Path, State};

use crate::context::AppContext;
use crate::error::ApiError;
use crate::mail::password_reminder;
use crate::middleware::{ApiResponse, ApiResult, Message};

/// GET /retrieve_password/:email - mail the stored password to its owner
pub async fn retrieve_password(
    State(ctx): State<AppContext>,
    Path(email): Path<String>,
) -> ApiResult<Message> {
    let user = ctx
        .users()
        .find_by_email(&email)
        .await?
        .ok_or_else(|| ApiError::unauthorized("That email doesn't exist"))?;

    let message = password_reminder(&ctx.config.mail.sender, &user.email, &user.password);
    ctx.mailer.send(message).await.map_err(|e| {
        tracing::error!(email = %user.email, "Password mail failed: {}", e);
        ApiError::service_unavailable("Could not send email, try again later")
    })?;

    Ok(ApiResponse::success(Message::new(format!("Password sent to {}", user.email))))
}
