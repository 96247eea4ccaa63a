//! User registration handlers.

use axum::{extract::State, response::Json, routing::post, Router};

use crate::api::extractors::JsonBody;
use crate::api::AppState;
use crate::domain::{NewUser, UserResponse};
use crate::errors::AppResult;

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new().route("/users", post(register_user))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/v1/users",
    tag = "Users",
    request_body = NewUser,
    responses(
        (status = 200, description = "User registered successfully", body = UserResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Email already registered")
    )
)]
pub async fn register_user(
    State(state): State<AppState>,
    JsonBody(draft): JsonBody<NewUser>,
) -> AppResult<Json<UserResponse>> {
    let user = state.registration_service.register(draft).await?;

    Ok(Json(UserResponse::from(user)))
}
