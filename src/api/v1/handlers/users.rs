/*
 * Responsibility
 * - 認証済み identity を返す /me
 * - /users/{user_id} の参照 (失敗は HttpError で error boundary へ)
 */
use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;

use crate::{
    api::v1::{dto::users::UserResponse, extractors::CurrentUserExtractor},
    error::HttpError,
    state::AppState,
};

pub async fn me(CurrentUserExtractor(current): CurrentUserExtractor) -> Json<UserResponse> {
    Json(current.user.into())
}

pub async fn get_user(
    State(state): State<AppState>,
    CurrentUserExtractor(_current): CurrentUserExtractor,
    Path(user_id): Path<String>,
) -> Result<Json<UserResponse>, HttpError> {
    let user_id = Uuid::parse_str(&user_id)
        .map_err(|_| HttpError::bad_request(format!("invalid user id: {user_id}")))?;

    let row = state
        .users
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| HttpError::not_found(format!("user {user_id} not found")))?;

    Ok(Json(row.into()))
}
