/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - /health は公開、/me と /users/{user_id} は Bearer 必須
 */
use axum::{Router, routing::get};

use crate::middleware;
use crate::state::AppState;

use crate::api::v1::handlers::{
    health::health,
    users::{get_user, me},
};

pub fn routes(state: AppState) -> Router<AppState> {
    let public = Router::new().route("/health", get(health));

    let protected = Router::new()
        .route("/me", get(me))
        .route("/users/{user_id}", get(get_user));
    let protected = middleware::auth::access::apply(protected, state);

    public.merge(protected)
}
