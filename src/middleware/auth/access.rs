//! access token（HS256 JWT）検証 → CurrentUser を extensions に入れる
//!
//! - `Authorization: Bearer <jwt>` を検証し、`userId` で users を引く
//! - 失敗は全て `AuthError` 1 本で返す（401 か、lookup 障害なら 500）

use axum::{
    Router,
    body::Body,
    extract::State,
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::api::v1::extractors::CurrentUser;
use crate::services::auth::AuthError;
use crate::state::AppState;

/// 認証が必要な routes に middleware を適用する。
///
/// `route_layer` なので、マッチしなかったパスは認証されず 404 fallback に落ちる。
///
/// 例：
/// ```ignore
/// let protected = Router::new().route("/me", get(me));
/// let protected = middleware::auth::access::apply(protected, state.clone());
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    // axum 0.8 の from_fn は State extractor を受け取れないため、`from_fn_with_state` で明示的に state を渡す
    router.route_layer(middleware::from_fn_with_state(state, access_middleware))
}

async fn access_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AuthError> {
    let user = match state.auth.authenticate(req.headers()).await {
        Ok(user) => user,
        Err(err) => {
            if err.is_rejection() {
                tracing::warn!(error = %err, "access token rejected");
            }
            return Err(err);
        }
    };

    // middleware → extractor への受け渡し
    req.extensions_mut().insert(CurrentUser::new(user));

    Ok(next.run(req).await)
}
