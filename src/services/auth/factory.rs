/// Factory: build `AuthService` from application `Config`.
use std::sync::Arc;

use crate::config::Config;
use crate::repos::UserLookup;
use crate::services::auth::AuthService;

pub fn build_auth_service(config: &Config, users: Arc<dyn UserLookup>) -> Arc<AuthService> {
    Arc::new(AuthService::new(
        &config.token_secret,
        config.token_leeway_seconds,
        users,
    ))
}
