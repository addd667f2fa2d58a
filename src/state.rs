/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - users: 主キー lookup (PgPool を内包), auth: AuthService
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
use std::sync::Arc;

use crate::repos::UserLookup;
use crate::services::auth::AuthService;

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserLookup>,
    pub auth: Arc<AuthService>,
}

impl AppState {
    pub fn new(users: Arc<dyn UserLookup>, auth: Arc<AuthService>) -> Self {
        Self { users, auth }
    }
}
