/*
 * Responsibility
 * - Users の response DTO
 */
use serde::Serialize;
use uuid::Uuid;

use crate::repos::UserRow;

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub user_name: String,
    pub image_url: Option<String>,
}

impl From<UserRow> for UserResponse {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            user_name: row.user_name,
            image_url: row.image_url,
        }
    }
}
