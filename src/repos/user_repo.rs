/*
 * Responsibility
 * - users テーブルから主キーで 1 件引く (認証時の identity 解決)
 * - PgPool は起動時に 1 度だけ作り、ここに注入する
 * - DB エラーは RepoError で返す (HttpError への変換は上位)
 */
use async_trait::async_trait;
use serde::Serialize;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::repos::error::RepoResult;

// 主キー `id` で引く (token の `userId` claim の値)
const FIND_BY_ID_SQL: &str = r#"
    SELECT id, "userName", "imageUrl"
    FROM users
    WHERE id = $1
"#;

#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct UserRow {
    pub id: Uuid,
    #[sqlx(rename = "userName")]
    pub user_name: String,
    #[sqlx(rename = "imageUrl")]
    pub image_url: Option<String>,
}

/// Primary-key lookup of user records.
///
/// Implementations must be safe to share across requests (typically a pool handle).
#[async_trait]
pub trait UserLookup: Send + Sync + 'static {
    // `Ok(None)` means the user does not exist; `Err` is a backend failure.
    async fn find_by_id(&self, user_id: Uuid) -> RepoResult<Option<UserRow>>;
}

#[derive(Clone, Debug)]
pub struct PgUserRepo {
    db: PgPool,
}

impl PgUserRepo {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserLookup for PgUserRepo {
    async fn find_by_id(&self, user_id: Uuid) -> RepoResult<Option<UserRow>> {
        let row = sqlx::query_as::<_, UserRow>(FIND_BY_ID_SQL)
            .bind(user_id)
            .fetch_optional(&self.db)
            .await?;

        Ok(row)
    }
}
