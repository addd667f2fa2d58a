/*
 * Responsibility
 * - Handler から見える「認証済み identity」の型
 * - middleware が解決して request extensions に格納し、handler はこの型だけを受け取る
 *
 * Notes
 * - token 検証と user lookup は middleware/services 側の責務
 */

use crate::repos::UserRow;

/// 認証済みのリクエストに付与される identity
///
/// - `user` は token の `userId` で引いた users の行そのもの
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user: UserRow,
}

impl CurrentUser {
    pub fn new(user: UserRow) -> Self {
        Self { user }
    }
}
