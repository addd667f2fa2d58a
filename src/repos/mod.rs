pub mod error;
pub mod user_repo;

pub use user_repo::{PgUserRepo, UserLookup, UserRow};
