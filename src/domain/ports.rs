use crate::domain::model::{ApiResponse, User};
use crate::domain::options::{Gender, Nationality};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Remote source of generated profiles.
#[async_trait]
pub trait UserApi: Send + Sync {
    async fn get_random_user(&self, gender: Gender, nat: Nationality) -> Result<ApiResponse>;
}

/// Local cache of fetched profiles.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Append a record under a freshly generated local id.
    async fn insert_user(&self, user: &User) -> Result<()>;

    /// Every stored record, newest first.
    async fn all_users(&self) -> Result<Vec<User>>;

    async fn find_user(&self, uuid: &str) -> Result<Option<User>>;

    /// Remove every record, returning how many were dropped.
    async fn clear(&self) -> Result<usize>;
}
