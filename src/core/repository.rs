use crate::domain::model::User;
use crate::domain::options::{Gender, Nationality};
use crate::domain::ports::{UserApi, UserStore};
use crate::utils::error::{RandomUserError, Result};

/// Couples the remote API with the local store.
pub struct UserRepository<A: UserApi, S: UserStore> {
    api: A,
    store: S,
}

impl<A: UserApi, S: UserStore> UserRepository<A, S> {
    pub fn new(api: A, store: S) -> Self {
        Self { api, store }
    }

    /// Fetch one user without persisting it.
    pub async fn get_random_user(&self, gender: Gender, nat: Nationality) -> Result<User> {
        let response = self.api.get_random_user(gender, nat).await?;
        response.into_first_user().ok_or_else(|| {
            tracing::warn!("API returned no users for gender={}, nat={}", gender, nat);
            RandomUserError::EmptyResult
        })
    }

    pub async fn fetch_and_save_user(&self, gender: Gender, nat: Nationality) -> Result<User> {
        let user = self.get_random_user(gender, nat).await?;
        self.store.insert_user(&user).await?;
        tracing::info!("Saved {} ({})", user.full_name(), user.key());
        Ok(user)
    }

    pub async fn users_from_db(&self) -> Result<Vec<User>> {
        self.store.all_users().await
    }

    pub async fn find_user(&self, uuid: &str) -> Result<Option<User>> {
        self.store.find_user(uuid).await
    }

    pub async fn clear_users(&self) -> Result<usize> {
        let removed = self.store.clear().await?;
        tracing::info!("Removed {} cached user(s)", removed);
        Ok(removed)
    }
}
