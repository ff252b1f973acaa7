use crate::domain::model::User;
use crate::domain::ports::UserStore;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Session-only store used when caching is disabled. Holds users newest first.
#[derive(Debug, Clone, Default)]
pub struct MemoryUserStore {
    users: Arc<Mutex<Vec<User>>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn insert_user(&self, user: &User) -> Result<()> {
        self.users.lock().await.insert(0, user.clone());
        Ok(())
    }

    async fn all_users(&self) -> Result<Vec<User>> {
        Ok(self.users.lock().await.clone())
    }

    async fn find_user(&self, uuid: &str) -> Result<Option<User>> {
        let users = self.users.lock().await;
        Ok(users.iter().find(|u| u.uuid() == Some(uuid)).cloned())
    }

    async fn clear(&self) -> Result<usize> {
        let mut users = self.users.lock().await;
        let removed = users.len();
        users.clear();
        Ok(removed)
    }
}
