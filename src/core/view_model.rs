use crate::core::repository::UserRepository;
use crate::domain::model::User;
use crate::domain::options::{Gender, Nationality};
use crate::domain::ports::{UserApi, UserStore};
use crate::utils::error::Result;
use std::sync::Mutex;
use tokio::sync::{mpsc, watch};

#[derive(Debug, Clone, PartialEq)]
pub enum UserListUiState {
    Idle,
    Loading,
    Success(Vec<User>),
    Error(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationEvent {
    NavigateToUserList,
}

/// Turns repository calls into observable list state plus a one-shot
/// navigation signal.
///
/// `ui_state` and `selected_user` are latest-value channels: every
/// subscriber sees the current value and later changes. Navigation events
/// are queued and delivered once, to whoever took the receiver.
pub struct UserViewModel<A: UserApi, S: UserStore> {
    repository: UserRepository<A, S>,
    ui_state: watch::Sender<UserListUiState>,
    selected_user: watch::Sender<Option<User>>,
    navigation_tx: mpsc::UnboundedSender<NavigationEvent>,
    navigation_rx: Mutex<Option<mpsc::UnboundedReceiver<NavigationEvent>>>,
}

impl<A: UserApi, S: UserStore> UserViewModel<A, S> {
    /// Build the view model and publish whatever the store already holds.
    /// A store that cannot be read is returned as an error.
    pub async fn new(repository: UserRepository<A, S>) -> Result<Self> {
        let (ui_state, _) = watch::channel(UserListUiState::Idle);
        let (selected_user, _) = watch::channel(None);
        let (navigation_tx, navigation_rx) = mpsc::unbounded_channel();

        let view_model = Self {
            repository,
            ui_state,
            selected_user,
            navigation_tx,
            navigation_rx: Mutex::new(Some(navigation_rx)),
        };
        view_model.refresh().await?;
        Ok(view_model)
    }

    pub fn state(&self) -> UserListUiState {
        self.ui_state.borrow().clone()
    }

    pub fn subscribe_state(&self) -> watch::Receiver<UserListUiState> {
        self.ui_state.subscribe()
    }

    pub fn selected_user(&self) -> Option<User> {
        self.selected_user.borrow().clone()
    }

    pub fn subscribe_selected_user(&self) -> watch::Receiver<Option<User>> {
        self.selected_user.subscribe()
    }

    /// Hand out the navigation receiver. Only the first caller gets it.
    pub fn take_navigation_events(&self) -> Option<mpsc::UnboundedReceiver<NavigationEvent>> {
        self.navigation_rx.lock().ok()?.take()
    }

    pub fn repository(&self) -> &UserRepository<A, S> {
        &self.repository
    }

    /// Reload the store: non-empty becomes `Success`, empty becomes `Idle`.
    /// On failure the state becomes `Error("Cache error: ...")` and the
    /// error is returned.
    pub async fn refresh(&self) -> Result<()> {
        match self.repository.users_from_db().await {
            Ok(users) if users.is_empty() => {
                self.ui_state.send_replace(UserListUiState::Idle);
                Ok(())
            }
            Ok(users) => {
                tracing::debug!("Loaded {} stored user(s)", users.len());
                self.ui_state.send_replace(UserListUiState::Success(users));
                Ok(())
            }
            Err(e) => {
                tracing::error!("Failed to read stored users: {}", e);
                self.ui_state
                    .send_replace(UserListUiState::Error(format!("Cache error: {}", e)));
                Err(e)
            }
        }
    }

    /// Fetch and store one user, then publish the refreshed list and ask
    /// for navigation to it. Failures land in `Error` and send nothing.
    pub async fn load_user(&self, gender: Gender, nat: Nationality) -> Result<User> {
        self.ui_state.send_replace(UserListUiState::Loading);

        let outcome = match self.repository.fetch_and_save_user(gender, nat).await {
            Ok(user) => self
                .repository
                .users_from_db()
                .await
                .map(|users| (user, users)),
            Err(e) => Err(e),
        };

        match outcome {
            Ok((user, users)) => {
                self.ui_state.send_replace(UserListUiState::Success(users));
                if self
                    .navigation_tx
                    .send(NavigationEvent::NavigateToUserList)
                    .is_err()
                {
                    tracing::debug!("Navigation receiver dropped, event discarded");
                }
                Ok(user)
            }
            Err(e) => {
                tracing::error!("Loading user failed: {}", e);
                self.ui_state
                    .send_replace(UserListUiState::Error(format!("Network error: {}", e)));
                Err(e)
            }
        }
    }

    /// Select from the currently listed users. Ignored unless the list is loaded.
    pub fn select_user(&self, uuid: &str) {
        let found = match &*self.ui_state.borrow() {
            UserListUiState::Success(users) => {
                Some(users.iter().find(|u| u.uuid() == Some(uuid)).cloned())
            }
            _ => None,
        };

        if let Some(user) = found {
            self.selected_user.send_replace(user);
        }
    }

    pub fn clear_selected_user(&self) {
        self.selected_user.send_replace(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemoryUserStore;
    use crate::domain::model::{ApiResponse, Login};
    use crate::utils::error::RandomUserError;
    use async_trait::async_trait;

    struct FailingApi;

    #[async_trait]
    impl UserApi for FailingApi {
        async fn get_random_user(&self, _gender: Gender, _nat: Nationality) -> Result<ApiResponse> {
            Err(RandomUserError::ApiError {
                status: 503,
                message: "down for maintenance".to_string(),
            })
        }
    }

    struct EmptyApi;

    #[async_trait]
    impl UserApi for EmptyApi {
        async fn get_random_user(&self, _gender: Gender, _nat: Nationality) -> Result<ApiResponse> {
            Ok(ApiResponse {
                results: Some(vec![]),
                info: None,
            })
        }
    }

    struct SingleUserApi(String);

    #[async_trait]
    impl UserApi for SingleUserApi {
        async fn get_random_user(&self, _gender: Gender, _nat: Nationality) -> Result<ApiResponse> {
            Ok(ApiResponse {
                results: Some(vec![User {
                    login: Some(Login {
                        uuid: Some(self.0.clone()),
                        username: None,
                    }),
                    ..Default::default()
                }]),
                info: None,
            })
        }
    }

    #[tokio::test]
    async fn test_starts_idle_with_empty_store() {
        let vm = UserViewModel::new(UserRepository::new(FailingApi, MemoryUserStore::new()))
            .await
            .unwrap();
        assert_eq!(vm.state(), UserListUiState::Idle);
        assert!(vm.selected_user().is_none());
    }

    #[tokio::test]
    async fn test_failure_reports_network_error_without_navigation() {
        let vm = UserViewModel::new(UserRepository::new(FailingApi, MemoryUserStore::new()))
            .await
            .unwrap();
        let mut nav = vm.take_navigation_events().unwrap();

        assert!(vm.load_user(Gender::Male, Nationality::Us).await.is_err());

        match vm.state() {
            UserListUiState::Error(message) => {
                assert!(message.starts_with("Network error: "));
                assert!(message.contains("down for maintenance"));
            }
            other => panic!("unexpected state {:?}", other),
        }
        assert!(nav.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_empty_result_uses_network_error_prefix() {
        let vm = UserViewModel::new(UserRepository::new(EmptyApi, MemoryUserStore::new()))
            .await
            .unwrap();
        let mut nav = vm.take_navigation_events().unwrap();

        let err = vm.load_user(Gender::Male, Nationality::Us).await.unwrap_err();
        assert!(matches!(err, RandomUserError::EmptyResult));
        assert_eq!(
            vm.state(),
            UserListUiState::Error(
                "Network error: Server returned an empty list of users".to_string()
            )
        );
        assert!(nav.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_navigation_receiver_is_single_consumer() {
        let vm = UserViewModel::new(UserRepository::new(FailingApi, MemoryUserStore::new()))
            .await
            .unwrap();
        assert!(vm.take_navigation_events().is_some());
        assert!(vm.take_navigation_events().is_none());
    }

    #[tokio::test]
    async fn test_select_requires_loaded_list() {
        let vm = UserViewModel::new(UserRepository::new(
            SingleUserApi("abc".to_string()),
            MemoryUserStore::new(),
        ))
        .await
        .unwrap();

        vm.select_user("abc");
        assert!(vm.selected_user().is_none());

        vm.load_user(Gender::Female, Nationality::De).await.unwrap();
        vm.select_user("abc");
        assert_eq!(vm.selected_user().unwrap().key(), "abc");

        vm.select_user("unknown");
        assert!(vm.selected_user().is_none());
    }
}
