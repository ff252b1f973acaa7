pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod presentation;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliArgs;

pub use adapters::{MemoryUserStore, RandomUserClient, SqliteUserStore};
pub use config::AppConfig;
pub use crate::core::repository::UserRepository;
pub use crate::core::view_model::{NavigationEvent, UserListUiState, UserViewModel};
pub use domain::model::{ApiResponse, User};
pub use domain::options::{Gender, Nationality};
pub use utils::error::{RandomUserError, Result};
