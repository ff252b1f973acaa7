pub mod repository;
pub mod view_model;

pub use crate::domain::model::User;
pub use crate::domain::ports::{UserApi, UserStore};
pub use crate::utils::error::Result;
