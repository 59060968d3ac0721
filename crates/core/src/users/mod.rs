//! Users module - the local user record, preferences, and onboarding.

mod auth_service;
mod users_model;
mod users_traits;

pub use auth_service::AuthService;
pub use users_model::{Theme, User, UserPreferences, UserUpdate};
pub use users_traits::AuthServiceTrait;
