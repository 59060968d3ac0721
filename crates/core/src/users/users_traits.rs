use crate::errors::Result;
use crate::users::users_model::{User, UserUpdate};
use async_trait::async_trait;

/// Trait for the local authentication/onboarding service
#[async_trait]
pub trait AuthServiceTrait: Send + Sync {
    async fn register_user(&self, nickname: &str, email: Option<&str>) -> Result<User>;
    async fn get_user(&self) -> Result<Option<User>>;
    async fn update_user(&self, update: UserUpdate) -> Result<User>;
    async fn sign_out(&self) -> Result<()>;
    async fn has_completed_onboarding(&self) -> Result<bool>;
    async fn set_onboarding_complete(&self) -> Result<()>;
}
