use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use uuid::Uuid;

use crate::constants::{ONBOARDING_STORAGE_KEY, USER_STORAGE_KEY};
use crate::errors::{Error, Result, ValidationError};
use crate::storage::StorageBackend;
use crate::store::AppStore;

use super::users_model::{User, UserPreferences, UserUpdate};
use super::users_traits::AuthServiceTrait;

/// Local-only identity management.
///
/// The user record and onboarding flag live under their own storage keys,
/// separate from the store snapshot, so they survive a store reset.
pub struct AuthService {
    store: Arc<AppStore>,
    storage: Arc<dyn StorageBackend>,
}

impl AuthService {
    pub fn new(store: Arc<AppStore>, storage: Arc<dyn StorageBackend>) -> Self {
        AuthService { store, storage }
    }

    fn persist_user(&self, user: &User) -> Result<()> {
        self.storage.set(USER_STORAGE_KEY, &serde_json::to_string(user)?)
    }
}

#[async_trait]
impl AuthServiceTrait for AuthService {
    async fn register_user(&self, nickname: &str, email: Option<&str>) -> Result<User> {
        let nickname = nickname.trim();
        if nickname.is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "nickname".to_string(),
            )));
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4().to_string(),
            nickname: nickname.to_string(),
            email: email.map(str::to_string),
            preferences: UserPreferences::default(),
            created_at: now,
            updated_at: now,
        };

        self.persist_user(&user)?;
        self.store.set_user(Some(user.clone()));
        debug!("registered local user {}", user.id);
        Ok(user)
    }

    /// Rehydrates the user from storage into the store.
    async fn get_user(&self) -> Result<Option<User>> {
        match self.storage.get(USER_STORAGE_KEY)? {
            None => Ok(None),
            Some(raw) => {
                let user: User = serde_json::from_str(&raw)?;
                self.store.set_user(Some(user.clone()));
                Ok(Some(user))
            }
        }
    }

    async fn update_user(&self, update: UserUpdate) -> Result<User> {
        let mut user = self
            .get_user()
            .await?
            .ok_or_else(|| Error::NotFound("user".to_string()))?;

        update.apply(&mut user);
        user.updated_at = Utc::now();

        self.persist_user(&user)?;
        self.store.set_user(Some(user.clone()));
        Ok(user)
    }

    /// Clears the user and onboarding keys and resets the in-memory user.
    /// Goal data under the store snapshot key is untouched.
    async fn sign_out(&self) -> Result<()> {
        self.storage
            .remove(&[USER_STORAGE_KEY, ONBOARDING_STORAGE_KEY])?;
        self.store.set_user(None);
        Ok(())
    }

    async fn has_completed_onboarding(&self) -> Result<bool> {
        Ok(self.storage.get(ONBOARDING_STORAGE_KEY)?.is_some())
    }

    async fn set_onboarding_complete(&self) -> Result<()> {
        self.storage.set(ONBOARDING_STORAGE_KEY, "true")?;
        self.store.set_has_completed_onboarding(true);
        Ok(())
    }
}
