//! User domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::CategoryId;

/// Color theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

/// Per-user preference bag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    pub theme: Theme,
    pub notifications_enabled: bool,
    pub preferred_categories: Vec<CategoryId>,
}

impl Default for UserPreferences {
    fn default() -> Self {
        UserPreferences {
            theme: Theme::System,
            notifications_enabled: true,
            preferred_categories: Vec::new(),
        }
    }
}

/// The local user record, created once at onboarding.
///
/// Sign-out clears local state only; the record is never deleted in-app.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub nickname: String,
    pub email: Option<String>,
    pub preferences: UserPreferences,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update for the user record. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    pub nickname: Option<String>,
    pub email: Option<String>,
    pub preferences: Option<UserPreferences>,
}

impl UserUpdate {
    /// Merges the set fields into `user`.
    pub fn apply(&self, user: &mut User) {
        if let Some(nickname) = &self.nickname {
            user.nickname = nickname.clone();
        }
        if let Some(email) = &self.email {
            user.email = Some(email.clone());
        }
        if let Some(preferences) = &self.preferences {
            user.preferences = preferences.clone();
        }
    }
}
