//! Template domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::{Category, GoalType};
use crate::errors::{Error, Result, ValidationError};
use crate::goals::{Goal, GoalMetric};

/// A reusable snapshot of a goal's category, type, and metric targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: Option<String>,
    pub category: Category,
    pub goal_type: GoalType,
    pub default_metrics: Vec<GoalMetric>,
    /// Material Symbols icon name
    pub icon: String,
    /// False for the built-in starter templates, true for user-saved ones.
    pub is_custom: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input model for creating a template.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTemplate {
    pub user_id: String,
    pub title: String,
    pub description: Option<String>,
    pub category: Category,
    pub goal_type: GoalType,
    pub default_metrics: Vec<GoalMetric>,
    pub icon: String,
    pub is_custom: bool,
}

impl NewTemplate {
    /// Snapshot of an existing goal under a user-chosen name ("save as
    /// template"). Category, goal type, and metric targets are copied; the
    /// icon follows the goal type.
    pub fn from_goal(goal: &Goal, title: impl Into<String>) -> Self {
        NewTemplate {
            user_id: goal.user_id.clone(),
            title: title.into(),
            description: goal.description.clone(),
            category: goal.category.clone(),
            goal_type: goal.goal_type.clone(),
            default_metrics: goal.metrics.clone(),
            icon: goal.goal_type.icon.clone(),
            is_custom: true,
        }
    }

    /// Validates the template input: a non-empty title.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "title".to_string(),
            )));
        }
        Ok(())
    }
}

/// Partial update for a template. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub default_metrics: Option<Vec<GoalMetric>>,
    pub icon: Option<String>,
}

impl TemplateUpdate {
    /// Merges the set fields into `template`.
    pub fn apply(&self, template: &mut Template) {
        if let Some(title) = &self.title {
            template.title = title.clone();
        }
        if let Some(description) = &self.description {
            template.description = Some(description.clone());
        }
        if let Some(default_metrics) = &self.default_metrics {
            template.default_metrics = default_metrics.clone();
        }
        if let Some(icon) = &self.icon {
            template.icon = icon.clone();
        }
    }
}
