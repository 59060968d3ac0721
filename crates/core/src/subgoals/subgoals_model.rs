//! Sub-goal domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};
use crate::goals::GoalMetric;

/// An ordered breakdown item under a parent goal.
///
/// `order` is a dense zero-based index, unique within the parent goal's
/// list; `reorder_sub_goals` re-derives it after every drag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubGoal {
    pub id: String,
    pub goal_id: String,
    pub title: String,
    pub description: Option<String>,
    pub metrics: Vec<GoalMetric>,
    pub is_completed: bool,
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input model for creating a sub-goal. Id, order, and timestamps are
/// assigned by the service at creation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSubGoal {
    pub goal_id: String,
    pub title: String,
    pub description: Option<String>,
    pub metrics: Vec<GoalMetric>,
}

impl NewSubGoal {
    /// Validates the new sub-goal data: a title and at least one metric.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "title".to_string(),
            )));
        }
        if self.metrics.is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "metrics".to_string(),
            )));
        }
        Ok(())
    }
}

/// Partial update for a sub-goal. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubGoalUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub metrics: Option<Vec<GoalMetric>>,
    pub is_completed: Option<bool>,
}

impl SubGoalUpdate {
    /// Merges the set fields into `sub_goal`.
    pub fn apply(&self, sub_goal: &mut SubGoal) {
        if let Some(title) = &self.title {
            sub_goal.title = title.clone();
        }
        if let Some(description) = &self.description {
            sub_goal.description = Some(description.clone());
        }
        if let Some(metrics) = &self.metrics {
            sub_goal.metrics = metrics.clone();
        }
        if let Some(is_completed) = self.is_completed {
            sub_goal.is_completed = is_completed;
        }
    }
}
