//! Goal domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::{self, Category, GoalType, MetricId};

/// A metric instance attached to a goal or sub-goal.
///
/// `id` references the catalog metric this instance was created from; name
/// and icon are denormalized snapshots so persisted goals stay renderable
/// even if catalog labels change between releases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalMetric {
    pub id: MetricId,
    pub name: String,
    /// Material Symbols icon name
    pub icon: String,
    pub current_value: f64,
    pub target_value: f64,
}

impl GoalMetric {
    /// Catalog metric instance with a target already set.
    pub fn with_target(id: MetricId, target_value: f64) -> Self {
        let mut metric = catalog::metric(id);
        metric.target_value = target_value;
        metric
    }

    /// Current/target ratio as a percentage, unclamped.
    ///
    /// A zero target reads as 0% rather than dividing by zero. This is a
    /// derived display value; it never feeds back into `Goal::progress`.
    pub fn completion_percent(&self) -> f64 {
        if self.target_value == 0.0 {
            0.0
        } else {
            (self.current_value / self.target_value) * 100.0
        }
    }
}

/// Domain model representing a goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: Option<String>,
    /// Embedded snapshot of the chosen category
    pub category: Category,
    /// Embedded snapshot of the chosen goal type
    pub goal_type: GoalType,
    pub metrics: Vec<GoalMetric>,
    /// Stored progress percentage. Set by callers; not recomputed from
    /// metrics by the store.
    pub progress: f64,
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update for a goal. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub metrics: Option<Vec<GoalMetric>>,
    pub progress: Option<f64>,
    pub is_completed: Option<bool>,
}

impl GoalUpdate {
    /// Merges the set fields into `goal`. Timestamp stamping is the store's
    /// job, not the patch's.
    pub fn apply(&self, goal: &mut Goal) {
        if let Some(title) = &self.title {
            goal.title = title.clone();
        }
        if let Some(description) = &self.description {
            goal.description = Some(description.clone());
        }
        if let Some(metrics) = &self.metrics {
            goal.metrics = metrics.clone();
        }
        if let Some(progress) = self.progress {
            goal.progress = progress;
        }
        if let Some(is_completed) = self.is_completed {
            goal.is_completed = is_completed;
        }
    }
}
