//! Staged construction of well-formed goals.

use chrono::Utc;
use uuid::Uuid;

use crate::catalog::{Category, GoalType};
use crate::errors::{Error, Result, ValidationError};
use crate::templates::Template;

use super::goals_model::{Goal, GoalMetric};

/// Accumulates goal fields from the creation workflow and validates them
/// before materializing a record.
///
/// Builders are single-use: `build` consumes the builder, and each pass
/// through the creation workflow starts a fresh one.
#[derive(Debug, Clone)]
pub struct GoalBuilder {
    user_id: String,
    title: Option<String>,
    description: Option<String>,
    category: Option<Category>,
    goal_type: Option<GoalType>,
    metrics: Vec<GoalMetric>,
}

impl GoalBuilder {
    pub fn new(user_id: impl Into<String>) -> Self {
        GoalBuilder {
            user_id: user_id.into(),
            title: None,
            description: None,
            category: None,
            goal_type: None,
            metrics: Vec::new(),
        }
    }

    /// Pre-fills title, description, category, goal type, and default
    /// metrics from a saved template.
    pub fn from_template(user_id: impl Into<String>, template: &Template) -> Self {
        GoalBuilder {
            user_id: user_id.into(),
            title: Some(template.title.clone()),
            description: template.description.clone(),
            category: Some(template.category.clone()),
            goal_type: Some(template.goal_type.clone()),
            metrics: template.default_metrics.clone(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn goal_type(mut self, goal_type: GoalType) -> Self {
        self.goal_type = Some(goal_type);
        self
    }

    pub fn metric(mut self, metric: GoalMetric) -> Self {
        self.metrics.push(metric);
        self
    }

    /// Validates the accumulated fields and materializes the goal.
    ///
    /// Title, category, goal type, and at least one metric are required.
    /// The result carries a fresh id, progress 0, and now timestamps; it is
    /// not re-validated after this point.
    pub fn build(self) -> Result<Goal> {
        let title = match self.title.as_deref().map(str::trim) {
            Some(t) if !t.is_empty() => t.to_string(),
            _ => {
                return Err(Error::Validation(ValidationError::MissingField(
                    "title".to_string(),
                )))
            }
        };
        let category = self.category.ok_or_else(|| {
            Error::Validation(ValidationError::MissingField("category".to_string()))
        })?;
        let goal_type = self.goal_type.ok_or_else(|| {
            Error::Validation(ValidationError::MissingField("goalType".to_string()))
        })?;
        if self.metrics.is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "metrics".to_string(),
            )));
        }

        let now = Utc::now();
        Ok(Goal {
            id: Uuid::new_v4().to_string(),
            user_id: self.user_id,
            title,
            description: self.description,
            category,
            goal_type,
            metrics: self.metrics,
            progress: 0.0,
            is_completed: false,
            created_at: now,
            updated_at: now,
        })
    }
}
