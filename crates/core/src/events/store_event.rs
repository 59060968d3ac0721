//! Store event types.

use serde::{Deserialize, Serialize};

/// Events emitted by the application store after each mutation.
///
/// These events represent facts about state changes. UI adapters translate
/// them into re-renders of the affected screens; they carry ids rather than
/// entity payloads, so subscribers read the current state back from the
/// store.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StoreEvent {
    /// The user record or onboarding flag changed.
    UserChanged,

    /// Goals were created, replaced, updated, or deleted.
    GoalsChanged { goal_ids: Vec<String> },

    /// The sub-goal list of a goal changed (add, update, delete, reorder).
    SubGoalsChanged { goal_id: String },

    /// Reminders were added or removed.
    RemindersChanged { goal_id: String },

    /// Templates were created, updated, or deleted.
    TemplatesChanged { template_ids: Vec<String> },

    /// A progress log entry was recorded for a goal metric.
    ProgressLogged { goal_id: String },

    /// Transient UI flags (loading, error) changed.
    UiFlagsChanged,
}

impl StoreEvent {
    /// Creates a GoalsChanged event for a single goal.
    pub fn goal_changed(goal_id: impl Into<String>) -> Self {
        Self::GoalsChanged {
            goal_ids: vec![goal_id.into()],
        }
    }

    /// Creates a SubGoalsChanged event.
    pub fn sub_goals_changed(goal_id: impl Into<String>) -> Self {
        Self::SubGoalsChanged {
            goal_id: goal_id.into(),
        }
    }

    /// Creates a RemindersChanged event.
    pub fn reminders_changed(goal_id: impl Into<String>) -> Self {
        Self::RemindersChanged {
            goal_id: goal_id.into(),
        }
    }

    /// Creates a TemplatesChanged event for a single template.
    pub fn template_changed(template_id: impl Into<String>) -> Self {
        Self::TemplatesChanged {
            template_ids: vec![template_id.into()],
        }
    }
}
