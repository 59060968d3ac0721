//! Application state snapshot.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::goals::Goal;
use crate::progress::ProgressLog;
use crate::reminders::Reminder;
use crate::subgoals::SubGoal;
use crate::templates::Template;
use crate::users::User;

/// The full application state, serialized as one snapshot after every
/// mutation and read back once at startup.
///
/// `is_loading` and `error` are transient UI signals; they round-trip
/// through the snapshot along with everything else.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppState {
    pub user: Option<User>,
    pub has_completed_onboarding: bool,
    pub goals: Vec<Goal>,
    /// Sub-goals grouped by parent goal id
    pub sub_goals: HashMap<String, Vec<SubGoal>>,
    pub reminders: Vec<Reminder>,
    pub templates: Vec<Template>,
    pub progress_logs: Vec<ProgressLog>,
    pub is_loading: bool,
    pub error: Option<String>,
}
