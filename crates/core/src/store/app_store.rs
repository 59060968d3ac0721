//! The single source of truth for all mutable application data.

use std::sync::{Arc, RwLock};

use chrono::Utc;
use log::{error, warn};

use crate::catalog::MetricId;
use crate::constants::STORE_STORAGE_KEY;
use crate::events::{StoreEvent, StoreEventSink};
use crate::goals::{Goal, GoalUpdate};
use crate::progress::ProgressLog;
use crate::reminders::Reminder;
use crate::storage::StorageBackend;
use crate::subgoals::{SubGoal, SubGoalUpdate};
use crate::templates::{Template, TemplateUpdate};
use crate::users::User;

use super::store_model::AppState;

/// Process-wide state container.
///
/// Constructed once at application start and handed to services by `Arc`;
/// tests build a fresh instance each. Mutations are synchronous: the new
/// state is visible to every reader before the call returns, then the full
/// snapshot is written to storage and an event is emitted. Persistence is
/// fire-and-forget: a failed write is logged, never surfaced, since the
/// mutation has already landed in memory.
///
/// Unknown ids make update/delete operations silent no-ops; validation
/// happens upstream in builders and services.
pub struct AppStore {
    state: RwLock<AppState>,
    storage: Arc<dyn StorageBackend>,
    events: Arc<dyn StoreEventSink>,
}

impl AppStore {
    /// Store starting from the empty initial state.
    pub fn new(storage: Arc<dyn StorageBackend>, events: Arc<dyn StoreEventSink>) -> Self {
        AppStore {
            state: RwLock::new(AppState::default()),
            storage,
            events,
        }
    }

    /// Store rehydrated from the persisted snapshot. Absent or corrupt
    /// snapshots fall back to the initial state.
    pub fn load(storage: Arc<dyn StorageBackend>, events: Arc<dyn StoreEventSink>) -> Self {
        let state = match storage.get(STORE_STORAGE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(state) => state,
                Err(err) => {
                    warn!("discarding unreadable state snapshot: {err}");
                    AppState::default()
                }
            },
            Ok(None) => AppState::default(),
            Err(err) => {
                warn!("failed to read state snapshot: {err}");
                AppState::default()
            }
        };
        AppStore {
            state: RwLock::new(state),
            storage,
            events,
        }
    }

    fn persist(&self, state: &AppState) {
        match serde_json::to_string(state) {
            Ok(json) => {
                if let Err(err) = self.storage.set(STORE_STORAGE_KEY, &json) {
                    error!("failed to persist state snapshot: {err}");
                }
            }
            Err(err) => error!("failed to serialize state snapshot: {err}"),
        }
    }

    // === Readers (consistent snapshots at call time) ===

    /// Full state snapshot.
    pub fn state(&self) -> AppState {
        self.state.read().unwrap().clone()
    }

    pub fn user(&self) -> Option<User> {
        self.state.read().unwrap().user.clone()
    }

    pub fn has_completed_onboarding(&self) -> bool {
        self.state.read().unwrap().has_completed_onboarding
    }

    pub fn goals(&self) -> Vec<Goal> {
        self.state.read().unwrap().goals.clone()
    }

    pub fn goal(&self, goal_id: &str) -> Option<Goal> {
        self.state
            .read()
            .unwrap()
            .goals
            .iter()
            .find(|g| g.id == goal_id)
            .cloned()
    }

    /// Sub-goals of a goal, in stored order. Unknown goals read as empty.
    pub fn sub_goals(&self, goal_id: &str) -> Vec<SubGoal> {
        self.state
            .read()
            .unwrap()
            .sub_goals
            .get(goal_id)
            .cloned()
            .unwrap_or_default()
    }

    pub fn all_reminders(&self) -> Vec<Reminder> {
        self.state.read().unwrap().reminders.clone()
    }

    /// Reminders attached to a goal.
    pub fn reminders(&self, goal_id: &str) -> Vec<Reminder> {
        self.state
            .read()
            .unwrap()
            .reminders
            .iter()
            .filter(|r| r.goal_id == goal_id)
            .cloned()
            .collect()
    }

    pub fn templates(&self) -> Vec<Template> {
        self.state.read().unwrap().templates.clone()
    }

    /// Logged observations for one goal metric, in insertion order.
    pub fn progress_logs(&self, goal_id: &str, metric_id: MetricId) -> Vec<ProgressLog> {
        self.state
            .read()
            .unwrap()
            .progress_logs
            .iter()
            .filter(|log| log.goal_id == goal_id && log.metric_id == metric_id)
            .cloned()
            .collect()
    }

    pub fn is_loading(&self) -> bool {
        self.state.read().unwrap().is_loading
    }

    pub fn error(&self) -> Option<String> {
        self.state.read().unwrap().error.clone()
    }

    // === User ===

    pub fn set_user(&self, user: Option<User>) {
        let mut state = self.state.write().unwrap();
        state.user = user;
        self.persist(&state);
        drop(state);
        self.events.emit(StoreEvent::UserChanged);
    }

    pub fn set_has_completed_onboarding(&self, completed: bool) {
        let mut state = self.state.write().unwrap();
        state.has_completed_onboarding = completed;
        self.persist(&state);
        drop(state);
        self.events.emit(StoreEvent::UserChanged);
    }

    // === Goals ===

    /// Replaces the entire goal list (initial load).
    pub fn set_goals(&self, goals: Vec<Goal>) {
        let goal_ids = goals.iter().map(|g| g.id.clone()).collect();
        let mut state = self.state.write().unwrap();
        state.goals = goals;
        self.persist(&state);
        drop(state);
        self.events.emit(StoreEvent::GoalsChanged { goal_ids });
    }

    /// Appends a goal. No duplicate-id check; ids come from the builder.
    pub fn add_goal(&self, goal: Goal) {
        let goal_id = goal.id.clone();
        let mut state = self.state.write().unwrap();
        state.goals.push(goal);
        self.persist(&state);
        drop(state);
        self.events.emit(StoreEvent::goal_changed(goal_id));
    }

    /// Merges the patch into the matching goal, always stamping
    /// `updated_at`.
    pub fn update_goal(&self, goal_id: &str, update: GoalUpdate) {
        let mut state = self.state.write().unwrap();
        if let Some(goal) = state.goals.iter_mut().find(|g| g.id == goal_id) {
            update.apply(goal);
            goal.updated_at = Utc::now();
        }
        self.persist(&state);
        drop(state);
        self.events.emit(StoreEvent::goal_changed(goal_id));
    }

    /// Removes the goal. Sub-goal groupings and reminders that reference it
    /// are left in place.
    pub fn delete_goal(&self, goal_id: &str) {
        let mut state = self.state.write().unwrap();
        state.goals.retain(|g| g.id != goal_id);
        self.persist(&state);
        drop(state);
        self.events.emit(StoreEvent::goal_changed(goal_id));
    }

    // === Sub-goals ===

    /// Replaces the sub-goal list of one goal.
    pub fn set_sub_goals(&self, goal_id: &str, sub_goals: Vec<SubGoal>) {
        let mut state = self.state.write().unwrap();
        state.sub_goals.insert(goal_id.to_string(), sub_goals);
        self.persist(&state);
        drop(state);
        self.events.emit(StoreEvent::sub_goals_changed(goal_id));
    }

    /// Appends a sub-goal to its parent's grouping.
    pub fn add_sub_goal(&self, sub_goal: SubGoal) {
        let goal_id = sub_goal.goal_id.clone();
        let mut state = self.state.write().unwrap();
        state
            .sub_goals
            .entry(goal_id.clone())
            .or_default()
            .push(sub_goal);
        self.persist(&state);
        drop(state);
        self.events.emit(StoreEvent::sub_goals_changed(goal_id));
    }

    /// Merges the patch into the matching sub-goal, searching every goal
    /// grouping; sub-goal ids are globally unique.
    pub fn update_sub_goal(&self, sub_goal_id: &str, update: SubGoalUpdate) {
        let mut state = self.state.write().unwrap();
        let mut changed_goal = None;
        for (goal_id, list) in state.sub_goals.iter_mut() {
            for sub_goal in list.iter_mut() {
                if sub_goal.id == sub_goal_id {
                    update.apply(sub_goal);
                    sub_goal.updated_at = Utc::now();
                    changed_goal = Some(goal_id.clone());
                }
            }
        }
        self.persist(&state);
        drop(state);
        if let Some(goal_id) = changed_goal {
            self.events.emit(StoreEvent::sub_goals_changed(goal_id));
        }
    }

    pub fn delete_sub_goal(&self, goal_id: &str, sub_goal_id: &str) {
        let mut state = self.state.write().unwrap();
        if let Some(list) = state.sub_goals.get_mut(goal_id) {
            list.retain(|sg| sg.id != sub_goal_id);
        }
        self.persist(&state);
        drop(state);
        self.events.emit(StoreEvent::sub_goals_changed(goal_id));
    }

    /// Re-sequences a goal's sub-goals to match `ordered_ids`: each entry's
    /// `order` becomes its index in the list. This is replace-and-reindex,
    /// not a permutation; stored entries whose id is absent from
    /// `ordered_ids` are dropped.
    pub fn reorder_sub_goals(&self, goal_id: &str, ordered_ids: &[String]) {
        let mut state = self.state.write().unwrap();
        match state.sub_goals.get_mut(goal_id) {
            None => return,
            Some(list) => {
                let mut reordered: Vec<SubGoal> = ordered_ids
                    .iter()
                    .filter_map(|id| list.iter().find(|sg| &sg.id == id).cloned())
                    .collect();
                for (index, sub_goal) in reordered.iter_mut().enumerate() {
                    sub_goal.order = index as i32;
                }
                *list = reordered;
            }
        }
        self.persist(&state);
        drop(state);
        self.events.emit(StoreEvent::sub_goals_changed(goal_id));
    }

    // === Reminders ===

    pub fn add_reminder(&self, reminder: Reminder) {
        let goal_id = reminder.goal_id.clone();
        let mut state = self.state.write().unwrap();
        state.reminders.push(reminder);
        self.persist(&state);
        drop(state);
        self.events.emit(StoreEvent::reminders_changed(goal_id));
    }

    pub fn delete_reminder(&self, reminder_id: &str) {
        let mut state = self.state.write().unwrap();
        let goal_id = state
            .reminders
            .iter()
            .find(|r| r.id == reminder_id)
            .map(|r| r.goal_id.clone());
        state.reminders.retain(|r| r.id != reminder_id);
        self.persist(&state);
        drop(state);
        if let Some(goal_id) = goal_id {
            self.events.emit(StoreEvent::reminders_changed(goal_id));
        }
    }

    // === Templates ===

    pub fn add_template(&self, template: Template) {
        let template_id = template.id.clone();
        let mut state = self.state.write().unwrap();
        state.templates.push(template);
        self.persist(&state);
        drop(state);
        self.events.emit(StoreEvent::template_changed(template_id));
    }

    /// Merges the patch into the matching template, stamping `updated_at`.
    pub fn update_template(&self, template_id: &str, update: TemplateUpdate) {
        let mut state = self.state.write().unwrap();
        if let Some(template) = state.templates.iter_mut().find(|t| t.id == template_id) {
            update.apply(template);
            template.updated_at = Utc::now();
        }
        self.persist(&state);
        drop(state);
        self.events.emit(StoreEvent::template_changed(template_id));
    }

    pub fn delete_template(&self, template_id: &str) {
        let mut state = self.state.write().unwrap();
        state.templates.retain(|t| t.id != template_id);
        self.persist(&state);
        drop(state);
        self.events.emit(StoreEvent::template_changed(template_id));
    }

    // === Progress logs ===

    pub fn add_progress_log(&self, log: ProgressLog) {
        let goal_id = log.goal_id.clone();
        let mut state = self.state.write().unwrap();
        state.progress_logs.push(log);
        self.persist(&state);
        drop(state);
        self.events.emit(StoreEvent::ProgressLogged { goal_id });
    }

    // === Transient UI flags ===

    pub fn set_is_loading(&self, loading: bool) {
        let mut state = self.state.write().unwrap();
        state.is_loading = loading;
        self.persist(&state);
        drop(state);
        self.events.emit(StoreEvent::UiFlagsChanged);
    }

    pub fn set_error(&self, error: Option<String>) {
        let mut state = self.state.write().unwrap();
        state.error = error;
        self.persist(&state);
        drop(state);
        self.events.emit(StoreEvent::UiFlagsChanged);
    }
}
