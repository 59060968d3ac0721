use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::Result;
use crate::store::AppStore;

use super::goals_model::{Goal, GoalUpdate};
use super::goals_traits::GoalServiceTrait;

pub struct GoalService {
    store: Arc<AppStore>,
}

impl GoalService {
    pub fn new(store: Arc<AppStore>) -> Self {
        GoalService { store }
    }
}

#[async_trait]
impl GoalServiceTrait for GoalService {
    fn get_goals(&self) -> Result<Vec<Goal>> {
        Ok(self.store.goals())
    }

    fn get_goal(&self, goal_id: &str) -> Result<Option<Goal>> {
        Ok(self.store.goal(goal_id))
    }

    /// Appends a goal built by `GoalBuilder`. The store performs no
    /// duplicate-id check; ids come from the builder.
    async fn create_goal(&self, goal: Goal) -> Result<Goal> {
        self.store.add_goal(goal.clone());
        Ok(goal)
    }

    async fn update_goal(&self, goal_id: &str, update: GoalUpdate) -> Result<()> {
        self.store.update_goal(goal_id, update);
        Ok(())
    }

    /// Removes the goal only. Sub-goals and reminders referencing it stay
    /// behind; cleanup is an explicit caller decision.
    async fn delete_goal(&self, goal_id: &str) -> Result<()> {
        self.store.delete_goal(goal_id);
        Ok(())
    }
}
