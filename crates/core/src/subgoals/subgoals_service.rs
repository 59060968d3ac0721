use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::errors::Result;
use crate::store::AppStore;

use super::subgoals_model::{NewSubGoal, SubGoal, SubGoalUpdate};
use super::subgoals_traits::SubGoalServiceTrait;

pub struct SubGoalService {
    store: Arc<AppStore>,
}

impl SubGoalService {
    pub fn new(store: Arc<AppStore>) -> Self {
        SubGoalService { store }
    }
}

#[async_trait]
impl SubGoalServiceTrait for SubGoalService {
    fn get_sub_goals(&self, goal_id: &str) -> Result<Vec<SubGoal>> {
        Ok(self.store.sub_goals(goal_id))
    }

    /// Validates and materializes the sub-goal at the end of its parent's
    /// list (order = current length).
    async fn add_sub_goal(&self, new_sub_goal: NewSubGoal) -> Result<SubGoal> {
        new_sub_goal.validate()?;

        let now = Utc::now();
        let sub_goal = SubGoal {
            id: Uuid::new_v4().to_string(),
            order: self.store.sub_goals(&new_sub_goal.goal_id).len() as i32,
            goal_id: new_sub_goal.goal_id,
            title: new_sub_goal.title,
            description: new_sub_goal.description,
            metrics: new_sub_goal.metrics,
            is_completed: false,
            created_at: now,
            updated_at: now,
        };
        self.store.add_sub_goal(sub_goal.clone());
        Ok(sub_goal)
    }

    async fn update_sub_goal(&self, sub_goal_id: &str, update: SubGoalUpdate) -> Result<()> {
        self.store.update_sub_goal(sub_goal_id, update);
        Ok(())
    }

    async fn delete_sub_goal(&self, goal_id: &str, sub_goal_id: &str) -> Result<()> {
        self.store.delete_sub_goal(goal_id, sub_goal_id);
        Ok(())
    }

    async fn reorder_sub_goals(&self, goal_id: &str, ordered_ids: &[String]) -> Result<()> {
        self.store.reorder_sub_goals(goal_id, ordered_ids);
        Ok(())
    }
}
