use crate::errors::Result;
use crate::subgoals::subgoals_model::{NewSubGoal, SubGoal, SubGoalUpdate};
use async_trait::async_trait;

/// Trait for sub-goal service operations
#[async_trait]
pub trait SubGoalServiceTrait: Send + Sync {
    fn get_sub_goals(&self, goal_id: &str) -> Result<Vec<SubGoal>>;
    async fn add_sub_goal(&self, new_sub_goal: NewSubGoal) -> Result<SubGoal>;
    async fn update_sub_goal(&self, sub_goal_id: &str, update: SubGoalUpdate) -> Result<()>;
    async fn delete_sub_goal(&self, goal_id: &str, sub_goal_id: &str) -> Result<()>;
    async fn reorder_sub_goals(&self, goal_id: &str, ordered_ids: &[String]) -> Result<()>;
}
