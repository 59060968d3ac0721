use crate::errors::Result;
use crate::goals::goals_model::{Goal, GoalUpdate};
use async_trait::async_trait;

/// Trait for goal service operations
#[async_trait]
pub trait GoalServiceTrait: Send + Sync {
    fn get_goals(&self) -> Result<Vec<Goal>>;
    fn get_goal(&self, goal_id: &str) -> Result<Option<Goal>>;
    async fn create_goal(&self, goal: Goal) -> Result<Goal>;
    async fn update_goal(&self, goal_id: &str, update: GoalUpdate) -> Result<()>;
    async fn delete_goal(&self, goal_id: &str) -> Result<()>;
}
