//! Sub-goals module - domain models, service, and traits.

mod subgoals_model;
mod subgoals_service;
mod subgoals_traits;

pub use subgoals_model::{NewSubGoal, SubGoal, SubGoalUpdate};
pub use subgoals_service::SubGoalService;
pub use subgoals_traits::SubGoalServiceTrait;
