//! Goals module - domain models, builder, service, and traits.

mod goals_builder;
mod goals_model;
mod goals_service;
mod goals_traits;

pub use goals_builder::GoalBuilder;
pub use goals_model::{Goal, GoalMetric, GoalUpdate};
pub use goals_service::GoalService;
pub use goals_traits::GoalServiceTrait;
