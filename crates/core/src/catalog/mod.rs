//! Catalog module - the closed, compiled-in taxonomy of categories, goal
//! types, and metrics.

mod catalog_data;
mod catalog_model;

pub use catalog_data::{
    categories, category, goal_type, goal_types, lookup_category, lookup_goal_type,
    lookup_metric, metric, metrics,
};
pub use catalog_model::{Category, CategoryId, GoalType, GoalTypeId, MetricId, UnknownIdError};
