//! Progress module - metric progress logging and report aggregates.

mod progress_model;
mod progress_service;
mod progress_traits;

pub use progress_model::{parse_progress_value, ProgressLog, ProgressSummary};
pub use progress_service::ProgressService;
pub use progress_traits::ProgressServiceTrait;
