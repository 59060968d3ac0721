use crate::catalog::MetricId;
use crate::errors::Result;
use crate::progress::progress_model::{ProgressLog, ProgressSummary};
use async_trait::async_trait;

/// Trait for progress logging and reporting operations
#[async_trait]
pub trait ProgressServiceTrait: Send + Sync {
    async fn log_progress(
        &self,
        goal_id: &str,
        metric_id: MetricId,
        value: f64,
    ) -> Result<ProgressLog>;
    fn logs(&self, goal_id: &str, metric_id: MetricId) -> Result<Vec<ProgressLog>>;
    fn summary(&self, goal_id: &str, metric_id: MetricId) -> Result<ProgressSummary>;
}
