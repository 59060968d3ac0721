use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::catalog::MetricId;
use crate::errors::{Error, Result};
use crate::goals::GoalUpdate;
use crate::store::AppStore;

use super::progress_model::{ProgressLog, ProgressSummary};
use super::progress_traits::ProgressServiceTrait;

pub struct ProgressService {
    store: Arc<AppStore>,
}

impl ProgressService {
    pub fn new(store: Arc<AppStore>) -> Self {
        ProgressService { store }
    }
}

#[async_trait]
impl ProgressServiceTrait for ProgressService {
    /// Writes `value` into the goal's metric and appends a log entry.
    ///
    /// The goal's stored `progress` field is not touched; progress bars
    /// derive their ratio from the metric values at render time.
    async fn log_progress(
        &self,
        goal_id: &str,
        metric_id: MetricId,
        value: f64,
    ) -> Result<ProgressLog> {
        let goal = self
            .store
            .goal(goal_id)
            .ok_or_else(|| Error::NotFound(format!("goal {goal_id}")))?;

        let mut metrics = goal.metrics;
        let metric = metrics
            .iter_mut()
            .find(|m| m.id == metric_id)
            .ok_or_else(|| Error::NotFound(format!("metric {metric_id} on goal {goal_id}")))?;
        metric.current_value = value;

        self.store.update_goal(
            goal_id,
            GoalUpdate {
                metrics: Some(metrics),
                ..Default::default()
            },
        );

        let log = ProgressLog {
            id: Uuid::new_v4().to_string(),
            goal_id: goal_id.to_string(),
            metric_id,
            value,
            timestamp: Utc::now(),
        };
        self.store.add_progress_log(log.clone());
        Ok(log)
    }

    fn logs(&self, goal_id: &str, metric_id: MetricId) -> Result<Vec<ProgressLog>> {
        Ok(self.store.progress_logs(goal_id, metric_id))
    }

    fn summary(&self, goal_id: &str, metric_id: MetricId) -> Result<ProgressSummary> {
        let logs = self.store.progress_logs(goal_id, metric_id);
        let entries = logs.len();
        let latest = logs.last().map(|log| log.value);
        let average = if entries == 0 {
            None
        } else {
            Some(logs.iter().map(|log| log.value).sum::<f64>() / entries as f64)
        };
        Ok(ProgressSummary {
            latest,
            average,
            entries,
        })
    }
}
