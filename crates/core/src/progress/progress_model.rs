//! Progress log domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::MetricId;
use crate::errors::{Error, Result, ValidationError};

/// One logged observation of a goal metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressLog {
    pub id: String,
    pub goal_id: String,
    pub metric_id: MetricId,
    pub value: f64,
    pub timestamp: DateTime<Utc>,
}

/// Aggregates shown on the progress report screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSummary {
    pub latest: Option<f64>,
    pub average: Option<f64>,
    pub entries: usize,
}

/// Parses a raw progress input string into a finite number.
pub fn parse_progress_value(raw: &str) -> Result<f64> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(ValidationError::NumberParse)?;
    if !value.is_finite() {
        return Err(Error::Validation(ValidationError::InvalidInput(format!(
            "'{raw}' is not a finite number"
        ))));
    }
    Ok(value)
}
