//! Landing-page indicators

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityPoint {
    /// `YYYY-MM-DD`
    pub date: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiData {
    pub total_runs: u32,
    pub high_alert_percentage: f64,
    /// Minutes per run
    pub average_time: f64,
    pub recent_activity: Vec<ActivityPoint>,
}
