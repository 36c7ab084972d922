//! Analysis run history, results and logs

use serde::{Deserialize, Serialize};

use crate::types::{AlertSeverity, AnalysisStep, LogLevel, RunStatus, SectionType};

/// A file submitted with a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunFile {
    pub id: String,
    pub name: String,
    /// Size in bytes
    pub size: u64,
}

/// One analysis run over a set of uploaded documents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Run {
    pub id: String,
    /// RFC 3339 timestamp
    pub created_at: String,
    pub status: RunStatus,
    pub progress_percent: u8,
    pub current_step: Option<AnalysisStep>,
    pub files: Vec<RunFile>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub ts: String,
    pub step: AnalysisStep,
    pub level: LogLevel,
    pub message: String,
}

/// Location in a source document backing an alert
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertReference {
    pub doc_id: String,
    pub page: u32,
    pub fragment: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,
    pub title: String,
    pub severity: AlertSeverity,
    pub category: SectionType,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub references: Option<AlertReference>,
}

/// Classified findings per section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct ResultSections {
    pub legal: Vec<String>,
    pub technical: Vec<String>,
    pub economic: Vec<String>,
}

impl ResultSections {
    pub fn section(&self, section: SectionType) -> &[String] {
        match section {
            SectionType::Legal => &self.legal,
            SectionType::Technical => &self.technical,
            SectionType::Economic => &self.economic,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunResults {
    pub run_id: String,
    pub sections: ResultSections,
    pub alerts: Vec<Alert>,
    pub summary: String,
}

impl RunResults {
    pub fn alerts_with_severity(&self, severity: AlertSeverity) -> impl Iterator<Item = &Alert> {
        self.alerts.iter().filter(move |alert| alert.severity == severity)
    }
}
