//! Run history and log listing filters

use std::str::FromStr;

use shared::{LogEntry, Run, RunStatus, SharedError};

/// Status filter of the runs table; `All` disables it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(RunStatus),
}

impl StatusFilter {
    pub fn matches(&self, status: RunStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() || s.trim().eq_ignore_ascii_case("all") {
            Ok(StatusFilter::All)
        } else {
            s.parse::<RunStatus>().map(StatusFilter::Only)
        }
    }
}

/// Runs having at least one file whose name contains `search`, with a matching status
///
/// A run without files never matches, not even the empty search.
pub fn filter_runs<'a>(runs: &'a [Run], search: &str, status: StatusFilter) -> Vec<&'a Run> {
    let needle = search.to_lowercase();
    runs.iter()
        .filter(|run| run.files.iter().any(|file| file.name.to_lowercase().contains(&needle)))
        .filter(|run| status.matches(run.status))
        .collect()
}

/// Log entries whose message contains `search`, case-insensitively
pub fn filter_logs<'a>(logs: &'a [LogEntry], search: &str) -> Vec<&'a LogEntry> {
    let needle = search.to_lowercase();
    logs.iter().filter(|entry| entry.message.to_lowercase().contains(&needle)).collect()
}
