//! Plugin status report.
//!
//! Collects verdicts, combines them into one status (worst wins) and renders
//! the status line printed before the process exits.

use log::debug;

use super::threshold::{Severity, Verdict};

/// Receiver of the verdicts produced by an evaluation
pub trait VerdictSink {
    fn emit(&mut self, verdict: Verdict);
}

impl VerdictSink for Vec<Verdict> {
    fn emit(&mut self, verdict: Verdict) {
        self.push(verdict);
    }
}

/// Accumulated plugin output for one run
#[derive(Debug, Default)]
pub struct StatusReport {
    verdicts: Vec<Verdict>,
}

impl StatusReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn verdicts(&self) -> &[Verdict] {
        &self.verdicts
    }

    /// Combined status. A report without any verdict is unknown.
    pub fn status(&self) -> Severity {
        self.verdicts
            .iter()
            .map(|v| v.severity)
            .reduce(Severity::worst)
            .unwrap_or(Severity::Unknown)
    }

    pub fn exit_code(&self) -> i32 {
        self.status().exit_code()
    }

    /// Render `STATUS - msg, msg | perf perf`
    pub fn render(&self) -> String {
        let messages = if self.verdicts.is_empty() {
            "no data checked".to_string()
        } else {
            self.verdicts
                .iter()
                .map(|v| v.message.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        };

        let mut line = format!("{} - {}", self.status(), messages);

        let perfdata: Vec<String> = self
            .verdicts
            .iter()
            .filter_map(|v| v.perfdata.as_ref())
            .map(|p| p.to_string())
            .collect();

        if !perfdata.is_empty() {
            line.push_str(" | ");
            line.push_str(&perfdata.join(" "));
        }

        line
    }
}

impl VerdictSink for StatusReport {
    fn emit(&mut self, verdict: Verdict) {
        debug!("{}: {}", verdict.severity, verdict.message);
        self.verdicts.push(verdict);
    }
}
