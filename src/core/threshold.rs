//! Threshold classification.
//!
//! Compares a scalar against warning and critical upper limits and turns the
//! outcome into a [`Verdict`].

use std::fmt;

use crate::ui::formatters::{format_bound, format_value};

/// Monitoring plugin status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Ok,
    Warning,
    Critical,
    Unknown,
}

impl Severity {
    /// Plugin exit code for this status
    pub fn exit_code(self) -> i32 {
        match self {
            Severity::Ok => 0,
            Severity::Warning => 1,
            Severity::Critical => 2,
            Severity::Unknown => 3,
        }
    }

    /// Priority when several results are combined, higher is worse.
    ///
    /// Critical outranks unknown, both outrank warning.
    pub fn rank(self) -> u8 {
        match self {
            Severity::Ok => 0,
            Severity::Warning => 1,
            Severity::Unknown => 2,
            Severity::Critical => 3,
        }
    }

    /// The worse of two statuses
    pub fn worst(self, other: Severity) -> Severity {
        if other.rank() > self.rank() {
            other
        } else {
            self
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Severity::Ok => "OK",
            Severity::Warning => "WARNING",
            Severity::Critical => "CRITICAL",
            Severity::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Performance data entry: `name=value;warning;critical`
///
/// A non-finite value (zero denominator) is written as `U`, the plugin
/// convention for an undeterminable value.
#[derive(Debug, Clone, PartialEq)]
pub struct PerfDatum {
    pub name: String,
    pub value: f64,
    pub warning: Option<f64>,
    pub critical: Option<f64>,
}

impl fmt::Display for PerfDatum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = if self.value.is_finite() {
            format_value(self.value)
        } else {
            "U".to_string()
        };

        write!(
            f,
            "{}={};{};{}",
            self.name,
            value,
            format_bound(self.warning),
            format_bound(self.critical)
        )
    }
}

/// Result of one logical check
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    pub display_name: String,
    pub value: f64,
    pub severity: Severity,
    pub message: String,
    pub perfdata: Option<PerfDatum>,
}

impl Verdict {
    /// Verdict without a measured value (missing or empty targets, bad config)
    pub fn status(
        display_name: impl Into<String>,
        severity: Severity,
        message: impl Into<String>,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            value: f64::NAN,
            severity,
            message: message.into(),
            perfdata: None,
        }
    }

    pub fn unknown(display_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::status(display_name, Severity::Unknown, message)
    }
}

/// Warning and critical upper limits. NaN bounds count as unset.
#[derive(Debug, Clone, Copy, Default)]
pub struct Classifier {
    pub warning: Option<f64>,
    pub critical: Option<f64>,
    pub perfdata: bool,
}

impl Classifier {
    pub fn new(warning: Option<f64>, critical: Option<f64>, perfdata: bool) -> Self {
        Self {
            warning: warning.filter(|w| !w.is_nan()),
            critical: critical.filter(|c| !c.is_nan()),
            perfdata,
        }
    }

    /// Classify `value` against the configured bounds.
    pub fn classify(&self, name: &str, value: f64) -> Verdict {
        self.build(name, value, "")
    }

    /// Classify `numerator / denominator * 100`.
    ///
    /// A zero denominator is not guarded: the resulting infinity or NaN is
    /// compared as is.
    pub fn classify_percentage(&self, name: &str, numerator: f64, denominator: f64) -> Verdict {
        let percentage = numerator / denominator * 100.0;
        self.build(name, percentage, "%")
    }

    fn build(&self, name: &str, value: f64, unit: &str) -> Verdict {
        let (severity, breached) = self.severity_of(value);

        let mut message = format!("{} at {:.2}{}", name, value, unit);
        if let Some(bound) = breached {
            message.push_str(&format!(
                " ({} threshold: {}{})",
                severity.label().to_lowercase(),
                format_value(bound),
                unit
            ));
        }

        let perfdata = self.perfdata.then(|| PerfDatum {
            name: name.to_string(),
            value,
            warning: self.warning,
            critical: self.critical,
        });

        Verdict {
            display_name: name.to_string(),
            value,
            severity,
            message,
            perfdata,
        }
    }

    fn severity_of(&self, value: f64) -> (Severity, Option<f64>) {
        let bound = |b: Option<f64>| b.filter(|b| !b.is_nan() && value >= *b);

        if let Some(critical) = bound(self.critical) {
            (Severity::Critical, Some(critical))
        } else if let Some(warning) = bound(self.warning) {
            (Severity::Warning, Some(warning))
        } else {
            (Severity::Ok, None)
        }
    }
}
