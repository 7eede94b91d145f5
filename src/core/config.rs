use regex::Regex;

use super::naming::NameRule;
use super::threshold::Classifier;
use crate::error::Result;

/// Settings of one check run, fixed once the command line is parsed
#[derive(Debug, Clone, Default)]
pub struct CheckConfig {
    /// Target specs in the order given on the command line
    pub targets: Vec<String>,
    pub warning: Option<f64>,
    pub critical: Option<f64>,
    /// Fixed denominator for percentage checks
    pub max: Option<f64>,
    pub percentage: bool,
    pub sum: bool,
    /// Empty series report ok instead of critical
    pub empty_ok: bool,
    pub name: Option<String>,
    pub name_regexp: Option<Regex>,
    pub perfdata: bool,
}

impl CheckConfig {
    pub fn new(targets: Vec<String>) -> Self {
        Self {
            targets,
            ..Default::default()
        }
    }

    /// Compile and set the target name extraction pattern.
    ///
    /// An empty pattern leaves the rule unset.
    pub fn with_name_regexp(mut self, pattern: &str) -> Result<Self> {
        self.name_regexp = if pattern.is_empty() {
            None
        } else {
            Some(Regex::new(pattern)?)
        };
        Ok(self)
    }

    /// The configured maximum, ignoring NaN
    pub fn max(&self) -> Option<f64> {
        self.max.filter(|m| !m.is_nan())
    }

    pub fn name_rule(&self) -> NameRule {
        NameRule::new(self.name.clone(), self.name_regexp.clone())
    }

    pub fn classifier(&self) -> Classifier {
        Classifier::new(self.warning, self.critical, self.perfdata)
    }
}
