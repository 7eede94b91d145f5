//! Evaluation of the fetched series.
//!
//! One [`EvaluationMode`] is chosen from the configuration and drives target
//! resolution, averaging, naming and classification, emitting verdicts to a
//! [`VerdictSink`] as it goes.

use log::debug;

use super::config::CheckConfig;
use super::naming::NameRule;
use super::report::VerdictSink;
use super::series::{Series, SeriesMap};
use super::target;
use super::threshold::{Classifier, Severity, Verdict};

pub const ODD_TARGET_COUNT: &str =
    "count of targets is not even, can not calculate percentage for targets";

/// Display name of the aggregate verdict when no target contributed to a sum
const SUM_FALLBACK_NAME: &str = "sum";

/// How the configured targets are checked
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EvaluationMode {
    /// Every target on its own against the raw thresholds
    PerTarget,
    /// Sum of all target averages, optionally as a percentage of a fixed maximum
    Sum { max: Option<f64> },
    /// Targets taken in (value, max) pairs
    PercentagePairs,
}

impl EvaluationMode {
    pub fn from_config(config: &CheckConfig) -> Self {
        let max = if config.percentage { config.max() } else { None };

        if config.percentage && max.is_none() {
            EvaluationMode::PercentagePairs
        } else if config.sum {
            EvaluationMode::Sum { max }
        } else {
            EvaluationMode::PerTarget
        }
    }
}

/// Runs the configured checks over one set of fetched series
pub struct Evaluator<'a> {
    config: &'a CheckConfig,
    data: &'a SeriesMap,
    names: NameRule,
    classifier: Classifier,
}

impl<'a> Evaluator<'a> {
    pub fn new(config: &'a CheckConfig, data: &'a SeriesMap) -> Self {
        Self {
            config,
            data,
            names: config.name_rule(),
            classifier: config.classifier(),
        }
    }

    pub fn mode(&self) -> EvaluationMode {
        EvaluationMode::from_config(self.config)
    }

    /// Evaluate every configured target and emit the verdicts in order.
    pub fn run(&self, sink: &mut dyn VerdictSink) {
        let mode = self.mode();
        debug!(
            "Evaluating {} target(s) against {} series in {:?} mode",
            self.config.targets.len(),
            self.data.len(),
            mode
        );

        match mode {
            EvaluationMode::PerTarget => self.check_targets(sink),
            EvaluationMode::Sum { max } => self.check_sum(max, sink),
            EvaluationMode::PercentagePairs => self.check_percentage_pairs(sink),
        }
    }

    fn check_targets(&self, sink: &mut dyn VerdictSink) {
        for spec in &self.config.targets {
            let Some(series) = self.check_target(spec, sink) else {
                continue;
            };

            let name = self.names.resolve(spec);
            sink.emit(self.classifier.classify(&name, series.average()));
        }
    }

    fn check_sum(&self, max: Option<f64>, sink: &mut dyn VerdictSink) {
        let mut sum = 0.0;
        let mut last_target = None;

        for spec in &self.config.targets {
            if let Some(series) = self.check_target(spec, sink) {
                sum += series.average();
                last_target = Some(spec.as_str());
            }
        }

        let name = match (self.names.explicit(), last_target) {
            (Some(name), _) => name.to_string(),
            (None, Some(target)) => self.names.resolve(target),
            (None, None) => SUM_FALLBACK_NAME.to_string(),
        };

        let verdict = match max {
            Some(max) => self.classifier.classify_percentage(&name, sum, max),
            None => self.classifier.classify(&name, sum),
        };
        sink.emit(verdict);
    }

    fn check_percentage_pairs(&self, sink: &mut dyn VerdictSink) {
        let targets = &self.config.targets;
        if targets.len() % 2 != 0 {
            sink.emit(Verdict::unknown("", ODD_TARGET_COUNT));
            return;
        }

        for pair in targets.chunks_exact(2) {
            let value = self.check_target(&pair[0], sink);
            let max = self.check_target(&pair[1], sink);

            if let (Some(value), Some(max)) = (value, max) {
                let name = self.names.resolve(value.name());
                sink.emit(
                    self.classifier
                        .classify_percentage(&name, value.average(), max.average()),
                );
            }
        }
    }

    /// Resolve a target and emit a verdict when it can not be checked.
    ///
    /// Returns the series only when it was found and holds samples.
    fn check_target(&self, spec: &str, sink: &mut dyn VerdictSink) -> Option<&'a Series> {
        let Some(series) = target::resolve(self.data, spec) else {
            sink.emit(Verdict::unknown(spec, format!("target not found: {}", spec)));
            return None;
        };

        if series.is_empty() {
            let severity = if self.config.empty_ok {
                Severity::Ok
            } else {
                Severity::Critical
            };
            sink.emit(Verdict::status(
                series.name(),
                severity,
                format!("target is empty: {}", series.name()),
            ));
            return None;
        }

        Some(series)
    }
}

/// Evaluate `data` with `config`, emitting every verdict to `sink`.
pub fn evaluate(config: &CheckConfig, data: &SeriesMap, sink: &mut dyn VerdictSink) {
    Evaluator::new(config, data).run(sink);
}
