// Core evaluation logic module

pub mod config;
pub mod evaluation;
pub mod graphite;
pub mod naming;
pub mod report;
pub mod series;
pub mod target;
pub mod threshold;

// Re-export commonly used items
pub use config::CheckConfig;
pub use evaluation::{evaluate, EvaluationMode, Evaluator};
pub use graphite::{fetch_series, parse_render_response, GraphiteQuery};
pub use naming::NameRule;
pub use report::{StatusReport, VerdictSink};
pub use series::{Sample, Series, SeriesMap};
pub use threshold::{Classifier, PerfDatum, Severity, Verdict};
