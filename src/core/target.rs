//! Resolution of configured target specs against the fetched series.

use glob::{MatchOptions, Pattern};
use log::debug;

use super::series::{Series, SeriesMap};

/// Shell semantics: wildcards never cross a `/`
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Whether a target spec is a glob rather than a literal series name
pub fn is_glob(spec: &str) -> bool {
    spec.contains('*')
}

/// Find the series a target spec refers to.
///
/// Literal specs are looked up by exact name. Glob specs return the first
/// series, in name order, whose name matches the pattern.
pub fn resolve<'a>(available: &'a SeriesMap, spec: &str) -> Option<&'a Series> {
    if !is_glob(spec) {
        return available.get(spec);
    }

    let pattern = match Pattern::new(spec) {
        Ok(pattern) => pattern,
        Err(e) => {
            debug!("Ignoring invalid glob '{}': {}", spec, e);
            return None;
        }
    };

    available
        .values()
        .find(|series| pattern.matches_with(series.name(), MATCH_OPTIONS))
}
