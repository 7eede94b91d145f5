//! Check command handler.
//!
//! Fetches the configured targets from graphite, evaluates them and prints the
//! plugin status line.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::warn;

use crate::core::{
    evaluate, fetch_series, CheckConfig, GraphiteQuery, StatusReport, Verdict, VerdictSink,
};

/// Execute the check and print its result, returning the plugin exit code
pub fn execute(matches: &ArgMatches) -> Result<i32> {
    let report = run(matches);
    println!("{}", report.render());
    Ok(report.exit_code())
}

/// Run the check and collect its verdicts without printing them
pub fn run(matches: &ArgMatches) -> StatusReport {
    let mut report = StatusReport::new();

    let (config, query) = match parse_matches(matches) {
        Ok(parsed) => parsed,
        Err(e) => {
            warn!("Invalid configuration: {:#}", e);
            report.emit(Verdict::unknown("", format!("{:#}", e)));
            return report;
        }
    };

    match fetch_series(&query) {
        Ok(data) => evaluate(&config, &data, &mut report),
        Err(e) => {
            warn!("Graphite request failed: {}", e);
            report.emit(Verdict::unknown("", e.to_string()));
        }
    }

    report
}

/// Split the command line into the check configuration and the graphite query
pub fn parse_matches(matches: &ArgMatches) -> Result<(CheckConfig, GraphiteQuery)> {
    let targets: Vec<String> = matches
        .get_many::<String>("target")
        .context("At least one target is required")?
        .filter(|t| !t.is_empty())
        .cloned()
        .collect();

    let base_url = matches
        .get_one::<String>("graphite-url")
        .context("Graphite url is required")?;

    let name_regexp = matches
        .get_one::<String>("target-name-regexp")
        .map(String::as_str)
        .unwrap_or_default();

    let config = CheckConfig {
        warning: matches.get_one::<f64>("warning").copied(),
        critical: matches.get_one::<f64>("critical").copied(),
        max: matches.get_one::<f64>("max").copied(),
        percentage: matches.get_flag("percentage"),
        sum: matches.get_flag("summarize"),
        empty_ok: matches.get_flag("empty-ok"),
        name: matches.get_one::<String>("name").cloned(),
        perfdata: matches.get_flag("perfdata"),
        ..CheckConfig::new(targets.clone())
    }
    .with_name_regexp(name_regexp)
    .context("Failed to compile target name regexp")?;

    let timeout = matches.get_one::<u64>("timeout").copied().unwrap_or(10);

    let query = GraphiteQuery {
        from: matches
            .get_one::<String>("from")
            .cloned()
            .unwrap_or_else(|| "-2min".to_string()),
        until: matches
            .get_one::<String>("until")
            .cloned()
            .unwrap_or_else(|| "now".to_string()),
        timeout: Duration::from_secs(timeout),
        ..GraphiteQuery::new(base_url.clone(), targets)
    };

    Ok((config, query))
}
