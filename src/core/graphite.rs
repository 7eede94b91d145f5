//! Graphite render API client.

use std::time::Duration;

use log::debug;
use serde::Deserialize;
use url::Url;

use super::series::{Series, SeriesMap};
use crate::error::{ProbeError, Result};

const USER_AGENT: &str = concat!("check_graphite/", env!("CARGO_PKG_VERSION"));

/// One render request against graphite web
#[derive(Debug, Clone)]
pub struct GraphiteQuery {
    pub base_url: String,
    pub targets: Vec<String>,
    pub from: String,
    pub until: String,
    pub timeout: Duration,
}

impl GraphiteQuery {
    pub fn new(base_url: impl Into<String>, targets: Vec<String>) -> Self {
        Self {
            base_url: base_url.into(),
            targets,
            from: "-2min".to_string(),
            until: "now".to_string(),
            timeout: Duration::from_secs(10),
        }
    }

    pub fn url(&self) -> Result<Url> {
        render_url(&self.base_url, &self.targets, &self.from, &self.until)
    }
}

/// Element of the JSON array returned by `/render?format=json`
#[derive(Debug, Deserialize)]
pub struct RenderTarget {
    pub target: String,
    pub datapoints: Vec<(Option<f64>, f64)>,
}

/// Build the render URL for `targets`
pub fn render_url(base_url: &str, targets: &[String], from: &str, until: &str) -> Result<Url> {
    let mut url = Url::parse(base_url.trim_end_matches('/'))?;

    url.path_segments_mut()
        .map_err(|_| ProbeError::config(format!("graphite url can not be a base: {}", base_url)))?
        .pop_if_empty()
        .push("render");

    {
        let mut query = url.query_pairs_mut();
        query.append_pair("format", "json");
        for target in targets {
            query.append_pair("target", target);
        }
        query.append_pair("from", from);
        query.append_pair("until", until);
    }

    Ok(url)
}

/// Decode a render response into series keyed by target name.
///
/// Datapoints without a value are dropped. When graphite returns the same
/// target twice, the later one wins.
pub fn parse_render_response(body: &str) -> Result<SeriesMap> {
    let targets: Vec<RenderTarget> = serde_json::from_str(body)?;

    Ok(targets
        .into_iter()
        .map(|t| {
            let series = Series::from_datapoints(
                t.target.clone(),
                t.datapoints
                    .into_iter()
                    .map(|(value, timestamp)| (value, timestamp as i64)),
            );
            (t.target, series)
        })
        .collect())
}

/// Fetch the queried targets from graphite web
pub fn fetch_series(query: &GraphiteQuery) -> Result<SeriesMap> {
    let url = query.url()?;
    debug!("Fetching {}", url);

    let response = reqwest::blocking::Client::builder()
        .timeout(query.timeout)
        .build()?
        .get(url)
        .header("User-Agent", USER_AGENT)
        .send()?;

    let status = response.status();
    if !status.is_success() {
        return Err(ProbeError::Status(status.as_u16()));
    }

    let body = response.text()?;
    let data = parse_render_response(&body)?;
    debug!("Graphite returned {} series", data.len());

    Ok(data)
}
