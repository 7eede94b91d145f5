use std::collections::BTreeMap;

/// Series fetched in one invocation, keyed by the exact name graphite returned.
///
/// Ordered so that glob resolution always scans names in the same order.
pub type SeriesMap = BTreeMap<String, Series>;

/// A single datapoint with a known value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub value: f64,
    pub timestamp: i64, // Unix timestamp
}

/// A named series of samples returned for one graphite target
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    name: String,
    samples: Vec<Sample>,
}

impl Series {
    /// Build a series from raw datapoints, dropping the ones without a value.
    pub fn from_datapoints<I>(name: impl Into<String>, datapoints: I) -> Self
    where
        I: IntoIterator<Item = (Option<f64>, i64)>,
    {
        let samples = datapoints
            .into_iter()
            .filter_map(|(value, timestamp)| value.map(|value| Sample { value, timestamp }))
            .collect();

        Self {
            name: name.into(),
            samples,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Arithmetic mean of all sample values.
    ///
    /// Returns NaN for an empty series; check [`Series::is_empty`] first.
    pub fn average(&self) -> f64 {
        let sum: f64 = self.samples.iter().map(|s| s.value).sum();
        sum / self.samples.len() as f64
    }
}
