// Metric records and sorting
use crate::common::{
    MetricName,
    StorageType,
};
use serde::Serialize;

/// Column order shared by every tabular output format.
pub const HEADER: [&str; 5] = [
    "BucketName",
    "Region",
    "MetricName",
    "StorageType",
    "Value",
];

/// One observation: a bucket, its region, and the reduced metric value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Metric {
    /// The bucket the observation belongs to.
    pub bucket_name: String,

    /// The region the bucket lives in.
    pub region: String,

    /// The metric the value was read from.
    pub metric_name: MetricName,

    /// The storage type dimension the value was read with.
    pub storage_type: StorageType,

    /// The reduced value over the metric window.
    pub value: f64,
}

/// The collected result of one `list` invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricData {
    /// Column names for tabular renderers.
    pub header: &'static [&'static str],

    /// The collected metrics, unsorted until [`sort_metrics`] runs.
    pub metrics: Vec<Metric>,

    /// Sum of all included values, truncated to an integer.
    pub total: i64,
}

impl MetricData {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            header:  &HEADER,
            metrics: Vec::with_capacity(capacity),
            total:   0,
        }
    }
}

/// Order metrics by value descending, then bucket name ascending.
///
/// The sort is stable, so rows tied on both keys keep their prior order.
pub fn sort_metrics(data: &mut MetricData) {
    data.metrics.sort_by(|a, b| {
        b.value
            .total_cmp(&a.value)
            .then_with(|| a.bucket_name.cmp(&b.bucket_name))
    });
}
