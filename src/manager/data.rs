// Folding GetMetricData pages into metric records
use super::Manager;
use crate::common::METRIC_WINDOW_HOURS;
use crate::error::{
    Error,
    Result,
};
use crate::metrics::Metric;
use aws_sdk_cloudwatch::primitives::DateTime;
use aws_sdk_cloudwatch::types::MetricDataQuery;
use chrono::{
    Duration,
    Utc,
};
use tokio_util::sync::CancellationToken;
use tracing::debug;

impl Manager {
    /// Fetch and reduce metric data for every batch in `region`.
    ///
    /// The metric window is captured once and reused across batches and
    /// pages. Each result is reduced to the maximum of its values (zero
    /// when the series is empty); non-finite values and values rejected by
    /// the filter produce no row. A bucket CloudWatch has no series for is
    /// simply absent from the results.
    ///
    /// Returns the metrics in result order together with the truncated
    /// running total for this region.
    pub(crate) async fn get_metrics(
        &self,
        batches: Vec<Vec<MetricDataQuery>>,
        region: &str,
        token: &CancellationToken,
    ) -> Result<(Vec<Metric>, i64)> {
        let end_time = Utc::now();
        let start_time = end_time - Duration::hours(METRIC_WINDOW_HOURS);
        let end_millis = end_time.timestamp_millis();
        let start_millis = start_time.timestamp_millis();

        let mut metrics = Vec::new();
        let mut subtotal: i64 = 0;

        for batch in batches {
            let mut next_token = None;

            loop {
                let output = tokio::select! {
                    () = token.cancelled() => return Err(Error::Cancelled),
                    output = self.client.cw.get_metric_data(
                        region,
                        batch.clone(),
                        DateTime::from_millis(start_millis),
                        DateTime::from_millis(end_millis),
                        next_token.take(),
                    ) => output?,
                };

                for result in output.metric_data_results() {
                    let values = result.values();

                    let value = if values.is_empty() {
                        0.0
                    } else {
                        values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
                    };

                    if !value.is_finite() || !self.apply_filter(value) {
                        continue;
                    }

                    metrics.push(Metric {
                        bucket_name:  result.label().unwrap_or_default().to_string(),
                        region:       region.to_string(),
                        metric_name:  self.metric_name,
                        storage_type: self.storage_type,
                        value,
                    });

                    subtotal += value as i64;
                }

                match output.next_token() {
                    Some(t) => next_token = Some(t.to_string()),
                    None    => break,
                }
            }
        }

        debug!("collected {} metrics in {region}", metrics.len());

        Ok((metrics, subtotal))
    }
}
