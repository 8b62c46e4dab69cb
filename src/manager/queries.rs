// Batching buckets into metric data queries
use super::Manager;
use crate::common::{
    NAMESPACE,
    PERIOD,
    STAT,
};
use aws_sdk_cloudwatch::types::{
    Dimension,
    Metric as CwMetric,
    MetricDataQuery,
    MetricStat,
};
use aws_sdk_s3::types::Bucket;
use std::mem;

impl Manager {
    /// Group the buckets into `GetMetricData` batches.
    ///
    /// Query ids are `m<i>` where `i` is the position in the full bucket
    /// list; the bucket name rides along as the label so results can be
    /// correlated without re-parsing dimensions. A batch closes at the
    /// query cap and a trailing partial batch is kept.
    pub(crate) fn build_queries(&self, buckets: &[Bucket]) -> Vec<Vec<MetricDataQuery>> {
        let mut batches = Vec::with_capacity(buckets.len().div_ceil(self.max_queries.max(1)));
        let mut batch = Vec::with_capacity(self.max_queries.min(buckets.len()));

        for (i, bucket) in buckets.iter().enumerate() {
            let name = bucket.name().unwrap_or_default();

            let query = MetricDataQuery::builder()
                .id(format!("m{i}"))
                .label(name)
                .metric_stat(
                    MetricStat::builder()
                        .metric(
                            CwMetric::builder()
                                .namespace(NAMESPACE)
                                .metric_name(self.metric_name.as_str())
                                .dimensions(
                                    Dimension::builder()
                                        .name("BucketName")
                                        .value(name)
                                        .build(),
                                )
                                .dimensions(
                                    Dimension::builder()
                                        .name("StorageType")
                                        .value(self.storage_type.as_str())
                                        .build(),
                                )
                                .build(),
                        )
                        .period(PERIOD)
                        .stat(STAT)
                        .build(),
                )
                .build();

            batch.push(query);

            if batch.len() == self.max_queries {
                batches.push(mem::replace(&mut batch, Vec::with_capacity(self.max_queries)));
            }
        }

        if !batch.is_empty() {
            batches.push(batch);
        }

        batches
    }
}
