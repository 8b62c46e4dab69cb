// S3 and CloudWatch client facade
use crate::error::Result;
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_cloudwatch::operation::get_metric_data::GetMetricDataOutput;
use aws_sdk_cloudwatch::primitives::DateTime;
use aws_sdk_cloudwatch::types::MetricDataQuery;
use aws_sdk_s3::operation::list_buckets::ListBucketsOutput;
use std::fmt;
use std::sync::Arc;

/// The one S3 call the collection pipeline needs.
///
/// The region parameter scopes both the request (`BucketRegion`) and the
/// endpoint the call is sent to.
#[async_trait]
pub trait S3Api: Send + Sync {
    /// Fetch one page of `ListBuckets` for the given region.
    async fn list_buckets(
        &self,
        region: &str,
        prefix: Option<&str>,
        continuation_token: Option<String>,
    ) -> Result<ListBucketsOutput>;
}

/// The one CloudWatch call the collection pipeline needs.
#[async_trait]
pub trait CloudWatchApi: Send + Sync {
    /// Fetch one page of `GetMetricData` for the given region.
    async fn get_metric_data(
        &self,
        region: &str,
        queries: Vec<MetricDataQuery>,
        start_time: DateTime,
        end_time: DateTime,
        next_token: Option<String>,
    ) -> Result<GetMetricDataOutput>;
}

/// The AWS SDK S3 client behind [`S3Api`].
pub struct S3 {
    client: aws_sdk_s3::Client,
}

#[async_trait]
impl S3Api for S3 {
    async fn list_buckets(
        &self,
        region: &str,
        prefix: Option<&str>,
        continuation_token: Option<String>,
    ) -> Result<ListBucketsOutput> {
        let output = self.client
            .list_buckets()
            .bucket_region(region)
            .set_prefix(prefix.map(ToOwned::to_owned))
            .set_continuation_token(continuation_token)
            .customize()
            .config_override(
                aws_sdk_s3::config::Config::builder()
                    .region(aws_sdk_s3::config::Region::new(region.to_string())),
            )
            .send()
            .await?;

        Ok(output)
    }
}

/// The AWS SDK CloudWatch client behind [`CloudWatchApi`].
pub struct CloudWatch {
    client: aws_sdk_cloudwatch::Client,
}

#[async_trait]
impl CloudWatchApi for CloudWatch {
    async fn get_metric_data(
        &self,
        region: &str,
        queries: Vec<MetricDataQuery>,
        start_time: DateTime,
        end_time: DateTime,
        next_token: Option<String>,
    ) -> Result<GetMetricDataOutput> {
        let output = self.client
            .get_metric_data()
            .set_metric_data_queries(Some(queries))
            .start_time(start_time)
            .end_time(end_time)
            .set_next_token(next_token)
            .customize()
            .config_override(
                aws_sdk_cloudwatch::config::Config::builder()
                    .region(aws_sdk_cloudwatch::config::Region::new(region.to_string())),
            )
            .send()
            .await?;

        Ok(output)
    }
}

/// The S3 + CloudWatch facade handed to the `Manager`.
#[derive(Clone)]
pub struct Client {
    pub(crate) s3: Arc<dyn S3Api>,
    pub(crate) cw: Arc<dyn CloudWatchApi>,
}

impl Client {
    /// Return a new `Client` backed by the AWS SDK.
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            s3: Arc::new(S3 {
                client: aws_sdk_s3::Client::new(config),
            }),
            cw: Arc::new(CloudWatch {
                client: aws_sdk_cloudwatch::Client::new(config),
            }),
        }
    }

    /// Return a `Client` from caller-supplied API implementations.
    pub fn from_parts(s3: Arc<dyn S3Api>, cw: Arc<dyn CloudWatchApi>) -> Self {
        Self { s3, cw }
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client").finish_non_exhaustive()
    }
}

#[cfg(test)]
pub(crate) mod mock {
    use super::*;
    use futures::future::BoxFuture;

    type ListBucketsFn = dyn Fn(&str, Option<&str>, Option<String>) -> BoxFuture<'static, Result<ListBucketsOutput>>
        + Send
        + Sync;

    type GetMetricDataFn = dyn Fn(&str, Vec<MetricDataQuery>, Option<String>) -> BoxFuture<'static, Result<GetMetricDataOutput>>
        + Send
        + Sync;

    /// An `S3Api` backed by a closure.
    pub(crate) struct MockS3 {
        pub list_buckets_fn: Box<ListBucketsFn>,
    }

    #[async_trait]
    impl S3Api for MockS3 {
        async fn list_buckets(
            &self,
            region: &str,
            prefix: Option<&str>,
            continuation_token: Option<String>,
        ) -> Result<ListBucketsOutput> {
            (self.list_buckets_fn)(region, prefix, continuation_token).await
        }
    }

    /// A `CloudWatchApi` backed by a closure.
    ///
    /// The time window is dropped here since mocks never inspect it.
    pub(crate) struct MockCloudWatch {
        pub get_metric_data_fn: Box<GetMetricDataFn>,
    }

    #[async_trait]
    impl CloudWatchApi for MockCloudWatch {
        async fn get_metric_data(
            &self,
            region: &str,
            queries: Vec<MetricDataQuery>,
            _start_time: DateTime,
            _end_time: DateTime,
            next_token: Option<String>,
        ) -> Result<GetMetricDataOutput> {
            (self.get_metric_data_fn)(region, queries, next_token).await
        }
    }

    /// A `Client` built from the two mocks.
    pub(crate) fn mock_client(s3: MockS3, cw: MockCloudWatch) -> Client {
        Client::from_parts(Arc::new(s3), Arc::new(cw))
    }

    /// An S3 mock returning a single fixed page of bucket names.
    pub(crate) fn static_s3(buckets: &[&str]) -> MockS3 {
        let buckets: Vec<String> = buckets.iter().map(ToString::to_string).collect();

        MockS3 {
            list_buckets_fn: Box::new(move |region, _, _| {
                let mut builder = ListBucketsOutput::builder();

                for name in &buckets {
                    builder = builder.buckets(
                        aws_sdk_s3::types::Bucket::builder()
                            .name(name)
                            .bucket_region(region)
                            .build(),
                    );
                }

                let output = builder.build();

                Box::pin(async move { Ok(output) })
            }),
        }
    }

    /// A CloudWatch mock returning a single fixed page of results.
    pub(crate) fn static_cloudwatch(results: &[(&str, &str, &[f64])]) -> MockCloudWatch {
        let results: Vec<(String, String, Vec<f64>)> = results
            .iter()
            .map(|(id, label, values)| (id.to_string(), label.to_string(), values.to_vec()))
            .collect();

        MockCloudWatch {
            get_metric_data_fn: Box::new(move |_, _, _| {
                let mut builder = GetMetricDataOutput::builder();

                for (id, label, values) in &results {
                    builder = builder.metric_data_results(
                        aws_sdk_cloudwatch::types::MetricDataResult::builder()
                            .id(id)
                            .label(label)
                            .set_values(Some(values.clone()))
                            .build(),
                    );
                }

                let output = builder.build();

                Box::pin(async move { Ok(output) })
            }),
        }
    }
}
