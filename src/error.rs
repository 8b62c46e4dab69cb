// Error type for the s3bytes crate.
use crate::common::{
    MetricName,
    StorageType,
};
use aws_sdk_s3::error::SdkError;

/// Convenience result type used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// All failure modes surfaced by the crate.
///
/// Setter validation failures are reported without side effects; during
/// collection the first task error of any kind wins and cancels the rest.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An output type string that is not one of the known wire forms.
    #[error("unsupported output type: {0:?}")]
    UnsupportedOutputType(String),

    /// A metric name string that is not one of the known wire forms.
    #[error("unsupported metric name: {0:?}")]
    UnsupportedMetricName(String),

    /// A storage type string that is not one of the known wire forms.
    #[error("unsupported storage type: {0:?}")]
    UnsupportedStorageType(String),

    /// A region outside the supported region list.
    #[error("unsupported region: {0:?}")]
    UnsupportedRegion(String),

    /// A bucket name prefix that does not match `^[a-z0-9.-]{1,63}$`.
    #[error("invalid prefix: {0:?}")]
    InvalidPrefix(String),

    /// A `(metric name, storage type)` pair that CloudWatch does not serve.
    #[error("incompatible metric: {metric_name} does not support {storage_type}")]
    IncompatibleMetric {
        /// The requested metric name.
        metric_name: MetricName,
        /// The requested storage type.
        storage_type: StorageType,
    },

    /// A filter expression that is not `<op> <number>`.
    #[error("invalid syntax: {0:?}")]
    InvalidFilterSyntax(String),

    /// A filter expression with an unknown comparison operator.
    #[error("invalid operator: {0:?}")]
    InvalidFilterOperator(String),

    /// AWS shared config could not be resolved.
    #[error("failed to load aws config: {0}")]
    ConfigLoad(String),

    /// Any error returned by the S3 or CloudWatch APIs.
    #[error("aws api error: {0}")]
    Upstream(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),

    /// The surrounding operation was cancelled.
    #[error("operation cancelled")]
    Cancelled,

    /// Writing rendered output failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Encoding metrics as JSON failed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl<E, R> From<SdkError<E, R>> for Error
where
    E: std::error::Error + Send + Sync + 'static,
    R: std::fmt::Debug + Send + Sync + 'static,
{
    fn from(err: SdkError<E, R>) -> Self {
        Self::Upstream(Box::new(err))
    }
}
