// Common enums, the filter expression, and shared constants.
use regex::Regex;
use std::sync::LazyLock;

/// The metric value filter expression.
mod filter;

/// The `MetricName` enum.
mod metric_name;

/// The `OutputType` enum.
mod output_type;

/// The `StorageType` enum.
mod storage_type;

pub use filter::*;
pub use metric_name::*;
pub use output_type::*;
pub use storage_type::*;

/// Ceiling on `MetricDataQuery` entries per `GetMetricData` call, imposed
/// by CloudWatch.
pub const MAX_QUERIES: usize = 500;

/// Number of pie chart slices: the top ten buckets plus "others".
pub const MAX_CHART_ITEMS: usize = 11;

/// Region used when the environment resolves none.
pub const DEFAULT_REGION: &str = "us-east-1";

/// The CloudWatch namespace all S3 storage metrics live in.
pub(crate) const NAMESPACE: &str = "AWS/S3";

/// Period of the S3 storage metrics, which are emitted daily.
pub(crate) const PERIOD: i32 = 86_400;

/// Statistic to request; S3 storage metrics only support `Average`.
pub(crate) const STAT: &str = "Average";

/// Width of the metric window in hours.
pub(crate) const METRIC_WINDOW_HOURS: i64 = 48;

/// Regions that require no opt-in.
///
/// https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/using-regions-availability-zones.html#concepts-regions
pub const REGIONS: [&str; 17] = [
    "ap-south-1",
    "eu-north-1",
    "eu-west-3",
    "eu-west-2",
    "eu-west-1",
    "ap-northeast-3",
    "ap-northeast-2",
    "ap-northeast-1",
    "ca-central-1",
    "sa-east-1",
    "ap-southeast-1",
    "ap-southeast-2",
    "eu-central-1",
    "us-east-1",
    "us-east-2",
    "us-west-1",
    "us-west-2",
];

/// Default worker cap for the per-region fan-out.
pub static NUM_WORKER: LazyLock<usize> = LazyLock::new(|| 2 * num_cpus::get() + 1);

/// Pattern a bucket name prefix must match.
pub(crate) static PREFIX_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[a-z0-9.-]{1,63}$").expect("prefix pattern compiles"));
