// MetricName
use crate::error::Error;
use serde::{
    Serialize,
    Serializer,
};
use std::fmt;
use std::str::FromStr;

/// The S3 storage metrics CloudWatch publishes per bucket.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum MetricName {
    /// Bytes stored per storage type.
    #[default]
    BucketSizeBytes,

    /// Object count across all storage types.
    NumberOfObjects,
}

impl MetricName {
    /// Return the wire form expected by CloudWatch.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BucketSizeBytes => "BucketSizeBytes",
            Self::NumberOfObjects => "NumberOfObjects",
        }
    }
}

impl fmt::Display for MetricName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetricName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BucketSizeBytes" => Ok(Self::BucketSizeBytes),
            "NumberOfObjects" => Ok(Self::NumberOfObjects),
            _                 => Err(Error::UnsupportedMetricName(s.to_string())),
        }
    }
}

impl Serialize for MetricName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
