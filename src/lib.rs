// s3bytes: report the storage footprint of every S3 bucket across regions.
#![forbid(unsafe_code)]

/// Pie chart rendering for the `chart` output type.
mod chart;

/// The S3 + CloudWatch client facade.
mod client;

/// Common enums, the filter expression, and shared constants.
mod common;

/// AWS shared config loading.
mod config;

/// The crate error type.
mod error;

/// The `Manager` and its collection pipeline.
mod manager;

/// `Metric` and `MetricData` records, plus sorting.
mod metrics;

/// Output rendering to JSON, tables, and TSV.
mod renderer;

pub use chart::*;
pub use client::*;
pub use common::*;
pub use config::*;
pub use error::*;
pub use manager::*;
pub use metrics::*;
pub use renderer::*;
