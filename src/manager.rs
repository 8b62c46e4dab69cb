// Manager configuration and validation
use crate::client::Client;
use crate::common::{
    Filter,
    MetricName,
    StorageType,
    MAX_QUERIES,
    NUM_WORKER,
    PREFIX_PATTERN,
    REGIONS,
};
use crate::error::{
    Error,
    Result,
};
use std::sync::Arc;
use tokio::sync::Semaphore;

/// Per-region bucket enumeration.
mod buckets;

/// Folding `GetMetricData` pages into metric records.
mod data;

/// The semaphore-bounded fan-out over regions.
mod list;

/// Batching buckets into metric data queries.
mod queries;

/// Validated configuration for one collection run.
///
/// Built with [`Manager::new`], mutated only through the setters, then
/// consumed by [`Manager::list`]. The setters are not meant for concurrent
/// use; call them before the fan-out starts. A setter that fails leaves
/// the prior state intact.
#[derive(Debug, Clone)]
pub struct Manager {
    client:       Client,
    regions:      Vec<String>,
    prefix:       Option<String>,
    metric_name:  MetricName,
    storage_type: StorageType,
    filter:       Option<Filter>,
    max_queries:  usize,
    sem:          Arc<Semaphore>,
}

impl Manager {
    /// Return a `Manager` with defaults: every supported region, no
    /// prefix, `BucketSizeBytes` of `StandardStorage`, no filter, and a
    /// worker cap of `2 * CPU + 1`.
    pub fn new(client: Client) -> Self {
        Self {
            client,
            regions:      REGIONS.iter().map(ToString::to_string).collect(),
            prefix:       None,
            metric_name:  MetricName::default(),
            storage_type: StorageType::default(),
            filter:       None,
            max_queries:  MAX_QUERIES,
            sem:          Arc::new(Semaphore::new(*NUM_WORKER)),
        }
    }

    /// Replace the target regions.
    ///
    /// An empty list keeps the default. Every element must be in the
    /// supported region list; the first offender fails the whole call.
    pub fn set_region(&mut self, regions: Vec<String>) -> Result<()> {
        if regions.is_empty() {
            return Ok(());
        }

        for region in &regions {
            if !REGIONS.contains(&region.as_str()) {
                return Err(Error::UnsupportedRegion(region.clone()));
            }
        }

        self.regions = regions;

        Ok(())
    }

    /// Set the bucket name prefix used to narrow `ListBuckets`.
    ///
    /// An empty string is a no-op.
    pub fn set_prefix(&mut self, prefix: &str) -> Result<()> {
        if prefix.is_empty() {
            return Ok(());
        }

        if !PREFIX_PATTERN.is_match(prefix) {
            return Err(Error::InvalidPrefix(prefix.to_string()));
        }

        self.prefix = Some(prefix.to_string());

        Ok(())
    }

    /// Set the metric name and storage type pair.
    ///
    /// `BucketSizeBytes` is published per concrete storage type, never for
    /// `AllStorageTypes`; `NumberOfObjects` is published only for
    /// `AllStorageTypes`.
    pub fn set_metric(&mut self, metric_name: MetricName, storage_type: StorageType) -> Result<()> {
        let incompatible = match metric_name {
            MetricName::BucketSizeBytes => storage_type == StorageType::AllStorageTypes,
            MetricName::NumberOfObjects => storage_type != StorageType::AllStorageTypes,
        };

        if incompatible {
            return Err(Error::IncompatibleMetric {
                metric_name,
                storage_type,
            });
        }

        self.metric_name = metric_name;
        self.storage_type = storage_type;

        Ok(())
    }

    /// Set the metric value filter from an expression string.
    ///
    /// An empty expression clears the filter.
    pub fn set_filter(&mut self, expr: &str) -> Result<()> {
        if expr.is_empty() {
            self.filter = None;
            return Ok(());
        }

        self.filter = Some(expr.parse()?);

        Ok(())
    }

    // True when the value passes the configured filter.
    pub(crate) fn apply_filter(&self, value: f64) -> bool {
        self.filter.map_or(true, |f| f.apply(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::mock::{
        mock_client,
        static_cloudwatch,
        static_s3,
    };
    use pretty_assertions::assert_eq;

    pub(crate) fn empty_manager() -> Manager {
        Manager::new(mock_client(static_s3(&[]), static_cloudwatch(&[])))
    }

    #[test]
    fn test_new_defaults() {
        let man = empty_manager();

        assert_eq!(man.regions.len(), REGIONS.len());
        assert_eq!(man.prefix, None);
        assert_eq!(man.metric_name, MetricName::BucketSizeBytes);
        assert_eq!(man.storage_type, StorageType::StandardStorage);
        assert_eq!(man.filter, None);
        assert_eq!(man.max_queries, MAX_QUERIES);
        assert_eq!(man.sem.available_permits(), *NUM_WORKER);
    }

    #[test]
    fn test_set_region() {
        let mut man = empty_manager();

        // The empty list keeps the defaults.
        man.set_region(vec![]).unwrap();
        assert_eq!(man.regions.len(), REGIONS.len());

        man.set_region(vec!["ap-northeast-1".to_string(), "us-west-2".to_string()])
            .unwrap();
        assert_eq!(man.regions, vec!["ap-northeast-1", "us-west-2"]);

        // An unknown region fails and leaves the prior state intact.
        let err = man
            .set_region(vec!["us-west-2".to_string(), "moon-base-1".to_string()])
            .unwrap_err();
        assert!(matches!(err, Error::UnsupportedRegion(ref r) if r == "moon-base-1"));
        assert_eq!(man.regions, vec!["ap-northeast-1", "us-west-2"]);
    }

    #[test]
    fn test_set_prefix() {
        let mut man = empty_manager();

        man.set_prefix("").unwrap();
        assert_eq!(man.prefix, None);

        man.set_prefix("log.2024-archive").unwrap();
        assert_eq!(man.prefix.as_deref(), Some("log.2024-archive"));

        let too_long = "a".repeat(64);
        let tests = vec![
            "UpperCase",
            "under_score",
            "spaced out",
            too_long.as_str(),
        ];

        for prefix in tests {
            let err = man.set_prefix(prefix).unwrap_err();

            assert!(matches!(err, Error::InvalidPrefix(_)), "{prefix:?}");
            assert_eq!(man.prefix.as_deref(), Some("log.2024-archive"));
        }
    }

    #[test]
    fn test_set_metric() {
        let mut man = empty_manager();

        man.set_metric(MetricName::BucketSizeBytes, StorageType::GlacierStorage)
            .unwrap();
        assert_eq!(man.storage_type, StorageType::GlacierStorage);

        man.set_metric(MetricName::NumberOfObjects, StorageType::AllStorageTypes)
            .unwrap();
        assert_eq!(man.metric_name, MetricName::NumberOfObjects);

        // BucketSizeBytes has no AllStorageTypes series.
        let err = man
            .set_metric(MetricName::BucketSizeBytes, StorageType::AllStorageTypes)
            .unwrap_err();
        assert!(matches!(err, Error::IncompatibleMetric { .. }));

        // NumberOfObjects only has the AllStorageTypes series.
        let err = man
            .set_metric(MetricName::NumberOfObjects, StorageType::StandardStorage)
            .unwrap_err();
        assert!(matches!(err, Error::IncompatibleMetric { .. }));

        // State is unchanged, so a valid pair still goes through.
        assert_eq!(man.metric_name, MetricName::NumberOfObjects);
        assert_eq!(man.storage_type, StorageType::AllStorageTypes);
        man.set_metric(MetricName::BucketSizeBytes, StorageType::StandardStorage)
            .unwrap();
        assert_eq!(man.metric_name, MetricName::BucketSizeBytes);
        assert_eq!(man.storage_type, StorageType::StandardStorage);
    }

    #[test]
    fn test_set_filter() {
        let mut man = empty_manager();

        man.set_filter("> 1024").unwrap();
        assert!(man.apply_filter(2048.0));
        assert!(!man.apply_filter(512.0));

        // A failed parse preserves the prior filter.
        assert!(man.set_filter("bogus").is_err());
        assert!(man.apply_filter(2048.0));
        assert!(!man.apply_filter(512.0));

        // The empty expression clears it.
        man.set_filter("").unwrap();
        assert!(man.apply_filter(0.0));
    }

    #[test]
    fn test_setter_idempotence() {
        let mut man = empty_manager();

        man.set_region(vec!["eu-west-1".to_string()]).unwrap();
        man.set_region(vec!["eu-west-1".to_string()]).unwrap();
        assert_eq!(man.regions, vec!["eu-west-1"]);

        man.set_prefix("logs").unwrap();
        man.set_prefix("logs").unwrap();
        assert_eq!(man.prefix.as_deref(), Some("logs"));
    }
}
