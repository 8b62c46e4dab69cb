// StorageType
use crate::error::Error;
use serde::{
    Serialize,
    Serializer,
};
use std::fmt;
use std::str::FromStr;

/// The `StorageType` dimension values CloudWatch publishes for S3.
///
/// https://docs.aws.amazon.com/AmazonS3/latest/userguide/metrics-dimensions.html
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum StorageType {
    // S3 Standard:
    /// `StandardStorage`
    #[default]
    StandardStorage,

    // S3 Intelligent-Tiering:
    /// `IntelligentTieringFAStorage`
    IntelligentTieringFaStorage,
    /// `IntelligentTieringIAStorage`
    IntelligentTieringIaStorage,
    /// `IntelligentTieringAAStorage`
    IntelligentTieringAaStorage,
    /// `IntelligentTieringAIAStorage`
    IntelligentTieringAiaStorage,
    /// `IntelligentTieringDAAStorage`
    IntelligentTieringDaaStorage,

    // S3 Standard-Infrequent Access:
    /// `StandardIAStorage`
    StandardIaStorage,
    /// `StandardIASizeOverhead`
    StandardIaSizeOverhead,
    /// `StandardIAObjectOverhead`
    StandardIaObjectOverhead,

    // S3 One Zone-Infrequent Access:
    /// `OneZoneIAStorage`
    OneZoneIaStorage,
    /// `OneZoneIASizeOverhead`
    OneZoneIaSizeOverhead,

    // S3 Reduced Redundancy Storage:
    /// `ReducedRedundancyStorage`
    ReducedRedundancyStorage,

    // S3 Glacier Instant Retrieval:
    /// `GlacierIRSizeOverhead`
    GlacierIrSizeOverhead,
    /// `GlacierInstantRetrievalStorage`
    GlacierInstantRetrievalStorage,

    // S3 Glacier Flexible Retrieval:
    /// `GlacierStorage`
    GlacierStorage,
    /// `GlacierStagingStorage`
    GlacierStagingStorage,
    /// `GlacierObjectOverhead`
    GlacierObjectOverhead,
    /// `GlacierS3ObjectOverhead`
    GlacierS3ObjectOverhead,

    // S3 Glacier Deep Archive:
    /// `DeepArchiveStorage`
    DeepArchiveStorage,
    /// `DeepArchiveObjectOverhead`
    DeepArchiveObjectOverhead,
    /// `DeepArchiveS3ObjectOverhead`
    DeepArchiveS3ObjectOverhead,
    /// `DeepArchiveStagingStorage`
    DeepArchiveStagingStorage,

    // Fixed value for NumberOfObjects:
    /// `AllStorageTypes`
    AllStorageTypes,
}

impl StorageType {
    /// Return the dimension value expected by CloudWatch.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::StandardStorage                => "StandardStorage",
            Self::IntelligentTieringFaStorage    => "IntelligentTieringFAStorage",
            Self::IntelligentTieringIaStorage    => "IntelligentTieringIAStorage",
            Self::IntelligentTieringAaStorage    => "IntelligentTieringAAStorage",
            Self::IntelligentTieringAiaStorage   => "IntelligentTieringAIAStorage",
            Self::IntelligentTieringDaaStorage   => "IntelligentTieringDAAStorage",
            Self::StandardIaStorage              => "StandardIAStorage",
            Self::StandardIaSizeOverhead         => "StandardIASizeOverhead",
            Self::StandardIaObjectOverhead       => "StandardIAObjectOverhead",
            Self::OneZoneIaStorage               => "OneZoneIAStorage",
            Self::OneZoneIaSizeOverhead          => "OneZoneIASizeOverhead",
            Self::ReducedRedundancyStorage       => "ReducedRedundancyStorage",
            Self::GlacierIrSizeOverhead          => "GlacierIRSizeOverhead",
            Self::GlacierInstantRetrievalStorage => "GlacierInstantRetrievalStorage",
            Self::GlacierStorage                 => "GlacierStorage",
            Self::GlacierStagingStorage          => "GlacierStagingStorage",
            Self::GlacierObjectOverhead          => "GlacierObjectOverhead",
            Self::GlacierS3ObjectOverhead        => "GlacierS3ObjectOverhead",
            Self::DeepArchiveStorage             => "DeepArchiveStorage",
            Self::DeepArchiveObjectOverhead      => "DeepArchiveObjectOverhead",
            Self::DeepArchiveS3ObjectOverhead    => "DeepArchiveS3ObjectOverhead",
            Self::DeepArchiveStagingStorage      => "DeepArchiveStagingStorage",
            Self::AllStorageTypes                => "AllStorageTypes",
        }
    }

    /// Every storage type, in wire order.
    pub const VALUES: [Self; 23] = [
        Self::StandardStorage,
        Self::IntelligentTieringFaStorage,
        Self::IntelligentTieringIaStorage,
        Self::IntelligentTieringAaStorage,
        Self::IntelligentTieringAiaStorage,
        Self::IntelligentTieringDaaStorage,
        Self::StandardIaStorage,
        Self::StandardIaSizeOverhead,
        Self::StandardIaObjectOverhead,
        Self::OneZoneIaStorage,
        Self::OneZoneIaSizeOverhead,
        Self::ReducedRedundancyStorage,
        Self::GlacierIrSizeOverhead,
        Self::GlacierInstantRetrievalStorage,
        Self::GlacierStorage,
        Self::GlacierStagingStorage,
        Self::GlacierObjectOverhead,
        Self::GlacierS3ObjectOverhead,
        Self::DeepArchiveStorage,
        Self::DeepArchiveObjectOverhead,
        Self::DeepArchiveS3ObjectOverhead,
        Self::DeepArchiveStagingStorage,
        Self::AllStorageTypes,
    ];
}

impl fmt::Display for StorageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StorageType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::VALUES
            .iter()
            .find(|t| t.as_str() == s)
            .copied()
            .ok_or_else(|| Error::UnsupportedStorageType(s.to_string()))
    }
}

impl Serialize for StorageType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
