// AWS shared config loading
use crate::common::DEFAULT_REGION;
use crate::error::{
    Error,
    Result,
};
use aws_config::meta::region::RegionProviderChain;
use aws_config::{
    BehaviorVersion,
    Region,
    SdkConfig,
};
use tracing::debug;

/// Load shared AWS config, optionally from a named profile.
///
/// Falls back to [`DEFAULT_REGION`] when the environment and profile chain
/// resolve no region. Credentials themselves are verified lazily by the
/// SDK on first use; only a missing provider chain is reported here.
pub async fn load_config(profile: Option<&str>) -> Result<SdkConfig> {
    let region = RegionProviderChain::default_provider().or_else(Region::new(DEFAULT_REGION));

    let mut loader = aws_config::defaults(BehaviorVersion::latest()).region(region);

    if let Some(profile) = profile {
        loader = loader.profile_name(profile);
    }

    let config = loader.load().await;

    debug!("loaded aws config in region {:?}", config.region());

    if config.credentials_provider().is_none() {
        return Err(Error::ConfigLoad("no credentials provider resolved".to_string()));
    }

    Ok(config)
}
