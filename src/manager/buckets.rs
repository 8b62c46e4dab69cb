// Per-region bucket enumeration
use super::Manager;
use crate::error::{
    Error,
    Result,
};
use aws_sdk_s3::types::Bucket;
use tokio_util::sync::CancellationToken;
use tracing::debug;

impl Manager {
    /// Return every bucket homed in `region`, in server page order.
    ///
    /// Follows the `ListBuckets` continuation token until it runs out and
    /// forwards the configured name prefix so filtering happens server
    /// side.
    pub(crate) async fn get_buckets(
        &self,
        region: &str,
        token: &CancellationToken,
    ) -> Result<Vec<Bucket>> {
        debug!("listing buckets in {region}");

        let mut buckets = Vec::new();
        let mut continuation_token = None;

        loop {
            let output = tokio::select! {
                () = token.cancelled() => return Err(Error::Cancelled),
                output = self.client.s3.list_buckets(
                    region,
                    self.prefix.as_deref(),
                    continuation_token.take(),
                ) => output?,
            };

            buckets.extend_from_slice(output.buckets());

            match output.continuation_token() {
                Some(t) => continuation_token = Some(t.to_string()),
                None    => break,
            }
        }

        debug!("found {} buckets in {region}", buckets.len());

        Ok(buckets)
    }
}
