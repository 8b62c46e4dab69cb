// Semaphore-bounded fan-out over regions
use super::Manager;
use crate::error::{
    Error,
    Result,
};
use crate::metrics::{
    Metric,
    MetricData,
};
use std::sync::atomic::{
    AtomicI64,
    Ordering,
};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::debug;

impl Manager {
    /// Collect metrics for every configured region in parallel.
    ///
    /// One task per region runs enumerate -> batch -> fetch under the
    /// worker semaphore. Each task adds its truncated subtotal to a shared
    /// atomic and sends its metric slice on a channel sized for the worst
    /// case fan-in. The first task error wins: siblings are cancelled,
    /// joined, and the error is returned with no partial data. Metrics
    /// arrive in no particular cross-region order; [`sort_metrics`] puts
    /// them in presentation order.
    ///
    /// [`sort_metrics`]: crate::sort_metrics
    pub async fn list(&self, token: CancellationToken) -> Result<MetricData> {
        let child = token.child_token();
        let capacity = 2 * self.max_queries * self.regions.len();

        let (metrics_tx, mut metrics_rx) = mpsc::channel::<Vec<Metric>>(capacity);
        // One slot, non-blocking send: the first error wins and later ones
        // are dropped on the floor.
        let (error_tx, mut error_rx) = mpsc::channel::<Error>(1);

        let total = Arc::new(AtomicI64::new(0));
        let mut tasks = JoinSet::new();

        for region in self.regions.clone() {
            let permit = tokio::select! {
                biased;
                () = child.cancelled() => return Err(Error::Cancelled),
                permit = Arc::clone(&self.sem).acquire_owned() => {
                    permit.map_err(|_| Error::Cancelled)?
                },
            };

            let man = self.clone();
            let child = child.clone();
            let metrics_tx = metrics_tx.clone();
            let error_tx = error_tx.clone();
            let total = Arc::clone(&total);

            tasks.spawn(async move {
                let _permit = permit;

                let result = async {
                    let buckets = man.get_buckets(&region, &child).await?;
                    let batches = man.build_queries(&buckets);
                    man.get_metrics(batches, &region, &child).await
                }
                .await;

                match result {
                    Ok((metrics, subtotal)) => {
                        total.fetch_add(subtotal, Ordering::Relaxed);

                        tokio::select! {
                            () = child.cancelled() => {},
                            _ = metrics_tx.send(metrics) => {},
                        }
                    },
                    Err(err) => {
                        debug!("task for {region} failed: {err}");

                        let _ = error_tx.try_send(err);
                    },
                }
            });
        }

        // The tasks hold the only remaining senders, so the receiver closes
        // once every task has finished.
        drop(metrics_tx);

        let mut data = MetricData::with_capacity(capacity);

        loop {
            // The error branch goes first so a waiting error always beats
            // the results channel closing.
            tokio::select! {
                biased;
                Some(err) = error_rx.recv() => {
                    child.cancel();

                    // Let the siblings observe the cancellation and wind
                    // down before surfacing the error.
                    while tasks.join_next().await.is_some() {}

                    return Err(err);
                },
                received = metrics_rx.recv() => match received {
                    Some(metrics) => data.metrics.extend(metrics),
                    None => {
                        data.total = total.load(Ordering::Relaxed);
                        return Ok(data);
                    },
                },
            }
        }
    }
}
