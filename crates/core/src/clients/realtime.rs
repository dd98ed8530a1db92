use crate::clients::store::StoreClient;
use secrecy::SecretString;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::interval;
use tracing::{debug, error};

/// Change notifications over polling. The store's REST surface has no push
/// channel here, so a subscription re-reads the watched rows on an interval
/// and fires when the snapshot differs from the last one.
#[derive(Clone)]
pub struct RealtimeClient {
    store: StoreClient,
    poll_interval: Duration,
}

/// Guard for one active subscription. Dropping it stops the watcher.
pub struct Subscription {
    handle: JoinHandle<()>,
}

impl Subscription {
    /// Stop the watcher now instead of waiting for the guard to drop.
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

impl RealtimeClient {
    pub fn new(store: StoreClient, poll_interval: Duration) -> Self {
        Self {
            store,
            poll_interval,
        }
    }

    /// Watch the rows of `table` where `column` equals `value`. Poll
    /// failures are logged and the watcher keeps going.
    pub fn subscribe<F>(
        &self,
        token: &SecretString,
        table: &str,
        column: &str,
        value: String,
        on_change: F,
    ) -> Subscription
    where
        F: Fn() + Send + 'static,
    {
        let store = self.store.clone();
        let token = token.clone();
        let table = table.to_string();
        let column = column.to_string();
        let poll_interval = self.poll_interval;

        let handle = tokio::spawn(async move {
            let mut ticker = interval(poll_interval);
            let mut last_snapshot: Option<String> = None;

            loop {
                ticker.tick().await;

                let rows = match store
                    .from(&table)
                    .eq(&column, &value)
                    .authorized(&token)
                    .fetch::<serde_json::Value>()
                    .await
                {
                    Ok(rows) => rows,
                    Err(e) => {
                        error!("realtime.poll: {} fetch failed: {}", table, e);
                        continue;
                    }
                };

                let snapshot = serde_json::to_string(&rows).unwrap_or_default();
                if let Some(previous) = &last_snapshot {
                    if *previous != snapshot {
                        debug!("realtime.poll: change detected on {}", table);
                        on_change();
                    }
                }
                last_snapshot = Some(snapshot);
            }
        });

        Subscription { handle }
    }
}
