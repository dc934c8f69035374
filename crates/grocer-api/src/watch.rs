//! Fixed-interval refresh for a shared list view.

use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use grocer_core::{GroceryItem, ShoppingList};

use crate::client::ApiClient;
use crate::error::{ApiError, ApiResult};

/// Default refresh interval for a shared list view.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(10);

/// One refresh cycle's result. Replaces the previous view state wholesale;
/// nothing is merged.
#[derive(Debug, Clone)]
pub struct ListSnapshot {
    pub list: ShoppingList,
    pub items: Vec<GroceryItem>,
}

/// Event emitted by the watcher after each cycle.
#[derive(Debug)]
pub enum WatchEvent {
    /// Fresh server state.
    Updated(ListSnapshot),
    /// This cycle failed. The watcher keeps polling.
    Failed(ApiError),
}

/// Periodic poller for a shared list.
///
/// Fetches immediately on spawn, then on a fixed tick until stopped. No
/// backoff, no conditional skip: every cycle fetches and replaces.
pub struct SharedListWatcher {
    shutdown: watch::Sender<bool>,
    handle: Option<JoinHandle<()>>,
}

impl SharedListWatcher {
    /// Spawn a watcher for the given share code. `every` must be non-zero.
    ///
    /// Returns the watcher and the receiving end of its event stream.
    /// Dropping the receiver ends the task on its next cycle.
    pub fn spawn(
        client: ApiClient,
        share_code: impl Into<String>,
        every: Duration,
    ) -> (Self, mpsc::Receiver<WatchEvent>) {
        let share_code = share_code.into();
        let (tx, rx) = mpsc::channel(8);
        let (shutdown, mut shutdown_rx) = watch::channel(false);

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(every);
            // A slow fetch pushes the next tick back a full period; ticks
            // never bunch up to catch up.
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            loop {
                // The first tick completes immediately, so the first fetch
                // happens right after spawn.
                tokio::select! {
                    _ = shutdown_rx.changed() => {
                        debug!(share_code = %share_code, "Watcher shutting down");
                        break;
                    }
                    _ = ticker.tick() => {}
                }

                let event = match fetch_snapshot(&client, &share_code).await {
                    Ok(snapshot) => WatchEvent::Updated(snapshot),
                    Err(e) => {
                        warn!(share_code = %share_code, error = %e, "Shared list refresh failed");
                        WatchEvent::Failed(e)
                    }
                };

                if tx.send(event).await.is_err() {
                    debug!(share_code = %share_code, "Watch receiver dropped, stopping");
                    break;
                }
            }
        });

        (
            Self {
                shutdown,
                handle: Some(handle),
            },
            rx,
        )
    }

    /// Stop polling and wait for the task to finish.
    pub async fn stop(mut self) {
        let _ = self.shutdown.send(true);
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for SharedListWatcher {
    fn drop(&mut self) {
        if let Some(handle) = &self.handle {
            handle.abort();
        }
    }
}

/// Fetch the shared list and its items in one pass.
async fn fetch_snapshot(client: &ApiClient, share_code: &str) -> ApiResult<ListSnapshot> {
    let list = client.get_list_by_share_code(share_code).await?;
    let items = client.list_items(&list.id).await?;
    Ok(ListSnapshot { list, items })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use mockito::{Matcher, Server};
    use serde_json::json;

    fn list_body() -> String {
        json!({
            "id": "0d9f3a7e",
            "name": "Weekly Shop",
            "share_code": "a1b2c3",
            "created_at": "2024-05-04T10:30:00Z"
        })
        .to_string()
    }

    fn items_body() -> String {
        json!([{
            "id": 1,
            "list_id": "0d9f3a7e",
            "name": "Milk",
            "quantity": 2,
            "category": "Dairy",
            "bought": false,
            "created_at": null,
            "updated_at": null
        }])
        .to_string()
    }

    #[tokio::test]
    async fn emits_a_snapshot_right_after_spawn() {
        let mut server = Server::new_async().await;
        let list_mock = server
            .mock("GET", "/api/list/a1b2c3")
            .with_status(200)
            .with_body(list_body())
            .expect_at_least(1)
            .create_async()
            .await;
        let items_mock = server
            .mock("GET", "/api/items")
            .match_query(Matcher::UrlEncoded("list_id".into(), "0d9f3a7e".into()))
            .with_status(200)
            .with_body(items_body())
            .expect_at_least(1)
            .create_async()
            .await;

        let client = ApiClient::new(ApiConfig::with_url(server.url()));
        let (watcher, mut rx) =
            SharedListWatcher::spawn(client, "a1b2c3", Duration::from_secs(60));

        let event = rx.recv().await.expect("watcher should emit an event");
        match event {
            WatchEvent::Updated(snapshot) => {
                assert_eq!(snapshot.list.share_code, "a1b2c3");
                assert_eq!(snapshot.items.len(), 1);
            }
            WatchEvent::Failed(e) => panic!("expected a snapshot, got failure: {e}"),
        }

        watcher.stop().await;
        list_mock.assert_async().await;
        items_mock.assert_async().await;
    }

    #[tokio::test]
    async fn keeps_polling_after_a_failed_cycle() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/list/a1b2c3")
            .with_status(500)
            .with_body("boom")
            .create_async()
            .await;

        let client = ApiClient::new(ApiConfig::with_url(server.url()));
        let (watcher, mut rx) =
            SharedListWatcher::spawn(client, "a1b2c3", Duration::from_millis(20));

        for _ in 0..2 {
            let event = rx.recv().await.expect("watcher should keep emitting");
            assert!(matches!(event, WatchEvent::Failed(ApiError::Status { .. })));
        }

        watcher.stop().await;
    }

    #[tokio::test]
    async fn stop_ends_the_task_and_closes_the_stream() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/list/a1b2c3")
            .with_status(200)
            .with_body(list_body())
            .create_async()
            .await;
        let _items = server
            .mock("GET", "/api/items")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(items_body())
            .create_async()
            .await;

        let client = ApiClient::new(ApiConfig::with_url(server.url()));
        let (watcher, mut rx) =
            SharedListWatcher::spawn(client, "a1b2c3", Duration::from_secs(60));

        let _ = rx.recv().await;
        watcher.stop().await;

        // Drain whatever was buffered; the stream must then be closed.
        while rx.recv().await.is_some() {}
    }
}
