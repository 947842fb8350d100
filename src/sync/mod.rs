//! Live call queue synchronization.
//!
//! The backend owns the call queue. A mounted [`CallsView`] keeps a local copy that is
//! only ever replaced by a full snapshot: one authoritative fetch at mount time, one
//! per push message, and one re-fetch after each mutation. Nothing is merged or
//! appended locally.

mod subscription;

pub use subscription::CallSubscription;

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::api::BackendClient;
use crate::errors::{ClientError, ClientResult};
use crate::models::{CallEntry, CallList};

/// The open push channel of a view: a forwarding task and its stop signal.
struct PushChannel {
    cancel: CancellationToken,
    task: JoinHandle<()>,
}

impl PushChannel {
    fn open(subscription: CallSubscription, snapshots: Arc<watch::Sender<CallList>>) -> Self {
        let cancel = CancellationToken::new();
        let task = tokio::spawn(forward_snapshots(subscription, snapshots, cancel.clone()));
        Self { cancel, task }
    }

    /// Stop the forwarding task and wait until it has released the connection.
    async fn close(mut self) {
        self.cancel.cancel();
        if let Err(e) = (&mut self.task).await {
            if !e.is_cancelled() {
                tracing::warn!("Call push task failed: {}", e);
            }
        }
    }
}

impl Drop for PushChannel {
    fn drop(&mut self) {
        self.cancel.cancel();
        self.task.abort();
    }
}

/// Replace the published snapshot with every message until cancelled or closed.
async fn forward_snapshots(
    mut subscription: CallSubscription,
    snapshots: Arc<watch::Sender<CallList>>,
    cancel: CancellationToken,
) {
    loop {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                tracing::debug!("Call push channel closed");
                break;
            }
            next = subscription.next_snapshot() => match next {
                Some(list) => {
                    tracing::debug!("Call push snapshot with {} entries", list.len());
                    snapshots.send_replace(list);
                }
                None => {
                    tracing::warn!("Call push channel ended; keeping last snapshot");
                    break;
                }
            },
        }
    }
}

/// A mounted call queue view.
///
/// Holds at most one push channel. Dropping the view closes the channel; prefer
/// [`CallsView::unmount`] to also wait for the connection to be released.
pub struct CallsView {
    client: BackendClient,
    snapshots: Arc<watch::Sender<CallList>>,
    channel: Option<PushChannel>,
}

impl CallsView {
    /// Open the push channel, then fetch the initial snapshot.
    ///
    /// Subscribing first means no backend change can fall between the two steps.
    /// Failures of either step are logged: the view then starts from an empty list
    /// or without live updates.
    pub async fn mount(client: BackendClient) -> Self {
        let (snapshots, _) = watch::channel(CallList::default());
        let mut view = Self {
            client,
            snapshots: Arc::new(snapshots),
            channel: None,
        };

        if let Err(e) = view.subscribe().await {
            tracing::warn!("Could not open call push channel: {}", e);
        }
        if let Err(e) = view.refresh().await {
            tracing::warn!("Initial call list fetch failed: {}", e);
        }

        tracing::info!(
            "Calls view mounted with {} entries (live: {})",
            view.current().len(),
            view.is_live()
        );
        view
    }

    /// (Re)open the push channel, closing any channel this view already holds.
    pub async fn subscribe(&mut self) -> ClientResult<()> {
        if let Some(channel) = self.channel.take() {
            channel.close().await;
        }

        let subscription = self.client.subscribe_calls().await?;
        self.channel = Some(PushChannel::open(subscription, self.snapshots.clone()));
        Ok(())
    }

    /// Whether a push channel is currently held.
    pub fn is_live(&self) -> bool {
        self.channel
            .as_ref()
            .is_some_and(|channel| !channel.task.is_finished())
    }

    /// Latest snapshot.
    pub fn current(&self) -> CallList {
        self.snapshots.borrow().clone()
    }

    /// Receiver notified on every snapshot replacement.
    pub fn watch(&self) -> watch::Receiver<CallList> {
        self.snapshots.subscribe()
    }

    /// Replace the local copy with an authoritative fetch.
    pub async fn refresh(&self) -> ClientResult<()> {
        let list = self.client.fetch_calls().await?;
        tracing::debug!("Fetched call list with {} entries", list.len());
        self.snapshots.send_replace(list);
        Ok(())
    }

    /// Submit a call, then re-fetch. The entry is never appended locally.
    pub async fn submit(&self, entry: &CallEntry) -> ClientResult<()> {
        self.client.submit_call(entry).await?;
        self.refresh().await
    }

    /// Delete whatever the backend holds at `index`, then re-fetch.
    ///
    /// The index comes from the last known snapshot and is not re-validated; the
    /// re-fetch runs even when the backend rejected the delete.
    pub async fn delete(&self, index: usize) -> ClientResult<()> {
        let result = self.client.delete_call(index).await;
        self.refresh_after(result).await
    }

    /// Clear the whole queue, then re-fetch.
    pub async fn reset(&self) -> ClientResult<()> {
        let result = self.client.reset_calls().await;
        self.refresh_after(result).await
    }

    /// Move the entry at `from` to `to` in the last known snapshot, send the whole
    /// sequence, then re-fetch.
    pub async fn reorder(&self, from: usize, to: usize) -> ClientResult<()> {
        let current = self.current();
        let calls = current.moved(from, to).ok_or_else(|| {
            ClientError::InvalidInput(format!(
                "Cannot move call {from} to {to} in a list of {}",
                current.len()
            ))
        })?;

        let result = self.client.reorder_calls(&calls).await;
        self.refresh_after(result).await
    }

    /// Close the push channel and wait for the connection to be released.
    pub async fn unmount(mut self) {
        if let Some(channel) = self.channel.take() {
            channel.close().await;
        }
        tracing::info!("Calls view unmounted");
    }

    async fn refresh_after(&self, result: ClientResult<()>) -> ClientResult<()> {
        let refreshed = self.refresh().await;
        result.and(refreshed)
    }
}
