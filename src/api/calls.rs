//! Call queue endpoints.

use reqwest::header::{ACCEPT, CACHE_CONTROL};

use super::{ensure_success, BackendClient};
use crate::errors::ClientResult;
use crate::models::{CallEntry, CallList, SubmitCallRequest};
use crate::sync::CallSubscription;

impl BackendClient {
    /// GET /api/calls - Fetch an authoritative snapshot.
    pub async fn fetch_calls(&self) -> ClientResult<CallList> {
        let url = self.url("/api/calls")?;
        self.send_json(self.http.get(url)).await
    }

    /// GET /api/calls (event stream) - Open the push channel.
    ///
    /// The stream is not subject to the request timeout.
    pub async fn subscribe_calls(&self) -> ClientResult<CallSubscription> {
        let url = self.url("/api/calls")?;
        let response = self
            .http
            .get(url)
            .header(ACCEPT, "text/event-stream")
            .header(CACHE_CONTROL, "no-cache")
            .send()
            .await?;
        let response = ensure_success(response).await?;
        Ok(CallSubscription::from_response(response))
    }

    /// POST /api/calls - Submit a call.
    pub async fn submit_call(&self, entry: &CallEntry) -> ClientResult<()> {
        let url = self.url("/api/calls")?;
        let body = SubmitCallRequest::from(entry.clone());
        self.send_status(self.http.post(url).json(&body)).await
    }

    /// DELETE /api/calls/:index - Delete whatever sits at `index` on the backend.
    pub async fn delete_call(&self, index: usize) -> ClientResult<()> {
        let url = self.url(&format!("/api/calls/{index}"))?;
        self.send_status(self.http.delete(url)).await
    }

    /// POST /api/calls/reset - Clear the queue.
    pub async fn reset_calls(&self) -> ClientResult<()> {
        let url = self.url("/api/calls/reset")?;
        self.send_status(self.http.post(url)).await
    }

    /// POST /api/calls/reorder - Replace the queue with `calls`, in order.
    pub async fn reorder_calls(&self, calls: &[CallEntry]) -> ClientResult<()> {
        let url = self.url("/api/calls/reorder")?;
        self.send_status(self.http.post(url).json(calls)).await
    }
}
