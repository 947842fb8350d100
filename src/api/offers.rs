//! Offer catalog endpoints.

use super::BackendClient;
use crate::errors::ClientResult;
use crate::models::{ClickRequest, OfferDraft, OfferEntry};

/// Source tag sent with click tracking; the backend records the peer address itself.
const CLICK_SOURCE: &str = "web";

impl BackendClient {
    /// GET /api/offers - List all offers.
    pub async fn list_offers(&self) -> ClientResult<Vec<OfferEntry>> {
        let url = self.url("/api/offers")?;
        self.send_json(self.http.get(url)).await
    }

    /// POST /api/offers - Create an offer.
    pub async fn create_offer(&self, draft: &OfferDraft) -> ClientResult<()> {
        let url = self.url("/api/offers")?;
        self.send_status(self.http.post(url).json(draft)).await
    }

    /// PUT /api/offers/:id - Update an offer.
    pub async fn update_offer(&self, id: &str, draft: &OfferDraft) -> ClientResult<()> {
        let url = self.segment_url("/api/offers", id)?;
        self.send_status(self.http.put(url).json(draft)).await
    }

    /// DELETE /api/offers/:id - Delete an offer.
    pub async fn delete_offer(&self, id: &str) -> ClientResult<()> {
        let url = self.segment_url("/api/offers", id)?;
        self.send_status(self.http.delete(url)).await
    }

    /// POST /api/click - Record a click on an offer.
    pub async fn record_click(&self, offer_id: &str) -> ClientResult<()> {
        let url = self.url("/api/click")?;
        let body = ClickRequest {
            offer_id: offer_id.to_string(),
            user_ip: CLICK_SOURCE.to_string(),
        };
        self.send_status(self.http.post(url).json(&body)).await
    }
}
