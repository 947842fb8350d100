//! Casino offer models matching the backend `/api/offers` contract.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// An affiliate promotion shown in the casino view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfferEntry {
    pub id: String,
    pub title: String,
    pub bonus: String,
    pub description: String,
    /// CSS gradient string
    pub color: String,
    pub logo: String,
    pub link: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Maintained by the backend
    #[serde(default)]
    pub clicks: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<NaiveDateTime>,
}

/// Request body for creating or updating an offer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OfferDraft {
    pub title: String,
    pub bonus: String,
    pub description: String,
    pub color: String,
    pub logo: String,
    pub link: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Click tracking payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClickRequest {
    pub offer_id: String,
    pub user_ip: String,
}

/// Split a comma-separated tag field, trimming and dropping empties.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_backend_offer() {
        let offer: OfferEntry = serde_json::from_str(
            r#"{
                "id": "0d6c",
                "title": "Betify",
                "bonus": "100% offert + 30 Free Spins",
                "description": "Cashback le lundi",
                "color": "linear-gradient(to right, #00c851, #007e33)",
                "logo": "https://example.com/logo.png",
                "link": "https://bit.ly/BetifySkrymi",
                "tags": ["Crypto", "CB"],
                "clicks": 12,
                "created_at": "2024-05-01T18:30:12.481516",
                "updated_at": "2024-05-01T18:30:12.481516"
            }"#,
        )
        .unwrap();

        assert_eq!(offer.title, "Betify");
        assert_eq!(offer.tags, ["Crypto", "CB"]);
        assert_eq!(offer.clicks, 12);
        assert!(offer.created_at.is_some());
    }

    #[test]
    fn test_decode_offer_without_optional_fields() {
        let offer: OfferEntry = serde_json::from_str(
            r#"{"id":"1","title":"X7","bonus":"500%","description":"","color":"","logo":"","link":"http://x"}"#,
        )
        .unwrap();

        assert!(offer.tags.is_empty());
        assert_eq!(offer.clicks, 0);
        assert!(offer.updated_at.is_none());
    }

    #[test]
    fn test_parse_tags() {
        assert_eq!(parse_tags("Crypto, CB ,, VIP Rank "), ["Crypto", "CB", "VIP Rank"]);
        assert!(parse_tags("").is_empty());
        assert!(parse_tags(" , ").is_empty());
    }
}
