//! Application state: everything the terminal front-end shows.

use crate::models::{
    parse_tags, Analytics, CallEntry, CallList, CallLogEntry, OfferDraft, OfferEntry,
};

/// Which screen is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Casino,
    Calls,
    Admin,
}

impl View {
    pub fn as_str(&self) -> &'static str {
        match self {
            View::Casino => "casino",
            View::Calls => "calls",
            View::Admin => "admin",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "casino" => Some(View::Casino),
            "calls" => Some(View::Calls),
            "admin" => Some(View::Admin),
            _ => None,
        }
    }
}

/// Destructive action waiting for an explicit yes/no.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Confirmation {
    ResetCalls,
    DeleteOffer(String),
}

impl Confirmation {
    pub fn question(&self) -> &'static str {
        match self {
            Confirmation::ResetCalls => "Clear the whole call list?",
            Confirmation::DeleteOffer(_) => "Delete this offer?",
        }
    }
}

/// Call submission form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallForm {
    pub slot: String,
    pub user: String,
}

impl CallForm {
    pub fn set(&mut self, field: CallField, value: String) {
        match field {
            CallField::Slot => self.slot = value,
            CallField::User => self.user = value,
        }
    }

    /// Entry to submit, or `None` while a field is blank.
    pub fn entry(&self) -> Option<CallEntry> {
        let slot = self.slot.trim();
        let user = self.user.trim();
        if slot.is_empty() || user.is_empty() {
            return None;
        }
        Some(CallEntry::new(slot, user))
    }
}

/// Call form field selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallField {
    Slot,
    User,
}

/// Offer form field selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OfferField {
    Title,
    Bonus,
    Description,
    Color,
    Logo,
    Link,
    Tags,
}

impl OfferField {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "title" => Some(OfferField::Title),
            "bonus" => Some(OfferField::Bonus),
            "description" => Some(OfferField::Description),
            "color" => Some(OfferField::Color),
            "logo" => Some(OfferField::Logo),
            "link" => Some(OfferField::Link),
            "tags" => Some(OfferField::Tags),
            _ => None,
        }
    }
}

/// Offer editing form fields. Tags are typed as one comma-separated string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OfferForm {
    pub title: String,
    pub bonus: String,
    pub description: String,
    pub color: String,
    pub logo: String,
    pub link: String,
    pub tags: String,
}

impl OfferForm {
    pub fn set(&mut self, field: OfferField, value: String) {
        let target = match field {
            OfferField::Title => &mut self.title,
            OfferField::Bonus => &mut self.bonus,
            OfferField::Description => &mut self.description,
            OfferField::Color => &mut self.color,
            OfferField::Logo => &mut self.logo,
            OfferField::Link => &mut self.link,
            OfferField::Tags => &mut self.tags,
        };
        *target = value;
    }

    pub fn draft(&self) -> OfferDraft {
        OfferDraft {
            title: self.title.clone(),
            bonus: self.bonus.clone(),
            description: self.description.clone(),
            color: self.color.clone(),
            logo: self.logo.clone(),
            link: self.link.clone(),
            tags: parse_tags(&self.tags),
        }
    }

    /// Prefill from an existing offer.
    pub fn from_offer(offer: &OfferEntry) -> Self {
        Self {
            title: offer.title.clone(),
            bonus: offer.bonus.clone(),
            description: offer.description.clone(),
            color: offer.color.clone(),
            logo: offer.logo.clone(),
            link: offer.link.clone(),
            tags: offer.tags.join(", "),
        }
    }
}

/// Explicit application state, mutated only by [`super::App::dispatch`].
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub view: View,
    pub show_login: bool,
    pub login_password: String,
    /// Display-only admin flag; the backend authorizes every privileged request
    pub is_admin: bool,
    pub offers: Vec<OfferEntry>,
    /// Last authoritative call list; replaced wholesale, never patched
    pub calls: CallList,
    pub call_form: CallForm,
    pub offer_form: OfferForm,
    /// Offer the form is editing; `None` means the form creates a new offer
    pub editing_offer: Option<String>,
    pub analytics: Option<Analytics>,
    pub logs: Vec<CallLogEntry>,
    pub pending_confirmation: Option<Confirmation>,
    /// Message the user must acknowledge
    pub notice: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_names() {
        for view in [View::Casino, View::Calls, View::Admin] {
            assert_eq!(View::from_str(view.as_str()), Some(view));
        }
        assert_eq!(View::from_str("login"), None);
    }

    #[test]
    fn test_call_form_requires_both_fields() {
        let mut form = CallForm::default();
        assert!(form.entry().is_none());

        form.slot = "Book of Ra".to_string();
        form.user = "   ".to_string();
        assert!(form.entry().is_none());

        form.user = " alice ".to_string();
        assert_eq!(form.entry(), Some(CallEntry::new("Book of Ra", "alice")));
    }

    #[test]
    fn test_offer_form_splits_tags() {
        let form = OfferForm {
            title: "Winningz".to_string(),
            tags: "Crypto, CB, Retrait en 1h".to_string(),
            ..Default::default()
        };

        let draft = form.draft();
        assert_eq!(draft.tags, ["Crypto", "CB", "Retrait en 1h"]);
    }

    #[test]
    fn test_offer_form_set() {
        let mut form = OfferForm::default();
        form.set(OfferField::Link, "https://bit.ly/SkrymiWinningz".to_string());
        form.set(OfferField::Tags, "VIP Rank".to_string());

        assert_eq!(form.link, "https://bit.ly/SkrymiWinningz");
        assert_eq!(form.draft().tags, ["VIP Rank"]);
        assert_eq!(OfferField::from_str("bonus"), Some(OfferField::Bonus));
        assert_eq!(OfferField::from_str("clicks"), None);
    }
}
