//! Application state and its single dispatcher.
//!
//! Every user input and every call list push snapshot becomes an [`Action`] handled
//! by [`App::dispatch`], one at a time. Backend failures are logged and leave the
//! state as it was.

mod render;
mod state;

pub use render::render;
pub use state::*;

use tokio::sync::watch;

use crate::api::BackendClient;
use crate::errors::ClientError;
use crate::models::CallList;
use crate::sync::CallsView;

/// Everything that can change the application state.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Navigate(View),
    ShowLogin(bool),
    SetLoginPassword(String),
    Login,
    Logout,
    EditCallForm(CallField, String),
    SubmitCall,
    EditOfferForm(OfferField, String),
    /// Prefill the offer form from an existing offer and switch it to update mode
    EditOffer(String),
    SubmitOffer,
    ClickOffer(String),
    DeleteCall(usize),
    MoveCall { from: usize, to: usize },
    RequestResetCalls,
    RequestDeleteOffer(String),
    Confirm(bool),
    RefreshOffers,
    RefreshCalls,
    LoadAnalytics,
    LoadLogs,
    CallsSnapshot(CallList),
    DismissNotice,
}

/// The running front-end: backend client, mounted calls view and state.
pub struct App {
    client: BackendClient,
    calls: CallsView,
    state: AppState,
}

impl App {
    /// Load offers, mount the calls view and read the admin hint.
    pub async fn start(client: BackendClient) -> Self {
        let calls = CallsView::mount(client.clone()).await;
        let state = AppState {
            is_admin: client.admin_hint().is_admin(),
            calls: calls.current(),
            ..Default::default()
        };

        let mut app = Self {
            client,
            calls,
            state,
        };
        app.load_offers().await;
        if app.state.is_admin {
            app.load_analytics().await;
        }
        app
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Receiver for call list replacements, to be fed back as [`Action::CallsSnapshot`].
    pub fn call_updates(&self) -> watch::Receiver<CallList> {
        self.calls.watch()
    }

    /// Tear down the calls view, releasing its push channel.
    pub async fn shutdown(self) {
        self.calls.unmount().await;
    }

    /// Apply one action.
    pub async fn dispatch(&mut self, action: Action) {
        if !matches!(action, Action::SetLoginPassword(_)) {
            tracing::debug!("Dispatch {:?}", action);
        }

        match action {
            Action::Navigate(View::Admin) if !self.state.is_admin => {
                tracing::debug!("Admin view requested without admin session");
            }
            Action::Navigate(view) => {
                self.state.view = view;
                if view == View::Admin {
                    self.load_analytics().await;
                }
            }
            Action::ShowLogin(show) => self.state.show_login = show,
            Action::SetLoginPassword(password) => self.state.login_password = password,
            Action::Login => self.login().await,
            Action::Logout => self.logout().await,
            Action::EditCallForm(field, value) => self.state.call_form.set(field, value),
            Action::SubmitCall => self.submit_call().await,
            Action::EditOfferForm(field, value) => self.state.offer_form.set(field, value),
            Action::EditOffer(id) => self.edit_offer(id),
            Action::SubmitOffer => self.submit_offer().await,
            Action::ClickOffer(id) => self.click_offer(&id).await,
            Action::DeleteCall(index) => {
                if self.require_admin("delete call") {
                    let result = self.calls.delete(index).await;
                    self.after_call_mutation("delete call", result);
                }
            }
            Action::MoveCall { from, to } => {
                if self.require_admin("move call") {
                    let result = self.calls.reorder(from, to).await;
                    self.after_call_mutation("move call", result);
                }
            }
            Action::RequestResetCalls => {
                if self.require_admin("reset calls") {
                    self.state.pending_confirmation = Some(Confirmation::ResetCalls);
                }
            }
            Action::RequestDeleteOffer(id) => {
                if self.require_admin("delete offer") {
                    self.state.pending_confirmation = Some(Confirmation::DeleteOffer(id));
                }
            }
            Action::Confirm(confirmed) => self.confirm(confirmed).await,
            Action::RefreshOffers => self.load_offers().await,
            Action::RefreshCalls => {
                let result = self.calls.refresh().await;
                self.after_call_mutation("refresh calls", result);
            }
            Action::LoadAnalytics => self.load_analytics().await,
            Action::LoadLogs => self.load_logs().await,
            Action::CallsSnapshot(list) => self.state.calls = list,
            Action::DismissNotice => self.state.notice = None,
        }
    }

    /// Gate for admin-only actions. Without the hint no request is issued.
    fn require_admin(&self, what: &str) -> bool {
        if !self.state.is_admin {
            tracing::debug!("Ignoring {} without admin session", what);
        }
        self.state.is_admin
    }

    /// Pick up whatever snapshot the mutation's re-fetch published.
    fn after_call_mutation(&mut self, what: &str, result: Result<(), ClientError>) {
        match result {
            Err(e) if e.is_unauthorized() => {
                tracing::warn!("Backend refused to {}: admin session missing or expired", what);
                self.state.notice = Some("Admin session expired, log in again".to_string());
            }
            Err(e) => tracing::warn!("Failed to {}: {}", what, e),
            Ok(()) => {}
        }
        self.state.calls = self.calls.current();
    }

    async fn login(&mut self) {
        match self.client.login(&self.state.login_password).await {
            Ok(()) => {
                tracing::info!("Admin session opened");
                self.state.is_admin = true;
                self.state.show_login = false;
                self.state.login_password.clear();
                self.load_analytics().await;
            }
            Err(e @ ClientError::Status { .. }) => {
                tracing::warn!("Login rejected: {}", e);
                self.state.notice = Some("Wrong password".to_string());
            }
            Err(e) => tracing::warn!("Login failed: {}", e),
        }
    }

    async fn logout(&mut self) {
        match self.client.logout().await {
            Ok(()) => {
                tracing::info!("Admin session closed");
                self.state.is_admin = false;
                self.state.analytics = None;
                self.state.logs.clear();
                if self.state.view == View::Admin {
                    self.state.view = View::Casino;
                }
            }
            Err(e) => tracing::warn!("Logout failed: {}", e),
        }
    }

    async fn submit_call(&mut self) {
        let Some(entry) = self.state.call_form.entry() else {
            self.state.notice = Some("Slot and name are both required".to_string());
            return;
        };

        match self.calls.submit(&entry).await {
            Ok(()) => {
                self.state.call_form = CallForm::default();
                self.state.notice = Some("Call added".to_string());
            }
            Err(e) => tracing::warn!("Failed to submit call: {}", e),
        }
        self.state.calls = self.calls.current();
    }

    fn edit_offer(&mut self, id: String) {
        if !self.require_admin("edit offer") {
            return;
        }
        match self.state.offers.iter().find(|offer| offer.id == id) {
            Some(offer) => {
                self.state.offer_form = OfferForm::from_offer(offer);
                self.state.editing_offer = Some(id);
            }
            None => tracing::warn!("Offer {} not found", id),
        }
    }

    async fn submit_offer(&mut self) {
        if !self.require_admin("save offer") {
            return;
        }

        let draft = self.state.offer_form.draft();
        let (result, done) = match &self.state.editing_offer {
            Some(id) => (self.client.update_offer(id, &draft).await, "Offer updated"),
            None => (self.client.create_offer(&draft).await, "Offer added"),
        };

        match result {
            Ok(()) => {
                self.state.offer_form = OfferForm::default();
                self.state.editing_offer = None;
                self.state.notice = Some(done.to_string());
                self.load_offers().await;
                self.load_analytics().await;
            }
            Err(e) => tracing::warn!("Failed to save offer: {}", e),
        }
    }

    /// Track the click (fire-and-forget) and surface the affiliate link.
    async fn click_offer(&mut self, id: &str) {
        let Some(link) = self
            .state
            .offers
            .iter()
            .find(|offer| offer.id == id)
            .map(|offer| offer.link.clone())
        else {
            tracing::warn!("Offer {} not found", id);
            return;
        };

        if let Err(e) = self.client.record_click(id).await {
            tracing::warn!("Failed to track click on {}: {}", id, e);
        }
        self.state.notice = Some(format!("Open {link}"));
    }

    async fn confirm(&mut self, confirmed: bool) {
        let Some(pending) = self.state.pending_confirmation.take() else {
            return;
        };
        if !confirmed {
            tracing::debug!("Cancelled {:?}", pending);
            return;
        }

        match pending {
            Confirmation::ResetCalls => {
                let result = self.calls.reset().await;
                self.after_call_mutation("reset calls", result);
            }
            Confirmation::DeleteOffer(id) => {
                if let Err(e) = self.client.delete_offer(&id).await {
                    tracing::warn!("Failed to delete offer {}: {}", id, e);
                }
                self.load_offers().await;
                self.load_analytics().await;
            }
        }
    }

    async fn load_offers(&mut self) {
        match self.client.list_offers().await {
            Ok(offers) => self.state.offers = offers,
            Err(e) => tracing::warn!("Failed to load offers: {}", e),
        }
    }

    async fn load_analytics(&mut self) {
        if !self.require_admin("load analytics") {
            return;
        }
        match self.client.analytics().await {
            Ok(analytics) => self.state.analytics = Some(analytics),
            Err(e) => tracing::warn!("Failed to load analytics: {}", e),
        }
    }

    async fn load_logs(&mut self) {
        if !self.require_admin("load logs") {
            return;
        }
        match self.client.call_logs().await {
            Ok(logs) => self.state.logs = logs,
            Err(e) => tracing::warn!("Failed to load logs: {}", e),
        }
    }
}
