//! Session and admin-only read endpoints.

use super::BackendClient;
use crate::errors::ClientResult;
use crate::models::{Analytics, CallLogEntry, LoginRequest};

impl BackendClient {
    /// POST /api/login - Exchange the admin password for a session cookie.
    ///
    /// A wrong password surfaces as a non-success status error.
    pub async fn login(&self, password: &str) -> ClientResult<()> {
        let url = self.url("/api/login")?;
        let body = LoginRequest {
            password: password.to_string(),
        };
        self.send_status(self.http.post(url).json(&body)).await
    }

    /// POST /api/logout - Drop the admin session cookie.
    pub async fn logout(&self) -> ClientResult<()> {
        let url = self.url("/api/logout")?;
        self.send_status(self.http.post(url)).await
    }

    /// GET /api/analytics - Click and call totals.
    pub async fn analytics(&self) -> ClientResult<Analytics> {
        let url = self.url("/api/analytics")?;
        self.send_json(self.http.get(url)).await
    }

    /// GET /api/logs - Most recent call submissions, newest first.
    pub async fn call_logs(&self) -> ClientResult<Vec<CallLogEntry>> {
        let url = self.url("/api/logs")?;
        self.send_json(self.http.get(url)).await
    }
}
