//! Data models for the Skrymi client.
//!
//! These models match the backend JSON contract exactly, field for field.

mod analytics;
mod call;
mod offer;

pub use analytics::*;
pub use call::*;
pub use offer::*;

use serde::{Deserialize, Serialize};

/// Request body for the admin login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}
