//! Admin UI hint.
//!
//! The backend sets an `admin=true` cookie next to its session credential. The
//! client only reads it to decide which admin-only actions to offer; it grants
//! nothing. Every privileged request is still authorized by the backend, using
//! whatever the shared cookie jar sends along.

use std::sync::Arc;

use reqwest::cookie::{CookieStore, Jar};
use reqwest::Url;

/// Name of the client-visible admin flag cookie.
pub const ADMIN_COOKIE: &str = "admin";

/// Display-only view of the admin flag cookie for one backend.
#[derive(Clone)]
pub struct AdminHint {
    jar: Arc<Jar>,
    url: Url,
}

impl AdminHint {
    pub fn new(jar: Arc<Jar>, url: Url) -> Self {
        Self { jar, url }
    }

    /// Whether the jar currently holds `admin=true` for the backend.
    pub fn is_admin(&self) -> bool {
        self.jar
            .cookies(&self.url)
            .and_then(|header| header.to_str().ok().map(admin_flag))
            .unwrap_or(false)
    }
}

impl std::fmt::Debug for AdminHint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminHint").field("url", &self.url.as_str()).finish()
    }
}

/// Read the admin flag out of a `Cookie` header value.
///
/// Only the first `admin=` pair counts, and only the exact value `true` is admin.
fn admin_flag(cookie_header: &str) -> bool {
    cookie_header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == ADMIN_COOKIE)
        .is_some_and(|(_, value)| value == "true")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend() -> Url {
        Url::parse("http://localhost:8001/").unwrap()
    }

    #[test]
    fn test_admin_flag_true() {
        assert!(admin_flag("admin=true"));
        assert!(admin_flag("theme=dark; admin=true"));
    }

    #[test]
    fn test_admin_flag_other_values() {
        assert!(!admin_flag(""));
        assert!(!admin_flag("admin=false"));
        assert!(!admin_flag("admin=TRUE"));
        assert!(!admin_flag("administrator=true"));
        assert!(!admin_flag("admin=false; admin=true"));
    }

    #[test]
    fn test_hint_reads_jar() {
        let jar = Arc::new(Jar::default());
        let hint = AdminHint::new(jar.clone(), backend());
        assert!(!hint.is_admin());

        jar.add_cookie_str("admin=true; Path=/; SameSite=Lax", &backend());
        assert!(hint.is_admin());
    }

    #[test]
    fn test_hint_ignores_other_hosts() {
        let jar = Arc::new(Jar::default());
        jar.add_cookie_str(
            "admin=true; Path=/",
            &Url::parse("http://elsewhere.example/").unwrap(),
        );

        let hint = AdminHint::new(jar, backend());
        assert!(!hint.is_admin());
    }
}
