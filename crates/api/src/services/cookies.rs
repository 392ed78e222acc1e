//! Session cookie helper.

use axum::http::{header::COOKIE, HeaderMap};
use uuid::Uuid;

use crate::config::SessionConfig;

/// Builds and reads the session cookie.
#[derive(Debug, Clone)]
pub struct SessionCookie {
    config: SessionConfig,
}

impl SessionCookie {
    pub fn new(config: SessionConfig) -> Self {
        Self { config }
    }

    pub fn name(&self) -> &str {
        &self.config.cookie_name
    }

    /// Set-Cookie value binding the browser to session `id`.
    ///
    /// Max-Age follows the idle timeout; the server drops the session at the
    /// same point.
    pub fn build_session_cookie(&self, id: Uuid) -> String {
        self.build_cookie(
            &id.to_string(),
            &format!("Max-Age={}", self.config.idle_timeout_secs),
        )
    }

    /// Set-Cookie value that removes the session cookie.
    pub fn build_clear_cookie(&self) -> String {
        self.build_cookie("", "Max-Age=0; Expires=Thu, 01 Jan 1970 00:00:00 GMT")
    }

    /// Session ID from the request cookies. Malformed values are ignored.
    pub fn extract_session_id(&self, headers: &HeaderMap) -> Option<Uuid> {
        headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|h| h.to_str().ok())
            .flat_map(|cookie_header| cookie_header.split(';'))
            .map(str::trim)
            .find_map(|cookie| {
                let (name, value) = cookie.split_once('=')?;
                if name == self.config.cookie_name {
                    Uuid::parse_str(value).ok()
                } else {
                    None
                }
            })
    }

    fn build_cookie(&self, value: &str, lifetime: &str) -> String {
        let mut cookie = format!(
            "{}={}; Path=/; {}; HttpOnly; SameSite={}",
            self.config.cookie_name, value, lifetime, self.config.same_site
        );

        if self.config.secure_cookie {
            cookie.push_str("; Secure");
        }

        cookie
    }
}
