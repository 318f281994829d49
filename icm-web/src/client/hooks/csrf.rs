//! Anti-forgery token for same-origin requests.
//!
//! The server sets the token in a cookie. The page reads it back and echoes it in a header
//! on every request to its own origin, which the server compares against the cookie.
//! Requests to absolute `http:`/`https:` URLs never get the header, so the token
//! doesn't leak to other sites.
use super::{Hook, Outcome};
use crate::client::Request;
use crate::config::get_config;
use crate::http::CookieStore;

use std::sync::Arc;
use tracing::debug;

pub struct Csrf {
    cookies: Arc<dyn CookieStore>,
    cookie: String,
    header: String,
}

impl Csrf {
    /// Read the token from the configured cookie into the configured header.
    pub fn new(cookies: Arc<dyn CookieStore>) -> Self {
        let page = &get_config().page;
        Self::with_names(cookies, &page.csrf_cookie, &page.csrf_header)
    }

    pub fn with_names(cookies: Arc<dyn CookieStore>, cookie: &str, header: &str) -> Self {
        Self {
            cookies,
            cookie: cookie.to_string(),
            header: header.to_string(),
        }
    }

    /// Current token, if the cookie is set.
    pub fn token(&self) -> Option<String> {
        self.cookies.get(&self.cookie)
    }
}

impl Hook for Csrf {
    fn before_send(&self, request: &mut Request) -> Outcome {
        if request.is_absolute() {
            return Outcome::Forward;
        }

        match self.token() {
            Some(token) => request.headers_mut().insert(&self.header, token),
            None => debug!(
                "cookie \"{}\" not set, {} sent without {}",
                self.cookie,
                request.url(),
                self.header
            ),
        }

        Outcome::Forward
    }
}
