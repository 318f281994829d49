//! Browser cookies, as the page sees them.
//!
//! The page only ever reads cookies: the server sets them, and the page picks
//! values such as the anti-forgery token out of the `name=value; name=value` string.
use super::url::decode_component;
use tracing::warn;

/// Read access to the cookie jar of the current page.
///
/// Implemented for [`CookieJar`] and for any closure returning the raw cookie string,
/// so a host can hand over a live view of its cookies.
///
/// ```
/// # use icm_web::http::CookieStore;
/// let cookies = || String::from("a=1; csrftoken=abc123");
/// assert_eq!(cookies.get("csrftoken"), Some("abc123".into()));
/// ```
pub trait CookieStore: Send + Sync {
    /// The raw cookie string, `name=value` pairs separated by `;`.
    fn raw(&self) -> String;

    /// Find a cookie value by name. The value is percent-decoded.
    fn get(&self, name: &str) -> Option<String> {
        CookieJar::parse(&self.raw()).get(name)
    }
}

/// A snapshot of the cookie string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CookieJar {
    pairs: Vec<String>,
}

impl CookieJar {
    /// Create new empty cookie jar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Split the cookie string into trimmed `name=value` pairs.
    ///
    /// # Example
    ///
    /// ```
    /// # use icm_web::http::CookieJar;
    /// let cookies = CookieJar::parse("a=1; token=abc123; b=2");
    /// assert_eq!(cookies.get("token"), Some("abc123".into()));
    /// assert_eq!(cookies.get("missing"), None);
    /// ```
    pub fn parse(value: &str) -> Self {
        if value.is_empty() {
            return Self::new();
        }

        Self {
            pairs: value.split(';').map(|pair| pair.trim().to_string()).collect(),
        }
    }

    /// Get the value of the first cookie called `name`.
    ///
    /// A cookie matches when its pair starts with `name=`. A value that fails to
    /// decode is treated as missing.
    pub fn get(&self, name: &str) -> Option<String> {
        let prefix = format!("{}=", name);

        let pair = self.pairs.iter().find(|pair| pair.starts_with(&prefix))?;

        match decode_component(&pair[prefix.len()..]) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!("cookie \"{}\" ignored: {}", name, err);
                None
            }
        }
    }

    /// Number of pairs in the jar.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl CookieStore for CookieJar {
    fn raw(&self) -> String {
        self.pairs.join("; ")
    }

    fn get(&self, name: &str) -> Option<String> {
        CookieJar::get(self, name)
    }
}

impl<F> CookieStore for F
where
    F: Fn() -> String + Send + Sync,
{
    fn raw(&self) -> String {
        self()
    }
}

impl std::fmt::Display for CookieJar {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.raw())
    }
}
