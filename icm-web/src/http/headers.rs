//! HTTP request headers.
use std::collections::{hash_map::Iter, HashMap};

/// HTTP headers.
#[derive(Clone, Debug, Default, PartialEq, crate::prelude::Deserialize, crate::prelude::Serialize)]
pub struct Headers {
    headers: HashMap<String, String>,
}

impl Headers {
    /// Create new empty headers storage.
    pub fn new() -> Self {
        Self {
            headers: HashMap::new(),
        }
    }

    /// Add a header to the headers storage. The name will be converted to lowercase.
    /// An existing header with the same name is replaced.
    ///
    /// # Example
    ///
    /// ```
    /// # use icm_web::http::Headers;
    /// let mut headers = Headers::new();
    /// headers.insert("X-CSRFToken", "abc123");
    /// assert_eq!(headers.get("x-csrftoken"), Some(&String::from("abc123")));
    /// ```
    pub fn insert(&mut self, name: impl ToString, value: impl ToString) {
        self.headers
            .insert(name.to_string().to_lowercase(), value.to_string());
    }

    /// Get a header value by name. Case insensitive.
    pub fn get(&self, name: &str) -> Option<&String> {
        self.headers.get(&name.to_lowercase())
    }

    /// Check if a header is set. Case insensitive.
    pub fn contains(&self, name: &str) -> bool {
        self.headers.contains_key(&name.to_lowercase())
    }

    /// Remove a header by name. Case insensitive.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.headers.remove(&name.to_lowercase())
    }

    /// Number of headers set.
    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Get a borrowing interator to the headers.
    pub fn iter(&self) -> Iter<String, String> {
        self.headers.iter()
    }
}

impl From<HashMap<String, String>> for Headers {
    fn from(headers: HashMap<String, String>) -> Self {
        let mut result = Headers::new();
        for (name, value) in headers {
            result.insert(name, value);
        }
        result
    }
}
