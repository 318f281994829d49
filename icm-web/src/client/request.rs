//! Outgoing request, before it is handed to a transport.
use bytes::Bytes;
use serde::Serialize;
use url::form_urlencoded;

use crate::http::{Headers, Method};
use crate::Error;

/// An outgoing HTTP request.
///
/// The URL is kept exactly as the page wrote it, relative or absolute. Query parameters
/// are stored separately and appended when the request is sent.
#[derive(Debug, Clone, Default)]
pub struct Request {
    method: Method,
    url: String,
    query: Vec<(String, String)>,
    headers: Headers,
    body: Option<Bytes>,
}

impl Request {
    pub fn new(method: Method, url: impl ToString) -> Self {
        Self {
            method,
            url: url.to_string(),
            ..Default::default()
        }
    }

    /// `GET` request.
    pub fn get(url: impl ToString) -> Self {
        Self::new(Method::Get, url)
    }

    /// `POST` request.
    pub fn post(url: impl ToString) -> Self {
        Self::new(Method::Post, url)
    }

    /// Add a query parameter.
    pub fn query(mut self, name: impl ToString, value: impl ToString) -> Self {
        self.query.push((name.to_string(), value.to_string()));
        self
    }

    /// Set a header.
    pub fn header(mut self, name: impl ToString, value: impl ToString) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Set the request body.
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Serialize the body as JSON.
    pub fn json(self, body: &impl Serialize) -> Result<Self, Error> {
        let body = serde_json::to_vec(body)?;
        Ok(self.header("content-type", "application/json").body(body))
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The destination URL, as written by the caller and without the query.
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    pub fn headers_mut(&mut self) -> &mut Headers {
        &mut self.headers
    }

    pub fn body_bytes(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }

    /// The destination names a scheme, so it may leave the page's origin.
    ///
    /// Only `http:` and `https:` prefixes count. Anything else, including
    /// protocol-relative `//host/path`, is treated as local.
    pub fn is_absolute(&self) -> bool {
        self.url.starts_with("http:") || self.url.starts_with("https:")
    }

    /// URL with the query string appended.
    ///
    /// ```
    /// # use icm_web::client::Request;
    /// let request = Request::get("/a/locations/").query("prefix", "São Paulo");
    /// assert_eq!(request.uri(), "/a/locations/?prefix=S%C3%A3o+Paulo");
    /// ```
    pub fn uri(&self) -> String {
        if self.query.is_empty() {
            return self.url.clone();
        }

        let query = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.query.iter())
            .finish();

        let separator = if self.url.contains('?') { '&' } else { '?' };

        format!("{}{}{}", self.url, separator, query)
    }
}
