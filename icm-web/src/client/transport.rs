//! Sending requests over the network.
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;
use url::Url;

use super::{Request, Response};
use crate::config::get_config;
use crate::Error;

/// Something that can deliver a [`Request`] and return the server's [`Response`].
///
/// Hooks have already run by the time a transport sees the request.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: Request) -> Result<Response, Error>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn send(&self, request: Request) -> Result<Response, Error> {
        self.as_ref().send(request).await
    }
}

/// HTTP transport backed by `reqwest`.
///
/// Relative URLs are resolved against the base URL, which plays the role of
/// the page's own origin.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpTransport {
    pub fn new(base_url: &str) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(get_config().general.timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: Url::parse(base_url)?,
        })
    }

    /// Transport for the base URL in the global configuration.
    pub fn from_config() -> Result<Self, Error> {
        Self::new(&get_config().general.base_url)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute URL the request will be sent to.
    pub fn resolve(&self, request: &Request) -> Result<Url, Error> {
        Ok(self.base_url.join(&request.uri())?)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: Request) -> Result<Response, Error> {
        let url = self.resolve(&request)?;
        debug!("{} {}", request.method(), url);

        let mut builder = self.client.request(request.method().into(), url);

        for (name, value) in request.headers().iter() {
            builder = builder.header(name.as_str(), value.as_str());
        }

        if let Some(body) = request.body_bytes() {
            builder = builder.body(body.clone());
        }

        let response = builder.send().await?;

        let mut result = Response::new(response.status().as_u16());
        for (name, value) in response.headers() {
            if let Ok(value) = value.to_str() {
                result.headers_mut().insert(name.as_str(), value);
            }
        }

        Ok(result.body(response.bytes().await?))
    }
}
