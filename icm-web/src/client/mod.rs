//! HTTP client used by page code.
//!
//! Every request goes through the installed [`hooks`] first and is then handed to a
//! [`Transport`]. Hooks are installed once, usually at page load, and are shared by
//! all clones of the client.
pub mod hooks;
pub mod request;
pub mod response;
pub mod transport;

#[cfg(test)]
pub(crate) mod testing;

pub use hooks::{Hook, HookHandler, HookSet, Outcome};
pub use request::Request;
pub use response::Response;
pub use transport::{HttpTransport, Transport};

use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use std::sync::Arc;

use crate::Error;

#[derive(Clone)]
pub struct Client {
    transport: Arc<dyn Transport>,
    hooks: Arc<RwLock<HookSet>>,
}

impl Client {
    pub fn new(transport: impl Transport + 'static) -> Self {
        Self {
            transport: Arc::new(transport),
            hooks: Arc::new(RwLock::new(HookSet::default())),
        }
    }

    /// Install a hook. It runs on every request sent after this call.
    pub fn install(&self, hook: impl Hook + 'static) {
        self.hooks.write().push(hook.hook());
    }

    /// Install a hook, unless one of the same type is already installed.
    /// Returns `true` if the hook was added.
    pub fn install_once<H: Hook + 'static>(&self, hook: H) -> bool {
        let mut hooks = self.hooks.write();
        if hooks.contains(hook.hook_name()) {
            false
        } else {
            hooks.push(hook.hook());
            true
        }
    }

    /// Currently installed hooks.
    pub fn hooks(&self) -> HookSet {
        self.hooks.read().clone()
    }

    /// Run the hooks and send the request.
    pub async fn send(&self, mut request: Request) -> Result<Response, Error> {
        // Hooks are synchronous, so the lock is released before any await.
        self.hooks.read().before_send(&mut request)?;

        self.transport.send(request).await
    }

    /// `GET` a URL and decode the JSON response.
    ///
    /// Like a browser AJAX call, same-origin requests are marked with `X-Requested-With`.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, Error> {
        let mut request = Request::get(url).header("accept", "application/json, */*; q=0.01");

        for (name, value) in query {
            request = request.query(name, value);
        }

        if !request.is_absolute() {
            request = request.header("x-requested-with", "XMLHttpRequest");
        }

        let response = self.send(request).await?;

        if !response.is_success() {
            return Err(Error::Status(url.to_string(), response.status()));
        }

        response.json()
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("hooks", &*self.hooks.read())
            .finish()
    }
}
